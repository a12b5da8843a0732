//! Google Translate provider
//!
//! This module integrates with the public `translate_a/single` endpoint
//! (`client=gtx`) to provide real machine translation without an API key.
//!
//! # Response contract
//!
//! The endpoint returns a nested JSON array. The only position this provider
//! relies on is `[0][0][0]`: the translated text of the first segment. Nothing
//! else about the response shape is assumed.
//!
//! # Example
//!
//! ```ignore
//! use translate_toggle::{GoogleTranslateProvider, TranslationProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::new()?;
//!     let result = provider.translate("Hello world", "auto", "ru").await?;
//!     println!("{}", result); // "Привет мир"
//!     Ok(())
//! }
//! ```

use crate::toggle::error::{ToggleError, ToggleResult};
use crate::toggle::translator::{TranslationProvider, normalize_locale, validate_locale};
use async_trait::async_trait;

/// Provider backed by the public Google Translate `gtx` endpoint
///
/// No API key is required. The base URL can be overridden for tests.
#[derive(Debug, Clone)]
pub struct GoogleTranslateProvider {
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for the translation endpoint
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Maximum characters per request; the endpoint takes the text as a URL
    /// query parameter, so long inputs are rejected up front
    const MAX_CHARS_PER_REQUEST: usize = 5_000;

    const DEFAULT_BASE_URL: &'static str = "https://translate.googleapis.com/translate_a/single";

    /// Create a new provider against the public endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(ToggleError)` - If HTTP client creation fails
    pub fn new() -> ToggleResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                ToggleError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a provider against a custom endpoint URL
    ///
    /// Used by tests to point the provider at a local mock server.
    pub fn with_base_url(base_url: &str) -> ToggleResult<Self> {
        let mut provider = Self::new()?;
        provider.base_url = base_url.to_string();
        Ok(provider)
    }

    /// Extract the translated text from the gtx response body
    ///
    /// The documented extraction path is `[0][0][0]`; anything else in the
    /// response is ignored.
    fn extract_translation(json: &serde_json::Value) -> ToggleResult<String> {
        json.get(0)
            .and_then(|segments| segments.get(0))
            .and_then(|first| first.get(0))
            .and_then(|text| text.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                ToggleError::TranslationError(
                    "Invalid API response: missing translated text at [0][0][0]".to_string(),
                )
            })
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> ToggleResult<String> {
        // Validate inputs
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        if text.len() > Self::MAX_CHARS_PER_REQUEST {
            return Err(ToggleError::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_REQUEST
            )));
        }

        // "auto" is passed through as-is; real codes are normalized
        let source = normalize_locale(source_locale);
        let target = normalize_locale(target_locale);

        let params = [
            ("client", "gtx"),
            ("sl", source.as_str()),
            ("tl", target.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.base_url).query(&params).send().await?;

        // Check HTTP status
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                ToggleError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                ToggleError::TranslationError(format!(
                    "API server error ({}): {}",
                    status, error_text
                ))
            });
        }

        // Parse response JSON
        let json: serde_json::Value = response.json().await.map_err(|e| {
            ToggleError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        Self::extract_translation(&json)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
