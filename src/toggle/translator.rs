//! Translation provider trait and locale utilities
//!
//! This module defines the `TranslationProvider` trait for provider abstraction,
//! enabling support for different translation backends (Google Translate, mock, etc.)
//! without coupling the controller to any specific implementation.

use crate::toggle::error::{ToggleError, ToggleResult};
use async_trait::async_trait;

/// Generic trait for translation providers
///
/// Implementations handle the actual translation work, whether through an API
/// (Google Translate) or deterministic logic (Mock).
///
/// All methods are async to support I/O-bound operations like network requests.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate a single text string from source to target locale
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language code (e.g., "en") or "auto" for detection
    /// * `target_locale` - Target language code (e.g., "ru", "fr-FR")
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(ToggleError)` - If translation fails
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> ToggleResult<String>;

    /// Get the name of this translation provider
    ///
    /// Used for logging and debugging to identify which provider handled a request.
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code by stripping region information
///
/// Converts locale codes from BCP 47 format to ISO 639-1 format:
/// - `en-US` → `en`
/// - `zh-Hans` → `zh`
/// - `en` → `en` (unchanged)
///
/// The `"auto"` pseudo-locale passes through unchanged.
pub fn normalize_locale(locale: &str) -> String {
    // Split on hyphen and take the first part (language code)
    locale.split('-').next().unwrap_or(locale).to_lowercase()
}

/// Validate that a locale code is in acceptable format
///
/// Checks that the locale code contains only alphanumeric characters,
/// hyphens, and underscores (following ISO 639 conventions). The `"auto"`
/// source pseudo-locale is valid.
///
/// # Returns
///
/// * `Ok(())` - If the locale is valid
/// * `Err(ToggleError::InvalidLocale)` - If the locale is invalid
pub fn validate_locale(locale: &str) -> ToggleResult<()> {
    if locale.is_empty() {
        return Err(ToggleError::InvalidLocale(
            "Locale code is empty".to_string(),
        ));
    }

    // Check that locale contains only valid characters
    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ToggleError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}
