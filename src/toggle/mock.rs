//! Mock translation provider for testing
//!
//! This module provides a deterministic, API-free provider for testing the
//! toggle controller without requiring network access.
//!
//! # Example
//!
//! ```ignore
//! use translate_toggle::{MockMode, MockTranslator, TranslationProvider};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", "auto", "fr").await.unwrap();
//!     assert_eq!(result, "hello_fr");
//! }
//! ```

use crate::toggle::error::{ToggleError, ToggleResult};
use crate::toggle::translator::TranslationProvider;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target locale suffix: "hello" → "hello_fr"
    Suffix,

    /// Use predefined mappings for realistic translations:
    /// (text, target_locale) → translation
    Mappings(HashMap<(String, String), String>),

    /// Simulate API errors on every call
    Error(String),

    /// No-op: return input unchanged
    NoOp,

    /// Scripted outcomes consumed in order, one per call; when the script is
    /// exhausted further calls fail
    Sequence(Arc<Mutex<VecDeque<Result<String, String>>>>),
}

impl MockMode {
    /// Build a `Sequence` mode from a list of scripted outcomes
    ///
    /// `Ok(text)` entries succeed with `text`; `Err(msg)` entries fail with a
    /// translation error carrying `msg`.
    pub fn sequence(outcomes: Vec<Result<String, String>>) -> Self {
        MockMode::Sequence(Arc::new(Mutex::new(outcomes.into_iter().collect())))
    }
}

/// Mock translator that simulates various translation scenarios
///
/// Useful for testing the toggle controller without external API dependencies.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Create a MockTranslator with simulated network delay
    ///
    /// # Arguments
    ///
    /// * `mode` - The translation mode
    /// * `delay_ms` - Simulated delay in milliseconds
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    /// Internal helper to apply the simulated delay
    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    /// Apply translation logic based on the mode
    fn apply_translation(&self, text: &str, _source: &str, target: &str) -> ToggleResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                // Look up in predefined mappings, fall back to suffix
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(ToggleError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
            MockMode::Sequence(script) => {
                let mut script = script.lock().unwrap_or_else(|e| e.into_inner());
                match script.pop_front() {
                    Some(Ok(translation)) => Ok(translation),
                    Some(Err(msg)) => Err(ToggleError::TranslationError(msg)),
                    None => Err(ToggleError::TranslationError(
                        "Mock script exhausted".to_string(),
                    )),
                }
            }
        }
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> ToggleResult<String> {
        // Apply simulated delay
        self.apply_delay().await;

        self.apply_translation(text, source_locale, target_locale)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
