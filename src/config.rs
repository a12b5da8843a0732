//! Controller configuration
//!
//! Languages, the markup contract names, and trigger labels. Defaults mirror
//! the conventional markup: triggers carry the `translate-link` class, text
//! blocks carry `post-text` and a `data-postid` attribute.

use crate::toggle::error::{ToggleError, ToggleResult};
use serde::Deserialize;
use std::path::Path;

fn default_source_language() -> String {
    "auto".to_string()
}

fn default_target_language() -> String {
    "ru".to_string()
}

fn default_trigger_class() -> String {
    "translate-link".to_string()
}

fn default_block_class() -> String {
    "post-text".to_string()
}

fn default_item_attr() -> String {
    "data-postid".to_string()
}

fn default_translate_label() -> String {
    "Translate".to_string()
}

fn default_original_label() -> String {
    "Original".to_string()
}

/// Configuration for the toggle controller
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleConfig {
    /// Source language code, "auto" for detection
    #[serde(default = "default_source_language")]
    pub source_language: String,
    /// Target language code for translations
    #[serde(default = "default_target_language")]
    pub target_language: String,
    /// Class marking trigger nodes
    #[serde(default = "default_trigger_class")]
    pub trigger_class: String,
    /// Class marking translatable text blocks
    #[serde(default = "default_block_class")]
    pub block_class: String,
    /// Attribute on text blocks holding the item id
    #[serde(default = "default_item_attr")]
    pub item_attr: String,
    /// Trigger label shown while the original is displayed
    #[serde(default = "default_translate_label")]
    pub translate_label: String,
    /// Trigger label shown while a translation is displayed
    #[serde(default = "default_original_label")]
    pub original_label: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            trigger_class: default_trigger_class(),
            block_class: default_block_class(),
            item_attr: default_item_attr(),
            translate_label: default_translate_label(),
            original_label: default_original_label(),
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_language(mut self, target: &str) -> Self {
        self.target_language = target.to_string();
        self
    }

    pub fn with_labels(mut self, translate: &str, original: &str) -> Self {
        self.translate_label = translate.to_string();
        self.original_label = original.to_string();
        self
    }

    /// Parse a configuration from a JSON string
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> ToggleResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ToggleError::ConfigError(format!("Failed to parse config JSON: {}", e)))
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> ToggleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ToggleError::ConfigError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }
}
