/// Error types for the translation toggle module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// Invalid or unusable configuration
    ConfigError(String),
    /// Network-level failure talking to a provider
    NetworkError(String),
    /// Provider reached but translation failed
    TranslationError(String),
    /// Malformed locale code
    InvalidLocale(String),
}

impl std::fmt::Display for ToggleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ToggleError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ToggleError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            ToggleError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
        }
    }
}

impl std::error::Error for ToggleError {}

impl From<reqwest::Error> for ToggleError {
    fn from(err: reqwest::Error) -> Self {
        ToggleError::NetworkError(err.to_string())
    }
}

/// Result type for toggle operations
pub type ToggleResult<T> = Result<T, ToggleError>;
