pub mod config;
pub mod page;
pub mod toggle;

// Re-export the main types for convenient access
pub use config::ToggleConfig;
pub use page::{ClickEvent, Node, Page};
pub use toggle::{
    Activation, Applied, GoogleTranslateProvider, MockMode, MockTranslator, ToggleController,
    ToggleError, ToggleOutcome, ToggleResult, ToggleState, TranslationProvider,
    TranslationRequest,
};
