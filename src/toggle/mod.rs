/// Translation Toggle Module
///
/// This module implements toggling of displayed text between original and
/// machine-translated content, driven by click events and backed by a
/// pluggable translation provider.
///
/// # Overview
///
/// The module consists of several components working together:
///
/// 1. **Controller** - The delegated click listener and per-item state machine
/// 2. **Provider Trait & Implementations** - Generic trait for translation
///    backends with Google Translate and mock implementations
/// 3. **Session Store** - Per-item click counters, cached originals, and
///    toggle states, scoped to one page session
///
/// # Example
///
/// ```ignore
/// use translate_toggle::{
///     ClickEvent, GoogleTranslateProvider, Node, Page, ToggleConfig, ToggleController,
/// };
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut page = Page::new();
///     page.add_node(Node::new("p1").with_class("translate-link").with_text("Translate"));
///     page.add_node(
///         Node::new("p1-text")
///             .with_class("post-text")
///             .with_attr("data-postid", "p1")
///             .with_text("Hello world"),
///     );
///
///     let provider = GoogleTranslateProvider::new()?;
///     let mut controller = ToggleController::new(ToggleConfig::default(), provider);
///
///     let mut click = ClickEvent::new("p1");
///     controller.activate(&mut page, &mut click).await;
///     Ok(())
/// }
/// ```
pub mod controller;
pub mod error;
pub mod google;
pub mod mock;
pub mod session;
pub mod translator;


pub use controller::{Activation, Applied, ToggleController, ToggleOutcome, TranslationRequest};
pub use error::{ToggleError, ToggleResult};
pub use google::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use session::{ItemState, SessionStore, ToggleState};
pub use translator::TranslationProvider;
