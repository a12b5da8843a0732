//! Translation toggle controller
//!
//! Mediates between click events and text-display mutation, keeping per-item
//! session state. The controller is the single delegated listener for the
//! page root: every click is offered to [`ToggleController::handle_click`],
//! which filters by the trigger marker class, so triggers added to the page
//! after construction are handled exactly like pre-existing ones.
//!
//! # State machine
//!
//! Each item is either `Original` or `Translated`. A recognized click on an
//! item in `Original` issues a translation request; one in `Translated`
//! restores the cached original synchronously. State transitions are tied
//! strictly to successful outcomes: a failed translation leaves the item in
//! `Original` and the next click retries. The per-item click counter still
//! counts every recognized activation (monotonic, never reset) and doubles
//! as the request tag, so along an all-success history an odd count means
//! `Translated` and an even count means `Original`.
//!
//! # Overlapping requests
//!
//! A new activation can arrive before a prior request's response. Each
//! activation in `Original` issues its own request tagged with the counter
//! value at send time; a response is applied only if no newer request for
//! that item was issued since, otherwise it is discarded. In-flight requests
//! are never cancelled.
//!
//! # Example
//!
//! ```ignore
//! use translate_toggle::{
//!     ClickEvent, MockMode, MockTranslator, Node, Page, ToggleConfig, ToggleController,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut page = Page::new();
//!     page.add_node(Node::new("p1").with_class("translate-link").with_text("Translate"));
//!     page.add_node(
//!         Node::new("p1-text")
//!             .with_class("post-text")
//!             .with_attr("data-postid", "p1")
//!             .with_text("Hello world"),
//!     );
//!
//!     let mut controller =
//!         ToggleController::new(ToggleConfig::default(), MockTranslator::new(MockMode::Suffix));
//!     let mut click = ClickEvent::new("p1");
//!     controller.activate(&mut page, &mut click).await;
//! }
//! ```

use crate::config::ToggleConfig;
use crate::page::{ClickEvent, Page};
use crate::toggle::error::ToggleResult;
use crate::toggle::session::{SessionStore, ToggleState};
use crate::toggle::translator::TranslationProvider;
use tracing::{debug, warn};

/// A translation request issued by the controller, to be fulfilled by a
/// provider and completed with [`ToggleController::apply_translation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Item the request belongs to
    pub item_id: String,
    /// Click counter value at send time; the staleness tag
    pub tag: u64,
    /// The cached original text to translate
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Result of offering a click to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Not a recognized trigger, or no matching text block
    Ignored,
    /// Item shows a translation that was never cached; nothing to restore
    NothingToRestore,
    /// Original text restored and trigger relabeled
    Restored,
    /// Translation request issued; complete it with `apply_translation`
    RequestIssued(TranslationRequest),
}

/// Result of applying a finished translation response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Displayed text and label updated; item is now Translated
    Updated,
    /// A newer request superseded this one, or the block is gone; discarded
    Stale,
    /// Provider failed; nothing was mutated, failure logged
    Failed,
}

/// Result of a full activation round trip (`activate`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Click did not concern a recognized trigger/item pair
    Ignored,
    /// Restore requested but no translation was ever cached
    NothingToRestore,
    /// Original text restored
    Restored,
    /// Translation fetched and displayed
    Translated,
    /// Provider failed; display state unchanged
    TranslationFailed,
}

/// The translation toggle controller
///
/// Holds the markup contract configuration, the translation provider, and
/// the per-item session store. One instance per page session.
#[derive(Debug)]
pub struct ToggleController<P: TranslationProvider> {
    config: ToggleConfig,
    provider: P,
    sessions: SessionStore,
}

impl<P: TranslationProvider> ToggleController<P> {
    /// Create a controller with an empty session store
    pub fn new(config: ToggleConfig, provider: P) -> Self {
        Self {
            config,
            provider,
            sessions: SessionStore::new(),
        }
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Recognized activations recorded for an item so far
    pub fn click_count(&self, item_id: &str) -> u64 {
        self.sessions.get(item_id).map(|s| s.clicks()).unwrap_or(0)
    }

    /// Current toggle state of an item; items never interacted with show
    /// their original text
    pub fn state(&self, item_id: &str) -> ToggleState {
        self.sessions
            .get(item_id)
            .map(|s| s.state())
            .unwrap_or(ToggleState::Original)
    }

    /// Offer a click from the page root to the controller
    ///
    /// Non-trigger targets are ignored without side effects. Recognized
    /// triggers get their default action prevented; the paired text block is
    /// resolved through the shared item id, and resolution failure is a
    /// silent no-op. Otherwise the item is toggled: a restore completes
    /// synchronously, a translation is returned as a pending
    /// [`TranslationRequest`].
    pub fn handle_click(&mut self, page: &mut Page, event: &mut ClickEvent) -> Activation {
        let item_id = {
            let Some(target) = page.node(event.target_id()) else {
                return Activation::Ignored;
            };
            if !target.has_class(&self.config.trigger_class) {
                return Activation::Ignored;
            }
            target.id().to_string()
        };

        event.prevent_default();

        // Resolve the paired text block before touching any state
        let displayed = {
            let Some(block) =
                page.find_block(&self.config.block_class, &self.config.item_attr, &item_id)
            else {
                return Activation::Ignored;
            };
            block.text().to_string()
        };

        let entry = self.sessions.entry(&item_id);
        let tag = entry.record_click();

        match entry.state() {
            ToggleState::Original => {
                let text = entry.capture_original(&displayed).to_string();
                entry.mark_issued(tag);
                Activation::RequestIssued(TranslationRequest {
                    item_id,
                    tag,
                    text,
                    source_language: self.config.source_language.clone(),
                    target_language: self.config.target_language.clone(),
                })
            }
            ToggleState::Translated => match entry.take_restore() {
                Some(original) => {
                    if let Some(block) = page.find_block_mut(
                        &self.config.block_class,
                        &self.config.item_attr,
                        &item_id,
                    ) {
                        block.set_text(&original);
                    }
                    if let Some(trigger) = page.node_mut(&item_id) {
                        trigger.set_text(&self.config.translate_label);
                    }
                    Activation::Restored
                }
                None => Activation::NothingToRestore,
            },
        }
    }

    /// Complete a pending translation request with the provider's response
    ///
    /// The response is applied only if the request's tag is still current
    /// for its item; responses of superseded requests are discarded. On
    /// provider failure nothing is mutated and the failure is reported to
    /// the diagnostic sink.
    pub fn apply_translation(
        &mut self,
        page: &mut Page,
        request: &TranslationRequest,
        result: ToggleResult<String>,
    ) -> Applied {
        let entry = self.sessions.entry(&request.item_id);
        if !entry.matches_pending(request.tag) {
            debug!(
                item = %request.item_id,
                tag = request.tag,
                "discarding stale translation response"
            );
            return Applied::Stale;
        }

        match result {
            Ok(translated) => {
                let Some(block) = page.find_block_mut(
                    &self.config.block_class,
                    &self.config.item_attr,
                    &request.item_id,
                ) else {
                    entry.clear_pending();
                    return Applied::Stale;
                };
                block.set_text(&translated);
                if let Some(trigger) = page.node_mut(&request.item_id) {
                    trigger.set_text(&self.config.original_label);
                }
                entry.complete_translation();
                Applied::Updated
            }
            Err(err) => {
                entry.clear_pending();
                warn!(
                    item = %request.item_id,
                    provider = self.provider.provider_name(),
                    error = %err,
                    "translation request failed"
                );
                Applied::Failed
            }
        }
    }

    /// Full activation round trip: handle the click and, if it issued a
    /// translation request, fulfill it with the configured provider
    ///
    /// Provider failures are logged and surfaced as
    /// [`ToggleOutcome::TranslationFailed`]; the display state is left
    /// unchanged and the user may click again to retry.
    pub async fn activate(&mut self, page: &mut Page, event: &mut ClickEvent) -> ToggleOutcome {
        match self.handle_click(page, event) {
            Activation::Ignored => ToggleOutcome::Ignored,
            Activation::NothingToRestore => ToggleOutcome::NothingToRestore,
            Activation::Restored => ToggleOutcome::Restored,
            Activation::RequestIssued(request) => {
                let result = self
                    .provider
                    .translate(
                        &request.text,
                        &request.source_language,
                        &request.target_language,
                    )
                    .await;
                match self.apply_translation(page, &request, result) {
                    Applied::Updated => ToggleOutcome::Translated,
                    Applied::Stale => ToggleOutcome::Ignored,
                    Applied::Failed => ToggleOutcome::TranslationFailed,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Node;
    use crate::toggle::error::ToggleError;
    use crate::toggle::mock::{MockMode, MockTranslator};

    fn test_page() -> Page {
        let mut page = Page::new();
        page.add_node(
            Node::new("p1")
                .with_class("translate-link")
                .with_text("Translate"),
        );
        page.add_node(
            Node::new("p1-text")
                .with_class("post-text")
                .with_attr("data-postid", "p1")
                .with_text("Hello world"),
        );
        page
    }

    fn test_controller(mode: MockMode) -> ToggleController<MockTranslator> {
        ToggleController::new(ToggleConfig::default(), MockTranslator::new(mode))
    }

    // ========== Click Recognition Tests ==========

    #[test]
    fn test_unrelated_click_is_ignored() {
        let mut page = test_page();
        page.add_node(Node::new("nav").with_class("nav-link").with_text("Home"));
        let mut controller = test_controller(MockMode::Suffix);

        let mut event = ClickEvent::new("nav");
        assert_eq!(controller.handle_click(&mut page, &mut event), Activation::Ignored);
        assert!(!event.default_prevented());
        assert_eq!(controller.click_count("nav"), 0);
    }

    #[test]
    fn test_click_on_unknown_target_is_ignored() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);
        let mut event = ClickEvent::new("missing");
        assert_eq!(controller.handle_click(&mut page, &mut event), Activation::Ignored);
    }

    #[test]
    fn test_trigger_click_prevents_default() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);
        let mut event = ClickEvent::new("p1");
        controller.handle_click(&mut page, &mut event);
        assert!(event.default_prevented());
    }

    #[test]
    fn test_trigger_without_block_is_ignored() {
        let mut page = Page::new();
        page.add_node(
            Node::new("orphan")
                .with_class("translate-link")
                .with_text("Translate"),
        );
        let mut controller = test_controller(MockMode::Suffix);

        let mut event = ClickEvent::new("orphan");
        assert_eq!(controller.handle_click(&mut page, &mut event), Activation::Ignored);
        // Resolution failure happens before the counter is touched
        assert_eq!(controller.click_count("orphan"), 0);
    }

    // ========== Request Issue Tests ==========

    #[test]
    fn test_first_click_issues_request() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);

        let mut event = ClickEvent::new("p1");
        match controller.handle_click(&mut page, &mut event) {
            Activation::RequestIssued(request) => {
                assert_eq!(request.item_id, "p1");
                assert_eq!(request.tag, 1);
                assert_eq!(request.text, "Hello world");
                assert_eq!(request.source_language, "auto");
                assert_eq!(request.target_language, "ru");
            }
            other => panic!("Expected RequestIssued, got {:?}", other),
        }
        assert_eq!(controller.click_count("p1"), 1);
        // Nothing is displayed yet; the page waits for the response
        assert_eq!(page.node("p1-text").unwrap().text(), "Hello world");
        assert_eq!(controller.state("p1"), ToggleState::Original);
    }

    #[test]
    fn test_click_while_pending_issues_new_request() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);

        let mut first = ClickEvent::new("p1");
        let Activation::RequestIssued(req1) = controller.handle_click(&mut page, &mut first)
        else {
            panic!("Expected RequestIssued");
        };
        let mut second = ClickEvent::new("p1");
        let Activation::RequestIssued(req2) = controller.handle_click(&mut page, &mut second)
        else {
            panic!("Expected RequestIssued");
        };

        assert_eq!(req1.tag, 1);
        assert_eq!(req2.tag, 2);
        // The later request carries the same original text
        assert_eq!(req2.text, "Hello world");
    }

    // ========== Apply Tests ==========

    #[test]
    fn test_apply_success_updates_page_and_state() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);

        let mut event = ClickEvent::new("p1");
        let Activation::RequestIssued(request) = controller.handle_click(&mut page, &mut event)
        else {
            panic!("Expected RequestIssued");
        };

        let applied =
            controller.apply_translation(&mut page, &request, Ok("Привет мир".to_string()));
        assert_eq!(applied, Applied::Updated);
        assert_eq!(page.node("p1-text").unwrap().text(), "Привет мир");
        assert_eq!(page.node("p1").unwrap().text(), "Original");
        assert_eq!(controller.state("p1"), ToggleState::Translated);
    }

    #[test]
    fn test_apply_failure_leaves_page_untouched() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);

        let mut event = ClickEvent::new("p1");
        let Activation::RequestIssued(request) = controller.handle_click(&mut page, &mut event)
        else {
            panic!("Expected RequestIssued");
        };

        let applied = controller.apply_translation(
            &mut page,
            &request,
            Err(ToggleError::NetworkError("connection refused".to_string())),
        );
        assert_eq!(applied, Applied::Failed);
        assert_eq!(page.node("p1-text").unwrap().text(), "Hello world");
        assert_eq!(page.node("p1").unwrap().text(), "Translate");
        assert_eq!(controller.state("p1"), ToggleState::Original);
    }

    #[test]
    fn test_apply_superseded_response_is_discarded() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);

        let mut first = ClickEvent::new("p1");
        let Activation::RequestIssued(req1) = controller.handle_click(&mut page, &mut first)
        else {
            panic!("Expected RequestIssued");
        };
        let mut second = ClickEvent::new("p1");
        let Activation::RequestIssued(req2) = controller.handle_click(&mut page, &mut second)
        else {
            panic!("Expected RequestIssued");
        };

        // Out-of-order completion: the older response arrives after the
        // newer request was issued and is discarded
        let stale = controller.apply_translation(&mut page, &req1, Ok("old".to_string()));
        assert_eq!(stale, Applied::Stale);
        assert_eq!(page.node("p1-text").unwrap().text(), "Hello world");

        let applied = controller.apply_translation(&mut page, &req2, Ok("new".to_string()));
        assert_eq!(applied, Applied::Updated);
        assert_eq!(page.node("p1-text").unwrap().text(), "new");
    }

    #[test]
    fn test_apply_duplicate_response_is_discarded() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);

        let mut event = ClickEvent::new("p1");
        let Activation::RequestIssued(request) = controller.handle_click(&mut page, &mut event)
        else {
            panic!("Expected RequestIssued");
        };

        assert_eq!(
            controller.apply_translation(&mut page, &request, Ok("Привет мир".to_string())),
            Applied::Updated
        );
        assert_eq!(
            controller.apply_translation(&mut page, &request, Ok("Привет мир".to_string())),
            Applied::Stale
        );
    }

    #[test]
    fn test_response_after_restore_is_discarded() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);

        // Translate successfully, then restore
        let mut click1 = ClickEvent::new("p1");
        let Activation::RequestIssued(req1) = controller.handle_click(&mut page, &mut click1)
        else {
            panic!("Expected RequestIssued");
        };
        controller.apply_translation(&mut page, &req1, Ok("Привет мир".to_string()));
        let mut click2 = ClickEvent::new("p1");
        assert_eq!(
            controller.handle_click(&mut page, &mut click2),
            Activation::Restored
        );

        // A lingering response for the old request must not clobber the restore
        let late = controller.apply_translation(&mut page, &req1, Ok("Привет мир".to_string()));
        assert_eq!(late, Applied::Stale);
        assert_eq!(page.node("p1-text").unwrap().text(), "Hello world");
    }

    // ========== Restore Tests ==========

    #[test]
    fn test_restore_relabels_trigger() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);

        let mut click1 = ClickEvent::new("p1");
        let Activation::RequestIssued(req) = controller.handle_click(&mut page, &mut click1)
        else {
            panic!("Expected RequestIssued");
        };
        controller.apply_translation(&mut page, &req, Ok("Привет мир".to_string()));

        let mut click2 = ClickEvent::new("p1");
        assert_eq!(
            controller.handle_click(&mut page, &mut click2),
            Activation::Restored
        );
        assert_eq!(page.node("p1-text").unwrap().text(), "Hello world");
        assert_eq!(page.node("p1").unwrap().text(), "Translate");
        assert_eq!(controller.state("p1"), ToggleState::Original);
    }

    // ========== Activate Round Trip Tests ==========

    #[tokio::test]
    async fn test_activate_translates_and_restores() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Suffix);

        let mut click1 = ClickEvent::new("p1");
        assert_eq!(
            controller.activate(&mut page, &mut click1).await,
            ToggleOutcome::Translated
        );
        assert_eq!(page.node("p1-text").unwrap().text(), "Hello world_ru");
        assert_eq!(page.node("p1").unwrap().text(), "Original");

        let mut click2 = ClickEvent::new("p1");
        assert_eq!(
            controller.activate(&mut page, &mut click2).await,
            ToggleOutcome::Restored
        );
        assert_eq!(page.node("p1-text").unwrap().text(), "Hello world");
        assert_eq!(page.node("p1").unwrap().text(), "Translate");
    }

    #[tokio::test]
    async fn test_activate_failure_keeps_original_state() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::Error("down".to_string()));

        let mut click = ClickEvent::new("p1");
        assert_eq!(
            controller.activate(&mut page, &mut click).await,
            ToggleOutcome::TranslationFailed
        );
        assert_eq!(page.node("p1-text").unwrap().text(), "Hello world");
        assert_eq!(page.node("p1").unwrap().text(), "Translate");
        // The counter still advanced; it counts activations, not successes
        assert_eq!(controller.click_count("p1"), 1);
        assert_eq!(controller.state("p1"), ToggleState::Original);
    }

    #[tokio::test]
    async fn test_failed_click_retries_translation_not_restore() {
        let mut page = test_page();
        let mut controller = test_controller(MockMode::sequence(vec![
            Err("down".to_string()),
            Ok("Привет мир".to_string()),
        ]));

        let mut click1 = ClickEvent::new("p1");
        assert_eq!(
            controller.activate(&mut page, &mut click1).await,
            ToggleOutcome::TranslationFailed
        );

        // State did not advance on failure, so the next click translates
        let mut click2 = ClickEvent::new("p1");
        assert_eq!(
            controller.activate(&mut page, &mut click2).await,
            ToggleOutcome::Translated
        );
        assert_eq!(page.node("p1-text").unwrap().text(), "Привет мир");
    }
}
