//! Per-item session state
//!
//! Each text item gets one `ItemState` holding its click counter, cached
//! original text, and current toggle state. Entries are created lazily on
//! first interaction and live for the duration of the session; there is no
//! teardown.

use std::collections::HashMap;

/// Whether a text item currently shows original or translated content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// The item shows its original text
    Original,
    /// The item shows a translation
    Translated,
}

/// Session state for a single text item
#[derive(Debug, Clone)]
pub struct ItemState {
    /// Count of recognized trigger activations; monotonic, never reset
    clicks: u64,
    /// Original text, captured on the first translation request and never
    /// overwritten afterwards
    original: Option<String>,
    state: ToggleState,
    /// Tag of the most recent in-flight translation request, if any
    pending_tag: Option<u64>,
}

impl ItemState {
    fn new() -> Self {
        Self {
            clicks: 0,
            original: None,
            state: ToggleState::Original,
            pending_tag: None,
        }
    }

    /// Record one trigger activation and return the new count
    pub fn record_click(&mut self) -> u64 {
        self.clicks += 1;
        self.clicks
    }

    /// Total recognized activations so far
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Cache the displayed text as the original, first call only
    ///
    /// Later calls return the already-cached original unchanged, so a
    /// translated string can never overwrite it.
    pub fn capture_original(&mut self, displayed: &str) -> &str {
        self.original.get_or_insert_with(|| displayed.to_string())
    }

    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    /// Mark a translation request as issued under the given tag
    ///
    /// Only the most recently issued tag is remembered; an older in-flight
    /// request is superseded, not cancelled.
    pub fn mark_issued(&mut self, tag: u64) {
        self.pending_tag = Some(tag);
    }

    /// Whether a response carrying `tag` is still current
    pub fn matches_pending(&self, tag: u64) -> bool {
        self.pending_tag == Some(tag)
    }

    /// Apply a successful translation: state becomes Translated and the
    /// pending tag is cleared so duplicate responses are discarded
    pub fn complete_translation(&mut self) {
        self.state = ToggleState::Translated;
        self.pending_tag = None;
    }

    /// A matching request failed; no response for its tag will arrive
    pub fn clear_pending(&mut self) {
        self.pending_tag = None;
    }

    /// Switch back to the original text, returning it for display
    ///
    /// Returns `None` when no translation was ever cached; the caller treats
    /// that as a no-op. The cached original itself is kept for the rest of
    /// the session.
    pub fn take_restore(&mut self) -> Option<String> {
        let original = self.original.clone()?;
        self.state = ToggleState::Original;
        self.pending_tag = None;
        Some(original)
    }
}

/// Process-wide session store keyed by item identifier
///
/// Initialized empty at startup; entries are destroyed implicitly when the
/// session ends.
#[derive(Debug, Default)]
pub struct SessionStore {
    items: HashMap<String, ItemState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Get or lazily create the state entry for an item
    pub fn entry(&mut self, item_id: &str) -> &mut ItemState {
        self.items
            .entry(item_id.to_string())
            .or_insert_with(ItemState::new)
    }

    pub fn get(&self, item_id: &str) -> Option<&ItemState> {
        self.items.get(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_entry_creation() {
        let mut store = SessionStore::new();
        assert!(store.get("p1").is_none());
        store.entry("p1");
        assert!(store.get("p1").is_some());
    }

    #[test]
    fn test_click_counter_monotonic() {
        let mut store = SessionStore::new();
        let item = store.entry("p1");
        assert_eq!(item.record_click(), 1);
        assert_eq!(item.record_click(), 2);
        assert_eq!(item.record_click(), 3);
        assert_eq!(item.clicks(), 3);
    }

    #[test]
    fn test_capture_original_only_once() {
        let mut store = SessionStore::new();
        let item = store.entry("p1");
        assert_eq!(item.capture_original("Hello world"), "Hello world");
        // A second capture with translated text must not overwrite
        assert_eq!(item.capture_original("Привет мир"), "Hello world");
        assert_eq!(item.original(), Some("Hello world"));
    }

    #[test]
    fn test_restore_without_translation_is_noop() {
        let mut store = SessionStore::new();
        let item = store.entry("p1");
        assert_eq!(item.take_restore(), None);
        assert_eq!(item.state(), ToggleState::Original);
    }

    #[test]
    fn test_restore_is_idempotent() {
        let mut store = SessionStore::new();
        let item = store.entry("p1");
        item.capture_original("Hello world");
        item.complete_translation();
        assert_eq!(item.state(), ToggleState::Translated);

        assert_eq!(item.take_restore(), Some("Hello world".to_string()));
        assert_eq!(item.state(), ToggleState::Original);
        // Restoring again yields the same original
        assert_eq!(item.take_restore(), Some("Hello world".to_string()));
        assert_eq!(item.state(), ToggleState::Original);
    }

    #[test]
    fn test_pending_tag_lifecycle() {
        let mut store = SessionStore::new();
        let item = store.entry("p1");
        let tag = item.record_click();
        item.mark_issued(tag);
        assert!(item.matches_pending(tag));

        // A newer request supersedes the old tag
        let newer = item.record_click();
        item.mark_issued(newer);
        assert!(!item.matches_pending(tag));
        assert!(item.matches_pending(newer));

        item.complete_translation();
        assert!(!item.matches_pending(newer));
        assert_eq!(item.state(), ToggleState::Translated);
    }

    #[test]
    fn test_restore_clears_pending_tag() {
        let mut store = SessionStore::new();
        let item = store.entry("p1");
        item.capture_original("text");
        item.mark_issued(1);
        item.complete_translation();
        item.mark_issued(3);
        item.take_restore();
        assert!(!item.matches_pending(3));
    }

    #[test]
    fn test_items_are_independent() {
        let mut store = SessionStore::new();
        store.entry("p1").record_click();
        store.entry("p1").capture_original("first");
        store.entry("p2").capture_original("second");

        assert_eq!(store.get("p1").unwrap().clicks(), 1);
        assert_eq!(store.get("p2").unwrap().clicks(), 0);
        assert_eq!(store.get("p1").unwrap().original(), Some("first"));
        assert_eq!(store.get("p2").unwrap().original(), Some("second"));
    }
}
