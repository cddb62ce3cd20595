use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Element discovery facility provided by the host page.
///
/// The engine only needs to know whether a selector resolves and, for the
/// card selector, how many elements it resolves to. Scoped lookups (track
/// and cards inside the container) are the host's concern.
pub trait ElementLookup {
    fn count_matching(&self, selector: &str) -> usize;

    fn exists(&self, selector: &str) -> bool {
        self.count_matching(selector) > 0
    }
}

/// In-memory stand-in for a host document, keyed by selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticDocument {
    elements: IndexMap<String, usize>,
}

impl StaticDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `count` elements for `selector`, replacing earlier entries.
    #[must_use]
    pub fn with_elements(mut self, selector: impl Into<String>, count: usize) -> Self {
        self.elements.insert(selector.into(), count);
        self
    }

    #[must_use]
    pub fn with_element(self, selector: impl Into<String>) -> Self {
        self.with_elements(selector, 1)
    }

    pub fn remove(&mut self, selector: &str) -> Option<usize> {
        self.elements.shift_remove(selector)
    }
}

impl ElementLookup for StaticDocument {
    fn count_matching(&self, selector: &str) -> usize {
        self.elements.get(selector).copied().unwrap_or(0)
    }
}

/// Result of resolving the slider's selectors once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderMarkup {
    pub has_container: bool,
    pub has_track: bool,
    pub card_count: usize,
    pub has_prev_button: bool,
    pub has_next_button: bool,
    pub has_dots_container: bool,
}

impl SliderMarkup {
    /// The engine only activates with a container, a track and at least one card.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.has_container && self.has_track && self.card_count > 0
    }
}
