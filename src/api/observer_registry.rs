use indexmap::map::Entry;
use tracing::debug;

use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderObserver;
use crate::render::SliderRenderer;

use super::SliderEngine;

impl<R: SliderRenderer> SliderEngine<R> {
    /// Attaches an observer under its id.
    ///
    /// Observers are notified in the order they were attached. Ids are
    /// trimmed and must be non-blank and unique among attached observers.
    /// An inert or destroyed engine never emits, so attaching there is
    /// accepted but has no effect.
    pub fn register_observer(&mut self, observer: Box<dyn SliderObserver>) -> SliderResult<()> {
        let observer_id = observer.id().trim().to_owned();
        if observer_id.is_empty() {
            return Err(SliderError::InvalidConfig(
                "slider observer needs a non-blank id".to_owned(),
            ));
        }

        match self.observers.entry(observer_id) {
            Entry::Occupied(entry) => Err(SliderError::InvalidConfig(format!(
                "slider observer `{}` is already attached",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                debug!(observer_id = entry.key().as_str(), "slider observer attached");
                entry.insert(observer);
                Ok(())
            }
        }
    }

    /// Detaches an observer; the remaining ones keep their relative order.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        let removed = self.observers.shift_remove(observer_id.trim()).is_some();
        if removed {
            debug!(observer_id, "slider observer detached");
        }
        removed
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers.contains_key(observer_id.trim())
    }

    /// Attached observer ids in notification order.
    pub fn observer_ids(&self) -> impl Iterator<Item = &str> {
        self.observers.keys().map(String::as_str)
    }
}
