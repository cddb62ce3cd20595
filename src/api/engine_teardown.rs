use tracing::{info, warn};

use crate::extensions::SliderEvent;
use crate::render::SliderRenderer;

use super::SliderEngine;

impl<R: SliderRenderer> SliderEngine<R> {
    /// Tears the slider down and leaves the engine inert.
    ///
    /// Cancels autoplay, any pending settle callback and any pending resize
    /// debounce, then asks the renderer to drop the track transform, card
    /// sizing and generated dots. Observers see `Destroyed` and are then
    /// detached. Idempotent; returns `true` on the first call.
    pub fn destroy(&mut self) -> bool {
        if self.core.is_none() {
            return false;
        }

        self.emit_event(SliderEvent::Destroyed);
        if let Some(mut core) = self.core.take() {
            core.timers.clear();
        }
        self.observers.clear();

        if let Err(err) = self.renderer.release() {
            warn!(error = %err, "slider style release failed");
        }
        info!("slider destroyed");
        true
    }
}
