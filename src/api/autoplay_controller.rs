use std::time::Duration;

use tracing::debug;

use crate::core::TimerKind;
use crate::extensions::SliderEvent;
use crate::interaction::SuspendReason;
use crate::render::SliderRenderer;

use super::SliderEngine;

impl<R: SliderRenderer> SliderEngine<R> {
    /// Arms the repeating autoplay timer, disarming any previous one first.
    ///
    /// At most one autoplay timer is ever armed. Works regardless of the
    /// `autoplay` config flag, which only governs automatic resumes.
    pub fn start_autoplay(&mut self) -> bool {
        let Some(core) = self.core.as_mut() else {
            return false;
        };

        if let Some(previous) = core.autoplay_handle.take() {
            core.timers.cancel(previous);
        }
        let interval = Duration::from_millis(self.config.autoplay_interval_ms);
        core.autoplay_handle = Some(core.timers.arm_repeating(TimerKind::Autoplay, interval));

        debug!(interval_ms = self.config.autoplay_interval_ms, "autoplay armed");
        self.emit_event(SliderEvent::AutoplayStarted);
        true
    }

    /// Disarms autoplay. Idempotent; returns `true` when a timer was armed.
    pub fn stop_autoplay(&mut self) -> bool {
        let Some(core) = self.core.as_mut() else {
            return false;
        };
        let Some(handle) = core.autoplay_handle.take() else {
            return false;
        };

        core.timers.cancel(handle);
        debug!("autoplay disarmed");
        self.emit_event(SliderEvent::AutoplayStopped);
        true
    }

    /// Number of armed autoplay timers; `0` or `1`.
    #[must_use]
    pub fn autoplay_timer_count(&self) -> usize {
        self.core
            .as_ref()
            .map_or(0, |core| core.timers.count_of(TimerKind::Autoplay))
    }

    pub(super) fn suspend_autoplay(&mut self, reason: SuspendReason) {
        let Some(core) = self.core.as_mut() else {
            return;
        };
        core.suspend_reasons = core.suspend_reasons.with(reason);
        debug!(?reason, "autoplay suspended");
        self.stop_autoplay();
    }

    /// Clears `reason` and re-arms autoplay when configured and nothing else
    /// still holds it off.
    pub(super) fn resume_autoplay(&mut self, reason: SuspendReason) {
        let Some(core) = self.core.as_mut() else {
            return;
        };
        core.suspend_reasons = core.suspend_reasons.without(reason);
        if !self.config.autoplay || !core.suspend_reasons.is_none() {
            return;
        }
        debug!(?reason, "autoplay resumed");
        self.start_autoplay();
    }

    pub(super) fn on_autoplay_tick(&mut self) {
        debug!(current_index = self.current_index(), "autoplay tick");
        self.next_slide();
    }
}
