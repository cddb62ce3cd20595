use std::time::Duration;

use crate::core::{TimerHandle, TimerKind};
use crate::render::SliderRenderer;

use super::SliderEngine;

impl<R: SliderRenderer> SliderEngine<R> {
    /// Advances the virtual clock by `delta`, firing every callback that
    /// comes due in order.
    ///
    /// Settle, autoplay and resize-debounce callbacks only ever run from
    /// here. Autoplay ticks missed during a long stall are coalesced into a
    /// single tick. Returns the number of callbacks fired.
    pub fn advance_time(&mut self, delta: Duration) -> usize {
        let Some(core) = self.core.as_ref() else {
            return 0;
        };
        let until = core.timers.now().saturating_add(delta);

        let mut fired = 0;
        while let Some(handle) = self
            .core
            .as_mut()
            .and_then(|core| core.timers.pop_due(until))
        {
            fired += 1;
            self.dispatch_timer(handle);
        }

        if let Some(core) = self.core.as_mut() {
            core.timers.settle_clock(until);
            // The queue drops a repeating timer once the clock is exhausted.
            if let Some(handle) = core.autoplay_handle {
                if !core.timers.is_armed(handle) {
                    core.autoplay_handle = None;
                }
            }
        }
        fired
    }

    /// Time until the next armed callback, if any.
    #[must_use]
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        let core = self.core.as_ref()?;
        core.timers
            .next_due()
            .map(|due| due.saturating_sub(core.timers.now()))
    }

    fn dispatch_timer(&mut self, handle: TimerHandle) {
        let Some(core) = self.core.as_ref() else {
            return;
        };
        match handle.kind() {
            TimerKind::Settle if core.settle_handle == Some(handle) => self.settle_transition(),
            TimerKind::Autoplay if core.autoplay_handle == Some(handle) => self.on_autoplay_tick(),
            TimerKind::ResizeDebounce if core.resize_handle == Some(handle) => {
                self.flush_pending_relayout();
            }
            _ => {}
        }
    }
}
