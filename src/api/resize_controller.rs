use std::time::Duration;

use tracing::debug;

use crate::core::{SlideLayout, TimerKind};
use crate::extensions::SliderEvent;
use crate::render::SliderRenderer;

use super::SliderEngine;

impl<R: SliderRenderer> SliderEngine<R> {
    /// Applies a viewport width immediately.
    ///
    /// Re-resolves the breakpoint table, re-clamps the index, and repaints
    /// card sizing, dots and track position. The re-clamp is silent: it does
    /// not start a transition or touch autoplay. Returns `true` when the
    /// resolved counts changed.
    pub fn relayout(&mut self, viewport_width: u32) -> bool {
        let Some(core) = self.core.as_mut() else {
            return false;
        };

        let previous = core.layout;
        let layout = SlideLayout::resolve(
            self.config.base_counts(),
            &self.config.responsive,
            viewport_width,
        );
        core.viewport_width = viewport_width;
        core.pending_viewport_width = None;
        core.layout = layout;
        core.current_index = layout.clamp_index(core.current_index, core.total_slides);

        let changed = previous != layout;
        let dot_count = core.dot_count();
        debug!(
            viewport_width,
            slides_to_show = layout.slides_to_show(),
            slides_to_scroll = layout.slides_to_scroll(),
            current_index = core.current_index,
            changed,
            "slider relayout"
        );

        self.render();
        if changed {
            self.emit_event(SliderEvent::LayoutChanged {
                slides_to_show: layout.slides_to_show(),
                slides_to_scroll: layout.slides_to_scroll(),
                dot_count,
            });
        }
        changed
    }

    /// Records a resize and restarts the quiet window; only the last width of
    /// a burst is applied.
    pub(super) fn schedule_relayout(&mut self, viewport_width: u32) {
        let Some(core) = self.core.as_mut() else {
            return;
        };
        core.pending_viewport_width = Some(viewport_width);
        if let Some(previous) = core.resize_handle.take() {
            core.timers.cancel(previous);
        }
        let quiet_window = Duration::from_millis(self.config.resize_debounce_ms);
        core.resize_handle = Some(core.timers.arm_once(TimerKind::ResizeDebounce, quiet_window));
    }

    pub(super) fn flush_pending_relayout(&mut self) {
        let Some(core) = self.core.as_mut() else {
            return;
        };
        core.resize_handle = None;
        if let Some(width) = core.pending_viewport_width.take() {
            self.relayout(width);
        }
    }
}
