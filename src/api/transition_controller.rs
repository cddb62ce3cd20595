use std::time::Duration;

use tracing::debug;

use crate::core::TimerKind;
use crate::extensions::SliderEvent;
use crate::interaction::Direction;
use crate::render::SliderRenderer;

use super::SliderEngine;

impl<R: SliderRenderer> SliderEngine<R> {
    /// Moves the slide window to `target_index`.
    ///
    /// Rejected while a previous transition is still settling. The target is
    /// clamped to `[0, max_index]`; the guard stays up for the settle delay.
    /// Returns `true` when the transition was accepted.
    pub fn transition_to(&mut self, target_index: usize) -> bool {
        let Some(core) = self.core.as_mut() else {
            return false;
        };

        if core.is_transitioning {
            debug!(
                target_index,
                current_index = core.current_index,
                "transition rejected while settling"
            );
            self.emit_event(SliderEvent::TransitionRejected {
                target: target_index,
            });
            return false;
        }

        let from = core.current_index;
        let to = core.layout.clamp_index(target_index, core.total_slides);
        core.current_index = to;
        core.is_transitioning = true;

        if let Some(stale) = core.settle_handle.take() {
            core.timers.cancel(stale);
        }
        let settle_delay = Duration::from_millis(self.config.settle_delay_ms);
        core.settle_handle = Some(core.timers.arm_once(TimerKind::Settle, settle_delay));

        debug!(from, to, requested = target_index, "slide transition started");
        self.render();
        if from != to {
            self.emit_event(SliderEvent::SlideChanged { from, to });
        }
        true
    }

    /// Steps one `slides_to_scroll` stride, wrapping at both ends.
    ///
    /// Forward from `max_index` goes to `0`; backward from `0` goes to
    /// `max_index`.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let Some(core) = self.core.as_ref() else {
            return false;
        };

        let current = core.current_index;
        let max_index = core.max_index();
        let step = core.layout.slides_to_scroll();
        let target = match direction {
            Direction::Forward if current >= max_index => 0,
            Direction::Forward => current.saturating_add(step).min(max_index),
            Direction::Backward if current == 0 => max_index,
            Direction::Backward => current.saturating_sub(step),
        };

        self.transition_to(target)
    }

    /// Jumps straight to a scroll offset, as a dot does.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.transition_to(index)
    }

    /// Public alias of [`SliderEngine::jump_to`]; out-of-range indices are clamped.
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        self.jump_to(index)
    }

    pub fn next_slide(&mut self) -> bool {
        self.advance(Direction::Forward)
    }

    pub fn prev_slide(&mut self) -> bool {
        self.advance(Direction::Backward)
    }

    pub(super) fn settle_transition(&mut self) {
        let Some(core) = self.core.as_mut() else {
            return;
        };
        core.settle_handle = None;
        core.is_transitioning = false;
        let index = core.current_index;
        debug!(index, "slide transition settled");
        self.emit_event(SliderEvent::TransitionSettled { index });
    }
}
