use tracing::debug;

use crate::interaction::{
    CursorStyle, InputOutcome, SliderInput, SliderKey, SuspendReason, resolve_swipe,
};
use crate::render::SliderRenderer;

use super::SliderEngine;

impl<R: SliderRenderer> SliderEngine<R> {
    /// Routes one host input to `advance`, `jump_to`, autoplay suspension or
    /// the resize debounce.
    ///
    /// Inert engines ignore everything.
    pub fn handle_input(&mut self, input: SliderInput) -> InputOutcome {
        if self.core.is_none() {
            return InputOutcome::ignored();
        }

        match input {
            SliderInput::PrevClicked => {
                self.prev_slide();
                InputOutcome::handled()
            }
            SliderInput::NextClicked => {
                self.next_slide();
                InputOutcome::handled()
            }
            SliderInput::DotActivated { dot } => self.on_dot_activated(dot),
            SliderInput::TouchStart { x } => {
                if let Some(core) = self.core.as_mut() {
                    core.gestures.on_touch_start(x);
                }
                self.suspend_autoplay(SuspendReason::Touch);
                InputOutcome::handled()
            }
            SliderInput::TouchMove { x } => {
                if let Some(core) = self.core.as_mut() {
                    core.gestures.on_touch_move(x);
                }
                InputOutcome::handled()
            }
            SliderInput::TouchEnd => self.on_touch_end(),
            SliderInput::PointerDown { x } => {
                if let Some(core) = self.core.as_mut() {
                    core.gestures.on_press(x);
                    core.cursor = CursorStyle::Grabbing;
                }
                self.suspend_autoplay(SuspendReason::Drag);
                self.render();
                InputOutcome::handled()
            }
            SliderInput::PointerMove { .. } => {
                // Suppresses text selection while a drag is in progress.
                if self.is_dragging() {
                    InputOutcome::handled_prevent_default()
                } else {
                    InputOutcome::ignored()
                }
            }
            SliderInput::PointerUp { x } => self.on_pointer_up(x),
            SliderInput::PointerEnter => {
                self.suspend_autoplay(SuspendReason::Hover);
                InputOutcome::handled()
            }
            SliderInput::PointerLeave => {
                self.resume_autoplay(SuspendReason::Hover);
                InputOutcome::handled()
            }
            SliderInput::KeyDown { key } => match key {
                SliderKey::ArrowLeft => {
                    self.prev_slide();
                    InputOutcome::handled_prevent_default()
                }
                SliderKey::ArrowRight => {
                    self.next_slide();
                    InputOutcome::handled_prevent_default()
                }
                SliderKey::Other => InputOutcome::ignored(),
            },
            SliderInput::ViewportResized { width } => {
                self.schedule_relayout(width);
                InputOutcome::handled()
            }
            SliderInput::VisibilityChanged { hidden: true } => {
                self.suspend_autoplay(SuspendReason::Hidden);
                InputOutcome::handled()
            }
            SliderInput::VisibilityChanged { hidden: false } => {
                self.resume_autoplay(SuspendReason::Hidden);
                InputOutcome::handled()
            }
        }
    }

    fn on_dot_activated(&mut self, dot: usize) -> InputOutcome {
        let Some(core) = self.core.as_ref() else {
            return InputOutcome::ignored();
        };
        if !core.markup.has_dots_container || dot >= core.dot_count() {
            debug!(dot, dot_count = core.dot_count(), "ignoring unknown dot");
            return InputOutcome::ignored();
        }
        let target = core.layout.dot_target(dot);
        self.jump_to(target);
        InputOutcome::handled()
    }

    fn on_touch_end(&mut self) -> InputOutcome {
        let Some(delta) = self
            .core
            .as_mut()
            .and_then(|core| core.gestures.on_touch_end())
        else {
            return InputOutcome::ignored();
        };
        self.apply_swipe(delta);
        self.resume_autoplay(SuspendReason::Touch);
        InputOutcome::handled()
    }

    fn on_pointer_up(&mut self, x: f64) -> InputOutcome {
        let Some(delta) = self
            .core
            .as_mut()
            .and_then(|core| core.gestures.on_release(x))
        else {
            return InputOutcome::ignored();
        };
        if let Some(core) = self.core.as_mut() {
            core.cursor = CursorStyle::Grab;
        }
        self.render();
        self.apply_swipe(delta);
        self.resume_autoplay(SuspendReason::Drag);
        InputOutcome::handled()
    }

    fn apply_swipe(&mut self, delta_px: f64) {
        match resolve_swipe(delta_px, self.config.swipe_threshold_px) {
            Some(direction) => {
                debug!(delta_px, ?direction, "swipe resolved");
                self.advance(direction);
            }
            None => debug!(delta_px, "gesture below swipe threshold"),
        }
    }
}
