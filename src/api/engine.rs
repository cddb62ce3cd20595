use std::time::Duration;

use indexmap::IndexMap;
use tracing::warn;

use crate::extensions::{ObserverContext, SliderEvent, SliderObserver};
use crate::interaction::{CursorStyle, SuspendReasons};
use crate::render::{ButtonState, CardStyle, DotPrimitive, SliderFrame, SliderRenderer, TrackStyle};

use super::{SliderConfig, engine_core::SliderCore};

/// Main orchestration facade consumed by host pages.
///
/// `SliderEngine` owns the slider state, its timers and the renderer. It is
/// single-threaded: every input, timer callback and render runs on the
/// caller's thread, and re-entrant transitions are blocked by the settle
/// guard rather than by locking.
///
/// An engine built over missing markup is inert: every operation is a no-op
/// and every accessor reports an empty slider.
pub struct SliderEngine<R: SliderRenderer> {
    pub(super) renderer: R,
    pub(super) config: SliderConfig,
    pub(super) core: Option<SliderCore>,
    /// Keyed by observer id, in registration order.
    pub(super) observers: IndexMap<String, Box<dyn SliderObserver>>,
}

impl<R: SliderRenderer> SliderEngine<R> {
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// `true` when the markup was missing at construction or after `destroy`.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.core.is_none()
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.core.as_ref().map_or(0, |core| core.total_slides)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.core.as_ref().map_or(0, |core| core.current_index)
    }

    #[must_use]
    pub fn slides_to_show(&self) -> usize {
        self.core
            .as_ref()
            .map_or(self.config.slides_to_show, |core| core.layout.slides_to_show())
    }

    #[must_use]
    pub fn slides_to_scroll(&self) -> usize {
        self.core
            .as_ref()
            .map_or(self.config.slides_to_scroll, |core| {
                core.layout.slides_to_scroll()
            })
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.core.as_ref().map_or(0, SliderCore::max_index)
    }

    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.core.as_ref().map_or(0, SliderCore::dot_count)
    }

    #[must_use]
    pub fn active_dot(&self) -> usize {
        self.core.as_ref().map_or(0, SliderCore::active_dot)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.core.as_ref().is_some_and(|core| core.is_transitioning)
    }

    #[must_use]
    pub fn is_autoplay_armed(&self) -> bool {
        self.core
            .as_ref()
            .is_some_and(|core| core.autoplay_handle.is_some())
    }

    #[must_use]
    pub fn suspend_reasons(&self) -> SuspendReasons {
        self.core
            .as_ref()
            .map_or(SuspendReasons::none(), |core| core.suspend_reasons)
    }

    #[must_use]
    pub fn cursor(&self) -> CursorStyle {
        self.core
            .as_ref()
            .map_or(CursorStyle::Grab, |core| core.cursor)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core
            .as_ref()
            .is_some_and(|core| core.gestures.is_dragging())
    }

    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.core.as_ref().map_or(0, |core| core.viewport_width)
    }

    /// Current reading of the engine's virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.core
            .as_ref()
            .map_or(Duration::ZERO, |core| core.timers.now())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Builds the frame for the current state without painting it.
    #[must_use]
    pub fn current_frame(&self) -> Option<SliderFrame> {
        let core = self.core.as_ref()?;
        let layout = core.layout;

        let dots = if core.markup.has_dots_container {
            let active = core.active_dot();
            (0..core.dot_count())
                .map(|position| {
                    DotPrimitive::new(
                        layout.dot_target(position),
                        position == active,
                        format!("{} {}", self.config.dot_label, position + 1),
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        Some(SliderFrame {
            track: TrackStyle::new(layout.track_offset_percent(core.current_index)),
            card: CardStyle::new(layout.card_basis_percent(), self.config.card_gutter_rem),
            card_count: core.total_slides,
            dots,
            prev_button: core.markup.has_prev_button.then(ButtonState::enabled),
            next_button: core.markup.has_next_button.then(ButtonState::enabled),
            cursor: core.cursor,
        })
    }

    /// Re-applies the current frame. Returns `false` for an inert engine.
    ///
    /// Rendering is idempotent; redundant calls have no visible effect.
    pub fn render(&mut self) -> bool {
        let Some(frame) = self.current_frame() else {
            return false;
        };
        if let Err(err) = self.renderer.render(&frame) {
            warn!(error = %err, "slider render failed");
        }
        true
    }

    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            current_index: self.current_index(),
            total_slides: self.total_slides(),
            slides_to_show: self.slides_to_show(),
            slides_to_scroll: self.slides_to_scroll(),
            is_transitioning: self.is_transitioning(),
            autoplay_armed: self.is_autoplay_armed(),
        }
    }

    pub(super) fn emit_event(&mut self, event: SliderEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in self.observers.values_mut() {
            observer.on_event(event, context);
        }
    }
}
