use crate::core::{SlideLayout, SliderMarkup, TimerHandle, TimerQueue};
use crate::interaction::{CursorStyle, GestureTracker, SuspendReasons};

/// Live slider state. Exists only while the engine is active; an inert or
/// destroyed engine holds none.
pub(super) struct SliderCore {
    pub(super) markup: SliderMarkup,
    /// Fixed for the lifetime of the core.
    pub(super) total_slides: usize,
    pub(super) layout: SlideLayout,
    /// Invariant: `current_index <= layout.max_index(total_slides)`.
    pub(super) current_index: usize,
    pub(super) is_transitioning: bool,
    pub(super) viewport_width: u32,
    pub(super) pending_viewport_width: Option<u32>,
    pub(super) settle_handle: Option<TimerHandle>,
    pub(super) autoplay_handle: Option<TimerHandle>,
    pub(super) resize_handle: Option<TimerHandle>,
    pub(super) timers: TimerQueue,
    pub(super) gestures: GestureTracker,
    pub(super) suspend_reasons: SuspendReasons,
    pub(super) cursor: CursorStyle,
}

impl SliderCore {
    pub(super) fn new(markup: SliderMarkup, layout: SlideLayout, viewport_width: u32) -> Self {
        Self {
            markup,
            total_slides: markup.card_count,
            layout,
            current_index: 0,
            is_transitioning: false,
            viewport_width,
            pending_viewport_width: None,
            settle_handle: None,
            autoplay_handle: None,
            resize_handle: None,
            timers: TimerQueue::new(),
            gestures: GestureTracker::default(),
            suspend_reasons: SuspendReasons::none(),
            cursor: CursorStyle::Grab,
        }
    }

    pub(super) fn max_index(&self) -> usize {
        self.layout.max_index(self.total_slides)
    }

    pub(super) fn dot_count(&self) -> usize {
        self.layout.dot_count(self.total_slides)
    }

    pub(super) fn active_dot(&self) -> usize {
        self.layout.active_dot(self.current_index)
    }
}
