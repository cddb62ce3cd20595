use serde::{Deserialize, Serialize};

/// Read-only state passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub current_index: usize,
    pub total_slides: usize,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    pub is_transitioning: bool,
    pub autoplay_armed: bool,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderEvent {
    SlideChanged { from: usize, to: usize },
    TransitionRejected { target: usize },
    TransitionSettled { index: usize },
    LayoutChanged {
        slides_to_show: usize,
        slides_to_scroll: usize,
        dot_count: usize,
    },
    AutoplayStarted,
    AutoplayStopped,
    Destroyed,
}

/// Hook interface for host-side reactions (analytics, live-region
/// announcements, linked widgets).
///
/// Observers read engine context but cannot mutate slider state.
pub trait SliderObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SliderEvent, context: ObserverContext);
}
