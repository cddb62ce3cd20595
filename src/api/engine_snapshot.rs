use serde::{Deserialize, Serialize};

use crate::interaction::{CursorStyle, SuspendReason};
use crate::render::SliderRenderer;

use super::SliderEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub inert: bool,
    pub total_slides: usize,
    pub viewport_width: u32,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    pub current_index: usize,
    pub max_index: usize,
    pub dot_count: usize,
    pub active_dot: usize,
    pub is_transitioning: bool,
    pub autoplay_armed: bool,
    #[serde(default)]
    pub suspend_reasons: Vec<SuspendReason>,
    pub dragging: bool,
    pub cursor: CursorStyle,
    pub clock_ms: u64,
}

impl<R: SliderRenderer> SliderEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            inert: self.is_inert(),
            total_slides: self.total_slides(),
            viewport_width: self.viewport_width(),
            slides_to_show: self.slides_to_show(),
            slides_to_scroll: self.slides_to_scroll(),
            current_index: self.current_index(),
            max_index: self.max_index(),
            dot_count: self.dot_count(),
            active_dot: self.active_dot(),
            is_transitioning: self.is_transitioning(),
            autoplay_armed: self.is_autoplay_armed(),
            suspend_reasons: self.suspend_reasons().iter().collect(),
            dragging: self.is_dragging(),
            cursor: self.cursor(),
            clock_ms: u64::try_from(self.now().as_millis()).unwrap_or(u64::MAX),
        }
    }
}
