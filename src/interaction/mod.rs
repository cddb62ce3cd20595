use serde::{Deserialize, Serialize};

/// Navigation direction of one `advance` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// Keys the slider reacts to while it has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Normalized host input delivered to the engine.
///
/// Coordinates are client-space X positions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SliderInput {
    PrevClicked,
    NextClicked,
    DotActivated { dot: usize },
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp { x: f64 },
    PointerEnter,
    PointerLeave,
    KeyDown { key: SliderKey },
    ViewportResized { width: u32 },
    VisibilityChanged { hidden: bool },
}

/// What the host should do with the originating event after routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputOutcome {
    /// The engine consumed the input (it may still have been a no-op transition).
    pub handled: bool,
    /// The host should suppress the event's default action (scroll, selection).
    pub prevent_default: bool,
}

impl InputOutcome {
    #[must_use]
    pub const fn ignored() -> Self {
        Self {
            handled: false,
            prevent_default: false,
        }
    }

    #[must_use]
    pub const fn handled() -> Self {
        Self {
            handled: true,
            prevent_default: false,
        }
    }

    #[must_use]
    pub const fn handled_prevent_default() -> Self {
        Self {
            handled: true,
            prevent_default: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorStyle {
    #[default]
    Grab,
    Grabbing,
}

/// Condition currently holding autoplay off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuspendReason {
    Hover,
    Touch,
    Drag,
    Hidden,
}

impl SuspendReason {
    pub const ALL: [Self; 4] = [Self::Hover, Self::Touch, Self::Drag, Self::Hidden];

    const fn bit(self) -> u8 {
        match self {
            Self::Hover => 1 << 0,
            Self::Touch => 1 << 1,
            Self::Drag => 1 << 2,
            Self::Hidden => 1 << 3,
        }
    }
}

/// Bitmask of active suspend reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuspendReasons {
    bits: u8,
}

impl SuspendReasons {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn with(self, reason: SuspendReason) -> Self {
        Self {
            bits: self.bits | reason.bit(),
        }
    }

    #[must_use]
    pub const fn without(self, reason: SuspendReason) -> Self {
        Self {
            bits: self.bits & !reason.bit(),
        }
    }

    #[must_use]
    pub const fn contains(self, reason: SuspendReason) -> bool {
        (self.bits & reason.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    pub fn iter(self) -> impl Iterator<Item = SuspendReason> {
        SuspendReason::ALL
            .into_iter()
            .filter(move |reason| self.contains(*reason))
    }
}

/// Maps a recorded `start - end` delta to a swipe direction.
///
/// Only a magnitude strictly greater than `threshold_px` counts; a positive
/// delta (content dragged left) moves forward.
#[must_use]
pub fn resolve_swipe(delta_px: f64, threshold_px: f64) -> Option<Direction> {
    if !delta_px.is_finite() || delta_px.abs() <= threshold_px {
        return None;
    }
    if delta_px > 0.0 {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}

/// Touch and pointer-drag bookkeeping.
///
/// Gestures resolve once at release; there is no intermediate drag offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTracker {
    touch_active: bool,
    touch_start_x: f64,
    touch_end_x: f64,
    dragging: bool,
    drag_start_x: f64,
}

impl GestureTracker {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.dragging
    }

    pub fn on_touch_start(&mut self, x: f64) {
        self.touch_active = true;
        self.touch_start_x = x;
        self.touch_end_x = x;
    }

    pub fn on_touch_move(&mut self, x: f64) {
        if self.touch_active {
            self.touch_end_x = x;
        }
    }

    /// Ends the touch gesture and returns `start - end`.
    ///
    /// Returns `None` when no touch was in progress.
    pub fn on_touch_end(&mut self) -> Option<f64> {
        if !self.touch_active {
            return None;
        }
        self.touch_active = false;
        Some(self.touch_start_x - self.touch_end_x)
    }

    /// Starts a drag. Movement is not tracked; the drag resolves against the
    /// release point.
    pub fn on_press(&mut self, x: f64) {
        self.dragging = true;
        self.drag_start_x = x;
    }

    /// Ends the drag and returns `start - x`.
    ///
    /// Returns `None` when no press preceded the release.
    pub fn on_release(&mut self, x: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        Some(self.drag_start_x - x)
    }
}
