use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Horizontal translation applied to the track element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackStyle {
    /// Translation in percent of the viewport; `0` or negative.
    pub offset_percent: f64,
}

impl TrackStyle {
    #[must_use]
    pub const fn new(offset_percent: f64) -> Self {
        Self { offset_percent }
    }

    /// CSS `transform` value, e.g. `translateX(-50%)`.
    #[must_use]
    pub fn css_transform(self) -> String {
        format!("translateX({}%)", self.offset_percent)
    }

    pub fn validate(self) -> SliderResult<()> {
        if !self.offset_percent.is_finite() || self.offset_percent > 0.0 {
            return Err(SliderError::InvalidData(
                "track offset must be finite and <= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Sizing shared by every card for the current layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardStyle {
    pub basis_percent: f64,
    pub gutter_rem: f64,
}

impl CardStyle {
    #[must_use]
    pub const fn new(basis_percent: f64, gutter_rem: f64) -> Self {
        Self {
            basis_percent,
            gutter_rem,
        }
    }

    /// CSS `flex` value, e.g. `0 0 calc(33.333333333333336% - 1.5rem)`.
    #[must_use]
    pub fn css_flex(self) -> String {
        format!("0 0 calc({}% - {}rem)", self.basis_percent, self.gutter_rem)
    }

    /// Left and right margin; each side carries half the gutter.
    #[must_use]
    pub fn margin_inline_rem(self) -> f64 {
        self.gutter_rem / 2.0
    }

    pub fn validate(self) -> SliderResult<()> {
        if !self.basis_percent.is_finite()
            || self.basis_percent <= 0.0
            || self.basis_percent > 100.0
        {
            return Err(SliderError::InvalidData(
                "card basis must be finite and in (0, 100]".to_owned(),
            ));
        }
        if !self.gutter_rem.is_finite() || self.gutter_rem < 0.0 {
            return Err(SliderError::InvalidData(
                "card gutter must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One navigation dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotPrimitive {
    /// Scroll offset this dot jumps to (`position * slides_to_scroll`).
    pub target_index: usize,
    pub active: bool,
    pub aria_label: String,
}

impl DotPrimitive {
    #[must_use]
    pub fn new(target_index: usize, active: bool, aria_label: impl Into<String>) -> Self {
        Self {
            target_index,
            active,
            aria_label: aria_label.into(),
        }
    }

    /// `aria-current` is only set on the active dot.
    #[must_use]
    pub fn aria_current(&self) -> Option<&'static str> {
        self.active.then_some("true")
    }
}

/// Prev/next control state. Controls are never disabled: navigation wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub enabled: bool,
}

impl ButtonState {
    #[must_use]
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }
}
