use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};
use crate::interaction::CursorStyle;
use crate::render::{ButtonState, CardStyle, DotPrimitive, TrackStyle};

/// Backend-agnostic description of one slider paint.
///
/// Frames are complete: applying the same frame twice leaves the page
/// unchanged, so hosts may re-apply them freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderFrame {
    pub track: TrackStyle,
    pub card: CardStyle,
    pub card_count: usize,
    /// Empty when the page has no dots container.
    pub dots: Vec<DotPrimitive>,
    pub prev_button: Option<ButtonState>,
    pub next_button: Option<ButtonState>,
    pub cursor: CursorStyle,
}

impl SliderFrame {
    #[must_use]
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().position(|dot| dot.active)
    }

    pub fn validate(&self) -> SliderResult<()> {
        self.track.validate()?;
        self.card.validate()?;
        if self.card_count == 0 {
            return Err(SliderError::InvalidData(
                "frame must describe at least one card".to_owned(),
            ));
        }
        if self.dots.iter().filter(|dot| dot.active).count() > 1 {
            return Err(SliderError::InvalidData(
                "at most one dot may be active".to_owned(),
            ));
        }
        Ok(())
    }
}
