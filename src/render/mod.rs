mod frame;
mod null_renderer;
mod primitives;

pub use frame::SliderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{ButtonState, CardStyle, DotPrimitive, TrackStyle};

use crate::error::SliderResult;

/// Contract implemented by any page backend.
///
/// Backends receive a fully materialized `SliderFrame` so DOM or widget code
/// stays isolated from slider state and input handling.
pub trait SliderRenderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()>;

    /// Removes every style the slider applied: track transform, card
    /// flex/margins and the generated dots.
    fn release(&mut self) -> SliderResult<()>;
}
