use crate::error::SliderResult;
use crate::render::{SliderFrame, SliderRenderer};

/// Headless renderer used by tests and hosts without a page.
///
/// It still validates frames so tests catch invalid geometry, and keeps the
/// last applied frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub release_count: usize,
    pub last_frame: Option<SliderFrame>,
}

impl NullRenderer {
    /// `true` when styling has been released and nothing was painted since.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.release_count > 0 && self.last_frame.is_none()
    }
}

impl SliderRenderer for NullRenderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn release(&mut self) -> SliderResult<()> {
        self.release_count += 1;
        self.last_frame = None;
        Ok(())
    }
}
