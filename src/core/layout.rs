use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of cards visible at once and the stride of one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideCounts {
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
}

impl SlideCounts {
    #[must_use]
    pub const fn new(slides_to_show: usize, slides_to_scroll: usize) -> Self {
        Self {
            slides_to_show,
            slides_to_scroll,
        }
    }

    /// Returns counts with zero values raised to 1.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.slides_to_show == 0 || self.slides_to_scroll == 0 {
            warn!(
                slides_to_show = self.slides_to_show,
                slides_to_scroll = self.slides_to_scroll,
                "slide counts must be >= 1, normalizing"
            );
        }
        Self {
            slides_to_show: self.slides_to_show.max(1),
            slides_to_scroll: self.slides_to_scroll.max(1),
        }
    }
}

impl Default for SlideCounts {
    fn default() -> Self {
        Self::new(3, 1)
    }
}

/// One entry of the responsive table.
///
/// A rule matches when the viewport width is `<= breakpoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveRule {
    pub breakpoint: u32,
    pub settings: SlideCounts,
}

impl ResponsiveRule {
    #[must_use]
    pub const fn new(breakpoint: u32, slides_to_show: usize, slides_to_scroll: usize) -> Self {
        Self {
            breakpoint,
            settings: SlideCounts::new(slides_to_show, slides_to_scroll),
        }
    }

    #[must_use]
    pub fn matches(self, viewport_width: u32) -> bool {
        viewport_width <= self.breakpoint
    }
}

/// Resolves the effective counts for `viewport_width`.
///
/// Rules are scanned in the order supplied and every match overwrites the
/// working values, so the last matching rule wins. Any ordering is accepted;
/// declaring rules from widest to narrowest gives the usual override order.
#[must_use]
pub fn resolve_slide_counts(
    base: SlideCounts,
    rules: &[ResponsiveRule],
    viewport_width: u32,
) -> SlideCounts {
    rules
        .iter()
        .filter(|rule| rule.matches(viewport_width))
        .fold(base, |_, rule| rule.settings)
        .normalized()
}

/// Resolved layout for one viewport width.
///
/// All derived geometry (track offset, card basis, dot set) is computed from
/// this value and the fixed card count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideLayout {
    counts: SlideCounts,
}

impl SlideLayout {
    #[must_use]
    pub fn new(counts: SlideCounts) -> Self {
        Self {
            counts: counts.normalized(),
        }
    }

    #[must_use]
    pub fn resolve(base: SlideCounts, rules: &[ResponsiveRule], viewport_width: u32) -> Self {
        Self {
            counts: resolve_slide_counts(base, rules, viewport_width),
        }
    }

    #[must_use]
    pub fn slides_to_show(self) -> usize {
        self.counts.slides_to_show
    }

    #[must_use]
    pub fn slides_to_scroll(self) -> usize {
        self.counts.slides_to_scroll
    }

    /// Largest valid start index: `max(0, total - slides_to_show)`.
    #[must_use]
    pub fn max_index(self, total_slides: usize) -> usize {
        total_slides.saturating_sub(self.counts.slides_to_show)
    }

    #[must_use]
    pub fn clamp_index(self, index: usize, total_slides: usize) -> usize {
        index.min(self.max_index(total_slides))
    }

    /// `ceil((total - show + 1) / scroll)`, never below 1.
    #[must_use]
    pub fn dot_count(self, total_slides: usize) -> usize {
        let reachable = (total_slides + 1).saturating_sub(self.counts.slides_to_show);
        reachable.div_ceil(self.counts.slides_to_scroll).max(1)
    }

    #[must_use]
    pub fn active_dot(self, index: usize) -> usize {
        index / self.counts.slides_to_scroll
    }

    /// Scroll offset a dot jumps to.
    #[must_use]
    pub fn dot_target(self, dot: usize) -> usize {
        dot.saturating_mul(self.counts.slides_to_scroll)
    }

    /// Width of one card as a percentage of the viewport.
    #[must_use]
    pub fn card_basis_percent(self) -> f64 {
        100.0 / self.counts.slides_to_show as f64
    }

    /// Horizontal track translation, in percent, for a start index.
    #[must_use]
    pub fn track_offset_percent(self, index: usize) -> f64 {
        let offset = -(index as f64 * self.card_basis_percent());
        if offset == 0.0 { 0.0 } else { offset }
    }
}
