use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{ResponsiveRule, SlideCounts};
use crate::error::{SliderError, SliderResult};

use super::config_validation::{normalize_slider_config, validate_slider_config};

/// Ordered breakpoint table. Most pages declare two or three rules.
pub type ResponsiveRules = SmallVec<[ResponsiveRule; 4]>;

/// Selectors the engine resolves once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderSelectors {
    #[serde(default = "default_container_selector")]
    pub container: String,
    #[serde(default = "default_track_selector")]
    pub track: String,
    #[serde(default = "default_card_selector")]
    pub card: String,
    #[serde(default = "default_prev_button_selector")]
    pub prev_button: String,
    #[serde(default = "default_next_button_selector")]
    pub next_button: String,
    #[serde(default = "default_dots_container_selector")]
    pub dots_container: String,
}

impl Default for SliderSelectors {
    fn default() -> Self {
        Self {
            container: default_container_selector(),
            track: default_track_selector(),
            card: default_card_selector(),
            prev_button: default_prev_button_selector(),
            next_button: default_next_button_selector(),
            dots_container: default_dots_container_selector(),
        }
    }
}

/// Construction-time slider configuration.
///
/// This type is serializable so pages can ship slider setup as JSON next to
/// their markup. Every field is optional in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default)]
    pub selectors: SliderSelectors,
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    #[serde(default = "default_slides_to_show")]
    pub slides_to_show: usize,
    #[serde(default = "default_slides_to_scroll")]
    pub slides_to_scroll: usize,
    #[serde(default = "default_responsive_rules")]
    pub responsive: ResponsiveRules,
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
    #[serde(default = "default_card_gutter_rem")]
    pub card_gutter_rem: f64,
    #[serde(default = "default_dot_label")]
    pub dot_label: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            selectors: SliderSelectors::default(),
            autoplay: default_autoplay(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            slides_to_show: default_slides_to_show(),
            slides_to_scroll: default_slides_to_scroll(),
            responsive: default_responsive_rules(),
            settle_delay_ms: default_settle_delay_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            card_gutter_rem: default_card_gutter_rem(),
            dot_label: default_dot_label(),
        }
    }
}

impl SliderConfig {
    #[must_use]
    pub fn with_selectors(mut self, selectors: SliderSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    /// Sets the base counts used when no responsive rule matches.
    #[must_use]
    pub fn with_slides(mut self, slides_to_show: usize, slides_to_scroll: usize) -> Self {
        self.slides_to_show = slides_to_show;
        self.slides_to_scroll = slides_to_scroll;
        self
    }

    #[must_use]
    pub fn with_responsive_rules(
        mut self,
        rules: impl IntoIterator<Item = ResponsiveRule>,
    ) -> Self {
        self.responsive = rules.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_resize_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.resize_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_swipe_threshold_px(mut self, threshold_px: f64) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    #[must_use]
    pub fn with_card_gutter_rem(mut self, gutter_rem: f64) -> Self {
        self.card_gutter_rem = gutter_rem;
        self
    }

    #[must_use]
    pub fn with_dot_label(mut self, label: impl Into<String>) -> Self {
        self.dot_label = label.into();
        self
    }

    #[must_use]
    pub fn base_counts(&self) -> SlideCounts {
        SlideCounts::new(self.slides_to_show, self.slides_to_scroll)
    }

    /// Strict check for hosts that want to reject bad setup up front.
    ///
    /// The engine itself never fails on these values; it normalizes them.
    pub fn validate(&self) -> SliderResult<()> {
        validate_slider_config(self)
    }

    /// Returns a copy with out-of-range values replaced by usable ones.
    #[must_use]
    pub fn normalized(self) -> Self {
        normalize_slider_config(self)
    }

    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidConfig(format!("failed to parse slider config: {e}")))
    }

    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SliderError::InvalidConfig(format!("failed to serialize slider config: {e}"))
        })
    }
}

fn default_container_selector() -> String {
    "#testimonialsSlider".to_owned()
}

fn default_track_selector() -> String {
    ".testimonials-track".to_owned()
}

fn default_card_selector() -> String {
    ".testimonial-card".to_owned()
}

fn default_prev_button_selector() -> String {
    "#sliderPrev".to_owned()
}

fn default_next_button_selector() -> String {
    "#sliderNext".to_owned()
}

fn default_dots_container_selector() -> String {
    "#sliderDots".to_owned()
}

fn default_autoplay() -> bool {
    true
}

fn default_autoplay_interval_ms() -> u64 {
    5_000
}

fn default_slides_to_show() -> usize {
    3
}

fn default_slides_to_scroll() -> usize {
    1
}

fn default_responsive_rules() -> ResponsiveRules {
    smallvec![ResponsiveRule::new(991, 2, 1), ResponsiveRule::new(767, 1, 1)]
}

fn default_settle_delay_ms() -> u64 {
    500
}

fn default_resize_debounce_ms() -> u64 {
    250
}

pub(super) fn default_swipe_threshold_px() -> f64 {
    50.0
}

pub(super) fn default_card_gutter_rem() -> f64 {
    1.5
}

fn default_dot_label() -> String {
    "Go to testimonial".to_owned()
}
