use tracing::warn;

use crate::error::{SliderError, SliderResult};

use super::SliderConfig;
use super::slider_config::{default_card_gutter_rem, default_swipe_threshold_px};

pub(super) fn validate_slider_config(config: &SliderConfig) -> SliderResult<()> {
    for (name, selector) in [
        ("container", &config.selectors.container),
        ("track", &config.selectors.track),
        ("card", &config.selectors.card),
    ] {
        if selector.trim().is_empty() {
            return Err(SliderError::InvalidConfig(format!(
                "`{name}` selector must not be empty"
            )));
        }
    }

    if config.slides_to_show == 0 || config.slides_to_scroll == 0 {
        return Err(SliderError::InvalidConfig(
            "slides_to_show and slides_to_scroll must be >= 1".to_owned(),
        ));
    }

    if let Some(rule) = config.responsive.iter().find(|rule| {
        rule.settings.slides_to_show == 0 || rule.settings.slides_to_scroll == 0
    }) {
        return Err(SliderError::InvalidConfig(format!(
            "responsive rule at breakpoint {} must use counts >= 1",
            rule.breakpoint
        )));
    }

    if config.autoplay_interval_ms == 0 {
        return Err(SliderError::InvalidConfig(
            "autoplay_interval_ms must be > 0".to_owned(),
        ));
    }

    if !config.swipe_threshold_px.is_finite() || config.swipe_threshold_px < 0.0 {
        return Err(SliderError::InvalidConfig(
            "swipe_threshold_px must be finite and >= 0".to_owned(),
        ));
    }

    if !config.card_gutter_rem.is_finite() || config.card_gutter_rem < 0.0 {
        return Err(SliderError::InvalidConfig(
            "card_gutter_rem must be finite and >= 0".to_owned(),
        ));
    }

    Ok(())
}

/// Repairs values the engine cannot run with.
///
/// Unsorted or overlapping responsive rules are left alone: the last-match
/// scan gives them a deterministic meaning. Zero settle and debounce delays
/// are valid and fire on the next clock advance.
pub(super) fn normalize_slider_config(mut config: SliderConfig) -> SliderConfig {
    let counts = config.base_counts().normalized();
    config.slides_to_show = counts.slides_to_show;
    config.slides_to_scroll = counts.slides_to_scroll;

    for rule in &mut config.responsive {
        rule.settings = rule.settings.normalized();
    }

    if config.autoplay_interval_ms == 0 {
        warn!("autoplay_interval_ms must be > 0, using 1ms");
        config.autoplay_interval_ms = 1;
    }

    if !config.swipe_threshold_px.is_finite() || config.swipe_threshold_px < 0.0 {
        warn!(
            swipe_threshold_px = config.swipe_threshold_px,
            "invalid swipe threshold, using default"
        );
        config.swipe_threshold_px = default_swipe_threshold_px();
    }

    if !config.card_gutter_rem.is_finite() || config.card_gutter_rem < 0.0 {
        warn!(
            card_gutter_rem = config.card_gutter_rem,
            "invalid card gutter, using default"
        );
        config.card_gutter_rem = default_card_gutter_rem();
    }

    config
}
