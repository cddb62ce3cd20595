use carousel_rs::api::{SliderConfig, SliderEngine};
use carousel_rs::core::{ResponsiveRule, StaticDocument};
use carousel_rs::render::NullRenderer;
use carousel_rs::SliderError;

#[test]
fn partial_json_fills_in_defaults() {
    let config = SliderConfig::from_json_str(r#"{"autoplay": false, "slides_to_show": 4}"#)
        .expect("config parses");

    assert!(!config.autoplay);
    assert_eq!(config.slides_to_show, 4);
    assert_eq!(config.slides_to_scroll, 1);
    assert_eq!(config.autoplay_interval_ms, 5_000);
    assert_eq!(config.settle_delay_ms, 500);
    assert_eq!(config.resize_debounce_ms, 250);
    assert_eq!(config.selectors.card, ".testimonial-card");
    assert_eq!(
        config.responsive.as_slice(),
        &[ResponsiveRule::new(991, 2, 1), ResponsiveRule::new(767, 1, 1)]
    );
}

#[test]
fn responsive_table_can_be_overridden_from_json() {
    let raw = r#"{
        "responsive": [
            { "breakpoint": 1200, "settings": { "slides_to_show": 2, "slides_to_scroll": 2 } }
        ]
    }"#;
    let config = SliderConfig::from_json_str(raw).expect("config parses");
    assert_eq!(config.responsive.len(), 1);
    assert_eq!(config.responsive[0], ResponsiveRule::new(1200, 2, 2));
}

#[test]
fn config_json_roundtrip_preserves_values() {
    let config = SliderConfig::default()
        .with_slides(4, 2)
        .with_autoplay_interval_ms(3_000)
        .with_dot_label("Show review");
    let json = config.to_json_pretty().expect("config serializes");
    let restored = SliderConfig::from_json_str(&json).expect("config parses");
    assert_eq!(restored, config);
}

#[test]
fn malformed_json_is_an_invalid_config_error() {
    let err = SliderConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, SliderError::InvalidConfig(_)));
}

#[test]
fn validation_rejects_what_normalization_repairs() {
    let config = SliderConfig::default()
        .with_slides(0, 0)
        .with_autoplay_interval_ms(0)
        .with_swipe_threshold_px(f64::NAN);
    assert!(config.validate().is_err());

    let repaired = config.normalized();
    repaired.validate().expect("normalized config is valid");
    assert_eq!(repaired.slides_to_show, 1);
    assert_eq!(repaired.slides_to_scroll, 1);
    assert_eq!(repaired.swipe_threshold_px, 50.0);
}

#[test]
fn engine_normalizes_zero_counts_instead_of_failing() {
    let document = StaticDocument::new()
        .with_element("#testimonialsSlider")
        .with_element(".testimonials-track")
        .with_elements(".testimonial-card", 5);
    let config = SliderConfig::default()
        .with_autoplay(false)
        .with_slides(0, 0)
        .with_responsive_rules([]);
    let engine = SliderEngine::new(NullRenderer::default(), &document, config, 1280);

    assert_eq!(engine.slides_to_show(), 1);
    assert_eq!(engine.slides_to_scroll(), 1);
    assert_eq!(engine.max_index(), 4);
    assert_eq!(engine.config().slides_to_show, 1);
}
