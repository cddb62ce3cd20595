use std::time::Duration;

use approx::assert_relative_eq;
use carousel_rs::api::{SliderConfig, SliderEngine};
use carousel_rs::core::{ResponsiveRule, StaticDocument};
use carousel_rs::interaction::SliderInput;
use carousel_rs::render::NullRenderer;

fn page(cards: usize) -> StaticDocument {
    StaticDocument::new()
        .with_element("#testimonialsSlider")
        .with_element(".testimonials-track")
        .with_elements(".testimonial-card", cards)
        .with_element("#sliderPrev")
        .with_element("#sliderNext")
        .with_element("#sliderDots")
}

fn build_engine(config: SliderConfig, cards: usize, width: u32) -> SliderEngine<NullRenderer> {
    SliderEngine::new(
        NullRenderer::default(),
        &page(cards),
        config.with_autoplay(false),
        width,
    )
}

#[test]
fn default_breakpoints_pick_counts_by_width() {
    for (width, expected_show) in [(1280, 3), (992, 3), (991, 2), (768, 2), (767, 1), (320, 1)] {
        let engine = build_engine(SliderConfig::default(), 6, width);
        assert_eq!(engine.slides_to_show(), expected_show, "width {width}");
        assert_eq!(engine.slides_to_scroll(), 1, "width {width}");
    }
}

#[test]
fn last_matching_rule_wins_regardless_of_order() {
    let config = SliderConfig::default().with_responsive_rules([
        ResponsiveRule::new(767, 1, 1),
        ResponsiveRule::new(991, 2, 2),
    ]);
    let engine = build_engine(config, 6, 500);
    assert_eq!(engine.slides_to_show(), 2);
    assert_eq!(engine.slides_to_scroll(), 2);
}

#[test]
fn empty_rule_table_uses_base_counts() {
    let config = SliderConfig::default()
        .with_slides(4, 2)
        .with_responsive_rules([]);
    let engine = build_engine(config, 10, 320);
    assert_eq!(engine.slides_to_show(), 4);
    assert_eq!(engine.slides_to_scroll(), 2);
    assert_eq!(engine.max_index(), 6);
    assert_eq!(engine.dot_count(), 4);
}

#[test]
fn dot_count_examples() {
    let cases = [
        // (cards, show, scroll, dots)
        (6, 3, 1, 4),
        (6, 1, 1, 6),
        (7, 2, 2, 3),
        (9, 3, 2, 4),
        (3, 3, 1, 1),
        (2, 3, 1, 1),
    ];
    for (cards, show, scroll, dots) in cases {
        let config = SliderConfig::default()
            .with_slides(show, scroll)
            .with_responsive_rules([]);
        let engine = build_engine(config, cards, 1280);
        assert_eq!(engine.dot_count(), dots, "{cards} cards, show {show}, scroll {scroll}");
        let frame = engine.current_frame().expect("frame");
        assert_eq!(frame.dots.len(), dots);
    }
}

#[test]
fn relayout_reclamps_index_without_transition() {
    let config = SliderConfig::default()
        .with_slides(6, 1)
        .with_responsive_rules([ResponsiveRule::new(1400, 3, 1), ResponsiveRule::new(767, 1, 1)]);
    let mut engine = build_engine(config, 6, 1200);
    assert_eq!(engine.slides_to_show(), 3);

    engine.go_to_slide(3);
    engine.advance_time(Duration::from_millis(500));
    assert_eq!(engine.current_index(), 3);

    assert!(engine.relayout(500));
    assert_eq!(engine.slides_to_show(), 1);
    assert_eq!(engine.current_index(), 3);
    assert_eq!(engine.max_index(), 5);
    assert!(!engine.is_transitioning());

    assert!(engine.relayout(1600));
    assert_eq!(engine.slides_to_show(), 6);
    assert_eq!(engine.max_index(), 0);
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.dot_count(), 1);
    assert!(!engine.is_transitioning());

    let frame = engine.renderer().last_frame.clone().expect("relayout repaints");
    assert_relative_eq!(frame.card.basis_percent, 100.0 / 6.0, epsilon = 1e-9);
    assert_relative_eq!(frame.track.offset_percent, 0.0);
    assert_eq!(frame.dots.len(), 1);
}

#[test]
fn relayout_to_same_counts_reports_unchanged_but_repaints() {
    let mut engine = build_engine(SliderConfig::default(), 6, 1280);
    let before = engine.renderer().render_count;

    assert!(!engine.relayout(1100));
    assert_eq!(engine.viewport_width(), 1100);
    assert_eq!(engine.renderer().render_count, before + 1);
}

#[test]
fn relayout_during_transition_keeps_guard() {
    let mut engine = build_engine(SliderConfig::default(), 6, 1280);
    engine.go_to_slide(3);
    assert!(engine.is_transitioning());

    engine.relayout(500);
    assert!(engine.is_transitioning());
    assert_eq!(engine.current_index(), 3);

    engine.advance_time(Duration::from_millis(500));
    assert!(!engine.is_transitioning());
}

#[test]
fn resize_burst_is_debounced_to_last_width() {
    let mut engine = build_engine(SliderConfig::default(), 6, 1280);

    engine.handle_input(SliderInput::ViewportResized { width: 800 });
    engine.advance_time(Duration::from_millis(100));
    engine.handle_input(SliderInput::ViewportResized { width: 500 });

    engine.advance_time(Duration::from_millis(249));
    assert_eq!(engine.slides_to_show(), 3);
    assert_eq!(engine.viewport_width(), 1280);

    assert_eq!(engine.advance_time(Duration::from_millis(1)), 1);
    assert_eq!(engine.slides_to_show(), 1);
    assert_eq!(engine.viewport_width(), 500);

    assert_eq!(engine.advance_time(Duration::from_secs(1)), 0);
}

#[test]
fn custom_debounce_window_is_honoured() {
    let config = SliderConfig::default().with_resize_debounce_ms(40);
    let mut engine = build_engine(config, 6, 1280);

    engine.handle_input(SliderInput::ViewportResized { width: 700 });
    assert_eq!(engine.time_until_next_timer(), Some(Duration::from_millis(40)));
    engine.advance_time(Duration::from_millis(40));
    assert_eq!(engine.slides_to_show(), 1);
}
