use std::time::Duration;

use approx::assert_relative_eq;
use carousel_rs::api::{SliderConfig, SliderEngine};
use carousel_rs::core::StaticDocument;
use carousel_rs::interaction::Direction;
use carousel_rs::render::NullRenderer;

const SETTLE: Duration = Duration::from_millis(500);

fn page(cards: usize) -> StaticDocument {
    StaticDocument::new()
        .with_element("#testimonialsSlider")
        .with_element(".testimonials-track")
        .with_elements(".testimonial-card", cards)
        .with_element("#sliderPrev")
        .with_element("#sliderNext")
        .with_element("#sliderDots")
}

fn build_engine(cards: usize, show: usize, scroll: usize) -> SliderEngine<NullRenderer> {
    let config = SliderConfig::default()
        .with_autoplay(false)
        .with_slides(show, scroll);
    SliderEngine::new(NullRenderer::default(), &page(cards), config, 1280)
}

#[test]
fn forward_from_max_index_wraps_to_start() {
    let mut engine = build_engine(6, 3, 1);
    assert!(engine.go_to_slide(3));
    engine.advance_time(SETTLE);
    assert_eq!(engine.current_index(), 3);

    assert!(engine.advance(Direction::Forward));
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn backward_from_start_wraps_to_max_index() {
    let mut engine = build_engine(6, 3, 1);
    assert!(engine.advance(Direction::Backward));
    assert_eq!(engine.current_index(), 3);
}

#[test]
fn stride_is_clamped_before_wrapping() {
    let mut engine = build_engine(7, 2, 2);
    assert_eq!(engine.max_index(), 5);

    let mut visited = vec![engine.current_index()];
    for _ in 0..4 {
        engine.next_slide();
        engine.advance_time(SETTLE);
        visited.push(engine.current_index());
    }
    assert_eq!(visited, vec![0, 2, 4, 5, 0]);

    engine.go_to_slide(1);
    engine.advance_time(SETTLE);
    engine.prev_slide();
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn second_transition_while_settling_is_rejected() {
    let mut engine = build_engine(6, 3, 1);
    assert!(engine.transition_to(2));
    assert!(engine.is_transitioning());

    assert!(!engine.transition_to(1));
    assert!(!engine.next_slide());
    assert_eq!(engine.current_index(), 2);

    engine.advance_time(Duration::from_millis(499));
    assert!(engine.is_transitioning());
    assert!(!engine.prev_slide());

    engine.advance_time(Duration::from_millis(1));
    assert!(!engine.is_transitioning());
    assert!(engine.transition_to(1));
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn out_of_range_targets_are_clamped() {
    let mut engine = build_engine(6, 3, 1);
    assert!(engine.go_to_slide(42));
    assert_eq!(engine.current_index(), 3);
}

#[test]
fn jump_updates_active_dot_and_track_offset() {
    let mut engine = build_engine(8, 4, 1);
    engine.jump_to(2);

    assert_eq!(engine.active_dot(), 2);
    let frame = engine
        .renderer()
        .last_frame
        .clone()
        .expect("transition paints a frame");
    assert_eq!(frame.active_dot(), Some(2));
    assert_relative_eq!(frame.card.basis_percent, 25.0);
    assert_relative_eq!(frame.track.offset_percent, -50.0);
    assert_eq!(frame.track.css_transform(), "translateX(-50%)");
}

#[test]
fn thirds_layout_offsets_by_whole_cards() {
    let mut engine = build_engine(6, 3, 1);
    engine.jump_to(3);

    let frame = engine.current_frame().expect("frame");
    assert_relative_eq!(frame.card.basis_percent, 100.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(frame.track.offset_percent, -100.0, epsilon = 1e-9);
}

#[test]
fn active_dot_uses_scroll_stride() {
    let mut engine = build_engine(9, 3, 2);
    assert_eq!(engine.dot_count(), 4);

    engine.go_to_slide(5);
    assert_eq!(engine.active_dot(), 2);
    let frame = engine.current_frame().expect("frame");
    let targets: Vec<usize> = frame.dots.iter().map(|dot| dot.target_index).collect();
    assert_eq!(targets, vec![0, 2, 4, 6]);
}

#[test]
fn fewer_cards_than_window_pins_index_to_zero() {
    let mut engine = build_engine(2, 3, 1);
    assert_eq!(engine.max_index(), 0);
    assert_eq!(engine.dot_count(), 1);

    engine.next_slide();
    assert_eq!(engine.current_index(), 0);
    engine.advance_time(SETTLE);
    engine.prev_slide();
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn prev_and_next_buttons_stay_enabled_at_both_ends() {
    let mut engine = build_engine(6, 3, 1);
    for target in [0, 3] {
        engine.go_to_slide(target);
        engine.advance_time(SETTLE);
        let frame = engine.current_frame().expect("frame");
        assert!(frame.prev_button.expect("prev button").enabled);
        assert!(frame.next_button.expect("next button").enabled);
    }
}

#[test]
fn rendering_twice_is_idempotent() {
    let mut engine = build_engine(6, 3, 1);
    engine.go_to_slide(1);
    let first = engine.renderer().last_frame.clone();

    assert!(engine.render());
    assert!(engine.render());
    assert_eq!(engine.renderer().last_frame, first);
    assert_eq!(engine.current_index(), 1);
}
