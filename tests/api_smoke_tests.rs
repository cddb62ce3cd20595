use std::time::Duration;

use carousel_rs::api::{SliderConfig, SliderEngine};
use carousel_rs::core::StaticDocument;
use carousel_rs::interaction::{InputOutcome, SliderInput, SliderKey};
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

#[test]
fn engine_smoke_flow() {
    let mut engine = SliderEngine::new(
        NullRenderer::default(),
        &page(6),
        SliderConfig::default(),
        1280,
    );

    assert!(!engine.is_inert());
    assert_eq!(engine.total_slides(), 6);
    assert_eq!(engine.slides_to_show(), 3);
    assert_eq!(engine.slides_to_scroll(), 1);
    assert_eq!(engine.max_index(), 3);
    assert_eq!(engine.dot_count(), 4);
    assert!(engine.is_autoplay_armed());
    assert_eq!(engine.renderer().render_count, 1);

    assert!(engine.next_slide());
    assert_eq!(engine.current_index(), 1);
    assert!(engine.is_transitioning());
    engine.advance_time(Duration::from_millis(500));
    assert!(!engine.is_transitioning());

    let outcome = engine.handle_input(SliderInput::KeyDown {
        key: SliderKey::ArrowRight,
    });
    assert_eq!(outcome, InputOutcome::handled_prevent_default());
    assert_eq!(engine.current_index(), 2);
    engine.advance_time(Duration::from_millis(500));

    engine.handle_input(SliderInput::DotActivated { dot: 0 });
    assert_eq!(engine.current_index(), 0);
    engine.advance_time(Duration::from_millis(500));

    engine.handle_input(SliderInput::PrevClicked);
    assert_eq!(engine.current_index(), 3);

    let frame = engine.current_frame().expect("active engine has a frame");
    assert_eq!(frame.dots.len(), 4);
    assert_eq!(frame.active_dot(), Some(3));
    assert_eq!(engine.renderer().last_frame.as_ref(), Some(&frame));

    assert!(engine.destroy());
    assert!(engine.is_inert());
    assert!(engine.renderer().is_released());
}
