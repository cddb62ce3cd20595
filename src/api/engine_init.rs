use indexmap::IndexMap;
use tracing::info;

use crate::core::{ElementLookup, SlideLayout, SliderMarkup};
use crate::render::SliderRenderer;

use super::{SliderConfig, SliderEngine, engine_core::SliderCore};

impl<R: SliderRenderer> SliderEngine<R> {
    /// Resolves the slider markup and brings the engine up.
    ///
    /// Never fails: missing container, track or cards produce an inert engine,
    /// and invalid config values are normalized. On success the first frame is
    /// painted and autoplay is armed when configured.
    pub fn new<D>(renderer: R, document: &D, config: SliderConfig, viewport_width: u32) -> Self
    where
        D: ElementLookup + ?Sized,
    {
        let config = config.normalized();
        let markup = resolve_markup(document, &config);

        let mut engine = Self {
            renderer,
            config,
            core: None,
            observers: IndexMap::new(),
        };

        if !markup.is_usable() {
            info!(
                has_container = markup.has_container,
                has_track = markup.has_track,
                card_count = markup.card_count,
                "slider markup incomplete, engine stays inert"
            );
            return engine;
        }

        let layout = SlideLayout::resolve(
            engine.config.base_counts(),
            &engine.config.responsive,
            viewport_width,
        );
        engine.core = Some(SliderCore::new(markup, layout, viewport_width));
        engine.render();

        if engine.config.autoplay {
            engine.start_autoplay();
        }

        info!(
            total_slides = markup.card_count,
            slides_to_show = layout.slides_to_show(),
            slides_to_scroll = layout.slides_to_scroll(),
            viewport_width,
            autoplay = engine.config.autoplay,
            "slider initialized"
        );
        engine
    }
}

fn resolve_markup<D>(document: &D, config: &SliderConfig) -> SliderMarkup
where
    D: ElementLookup + ?Sized,
{
    let selectors = &config.selectors;
    SliderMarkup {
        has_container: document.exists(&selectors.container),
        has_track: document.exists(&selectors.track),
        card_count: document.count_matching(&selectors.card),
        has_prev_button: document.exists(&selectors.prev_button),
        has_next_button: document.exists(&selectors.next_button),
        has_dots_container: document.exists(&selectors.dots_container),
    }
}
