pub mod document;
pub mod layout;
pub mod timers;

pub use document::{ElementLookup, SliderMarkup, StaticDocument};
pub use layout::{ResponsiveRule, SlideCounts, SlideLayout, resolve_slide_counts};
pub use timers::{TimerHandle, TimerKind, TimerQueue};
