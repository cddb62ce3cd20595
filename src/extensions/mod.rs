//! Optional host-facing hooks live here.
//!
//! Keep extensions decoupled from the transition and input paths.

pub mod observers;

pub use observers::{ObserverContext, SliderEvent, SliderObserver};
