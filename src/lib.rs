//! carousel-rs: headless testimonial slider engine.
//!
//! The engine owns slide-window state, responsive breakpoints, gesture
//! resolution and autoplay, and drives a host-supplied renderer with complete
//! frames. Time is virtual: hosts advance it explicitly, which keeps every
//! transition deterministic and testable.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SliderConfig, SliderEngine, SliderSnapshot};
pub use error::{SliderError, SliderResult};
