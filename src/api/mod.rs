mod autoplay_controller;
mod clock_controller;
mod config_validation;
mod engine;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod engine_teardown;
mod input_router;
mod json_contract;
mod observer_registry;
mod resize_controller;
mod slider_config;
mod transition_controller;

pub use engine::SliderEngine;
pub use engine_snapshot::SliderSnapshot;
pub use json_contract::{SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderSnapshotJsonContractV1};
pub use slider_config::{ResponsiveRules, SliderConfig, SliderSelectors};
