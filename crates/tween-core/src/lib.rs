#![allow(dead_code)]
//! Tween Core (engine-agnostic)
//!
//! Per-frame evaluation core of a tweening library: `process_frame` advances
//! one action's progress, eases each animated property, detects change, fires
//! lifecycle callbacks, and signals the action's end-of-life transition.
//! Easing strategies (`Rubix`) and input sources are opaque collaborators
//! injected by the caller; scheduling, queuing, and rendering live outside
//! this crate.

pub mod action;
pub mod geometry;
pub mod inputs;
pub mod outputs;
pub mod processor;
pub mod rubix;

// Re-exports for consumers (adapters)
pub use action::{
    Action, ActionProps, AdvanceFn, FrameCallback, Payload, StartCallback, ValueRecord,
};
pub use geometry::{point_from_angle_distance, Point};
pub use inputs::{sample_input, InputSource};
pub use outputs::{FrameOutput, KEY_ANGLE, KEY_DISTANCE, KEY_INPUT, KEY_X, KEY_Y};
pub use processor::{apply_angle_distance, process_frame, units_per_second};
pub use rubix::Rubix;
