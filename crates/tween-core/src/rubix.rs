#![allow(dead_code)]
//! Strategy seam between the frame processor and the easing machinery.
//!
//! A `Rubix` defines how an action plays: how progress advances with time,
//! how each property value is eased toward its target at a given progress,
//! and when the action has reached its terminal state. The processor treats
//! all three as opaque; concrete strategies (time-based tweens, physics,
//! input tracking) live outside this crate and are injected per call.

use crate::action::{Action, ValueRecord};

pub trait Rubix {
    /// Compute the action's new progress for this frame.
    /// `frame_duration` is the elapsed time in milliseconds since the
    /// action's last committed `framestamp`.
    fn calc_progress(&self, action: &Action, framestamp: f32, frame_duration: f32) -> f32;

    /// Ease one property toward its target at the given progress. The record
    /// carries the curve endpoints; `key` lets strategies treat named
    /// properties differently.
    fn ease_value(&self, key: &str, value: &ValueRecord, progress: f32) -> f32;

    /// Whether the action has reached its terminal state.
    fn has_ended(&self, action: &Action) -> bool;
}
