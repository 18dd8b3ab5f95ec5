#![allow(dead_code)]
//! Action data model.
//!
//! An `Action` is one in-flight animation: a map of animated properties, an
//! origin point for polar output, lifecycle callbacks, and bookkeeping fields
//! the processor mutates every frame (`progress`, `first_frame`,
//! `framestamp`). Actions are owned by the caller's scheduler; the processor
//! only mutates the fields it is handed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::geometry::Point;
use crate::inputs::InputSource;
use crate::outputs::FrameOutput;

/// Opaque side-channel payload handed unchanged to every callback.
pub type Payload = serde_json::Value;

/// Callback fired once when an action processes its first frame.
pub type StartCallback = Box<dyn FnMut(&Payload)>;
/// Callback fired with the frame's output (frame/change/end stages).
pub type FrameCallback = Box<dyn FnMut(&FrameOutput, &Payload)>;
/// Hook invoked when the action reaches its terminal state; the caller's
/// scheduler uses it to advance to the next queued action.
pub type AdvanceFn = Box<dyn FnMut()>;

/// Per-property animation state, owned by the action and updated in place
/// across frames.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValueRecord {
    /// Last reported value (already rounded when `round` is set), so the next
    /// frame's velocity and change detection compare against what callbacks
    /// actually observed.
    pub current: f32,
    /// Rate of change in units per second, recomputed every frame.
    pub velocity: f32,
    /// Round the eased value to the nearest integer before reporting it.
    #[serde(default)]
    pub round: bool,
    /// Curve endpoints consumed by the easing strategy; opaque to the
    /// processor itself.
    pub from: f32,
    pub to: f32,
}

impl Default for ValueRecord {
    fn default() -> Self {
        Self {
            current: 0.0,
            velocity: 0.0,
            round: false,
            from: 0.0,
            to: 0.0,
        }
    }
}

impl ValueRecord {
    /// Record tweening from `from` to `to`, with `current` starting at `from`.
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            current: from,
            velocity: 0.0,
            round: false,
            from,
            to,
        }
    }

    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }
}

/// Configuration bag for an action: lifecycle callbacks and an optionally
/// bound input source.
///
/// Callbacks carry their receiver state through closure capture: each one is
/// pre-bound to whatever scope it needs.
#[derive(Default)]
pub struct ActionProps {
    pub on_start: Option<StartCallback>,
    pub on_frame: Option<FrameCallback>,
    pub on_change: Option<FrameCallback>,
    pub on_end: Option<FrameCallback>,
    pub input: Option<Box<dyn InputSource>>,
}

impl fmt::Debug for ActionProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionProps")
            .field("on_start", &self.on_start.is_some())
            .field("on_frame", &self.on_frame.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("input", &self.input.is_some())
            .finish()
    }
}

/// One in-flight animation instance.
pub struct Action {
    pub props: ActionProps,
    /// Base point for polar->cartesian derivation.
    pub origin: Point,
    /// Animated properties, one record per unique property name.
    pub values: HashMap<String, ValueRecord>,
    /// Normalized progress, written by the strategy every frame.
    pub progress: f32,
    /// True until the first frame is processed, then permanently false.
    pub first_frame: bool,
    /// Timestamp of the last fully processed frame (ms). Committed only after
    /// all callbacks for that frame completed.
    pub framestamp: f32,
    data: Payload,
    advance: Option<AdvanceFn>,
}

impl Default for Action {
    fn default() -> Self {
        Self::new()
    }
}

impl Action {
    pub fn new() -> Self {
        Self {
            props: ActionProps::default(),
            origin: Point::default(),
            values: HashMap::new(),
            progress: 0.0,
            first_frame: true,
            framestamp: 0.0,
            data: Payload::Null,
            advance: None,
        }
    }

    /// Attach the opaque payload handed to every callback.
    pub fn with_data(mut self, data: Payload) -> Self {
        self.data = data;
        self
    }

    /// Install the scheduler hook invoked when this action ends.
    pub fn on_advance(&mut self, f: AdvanceFn) {
        self.advance = Some(f);
    }

    /// Side-channel payload accessor.
    #[inline]
    pub fn data(&self) -> &Payload {
        &self.data
    }

    /// Signal the end-of-life boundary event. Queue management is the
    /// caller's concern; this only fires the installed hook.
    pub fn next(&mut self) {
        if let Some(advance) = self.advance.as_mut() {
            advance();
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("props", &self.props)
            .field("origin", &self.origin)
            .field("values", &self.values)
            .field("progress", &self.progress)
            .field("first_frame", &self.first_frame)
            .field("framestamp", &self.framestamp)
            .field("data", &self.data)
            .field("advance", &self.advance.is_some())
            .finish()
    }
}
