#![allow(dead_code)]
//! Per-frame output contract.
//!
//! A `FrameOutput` maps property name -> eased value for one frame. It is
//! rebuilt on every call to `process_frame` and handed to the frame/change/end
//! callbacks; it is never persisted by the core. Besides the animated
//! properties it may carry a bound input sample and derived cartesian
//! coordinates under the reserved keys below.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved key for the bound input sample.
pub const KEY_INPUT: &str = "input";
/// Reserved keys consumed by the polar->cartesian derivation.
pub const KEY_ANGLE: &str = "angle";
pub const KEY_DISTANCE: &str = "distance";
/// Reserved keys written by the polar->cartesian derivation.
pub const KEY_X: &str = "x";
pub const KEY_Y: &str = "y";

/// Ephemeral property map produced by one frame of processing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FrameOutput {
    #[serde(flatten)]
    values: HashMap<String, f32>,
}

impl FrameOutput {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(&mut self, key: impl Into<String>, value: f32) {
        self.values.insert(key.into(), value);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
