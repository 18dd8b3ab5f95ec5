#![allow(dead_code)]
//! Small 2D geometry helpers for derived action output.

use serde::{Deserialize, Serialize};

/// 2D point used as an action's origin and as derived cartesian output.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Compute the point at `angle` (radians) and `distance` from `origin`.
#[inline]
pub fn point_from_angle_distance(origin: Point, angle: f32, distance: f32) -> Point {
    Point {
        x: origin.x + distance * angle.cos(),
        y: origin.y + distance * angle.sin(),
    }
}
