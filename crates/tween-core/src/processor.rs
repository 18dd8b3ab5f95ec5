#![allow(dead_code)]
//! Per-frame action processing.
//!
//! `process_frame` runs the fixed pipeline for one action and one tick:
//! 1. fire `on_start` once per action,
//! 2. sample the bound input (if any),
//! 3. delegate progress computation to the strategy,
//! 4. ease/round every property, derive velocity, detect change,
//! 5. derive polar output, fire frame/change/end callbacks, signal advance.
//!
//! All callbacks run synchronously; the committed `framestamp` reflects the
//! most recent frame whose callbacks all completed.

use crate::action::Action;
use crate::geometry::{point_from_angle_distance, Point};
use crate::inputs::sample_input;
use crate::outputs::{FrameOutput, KEY_ANGLE, KEY_DISTANCE, KEY_INPUT, KEY_X, KEY_Y};
use crate::rubix::Rubix;

/// Process one action for the frame at `framestamp`.
///
/// `frame_duration` is the elapsed time in milliseconds since the action was
/// last processed (>= 0; a zero duration yields zero velocities, never
/// NaN/Infinity).
pub fn process_frame(
    action: &mut Action,
    rubix: &dyn Rubix,
    framestamp: f32,
    frame_duration: f32,
) {
    let mut output = FrameOutput::new();
    let data = action.data().clone();
    let mut has_changed = false;

    // Fire on_start once, before any value computation for this frame.
    if action.first_frame {
        log::trace!("action first frame at {framestamp}ms");
        if let Some(on_start) = action.props.on_start.as_mut() {
            on_start(&data);
        }
        action.first_frame = false;
    }

    // Update the bound input, if any.
    if let Some(sample) = sample_input(action.props.input.as_deref_mut(), framestamp) {
        output.set(KEY_INPUT, sample);
    }

    // Progress is entirely the strategy's concern.
    action.progress = rubix.calc_progress(action, framestamp, frame_duration);
    let progress = action.progress;

    // Ease every property, commit the reported value back into its record.
    for (key, value) in action.values.iter_mut() {
        let mut eased = rubix.ease_value(key, value, progress);
        if value.round {
            eased = eased.round();
        }

        value.velocity = units_per_second(eased - value.current, frame_duration);

        if value.current != eased {
            has_changed = true;
            value.current = eased;
        }

        output.set(key.clone(), eased);
    }

    apply_angle_distance(action.origin, &mut output);

    if let Some(on_frame) = action.props.on_frame.as_mut() {
        on_frame(&output, &data);
    }

    if has_changed {
        if let Some(on_change) = action.props.on_change.as_mut() {
            on_change(&output, &data);
        }
    }

    if rubix.has_ended(action) {
        log::trace!("action ended at progress {}", action.progress);
        if let Some(on_end) = action.props.on_end.as_mut() {
            on_end(&output, &data);
        }
        action.next();
    }

    action.framestamp = framestamp;
}

/// Time-normalized rate of change: `delta` over `frame_duration_ms`, reported
/// in units per second. Zero duration resolves to zero, never NaN/Infinity.
#[inline]
pub fn units_per_second(delta: f32, frame_duration_ms: f32) -> f32 {
    if frame_duration_ms == 0.0 {
        0.0
    } else {
        delta * (1000.0 / frame_duration_ms)
    }
}

/// Derive cartesian `x`/`y` from `angle`/`distance` output, overwriting any
/// existing entries. Zero counts as absent for both keys (a truthiness test,
/// not a presence test), so an angle or distance of exactly 0.0 skips
/// derivation.
pub fn apply_angle_distance(origin: Point, output: &mut FrameOutput) {
    let angle = output.get(KEY_ANGLE).unwrap_or(0.0);
    let distance = output.get(KEY_DISTANCE).unwrap_or(0.0);

    if angle != 0.0 && distance != 0.0 {
        let point = point_from_angle_distance(origin, angle, distance);
        output.set(KEY_X, point.x);
        output.set(KEY_Y, point.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_velocity_is_finite() {
        let v = units_per_second(5.0, 0.0);
        assert_eq!(v, 0.0);
        assert!(v.is_finite());
    }

    #[test]
    fn velocity_scales_to_per_second() {
        // 2 units over 16ms -> 125 units/s
        assert_eq!(units_per_second(2.0, 16.0), 125.0);
    }

    #[test]
    fn zero_angle_skips_derivation() {
        let mut out = FrameOutput::new();
        out.set(KEY_ANGLE, 0.0);
        out.set(KEY_DISTANCE, 10.0);
        apply_angle_distance(Point::default(), &mut out);
        assert!(!out.contains(KEY_X));
        assert!(!out.contains(KEY_Y));
    }
}
