#![allow(dead_code)]
//! Bound input contract.
//!
//! Actions may track an external input device (pointer, scroll, custom
//! source) instead of a clock. The processor asks the bound source for one
//! sample per frame and exposes it to callbacks under the reserved `input`
//! output key. Sampling itself is entirely the source's concern.

/// External input sampled once per frame.
pub trait InputSource {
    /// Update the source for this frame and return its sampled value.
    fn on_frame(&mut self, framestamp: f32) -> f32;
}

/// Presence-guarded sampling: delegate to the source when one is bound,
/// otherwise no-op. Exists only to centralize the guard.
#[inline]
pub fn sample_input(input: Option<&mut (dyn InputSource + 'static)>, framestamp: f32) -> Option<f32> {
    input.map(|source| source.on_frame(framestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;
    impl InputSource for Echo {
        fn on_frame(&mut self, framestamp: f32) -> f32 {
            framestamp * 2.0
        }
    }

    #[test]
    fn samples_when_bound() {
        let mut src = Echo;
        assert_eq!(sample_input(Some(&mut src), 8.0), Some(16.0));
    }

    #[test]
    fn noop_when_absent() {
        assert_eq!(sample_input(None, 8.0), None);
    }
}
