//! Shaping curves for the emphasis and breathing animations.
//!
//! These are small fixed polynomials and trig waves rather than configurable
//! splines: every animation in the engine samples one of them with a clamped
//! progress value, so keeping them total functions on `[0, 1]` keeps every
//! caller panic-free.

use std::f64::consts::{PI, TAU};

/// Settle curve for the emphasis lift: `0` at `x = 0`, `1` at `x = 1`, with a
/// negative dip in between.
///
/// The lift animation samples this backward over a pulse, so a character
/// starts at its full lift, falls through rest, overshoots below it, and
/// sits at exactly rest when the pulse ends.
#[must_use]
pub fn dip_rise(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    2.5 * x * x * x - 0.9 * x * x - 0.6 * x
}

/// Half-sine pulse: `0` at both ends of `[0, 1]`, `1` at the midpoint.
#[must_use]
pub fn swell(x: f64) -> f64 {
    (PI * x.clamp(0.0, 1.0)).sin()
}

/// Squared half-sine pulse, softer at the shoulders than [`swell`].
#[must_use]
pub fn bell(x: f64) -> f64 {
    let s = swell(x);
    s * s
}

/// One full cosine breath per `window_ms`: starts at `1`, dips to `0` at the
/// half cycle, returns to `1`.
///
/// A zero window holds steady at `1` rather than dividing by zero.
#[must_use]
pub fn breath_cycle(elapsed_ms: u64, window_ms: u64) -> f64 {
    if window_ms == 0 {
        return 1.0;
    }
    let phase = TAU * (elapsed_ms % window_ms) as f64 / window_ms as f64;
    0.5 + 0.5 * phase.cos()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
