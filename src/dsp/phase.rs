//! Phase normalization with true-modulo semantics.
//!
//! A remainder operator (`%`) leaves the sign of the dividend intact, so a
//! negative `rate * time` would produce a phase outside the nominal range.
//! Every periodic source in this crate normalizes through `rem_euclid`
//! instead, which keeps negative-time evaluation on the same cycle shape as
//! positive-time evaluation.

use std::f64::consts::TAU;

/// Normalized phase in turns: `(rate * time) mod 1`, always in `[0, 1)`.
#[inline]
pub fn phase_turns(rate: f64, time: f64) -> f64 {
    let p = (rate * time).rem_euclid(1.0);
    // rem_euclid of a tiny negative value can round up to exactly 1.0
    if p >= 1.0 {
        0.0
    } else {
        p
    }
}

/// Normalized phase in radians: `(2π * rate * time) mod 2π`, always in
/// `[0, 2π)`.
#[inline]
pub fn phase_radians(rate: f64, time: f64) -> f64 {
    let p = (TAU * rate * time).rem_euclid(TAU);
    if p >= TAU {
        0.0
    } else {
        p
    }
}
