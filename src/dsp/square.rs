use std::f64::consts::PI;

/*
Square-Wave Levels
==================

Two models of the same waveform live here, both at unit amplitude. The graph
layer multiplies by the configured amplitude (sign included) after the fact.

Digital: the ideal bistable wave. High for the first half cycle, low for the
second, instantaneous transitions, exactly 50% duty cycle. The low state is
0, not -1: this is a logic-level model, not a bipolar audio wave.

Analog: what the same square looks like coming out of a real driver. Real
edges are not instantaneous; the output charges toward the rail along an
RC-style exponential, rings past it, and settles. One cycle breaks into four
phase regions (x is the normalized phase in [0, 1)):

  [0, rise_time)          exponential charge 1 - e^(-5p) plus a decaying
                          sinusoidal overshoot, capped at 1.1 (110%)
  [rise_time, 0.5)        steady high with supply ripple that decays away
                          from the rise edge
  [0.5, 0.5 + fall_time)  exponential discharge e^(-5p) plus a decaying
                          undershoot, floored at -0.05 (-5%)
  [0.5 + fall_time, 1)    settling ripple around zero

`p` is the progress through the rise or fall region, 0 at its start and 1 at
its end. Every constant below (exponent rates, ripple magnitudes and
frequencies, the overshoot cap and undershoot floor) is part of the observable
output contract.
*/

/// Smallest usable rise or fall time, as a fraction of one period.
pub const MIN_EDGE_TIME: f64 = 0.001;
/// Largest usable rise or fall time, as a fraction of one period.
pub const MAX_EDGE_TIME: f64 = 0.4;

/// Ideal square level at phase `phi` in `[0, 2π)`: 1 below π, 0 from π on.
#[inline]
pub fn digital_level(phi: f64) -> f64 {
    if phi < PI {
        1.0
    } else {
        0.0
    }
}

/// Transient-modeled square level at normalized phase `x` in `[0, 1)`.
///
/// `rise_time` and `fall_time` are fractions of one period and must already
/// be clamped into `[MIN_EDGE_TIME, MAX_EDGE_TIME]` by the caller.
pub fn analog_level(x: f64, rise_time: f64, fall_time: f64) -> f64 {
    let rise_end = rise_time;
    let fall_start = 0.5;
    let fall_end = fall_start + fall_time;

    if x < rise_end {
        let p = x / rise_end;
        let base = 1.0 - (-5.0 * p).exp();
        let overshoot = 0.05 * (PI * p).sin() * (-3.0 * p).exp();
        (base + overshoot).min(1.1)
    } else if x < fall_start {
        let ripple = 0.01 * (50.0 * PI * x).sin() * (-10.0 * (x - rise_end)).exp();
        1.0 + ripple
    } else if x < fall_end {
        let p = (x - fall_start) / fall_time;
        let base = (-5.0 * p).exp();
        let undershoot = -0.03 * (PI * p).sin() * (-3.0 * p).exp();
        (base + undershoot).max(-0.05)
    } else {
        0.005 * (-20.0 * (x - fall_end)).exp() * (30.0 * PI * x).sin()
    }
}

/// Clamp a rise or fall time into the supported fraction-of-period range.
#[inline]
pub fn clamp_edge_time(t: f64) -> f64 {
    t.clamp(MIN_EDGE_TIME, MAX_EDGE_TIME)
}
