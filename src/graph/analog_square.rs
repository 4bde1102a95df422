use crate::dsp::phase::phase_turns;
use crate::dsp::square::{analog_level, clamp_edge_time};
use crate::graph::node::ModulationSource;

/*
Analog Square Oscillator
========================

A square wave as a real driver produces it, rather than the ideal bistable
model. Edges take time: the output charges toward the high rail along an
exponential, overshoots and rings, rides the rail with a little supply
ripple, then discharges with a matching undershoot and settles around zero.
The region math lives in `dsp::square::analog_level`; this node owns phase
normalization, amplitude scaling, and parameter clamping.

Rise and fall times are fractions of one period, clamped independently into
[0.001, 0.4] at construction. Out-of-range values are recovered silently —
a 0.6 fall time becomes 0.4, it is never an error. Everything else (rate,
amplitude, time) passes through unvalidated like the other oscillators.

The whole cycle scales by the signed amplitude, so a negative amplitude
inverts every region symmetrically: the "high" rail becomes the
more-negative excursion, overshoot included.

Example usage:
  // 2 Hz square with slow edges, 10% of the period each
  let slew = AnalogSquareOscillator::new(2.0, 1.0, 0.1, 0.1);

  // Layer it over a carrier
  let gated = SineOscillator::new(440.0, 0.3).compose(slew);
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogSquareOscillator {
    rate: f64,
    amplitude: f64,
    rise_time: f64, // fraction of one period, in [0.001, 0.4]
    fall_time: f64, // fraction of one period, in [0.001, 0.4]
}

impl AnalogSquareOscillator {
    pub fn new(rate: f64, amplitude: f64, rise_time: f64, fall_time: f64) -> Self {
        Self {
            rate,
            amplitude,
            rise_time: clamp_edge_time(rise_time),
            fall_time: clamp_edge_time(fall_time),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn rise_time(&self) -> f64 {
        self.rise_time
    }

    pub fn fall_time(&self) -> f64 {
        self.fall_time
    }
}

impl ModulationSource for AnalogSquareOscillator {
    fn evaluate(&self, time: f64) -> f64 {
        // (time mod period) / period, computed without dividing by rate so
        // a zero rate pins the phase to the rise-region start instead of
        // producing a NaN period
        let x = phase_turns(self.rate, time);
        self.amplitude * analog_level(x, self.rise_time, self.fall_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_edge_times_are_clamped() {
        let osc = AnalogSquareOscillator::new(1.0, 1.0, -0.1, 0.6);
        assert_eq!(osc.rise_time(), 0.001);
        assert_eq!(osc.fall_time(), 0.4);
    }

    #[test]
    fn in_range_edge_times_pass_through() {
        let osc = AnalogSquareOscillator::new(1.0, 1.0, 0.05, 0.25);
        assert_eq!(osc.rise_time(), 0.05);
        assert_eq!(osc.fall_time(), 0.25);
    }

    #[test]
    fn cycle_start_is_on_the_rising_edge() {
        let osc = AnalogSquareOscillator::new(1.0, 1.0, 0.05, 0.05);
        let v = osc.evaluate(0.0);
        assert!((0.0..=0.5).contains(&v), "rise start {} out of range", v);
    }

    #[test]
    fn output_stays_within_transient_bounds() {
        // Overshoot is capped at 110% and undershoot floored at -5%
        let osc = AnalogSquareOscillator::new(1.0, 1.0, 0.1, 0.1);
        for i in 0..10_000 {
            let v = osc.evaluate(i as f64 / 10_000.0);
            assert!(v <= 1.1 + 1e-12, "sample {} exceeds overshoot cap", v);
            assert!(v >= -0.05 - 1e-12, "sample {} breaks undershoot floor", v);
        }
    }

    #[test]
    fn high_region_sits_near_the_rail() {
        let amplitude = 2.0;
        let osc = AnalogSquareOscillator::new(1.0, amplitude, 0.05, 0.05);
        // Ripple magnitude is 1% of amplitude
        for &t in &[0.2, 0.3, 0.4, 0.45] {
            let v = osc.evaluate(t);
            assert!(
                (v - amplitude).abs() <= 0.01 * amplitude,
                "high-region sample {} too far from rail",
                v
            );
        }
    }

    #[test]
    fn low_region_settles_near_zero() {
        let osc = AnalogSquareOscillator::new(1.0, 1.0, 0.05, 0.05);
        for &t in &[0.6, 0.7, 0.8, 0.95] {
            assert!(osc.evaluate(t).abs() <= 0.005);
        }
    }

    #[test]
    fn periodic_across_cycles() {
        let osc = AnalogSquareOscillator::new(2.0, 1.0, 0.05, 0.05);
        let a = osc.evaluate(0.1);
        let b = osc.evaluate(0.6);
        let c = osc.evaluate(1.1);
        assert!((a - b).abs() < 1e-3);
        assert!((b - c).abs() < 1e-3);
        assert!((a - c).abs() < 1e-3);
    }

    #[test]
    fn negative_amplitude_inverts_every_region() {
        let up = AnalogSquareOscillator::new(1.0, 1.5, 0.1, 0.1);
        let down = AnalogSquareOscillator::new(1.0, -1.5, 0.1, 0.1);
        for i in 0..200 {
            let t = i as f64 / 200.0;
            assert_eq!(up.evaluate(t), -down.evaluate(t));
        }
    }

    #[test]
    fn negative_time_is_well_defined() {
        let osc = AnalogSquareOscillator::new(1.0, 1.0, 0.05, 0.05);
        for i in 1..100 {
            let v = osc.evaluate(-(i as f64) * 0.0173);
            assert!(v.is_finite());
            assert!((-0.06..=1.11).contains(&v));
        }
    }

    #[test]
    fn zero_rate_is_total() {
        let osc = AnalogSquareOscillator::new(0.0, 1.0, 0.05, 0.05);
        // Phase pins to the rise-region start; never NaN
        assert_eq!(osc.evaluate(123.456), 0.0);
    }
}
