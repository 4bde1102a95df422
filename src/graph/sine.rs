use std::f64::consts::TAU;

use crate::graph::node::ModulationSource;

/*
Sine Oscillator
===============

The purest source: `amplitude * sin(2π * rate * time)`. Nothing is clamped —
rate and amplitude may be negative, zero, or arbitrarily large, and the value
passes straight through to the trig function.

Consequences worth knowing:

  rate = 0             sin(0) = 0, so the output is 0 everywhere regardless
                       of amplitude
  amplitude < 0        flips the phase by 180°
  rate < 0             runs the cycle backwards, same as flipping amplitude

Example usage:
  let carrier = SineOscillator::new(440.0, 1.0);   // A4 at full amplitude
  let drift = SineOscillator::new(0.5, 0.1);       // slow, shallow wobble
  let wobbly = carrier.compose(drift);
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineOscillator {
    rate: f64,      // cycles per second
    amplitude: f64, // peak value, sign included
}

impl SineOscillator {
    pub fn new(rate: f64, amplitude: f64) -> Self {
        Self { rate, amplitude }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl ModulationSource for SineOscillator {
    fn evaluate(&self, time: f64) -> f64 {
        self.amplitude * (TAU * self.rate * time).sin()
    }
}
