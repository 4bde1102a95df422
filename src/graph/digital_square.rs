use crate::dsp::phase::phase_radians;
use crate::dsp::square::digital_level;
use crate::graph::node::ModulationSource;

/*
Digital Square Oscillator
=========================

The ideal bistable wave: `amplitude` for the first half of every cycle, 0 for
the second half, with instantaneous transitions and exactly 50% duty cycle.

Two properties distinguish it from the sine source:

  Low state is 0, not -amplitude. This is a logic-level model (gate open /
  gate closed), not a bipolar audio wave. Composing it onto a carrier shifts
  the carrier up during the high half-cycle and leaves it untouched during
  the low half-cycle.

  The phase is normalized with a true modulo, so negative time lands in
  [0, 2π) like everything else: evaluate(-0.25) at 1 Hz sits at phase 3π/2
  (low), not at a nonsensical negative phase.
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalSquareOscillator {
    rate: f64,
    amplitude: f64,
}

impl DigitalSquareOscillator {
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

impl ModulationSource for DigitalSquareOscillator {
    fn evaluate(&self, time: f64) -> f64 {
        let phi = phase_radians(self.rate, time);
        self.amplitude * digital_level(phi)
    }
}
