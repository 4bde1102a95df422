//! Declarative description of a source tree.
//!
//! A `SourceSpec` is the storable form of a modulation tree: a small JSON
//! document describing which generators to build and how they nest. The CLI
//! harness reads one of these to build the tree it samples.
//!
//! Building is where the crate's single validated failure lives: a
//! `modulated` node missing its base or its modulator is rejected with an
//! invalid-argument error. Every numeric field passes through unchecked —
//! rates and amplitudes are unrestricted by contract, and out-of-range
//! rise/fall times are clamped by the oscillator itself, never surfaced.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{
    AnalogSquareOscillator, DigitalSquareOscillator, Modulated, ModulationSource, SineOscillator,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("modulated node requires a base source")]
    MissingBase,
    #[error("modulated node requires a modulator")]
    MissingModulator,
}

/// One node of a stored source tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceSpec {
    Sine {
        rate: f64,
        amplitude: f64,
    },
    DigitalSquare {
        rate: f64,
        amplitude: f64,
    },
    AnalogSquare {
        rate: f64,
        amplitude: f64,
        rise_time: f64,
        fall_time: f64,
    },
    /// Children are optional in the stored form so a half-written patch
    /// deserializes; `build` is where absence becomes an error.
    Modulated {
        base: Option<Box<SourceSpec>>,
        modulator: Option<Box<SourceSpec>>,
    },
}

impl SourceSpec {
    /// Build the described tree, bottom up.
    pub fn build(&self) -> Result<Box<dyn ModulationSource>, PatchError> {
        match self {
            SourceSpec::Sine { rate, amplitude } => {
                Ok(Box::new(SineOscillator::new(*rate, *amplitude)))
            }
            SourceSpec::DigitalSquare { rate, amplitude } => {
                Ok(Box::new(DigitalSquareOscillator::new(*rate, *amplitude)))
            }
            SourceSpec::AnalogSquare {
                rate,
                amplitude,
                rise_time,
                fall_time,
            } => Ok(Box::new(AnalogSquareOscillator::new(
                *rate, *amplitude, *rise_time, *fall_time,
            ))),
            SourceSpec::Modulated { base, modulator } => {
                let base = base.as_ref().ok_or(PatchError::MissingBase)?.build()?;
                let modulator = modulator
                    .as_ref()
                    .ok_or(PatchError::MissingModulator)?
                    .build()?;
                Ok(Box::new(Modulated::new(base, modulator)))
            }
        }
    }
}
