//! Composable signal sources.
//!
//! Source nodes wrap the low-level waveform math with ownership and
//! composition: every node answers a value-at-time query, and any two nodes
//! can be summed into a new node with the fluent `compose` helper, building
//! arbitrarily deep modulation trees.

/// Square generator with modeled rise/fall transients.
pub mod analog_square;
/// Ideal bistable square generator.
pub mod digital_square;
/// Fluent combinators (`.compose()`).
pub mod extensions;
/// Additive combination of two sources.
pub mod modulated;
/// Core trait shared by all signal sources.
pub mod node;
/// Pure sine generator.
pub mod sine;

pub use analog_square::AnalogSquareOscillator;
pub use digital_square::DigitalSquareOscillator;
pub use extensions::SourceExt;
pub use modulated::Modulated;
pub use node::ModulationSource;
pub use sine::SineOscillator;
