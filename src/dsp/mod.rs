//! Low-level signal math used by the graph-level source nodes.
//!
//! These functions are allocation-free and stateless. They stay focused on
//! the waveform arithmetic so the graph layer can handle ownership,
//! composition, and amplitude scaling.

/// True-modulo phase normalization.
pub mod phase;
/// Ideal and transient-modeled square-wave levels.
pub mod square;
