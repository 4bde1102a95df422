/*
Modulation Sources
==================

A modulation source is anything that can answer "what is your value at time
t?" — a leaf generator computing directly from its parameters, or a combined
tree recursively querying its children. There is no internal clock and no
buffer: a source is a pure function of time, so the same tree can be sampled
at any rate, in any order, from any number of threads at once.

Negative time is not special. A source must return a well-defined value for
every finite time, and evaluating at t = -0.25 must land on the same cycle
shape as t = 0.75 (see `dsp::phase` for the normalization this implies).
*/

/// Core trait for signal sources.
///
/// Implementations are immutable after construction. `evaluate` is
/// deterministic and total over all finite time; it never panics and never
/// mutates the source.
pub trait ModulationSource: Send + Sync + std::fmt::Debug {
    /// Instantaneous value of the signal at `time`, in seconds.
    fn evaluate(&self, time: f64) -> f64;
}

/// Allow boxed sources to be used as sources (for trees whose shape is only
/// known at runtime, e.g. built from a patch description).
impl ModulationSource for Box<dyn ModulationSource> {
    fn evaluate(&self, time: f64) -> f64 {
        (**self).evaluate(time)
    }
}
