use crate::graph::node::ModulationSource;

/*
Additive Combination (Modulated)
================================

Modulated sums two sources: `base.evaluate(t) + modulator.evaluate(t)`.
Pure superposition — no normalization, no clipping, no weighting. The
combined amplitude can exceed either input's range, and that is the point:
whoever samples the tree decides what to do with the headroom.

A Modulated node is itself a source, so composition nests without bound:

  A.compose(B).compose(C)

builds ((A + B) + C), and evaluates to A(t) + B(t) + C(t) at every t. The
order of composition changes the tree shape but never the value; addition
commutes.

Both children are owned for the lifetime of the node. Sources are stateless
after construction, so there is nothing to share and nothing to lock — the
whole tree evaluates through `&self` from any thread.
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulated<A, B> {
    base: A,
    modulator: B,
}

impl<A, B> Modulated<A, B> {
    pub fn new(base: A, modulator: B) -> Self {
        Self { base, modulator }
    }
}

impl<A: ModulationSource, B: ModulationSource> ModulationSource for Modulated<A, B> {
    fn evaluate(&self, time: f64) -> f64 {
        self.base.evaluate(time) + self.modulator.evaluate(time)
    }
}
