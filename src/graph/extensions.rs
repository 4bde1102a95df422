use crate::graph::{modulated::Modulated, node::ModulationSource};

pub trait SourceExt: ModulationSource + Sized {
    /// Additively combine `self` with `modulator`.
    ///
    /// Returns a new node owning both operands; neither is mutated. The
    /// result is itself a source, so composition chains without bound:
    /// `a.compose(b).compose(c)` evaluates to `a(t) + b(t) + c(t)`.
    fn compose<M: ModulationSource>(self, modulator: M) -> Modulated<Self, M> {
        Modulated::new(self, modulator)
    }
}

impl<T: ModulationSource> SourceExt for T {}
