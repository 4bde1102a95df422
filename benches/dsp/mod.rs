mod compose;
mod oscillator;

pub use compose::bench_compose;
pub use oscillator::bench_oscillator;
