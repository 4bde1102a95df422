//! Benchmarks for the leaf generators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modwave::graph::{
    AnalogSquareOscillator, DigitalSquareOscillator, ModulationSource, SineOscillator,
};

use crate::BATCH_SIZES;

fn evaluate_batch<S: ModulationSource>(source: &S, count: usize) -> f64 {
    let mut acc = 0.0;
    for i in 0..count {
        acc += source.evaluate(black_box(i as f64 / 48_000.0));
    }
    acc
}

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BATCH_SIZES {
        // Sine - one sin() per query
        let osc = SineOscillator::new(440.0, 1.0);
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, &size| {
            b.iter(|| evaluate_batch(&osc, size))
        });

        // Digital square - modulo plus a branch
        let osc = DigitalSquareOscillator::new(440.0, 1.0);
        group.bench_with_input(BenchmarkId::new("digital_square", size), &size, |b, &size| {
            b.iter(|| evaluate_batch(&osc, size))
        });

        // Analog square - exp() and sin() per region
        let osc = AnalogSquareOscillator::new(440.0, 1.0, 0.05, 0.05);
        group.bench_with_input(BenchmarkId::new("analog_square", size), &size, |b, &size| {
            b.iter(|| evaluate_batch(&osc, size))
        });
    }

    group.finish();
}
