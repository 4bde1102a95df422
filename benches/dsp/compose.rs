//! Benchmarks for composed modulation trees.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modwave::graph::{ModulationSource, SineOscillator, SourceExt};

use crate::BATCH_SIZES;

fn evaluate_batch<S: ModulationSource>(source: &S, count: usize) -> f64 {
    let mut acc = 0.0;
    for i in 0..count {
        acc += source.evaluate(black_box(i as f64 / 48_000.0));
    }
    acc
}

pub fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/compose");

    for &size in BATCH_SIZES {
        // Three leaves, the common carrier-plus-two-modulators shape
        let tree = SineOscillator::new(440.0, 1.0)
            .compose(SineOscillator::new(5.0, 0.2))
            .compose(SineOscillator::new(0.5, 0.1));
        group.bench_with_input(BenchmarkId::new("three_leaves", size), &size, |b, &size| {
            b.iter(|| evaluate_batch(&tree, size))
        });

        // Deep chain through boxed nodes, the patch-built shape
        let mut deep: Box<dyn ModulationSource> = Box::new(SineOscillator::new(440.0, 1.0));
        for i in 1..8 {
            deep = Box::new(deep.compose(SineOscillator::new(i as f64, 0.1)));
        }
        group.bench_with_input(BenchmarkId::new("boxed_depth_8", size), &size, |b, &size| {
            b.iter(|| evaluate_batch(&deep, size))
        });
    }

    group.finish();
}
