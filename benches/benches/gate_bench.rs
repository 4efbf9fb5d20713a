//! # Gate Benchmarks
//!
//! Measures primitive gate evaluation and the stateful gates (memory,
//! pattern detector, superposition, adaptive). All operations are O(1).
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gaia_core::{
    AdaptiveConfig, AdaptiveGate, Bit, LearningRule, MemoryGate, MemoryMode, PatternDetector,
    PrimitiveGate, Superposition,
};

/// Benchmark primitive gates over the full truth table
fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    for gate in PrimitiveGate::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(gate), &gate, |b, gate| {
            b.iter(|| {
                for (x, y) in Bit::pairs() {
                    black_box(gate.apply(black_box(x), black_box(y)));
                }
            })
        });
    }

    group.bench_function("mixed_chain", |b| {
        let (mut x, mut y) = (Bit::One, Bit::Zero);
        b.iter(|| {
            let c = (x & y) | (x ^ y) | (!x & y);
            x = c;
            y = !c;
            black_box(c)
        })
    });

    group.finish();
}

/// Benchmark memory gate and pattern detector steps
fn bench_stateful(c: &mut Criterion) {
    let mut group = c.benchmark_group("stateful");
    let stream: Vec<Bit> = (0..64u32).map(|i| Bit::from(i % 3 != 1)).collect();

    for mode in [MemoryMode::SimpleLag, MemoryMode::XorWithMemory] {
        group.bench_with_input(BenchmarkId::new("memory_64", mode), &mode, |b, &mode| {
            let mut gate = MemoryGate::new(mode);
            b.iter(|| black_box(gate.process_sequence(black_box(&stream))))
        });
    }

    group.bench_function("pattern_64", |b| {
        let mut pd = PatternDetector::new();
        b.iter(|| black_box(pd.feed_sequence(black_box(&stream))))
    });

    group.bench_function("superposition_collapse", |b| {
        b.iter(|| {
            let mut s = Superposition::create(black_box(Bit::One), black_box(Bit::One));
            black_box(s.collapse())
        })
    });

    group.finish();
}

/// Benchmark adaptive training per rule
fn bench_adaptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive");

    for rule in [LearningRule::SignedError, LearningRule::Directional] {
        group.bench_with_input(BenchmarkId::new("train_and_100", rule), &rule, |b, &rule| {
            b.iter(|| {
                let config = AdaptiveConfig::default().with_rule(rule);
                let mut gate = AdaptiveGate::with_weights([0.0; 4], config);
                black_box(gate.train(PrimitiveGate::And, 100))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_stateful, bench_adaptive);
criterion_main!(benches);
