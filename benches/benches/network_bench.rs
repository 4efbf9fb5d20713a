//! # GateNetwork Benchmarks
//!
//! Measures network declaration and evaluation. Evaluation is O(N) in the
//! number of declared nodes.
//!
//! Run: `cargo bench --bench network_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gaia_core::{AdaptiveGate, Bit, GateNetwork, NodeKind};

/// Chain of alternating XOR/AND/OR nodes filling `capacity`
fn chain(capacity: usize) -> GateNetwork {
    let mut net = GateNetwork::with_capacity(capacity);
    net.declare_input().expect("input 0");
    net.declare_input().expect("input 1");
    for i in 2..capacity {
        let kind = match i % 3 {
            0 => NodeKind::Xor,
            1 => NodeKind::And,
            _ => NodeKind::Or,
        };
        net.declare_node(kind, i - 2, i - 1).expect("backward reference");
    }
    net
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_evaluate");

    group.bench_function("and_xor_or", |b| {
        let mut net = GateNetwork::and_xor_or().expect("reference network");
        b.iter(|| {
            for (x, y) in Bit::pairs() {
                black_box(net.evaluate(black_box(x), black_box(y)).ok());
            }
        })
    });

    for size in [10usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("chain", size), &size, |b, &size| {
            let mut net = chain(size);
            b.iter(|| black_box(net.evaluate(black_box(Bit::One), black_box(Bit::Zero)).ok()))
        });
    }

    group.bench_function("adaptive_node", |b| {
        let mut net = GateNetwork::new();
        net.declare_input().expect("input 0");
        net.declare_input().expect("input 1");
        net.declare_node(NodeKind::Adaptive(AdaptiveGate::default()), 0, 1)
            .expect("adaptive node");
        b.iter(|| black_box(net.evaluate(black_box(Bit::One), black_box(Bit::One)).ok()))
    });

    group.finish();
}

fn bench_declare(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_declare");

    group.bench_function("chain_10", |b| b.iter(|| black_box(chain(10))));

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_declare);
criterion_main!(benches);
