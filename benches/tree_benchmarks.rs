//! Performance benchmarks for error tree rendering, matching and narrowing

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use errtree::{shared, ErrorTree, MessageError, SharedError};
use std::hint::black_box;

/// Build a tree `depth` levels deep with `width` leaves under every node
fn build_tree(depth: usize, width: usize) -> ErrorTree {
    let leaves = (0..width).map(|i| MessageError::shared(format!("leaf {i}")));
    if depth == 0 {
        return ErrorTree::new("bottom", leaves);
    }

    let nested: SharedError = shared(build_tree(depth - 1, width));
    ErrorTree::new(format!("level {depth}"), leaves.chain(std::iter::once(nested)))
}

/// Benchmark rendering of wide and deep trees
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for (depth, width) in [(1, 10), (4, 10), (8, 4), (2, 100)] {
        let tree = build_tree(depth, width);
        group.bench_with_input(
            BenchmarkId::new("to_string", format!("{depth}x{width}")),
            &tree,
            |b, tree| b.iter(|| black_box(tree.to_string())),
        );
    }

    group.finish();
}

/// Benchmark identity matching: a miss walks the whole tree
fn bench_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("matches");
    let missing = MessageError::shared("not in the tree");

    for depth in [1, 4, 16] {
        let tree = build_tree(depth, 8);
        group.bench_with_input(BenchmarkId::new("miss", depth), &tree, |b, tree| {
            b.iter(|| black_box(tree.matches(missing.as_ref())))
        });
    }

    group.finish();
}

/// Benchmark narrowing to the deepest tree
fn bench_narrow(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrow");

    for depth in [1, 4, 16] {
        let tree = build_tree(depth, 8);
        group.bench_with_input(BenchmarkId::new("io_error_miss", depth), &tree, |b, tree| {
            b.iter(|| black_box(tree.narrow::<std::io::Error>().is_none()))
        });
        group.bench_with_input(BenchmarkId::new("message_hit", depth), &tree, |b, tree| {
            b.iter(|| black_box(tree.narrow::<MessageError>().is_some()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_matches, bench_narrow);
criterion_main!(benches);
