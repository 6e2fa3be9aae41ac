//! Benchmarks for territory resolution.
//!
//! Covers the single-board hot path and the parallel move evaluation
//! built on top of it.

#![allow(missing_docs)] // Benchmark macros generate undocumented functions

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use encircle::analysis::{evaluate_moves, resolve_all};
use encircle::sweep::play_random_game;
use encircle::{Grid, PlayerId, resolve};

/// A mid-game position from a seeded random game.
fn midgame(size: u16, moves: u32) -> Grid {
    match play_random_game(7, size, moves) {
        Ok((grid, _)) => grid,
        Err(e) => panic!("failed to build benchmark board: {e}"),
    }
}

fn bench_resolve_reference(c: &mut Criterion) {
    let mut grid = midgame(10, 40);

    c.bench_function("resolve_10x10", |b| {
        b.iter(|| black_box(resolve(black_box(&mut grid))));
    });
}

fn bench_resolve_large(c: &mut Criterion) {
    let mut grid = midgame(100, 4000);

    c.bench_function("resolve_100x100", |b| {
        b.iter(|| black_box(resolve(black_box(&mut grid))));
    });
}

fn bench_evaluate_moves(c: &mut Criterion) {
    let grid = midgame(19, 120);

    c.bench_function("evaluate_moves_19x19", |b| {
        b.iter(|| black_box(evaluate_moves(black_box(&grid), PlayerId::A)));
    });
}

fn bench_resolve_batch(c: &mut Criterion) {
    let grids: Vec<Grid> = (0..256).map(|_| midgame(10, 40)).collect();

    c.bench_function("resolve_all_256x10x10", |b| {
        b.iter(|| {
            let mut batch = grids.clone();
            black_box(resolve_all(black_box(&mut batch)))
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_reference,
    bench_resolve_large,
    bench_evaluate_moves,
    bench_resolve_batch
);
criterion_main!(benches);
