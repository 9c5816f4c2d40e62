//! Micro-benchmarks for individual technique scans.
//!
//! Each benchmark measures one technique's `scan` on a board state where
//! its pattern is present, plus the full solve of the classic puzzle.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench techniques
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use explidoku_core::{Board, Grid};
use explidoku_solver::{
    solve_step_by_step,
    technique::{HiddenSingle, NakedPair, NakedSingle, Pointing, Technique},
};

const CLASSIC: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const POINTING: &str = "
    ___ ___ ___
    123 ___ ___
    467 ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
";

const NAKED_PAIR: &str = "
    ___ ___ ___
    345 678 9__
    678 912 345
    9__ ___ ___
    ___ ___ ___
    ___ ___ ___
    _9_ ___ ___
    ___ ___ ___
    ___ ___ ___
";

fn board(s: &str) -> Board {
    let grid: Grid = s.parse().unwrap();
    Board::from_grid(&grid).unwrap()
}

fn bench_scans(c: &mut Criterion) {
    let classic = board(CLASSIC);
    let pointing = board(POINTING);
    let naked_pair = board(NAKED_PAIR);

    c.bench_function("naked_single_scan", |b| {
        let technique = NakedSingle::new();
        b.iter(|| hint::black_box(technique.scan(hint::black_box(&classic))));
    });

    c.bench_function("hidden_single_scan", |b| {
        let technique = HiddenSingle::new();
        b.iter(|| hint::black_box(technique.scan(hint::black_box(&classic))));
    });

    c.bench_function("pointing_scan", |b| {
        let technique = Pointing::new();
        b.iter(|| hint::black_box(technique.scan(hint::black_box(&pointing))));
    });

    c.bench_function("naked_pair_scan", |b| {
        let technique = NakedPair::new();
        b.iter(|| hint::black_box(technique.scan(hint::black_box(&naked_pair))));
    });
}

fn bench_full_solve(c: &mut Criterion) {
    let grid: Grid = CLASSIC.parse().unwrap();

    c.bench_function("solve_classic", |b| {
        b.iter(|| hint::black_box(solve_step_by_step(hint::black_box(&grid)).unwrap()));
    });
}

criterion_group!(benches, bench_scans, bench_full_solve);
criterion_main!(benches);
