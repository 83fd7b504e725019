//! Benchmarks for chess engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::{search, Board, Color, SearchParams};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let start = Board::new();
    group.bench_function("startpos_legal", |b| {
        b.iter(|| black_box(&start).legal_moves(Color::White))
    });

    let middlegame = Board::from_fen(MIDDLEGAME);
    group.bench_function("middlegame_legal", |b| {
        b.iter(|| black_box(&middlegame).legal_moves(Color::White))
    });
    group.bench_function("middlegame_attacks", |b| {
        b.iter(|| black_box(&middlegame).attacked_squares(Color::Black))
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let start = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(&start).evaluate()));

    let middlegame = Board::from_fen(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(&middlegame).evaluate())
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let board = Board::from_fen(MIDDLEGAME);
    for depth in 1..=3 {
        let params = SearchParams::fixed_depth(depth);
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, _| {
            b.iter(|| search(black_box(&board), Color::White, &params))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_evaluate, bench_search);
criterion_main!(benches);
