//! Benchmarks for move generation and make/undo.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::GameState;

const MIDDLEGAME: &str = "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";

fn position(fen: &str) -> GameState {
    GameState::try_from_fen(fen).expect("benchmark fen")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut game = GameState::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| game.perft(black_box(depth)))
        });
    }

    let mut middlegame = position(MIDDLEGAME);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middlegame.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = GameState::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.get_valid_moves()))
    });

    let mut middlegame = position(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.get_valid_moves()))
    });

    // Single check forces the rescue-square filter.
    let mut in_check = position("4r2k/8/8/8/8/8/2B5/4K3 w - - 0 1");
    group.bench_function("single_check", |b| {
        b.iter(|| black_box(in_check.get_valid_moves()))
    });

    group.finish();
}

fn bench_make_undo(c: &mut Criterion) {
    let mut game = position(MIDDLEGAME);
    let moves = game.get_valid_moves();

    c.bench_function("make_undo_all", |b| {
        b.iter(|| {
            for &mv in &moves {
                game.make_move(black_box(mv));
                game.undo_move();
            }
        })
    });
}

fn bench_fen(c: &mut Criterion) {
    c.bench_function("fen_parse", |b| {
        b.iter(|| GameState::try_from_fen(black_box(MIDDLEGAME)))
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_make_undo, bench_fen);
criterion_main!(benches);
