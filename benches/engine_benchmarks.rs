//! Benchmarks for evaluation and search performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_ai::board::{Evaluator, Game, NullLogger, Searcher, Side};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ITALIAN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let evaluator = Evaluator::new(Side::White);

    let startpos = Game::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(evaluator.evaluate(black_box(&startpos))))
    });

    let kiwipete = Game::from_fen(KIWIPETE).expect("valid fen");
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(evaluator.evaluate(black_box(&kiwipete))))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut game = Game::new();
                let mut searcher = Searcher::new(Side::White).with_logger(NullLogger);
                searcher.search_fixed_depth(&mut game, depth)
            })
        });
    }

    for depth in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("italian", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut game = Game::from_fen(ITALIAN).expect("valid fen");
                let mut searcher = Searcher::new(Side::White).with_logger(NullLogger);
                searcher.search_fixed_depth(&mut game, depth)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search);
criterion_main!(benches);
