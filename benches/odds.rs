use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_odds::cards::{parse_cards, Card};
use poker_odds::evaluator::{best_hand, classify};
use poker_odds::hand::{Board, HoleCards};
use poker_odds::odds::Estimator;

fn five(s: &str) -> [Card; 5] {
    let c = parse_cards(s).unwrap();
    [c[0], c[1], c[2], c[3], c[4]]
}

fn bench_classify(c: &mut Criterion) {
    let hi = five("AH KD 7S 5C 2D");
    let royal = five("AS KS QS JS TS");
    let seven = parse_cards("AS AH KS QS JS TS 9S").unwrap();

    let mut g = c.benchmark_group("classify");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "A-T"), &royal, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.finish();

    c.bench_function("best_hand_of_seven", |b| b.iter(|| best_hand(black_box(&seven))));
}

fn bench_estimate(c: &mut Criterion) {
    let hole: HoleCards = "AH KH".parse().unwrap();
    let flop: Board = "2H 7H 9C".parse().unwrap();
    let preflop = Board::default();

    let mut g = c.benchmark_group("estimate");
    g.sample_size(10);
    g.bench_function("flop_exhaustive", |b| {
        b.iter(|| Estimator::new().estimate(black_box(&hole), black_box(&flop)))
    });
    g.bench_function("preflop_sampled", |b| {
        b.iter(|| Estimator::new().with_seed(1).estimate(black_box(&hole), black_box(&preflop)))
    });
    g.finish();
}

criterion_group!(benches, bench_classify, bench_estimate);
criterion_main!(benches);
