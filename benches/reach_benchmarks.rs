//! Benchmarks for reachability generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use piece_reach::board::{reachable, Board, Color, Coord, Piece};

fn random_origins(size: usize, count: usize) -> Vec<Coord> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .filter_map(|_| Coord::new(rng.gen_range(0..size), rng.gen_range(0..size), size))
        .collect()
}

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");
    let origins = random_origins(8, 64);

    for piece in Piece::ALL {
        group.bench_with_input(BenchmarkId::new("8x8", piece), &piece, |b, &piece| {
            b.iter(|| {
                for &origin in &origins {
                    black_box(reachable(piece, 8, origin, Color::White));
                }
            })
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [8, 32, 128] {
        group.bench_with_input(BenchmarkId::new("queen", size), &size, |b, &size| {
            let mut board = Board::new(size).expect("non-zero size");
            let origin = board
                .place_at(size / 2, size / 3, Piece::Queen)
                .expect("origin on board");
            b.iter(|| {
                board.clear_marks();
                black_box(board.generate(origin, Color::White))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rules, bench_generate);
criterion_main!(benches);
