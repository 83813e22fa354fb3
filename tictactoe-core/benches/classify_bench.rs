use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tictactoe_core::{classify, forward_neighbors, popcount, Board};

/// Benchmark classify() on representative boards
fn bench_classify_boards(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let boards = [
        ("empty", Board::EMPTY),
        ("midgame", Board::from_cells(&[3, 4, 6], &[0, 1])),
        ("two_lines", Board::from_cells(&[0, 1, 2, 3, 6], &[4, 5, 7, 8])),
        ("overlap", Board(0b000_000_001_000_000_001)),
    ];
    for (name, board) in boards {
        group.bench_with_input(BenchmarkId::new("board", name), &board, |b, &board| {
            b.iter(|| black_box(classify(black_box(board))))
        });
    }

    group.finish();
}

/// Benchmark classifying every encoding once
fn bench_classify_all(c: &mut Criterion) {
    c.bench_function("classify_all_encodings", |b| {
        b.iter(|| Board::all().filter(|&board| classify(board).is_legal()).count())
    });
}

fn bench_forward_neighbors(c: &mut Criterion) {
    c.bench_function("forward_neighbors_empty", |b| {
        b.iter(|| black_box(forward_neighbors(black_box(Board::EMPTY))))
    });
}

fn bench_popcount(c: &mut Criterion) {
    c.bench_function("popcount", |b| {
        b.iter(|| black_box(popcount(black_box(0x2_a5a5))))
    });
}

criterion_group!(
    benches,
    bench_classify_boards,
    bench_classify_all,
    bench_forward_neighbors,
    bench_popcount
);
criterion_main!(benches);
