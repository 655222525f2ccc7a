//! Benchmarks for sparse matrix arithmetic and the text format

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_arith::{parse, SparseMatrix};

/// Tridiagonal n×n matrix: 2 on the diagonal, -1 beside it
fn create_tridiagonal(n: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(n, n);
    for i in 0..n {
        if i > 0 {
            matrix.set(i, i - 1, -1);
        }
        matrix.set(i, i, 2);
        if i + 1 < n {
            matrix.set(i, i + 1, -1);
        }
    }
    matrix
}

/// Matrix with a fixed number of entries per row at scattered columns
fn create_scattered(n: usize, per_row: usize) -> SparseMatrix {
    SparseMatrix::from_triplets(
        n,
        n,
        (0..n).flat_map(move |i| {
            (0..per_row).map(move |j| (i, (i * 31 + j * 17) % n, (j as i64 % 7) + 1))
        }),
    )
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    for &n in &[100, 1_000, 10_000] {
        let a = create_tridiagonal(n);
        let b = create_scattered(n, 3);

        group.bench_with_input(BenchmarkId::new("add", n), &n, |bench, _| {
            bench.iter(|| black_box(a.add(&b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("subtract", n), &n, |bench, _| {
            bench.iter(|| black_box(a.subtract(&b).unwrap()))
        });
    }

    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for &n in &[100, 1_000, 5_000] {
        let a = create_tridiagonal(n);
        let b = create_scattered(n, 4);

        group.bench_with_input(BenchmarkId::new("tridiagonal_x_scattered", n), &n, |bench, _| {
            bench.iter(|| black_box(a.multiply(&b).unwrap()))
        });
    }

    group.finish();
}

fn bench_text_format(c: &mut Criterion) {
    let matrix = create_scattered(2_000, 5);
    let text = matrix.to_string();

    c.bench_function("serialize_2000", |bench| {
        bench.iter(|| black_box(matrix.to_string()))
    });
    c.bench_function("parse_2000", |bench| {
        bench.iter(|| black_box(parse::<i64>(&text).unwrap()))
    });
}

criterion_group!(benches, bench_elementwise, bench_multiply, bench_text_format);
criterion_main!(benches);
