use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dmat_matrix::{ops, solve, DenseMatrix, Vector};
use rand::{rngs::StdRng, Rng, SeedableRng};

const TEST_SIZES: [usize; 4] = [4, 16, 64, 128];

fn random_dominant(rng: &mut StdRng, n: usize) -> DenseMatrix<f64> {
    let mut a = DenseMatrix::<f64>::with_shape(n, n).unwrap();
    for r in 0..n {
        for x in a.row_mut(r).iter_mut() {
            *x = rng.random_range(-1.0..1.0);
        }
        a[r][r] += n as f64;
    }
    a
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    let mut rng = StdRng::seed_from_u64(0);

    for size in TEST_SIZES {
        let a = random_dominant(&mut rng, size);
        let b = random_dominant(&mut rng, size);
        let mut out = DenseMatrix::default();

        group.bench_function(format!("mul_{size}x{size}"), |bencher| {
            bencher.iter(|| black_box(ops::mul(&mut out, &a, &b).unwrap()))
        });

        group.bench_function(format!("mul_a_bt_{size}x{size}"), |bencher| {
            bencher.iter(|| black_box(ops::mul_a_bt(&mut out, &a, &b).unwrap()))
        });

        group.bench_function(format!("mul_at_b_{size}x{size}"), |bencher| {
            bencher.iter(|| black_box(ops::mul_at_b(&mut out, &a, &b).unwrap()))
        });
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let mut rng = StdRng::seed_from_u64(1);

    for size in TEST_SIZES {
        let a = random_dominant(&mut rng, size);
        let b: Vector<f64> = (0..size).map(|_| rng.random::<f64>()).collect();

        group.bench_function(format!("invert_{size}x{size}"), |bencher| {
            bencher.iter_batched(
                || (a.clone(), DenseMatrix::default()),
                |(mut a, mut ai)| black_box(solve::invert(&mut a, &mut ai).unwrap()),
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("gauss_elim_{size}x{size}"), |bencher| {
            bencher.iter_batched(
                || (a.clone(), b.clone(), Vector::new(0)),
                |(mut a, mut b, mut x)| black_box(solve::gauss_elim(&mut a, &mut b, &mut x).unwrap()),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul, bench_solve);
criterion_main!(benches);
