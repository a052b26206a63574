use approx::assert_abs_diff_eq;
use dmat_matrix::{ops, solve, DenseMatrix, FixedMatrix, MatrixError, Vector};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SIZES: [usize; 4] = [2, 3, 7, 16];

fn random_matrix(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
) -> Result<DenseMatrix<f64>, MatrixError> {
    let data: Vec<f64> = (0..rows * cols).map(|_| rng.random_range(-1.0..1.0)).collect();
    DenseMatrix::from_shape_vec(rows, cols, data)
}

// strictly diagonally dominant, hence well conditioned and nonsingular
fn random_dominant(rng: &mut StdRng, n: usize) -> Result<DenseMatrix<f64>, MatrixError> {
    let mut a = random_matrix(rng, n, n)?;
    for r in 0..n {
        a[r][r] += n as f64 * if rng.random::<bool>() { 1.0 } else { -1.0 };
    }
    Ok(a)
}

#[test]
fn multiply_by_identity() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(7);
    for &(rows, cols) in &[(1, 1), (2, 5), (5, 2), (6, 6)] {
        let a = random_matrix(&mut rng, rows, cols)?;
        let i = DenseMatrix::eye(cols)?;
        assert_eq!((&a * &i)?, a);
    }

    let a = DenseMatrix::from_shape_slice(2, 2, &[2.0, 1.0, 1.0, 3.0])?;
    let mut c = DenseMatrix::default();
    ops::mul(&mut c, &a, &DenseMatrix::eye(2)?)?;
    assert_eq!(c.to_vec(), vec![2.0, 1.0, 1.0, 3.0]);
    Ok(())
}

#[test]
fn inversion_round_trip() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(42);
    for n in SIZES {
        let a = random_dominant(&mut rng, n)?;
        let ai = a.inverse()?;
        let id = DenseMatrix::eye(n)?.with_zero_test(1e-10);

        assert_eq!(id, (&a * &ai)?);
        assert_eq!(id, (&ai * &a)?);
    }
    Ok(())
}

#[test]
fn inversion_of_known_matrix() -> Result<(), MatrixError> {
    let mut a = DenseMatrix::from_shape_slice(2, 2, &[4.0, 7.0, 2.0, 6.0])?;
    let mut ai = DenseMatrix::default();
    solve::invert(&mut a, &mut ai)?;
    for (x, e) in ai.to_vec().into_iter().zip([0.6, -0.7, -0.2, 0.4]) {
        assert_abs_diff_eq!(x, e, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn singular_matrices_are_rejected() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(3);
    for n in SIZES {
        let mut zero_row = random_matrix(&mut rng, n, n)?;
        zero_row[n / 2].fill(0.0);

        let mut dup_rows = random_matrix(&mut rng, n, n)?;
        let first = dup_rows[0].to_vec();
        dup_rows[n - 1].copy_from_slice(&first);

        for a in [zero_row, dup_rows] {
            // elimination leaves round-off in the duplicated row
            let a = a.with_zero_test(1e-9);
            let b = Vector::from(vec![1.0; n]);
            assert!(matches!(a.inverse(), Err(MatrixError::Singular { .. })));
            assert!(matches!(a.solve(&b), Err(MatrixError::Singular { .. })));
        }
    }

    let singular = DenseMatrix::from_shape_slice(2, 2, &[0.0, 1.0, 0.0, 1.0])?;
    assert_eq!(
        singular.inverse().err(),
        Some(MatrixError::Singular { column: 0 })
    );
    Ok(())
}

#[test]
fn transpose_is_an_involution() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(11);
    for &(rows, cols) in &[(1, 4), (3, 2), (5, 5)] {
        let a = random_matrix(&mut rng, rows, cols)?;
        assert_eq!(a.transposed()?.transposed()?, a);

        let mut b = a.clone();
        b.transpose()?;
        assert_eq!(b.shape(), [cols, rows]);
        b.transpose()?;
        assert_eq!(b.to_vec(), a.to_vec());
    }
    Ok(())
}

#[test]
fn solve_recovers_x() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(5);
    for n in SIZES {
        let a = random_dominant(&mut rng, n)?;
        let x: Vector<f64> = (0..n).map(|_| rng.random_range(-10.0..10.0)).collect();

        let mut b = Vector::new(0);
        a.mul_vector(&x, &mut b)?;

        let mut a2 = a.clone();
        let mut x2 = Vector::new(0);
        solve::gauss_elim(&mut a2, &mut b, &mut x2)?;
        for (xi, x2i) in x.iter().zip(x2.iter()) {
            assert_abs_diff_eq!(*xi, *x2i, epsilon = 1e-9);
        }
    }

    let a = DenseMatrix::from_shape_slice(2, 2, &[3.0, 2.0, 1.0, 4.0])?;
    let x = a.solve(&Vector::from(vec![7.0, 9.0]))?;
    assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn row_swap_is_a_permutation() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(9);
    let a = random_matrix(&mut rng, 6, 3)?;
    let mut b = a.clone();
    for &(r1, r2) in &[(0, 5), (2, 3), (4, 4)] {
        b.swap_rows(r1, r2);
        assert_eq!(b.row(r1), a.row(r2));
        b.swap_rows(r1, r2);
        assert_eq!(b.to_vec(), a.to_vec());
    }

    let mut f = FixedMatrix::<f64, 2, 2>::from_shape_slice(2, 2, &[1.0, 2.0, 3.0, 4.0])?;
    f.swap_rows(0, 1);
    f.swap_rows(0, 1);
    assert_eq!(f.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    Ok(())
}

#[test]
fn fused_products_match_explicit_transpose() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(13);
    let a = random_matrix(&mut rng, 4, 3)?;
    let b = random_matrix(&mut rng, 5, 3)?;
    let c = random_matrix(&mut rng, 4, 2)?;

    let mut fused = DenseMatrix::default();
    let mut explicit = DenseMatrix::default();

    fused.mul_a_bt(&a, &b)?;
    explicit.assign_mul(&a, &b.transposed()?)?;
    assert_eq!(fused.shape(), [4, 5]);
    assert_eq!(explicit.with_zero_test(1e-12), fused);

    let mut fused = DenseMatrix::default();
    let mut explicit = DenseMatrix::default();
    fused.mul_at_b(&a, &c)?;
    explicit.assign_mul(&a.transposed()?, &c)?;
    assert_eq!(fused.shape(), [3, 2]);
    assert_eq!(explicit.with_zero_test(1e-12), fused);
    Ok(())
}
