//! Property tests for the Gauss-Jordan reducer: RREF structure, idempotence,
//! and the tolerance policy.

use approx::assert_abs_diff_eq;
use faer::Mat;
use nullspan::reduce::rref;
use rand::Rng;

const EPS: f64 = 1e-9;

fn random_mat(m: usize, n: usize) -> Mat<f64> {
    let mut rng = rand::thread_rng();
    let vals: Vec<f64> = (0..m * n).map(|_| rng.r#gen()).collect();
    Mat::from_fn(m, n, |i, j| vals[j * m + i])
}

/// Every pivot column of the reduced matrix must be a unit column, with the
/// pivot columns strictly increasing across pivot rows.
#[test]
fn rref_structure_random() {
    let (m, n) = (5, 8);
    let a = random_mat(m, n);
    let out = rref(&a, EPS);
    assert!(out.rank() <= m.min(n));
    let mut prev: Option<usize> = None;
    for (p, &c) in out.pivots.iter().enumerate() {
        if let Some(q) = prev {
            assert!(c > q, "pivot columns must increase left to right");
        }
        prev = Some(c);
        for i in 0..m {
            let want = if i == p { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(out.r[(i, c)], want, epsilon = 1e-12);
        }
    }
    // rows below the rank are entirely zero
    for i in out.rank()..m {
        for j in 0..n {
            assert_abs_diff_eq!(out.r[(i, j)], 0.0, epsilon = 1e-12);
        }
    }
}

/// Reducing an already-reduced matrix returns it unchanged with the same
/// pivot list.
#[test]
fn rref_idempotent_random() {
    let a = random_mat(6, 9);
    let first = rref(&a, EPS);
    let second = rref(&first.r, EPS);
    assert_eq!(first.pivots, second.pivots);
    for i in 0..6 {
        for j in 0..9 {
            assert_abs_diff_eq!(first.r[(i, j)], second.r[(i, j)], epsilon = 1e-12);
        }
    }
}

/// With `eps = 0` the reducer falls back to exact-zero comparisons, which is
/// well defined on exact integer-valued input.
#[test]
fn exact_mode_on_integer_matrix() {
    let a = Mat::from_fn(3, 4, |i, j| ((i * 4 + j) % 5) as f64);
    let out = rref(&a, 0.0);
    assert_eq!(out.pivots, vec![0, 1, 2]);
}
