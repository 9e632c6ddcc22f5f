//! Least squares solver.
//!
//! We solve `minimize ||X β - y||²` for design matrices whose width ranges from
//! one column (degree 0) to several thousand (degree 9 over six features), and
//! which are often wider than tall.
//!
//! Implementation choices:
//! - SVD handles tall, square and wide matrices alike. For rank-deficient or
//!   underdetermined systems it yields the minimum-norm solution.
//! - Singular values below `rcond * σ_max` are treated as zero, with
//!   `rcond = ε · max(n, p)`. If the result is not finite we retry with a
//!   looser cutoff before giving up.

use nalgebra::{DMatrix, DVector};

/// Relative cutoff multipliers tried in order.
const RCOND_SCALES: [f64; 3] = [1.0, 1e3, 1e6];

/// Solve a least squares problem using SVD.
///
/// Returns `None` if no tolerance produces a finite solution.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    if x.nrows() != y.len() {
        return None;
    }
    if x.ncols() == 0 {
        return Some(DVector::zeros(0));
    }

    let svd = x.clone().svd(true, true);
    let sigma_max = svd.singular_values.iter().fold(0.0_f64, |acc, &s| acc.max(s));
    if !sigma_max.is_finite() {
        return None;
    }

    let rcond = f64::EPSILON * x.nrows().max(x.ncols()) as f64;
    for scale in RCOND_SCALES {
        let eps = rcond * scale * sigma_max;
        if let Ok(beta) = svd.solve(y, eps) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn wide_system_returns_minimum_norm_solution() {
        // One equation, two unknowns: b0 + b1 = 2. Minimum norm is (1, 1).
        let x = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let y = DVector::from_row_slice(&[2.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 1.0).abs() < 1e-10);
        assert!((beta[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn zero_matrix_gives_zero_coefficients() {
        let x = DMatrix::<f64>::zeros(4, 1);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 4.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert_eq!(beta.len(), 1);
        assert_eq!(beta[0], 0.0);
    }

    #[test]
    fn mismatched_rows_are_rejected() {
        let x = DMatrix::<f64>::zeros(3, 2);
        let y = DVector::<f64>::zeros(2);
        assert!(solve_least_squares(&x, &y).is_none());
    }
}
