//! Ordinary least squares with an intercept.
//!
//! The intercept is handled by centering: we solve
//!
//! ```text
//! minimize ||(X - x̄) β - (y - ȳ)||²
//! ```
//!
//! and set `intercept = ȳ - x̄ · β`. Constant columns (such as the bias column
//! of a polynomial expansion) center to zero and receive a zero coefficient,
//! so a degree-0 model predicts the training mean.

use nalgebra::{DMatrix, DVector};

use crate::error::AppError;
use crate::math::solve_least_squares;

#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: DVector<f64>,
}

impl LinearModel {
    pub fn fit(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<Self, AppError> {
        if x.nrows() != y.len() {
            return Err(AppError::shape(format!(
                "row-count mismatch: {} design rows, {} targets",
                x.nrows(),
                y.len()
            )));
        }
        if x.nrows() == 0 {
            return Err(AppError::shape("cannot fit on an empty training set"));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(AppError::fit("non-finite value in training data"));
        }

        let n = x.nrows() as f64;
        let x_mean = DVector::from_fn(x.ncols(), |j, _| x.column(j).sum() / n);
        let y_mean = y.sum() / n;

        let xc = DMatrix::from_fn(x.nrows(), x.ncols(), |i, j| x[(i, j)] - x_mean[j]);
        let yc = y.map(|v| v - y_mean);

        let coefficients = solve_least_squares(&xc, &yc).ok_or_else(|| {
            AppError::fit(format!(
                "least squares did not converge ({} rows x {} columns)",
                x.nrows(),
                x.ncols()
            ))
        })?;

        let intercept = y_mean - x_mean.dot(&coefficients);
        if !intercept.is_finite() {
            return Err(AppError::fit("non-finite intercept"));
        }

        Ok(Self {
            intercept,
            coefficients,
        })
    }

    pub fn predict(&self, x: &DMatrix<f64>) -> Result<DVector<f64>, AppError> {
        if x.ncols() != self.coefficients.len() {
            return Err(AppError::shape(format!(
                "model has {} coefficients, input has {} columns",
                self.coefficients.len(),
                x.ncols()
            )));
        }
        let pred = x * &self.coefficients;
        let pred = pred.map(|v| v + self.intercept);
        if pred.iter().any(|v| !v.is_finite()) {
            return Err(AppError::fit("non-finite model prediction"));
        }
        Ok(pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn recovers_exact_linear_relationship() {
        // y = 1 + 2a - b
        let x = DMatrix::from_row_slice(5, 2, &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 1.0]);
        let y = DVector::from_fn(5, |i, _| 1.0 + 2.0 * x[(i, 0)] - x[(i, 1)]);

        let model = LinearModel::fit(&x, &y).unwrap();
        assert_relative_eq!(model.intercept, 1.0, epsilon = 1e-10);
        assert_relative_eq!(model.coefficients[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(model.coefficients[1], -1.0, epsilon = 1e-10);

        let pred = model.predict(&x).unwrap();
        for i in 0..5 {
            assert_relative_eq!(pred[i], y[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn bias_only_design_predicts_training_mean() {
        let x = DMatrix::from_element(4, 1, 1.0);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 6.0]);

        let model = LinearModel::fit(&x, &y).unwrap();
        assert_eq!(model.coefficients[0], 0.0);
        assert_relative_eq!(model.intercept, 3.0);

        let pred = model.predict(&DMatrix::from_element(2, 1, 1.0)).unwrap();
        assert_relative_eq!(pred[0], 3.0);
        assert_relative_eq!(pred[1], 3.0);
    }

    #[test]
    fn fit_rejects_mismatched_rows() {
        let x = DMatrix::<f64>::zeros(3, 2);
        let y = DVector::<f64>::zeros(4);
        let err = LinearModel::fit(&x, &y).unwrap_err();
        assert!(err.to_string().contains("row-count mismatch"));
    }

    #[test]
    fn predict_rejects_wrong_width() {
        let model = LinearModel {
            intercept: 0.0,
            coefficients: DVector::from_row_slice(&[1.0, 2.0]),
        };
        assert!(model.predict(&DMatrix::<f64>::zeros(1, 3)).is_err());
    }
}
