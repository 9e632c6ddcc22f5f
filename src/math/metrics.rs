//! Regression scoring.
//!
//! - `mse = mean((y_pred - y_true)²)`
//! - `r2 = 1 - SS_res / SS_tot`
//!
//! A constant `y_true` has `SS_tot = 0`; we then report `1.0` for a perfect
//! prediction and `0.0` otherwise instead of dividing by zero.

use crate::domain::Scores;
use crate::error::AppError;

/// Mean squared error.
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, AppError> {
    check_lengths(y_true, y_pred)?;
    let sse: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| {
            let diff = p - t;
            diff * diff
        })
        .sum();
    Ok(sse / y_true.len() as f64)
}

/// Coefficient of determination.
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64, AppError> {
    check_lengths(y_true, y_pred)?;
    let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (t, p) in y_true.iter().zip(y_pred) {
        ss_res += (t - p) * (t - p);
        ss_tot += (t - mean) * (t - mean);
    }

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - ss_res / ss_tot)
}

/// Both scores at once.
pub fn score(y_true: &[f64], y_pred: &[f64]) -> Result<Scores, AppError> {
    Ok(Scores {
        r2: r2_score(y_true, y_pred)?,
        mse: mean_squared_error(y_true, y_pred)?,
    })
}

fn check_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<(), AppError> {
    if y_true.len() != y_pred.len() {
        return Err(AppError::shape(format!(
            "{} observations vs {} predictions",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(AppError::shape("cannot score an empty prediction set"));
    }
    Ok(())
}
