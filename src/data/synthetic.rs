//! Seeded synthetic datasets.
//!
//! Two generators:
//! - `linear_dataset`: uniform features in `[0, 1)` and the noiseless target
//!   `y = 3·x0 + 2` (a known answer for the regression code)
//! - `hull_dataset`: rows in the value ranges of the yacht hydrodynamics table
//!   with a steep power-law dependence on Froude number, so the degree sweep
//!   has something to find without the data file

use nalgebra::{DMatrix, DVector};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::domain::Dataset;
use crate::error::AppError;

/// `(min, max)` per feature, yacht column order.
const HULL_RANGES: [(f64, f64); 5] = [
    (-5.0, 0.0),   // center of buoyancy
    (0.53, 0.60),  // prismatic coefficient
    (4.34, 5.14),  // length / displacement
    (2.81, 5.35),  // beam / draught
    (2.73, 3.64),  // length / beam
];

/// Froude numbers are tested on a fixed grid: 0.125, 0.150, …, 0.450.
const FROUDE_MIN: f64 = 0.125;
const FROUDE_STEP: f64 = 0.025;
const FROUDE_STEPS: usize = 14;

pub fn linear_dataset<R: Rng + ?Sized>(
    rows: usize,
    n_features: usize,
    rng: &mut R,
) -> Result<Dataset, AppError> {
    if n_features == 0 {
        return Err(AppError::config("synthetic data needs at least one feature"));
    }
    let x = DMatrix::from_fn(rows, n_features, |_, _| rng.r#gen::<f64>());
    let y = DVector::from_fn(rows, |i, _| 3.0 * x[(i, 0)] + 2.0);
    let names = (0..n_features).map(|j| format!("x{j}")).collect();
    Dataset::new(x, y, names, "y")
}

pub fn hull_dataset<R: Rng + ?Sized>(rows: usize, noise: f64, rng: &mut R) -> Result<Dataset, AppError> {
    let normal = Normal::new(0.0, noise)
        .map_err(|e| AppError::config(format!("Noise distribution error: {e}")))?;

    let mut x = DMatrix::<f64>::zeros(rows, HULL_RANGES.len() + 1);
    let mut y = DVector::<f64>::zeros(rows);

    for i in 0..rows {
        for (j, &(lo, hi)) in HULL_RANGES.iter().enumerate() {
            x[(i, j)] = rng.gen_range(lo..=hi);
        }
        let froude = FROUDE_MIN + FROUDE_STEP * rng.gen_range(0..FROUDE_STEPS) as f64;
        x[(i, HULL_RANGES.len())] = froude;

        let lcb = x[(i, 0)];
        let cp = x[(i, 1)];
        let wave = 58.0 * (froude / 0.45).powi(6) * (1.0 + 8.0 * (cp - 0.565));
        let trim = 0.3 * (lcb + 2.5) * froude;
        y[i] = 0.3 + wave + trim + normal.sample(rng);
    }

    Dataset::with_yacht_columns(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn linear_target_is_exact() {
        let ds = linear_dataset(12, 4, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(ds.n_rows(), 12);
        assert_eq!(ds.n_features(), 4);
        for i in 0..12 {
            assert_eq!(ds.target()[i], 3.0 * ds.features()[(i, 0)] + 2.0);
        }
    }

    #[test]
    fn hull_rows_stay_in_range() {
        let ds = hull_dataset(200, 0.0, &mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(ds.n_features(), 6);
        assert_eq!(ds.feature_names()[5], "Froude Number");
        for i in 0..ds.n_rows() {
            for (j, &(lo, hi)) in HULL_RANGES.iter().enumerate() {
                let v = ds.features()[(i, j)];
                assert!(v >= lo && v <= hi, "column {j} value {v}");
            }
            let fr = ds.features()[(i, 5)];
            assert!((FROUDE_MIN..=0.45 + 1e-12).contains(&fr));
        }
    }

    #[test]
    fn negative_noise_is_a_config_error() {
        let err = hull_dataset(5, -1.0, &mut StdRng::seed_from_u64(4)).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
