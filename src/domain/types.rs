//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - passed between pipeline stages without hidden state
//! - exported to JSON/CSV
//! - constructed directly in tests

use std::path::PathBuf;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Feature columns of the yacht hydrodynamics table, in file order.
pub const FEATURE_NAMES: [&str; 6] = [
    "Center of Buoyancy",
    "Prismatic Coefficient",
    "Length / Displacement",
    "Beam / Draught",
    "Length / Beam",
    "Froude Number",
];

/// Target column (last column of the table).
pub const TARGET_NAME: &str = "Residuary Resistance / Displacement";

/// Number of columns per input row (features + target).
pub const COLUMN_COUNT: usize = FEATURE_NAMES.len() + 1;

/// Highest polynomial degree accepted from configuration.
///
/// Degree 9 over six features already expands to 5005 columns.
pub const MAX_DEGREE: usize = 9;

/// Immutable feature matrix + target vector.
///
/// Invariants (checked by [`Dataset::new`]):
/// - at least one row
/// - `features.nrows() == target.len()`
/// - one name per feature column
#[derive(Debug, Clone)]
pub struct Dataset {
    features: DMatrix<f64>,
    target: DVector<f64>,
    feature_names: Vec<String>,
    target_name: String,
}

impl Dataset {
    pub fn new(
        features: DMatrix<f64>,
        target: DVector<f64>,
        feature_names: Vec<String>,
        target_name: impl Into<String>,
    ) -> Result<Self, AppError> {
        if features.nrows() != target.len() {
            return Err(AppError::shape(format!(
                "row-count mismatch: features have {} rows, target has {}",
                features.nrows(),
                target.len()
            )));
        }
        if features.nrows() == 0 {
            return Err(AppError::shape("empty dataset"));
        }
        if feature_names.len() != features.ncols() {
            return Err(AppError::shape(format!(
                "{} feature names for {} feature columns",
                feature_names.len(),
                features.ncols()
            )));
        }
        Ok(Self {
            features,
            target,
            feature_names,
            target_name: target_name.into(),
        })
    }

    /// Build a dataset with the standard yacht column names.
    pub fn with_yacht_columns(features: DMatrix<f64>, target: DVector<f64>) -> Result<Self, AppError> {
        let names = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        Self::new(features, target, names, TARGET_NAME)
    }

    pub fn n_rows(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn features(&self) -> &DMatrix<f64> {
        &self.features
    }

    pub fn target(&self) -> &DVector<f64> {
        &self.target
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// All columns (features first, then target) as `(name, values)` pairs.
    pub fn columns(&self) -> Vec<(&str, Vec<f64>)> {
        let mut out: Vec<(&str, Vec<f64>)> = self
            .feature_names
            .iter()
            .enumerate()
            .map(|(j, name)| (name.as_str(), self.features.column(j).iter().copied().collect()))
            .collect();
        out.push((self.target_name.as_str(), self.target.iter().copied().collect()));
        out
    }

    /// Copy the given rows (in order) into a new feature matrix / target pair.
    pub fn select_rows(&self, rows: &[usize]) -> (DMatrix<f64>, DVector<f64>) {
        let x = DMatrix::from_fn(rows.len(), self.n_features(), |i, j| self.features[(rows[i], j)]);
        let y = DVector::from_fn(rows.len(), |i, _| self.target[rows[i]]);
        (x, y)
    }
}

/// Goodness-of-fit for one set of held-out predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub r2: f64,
    pub mse: f64,
}

/// How raw features are turned into regression inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureMap {
    /// Raw columns (plain multiple linear regression).
    Raw,
    /// All monomials up to the given total degree, bias column included.
    Polynomial(usize),
}

impl FeatureMap {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> String {
        match self {
            FeatureMap::Raw => "Linear Fit".to_string(),
            FeatureMap::Polynomial(degree) => format!("Degree {degree} Polyfit"),
        }
    }
}

/// Train/test split settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of rows held out for scoring, in `(0, 1)`.
    pub test_size: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self { test_size: 0.4 }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.test_size.is_finite() && self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(AppError::config(format!(
                "test size must be in (0, 1), got {}",
                self.test_size
            )));
        }
        Ok(())
    }
}

/// Degree-sweep settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Number of independent random splits.
    pub trials: usize,
    /// Highest polynomial degree (inclusive); degrees `0..=max_degree` are fit.
    pub max_degree: usize,
    pub split: SplitConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            max_degree: 9,
            split: SplitConfig::default(),
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.trials == 0 {
            return Err(AppError::config("trial count must be > 0"));
        }
        if self.max_degree > MAX_DEGREE {
            return Err(AppError::config(format!(
                "max degree must be <= {MAX_DEGREE}, got {}",
                self.max_degree
            )));
        }
        self.split.validate()
    }

    pub fn degrees(&self) -> std::ops::RangeInclusive<usize> {
        0..=self.max_degree
    }

    pub fn degree_count(&self) -> usize {
        self.max_degree + 1
    }
}

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Whitespace-delimited 7-column table on disk.
    File(PathBuf),
    /// Generated hull-like sample with the given row count.
    Synthetic { rows: usize, noise: f64 },
}

/// Terminal plot settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    pub enabled: bool,
    pub width: usize,
    pub height: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 72,
            height: 20,
        }
    }
}

/// Fully resolved run configuration (built from CLI args).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: DataSource,
    /// RNG seed; `None` draws from OS entropy (runs differ).
    pub seed: Option<u64>,
    /// Split used by single-shot fits.
    pub split: SplitConfig,
    pub sweep: SweepConfig,
    /// Degree of the single-shot polynomial fit in the full report.
    pub poly_degree: usize,
    pub plot: PlotConfig,
    pub show_coefficients: bool,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: DataSource::File(PathBuf::from("raw/data.csv")),
            seed: None,
            split: SplitConfig::default(),
            sweep: SweepConfig::default(),
            poly_degree: 3,
            plot: PlotConfig::default(),
            show_coefficients: false,
            export_csv: None,
            export_json: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.split.validate()?;
        self.sweep.validate()?;
        if self.poly_degree > MAX_DEGREE {
            return Err(AppError::config(format!(
                "polynomial degree must be <= {MAX_DEGREE}, got {}",
                self.poly_degree
            )));
        }
        if let DataSource::Synthetic { rows, noise } = self.source {
            if rows < 2 {
                return Err(AppError::config("synthetic row count must be >= 2"));
            }
            if !(noise.is_finite() && noise >= 0.0) {
                return Err(AppError::config("synthetic noise must be finite and >= 0"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_rejects_row_mismatch() {
        let x = DMatrix::<f64>::zeros(3, 6);
        let y = DVector::<f64>::zeros(2);
        let err = Dataset::with_yacht_columns(x, y).unwrap_err();
        assert!(matches!(err, AppError::ShapeMismatch(_)));
        assert!(err.to_string().contains("row-count mismatch"));
    }

    #[test]
    fn dataset_rejects_empty() {
        let x = DMatrix::<f64>::zeros(0, 6);
        let y = DVector::<f64>::zeros(0);
        let err = Dataset::with_yacht_columns(x, y).unwrap_err();
        assert!(err.to_string().contains("empty dataset"));
    }

    #[test]
    fn select_rows_keeps_requested_order() {
        let x = DMatrix::from_fn(4, 6, |i, j| (i * 10 + j) as f64);
        let y = DVector::from_fn(4, |i, _| i as f64);
        let ds = Dataset::with_yacht_columns(x, y).unwrap();

        let (xs, ys) = ds.select_rows(&[3, 1]);
        assert_eq!(xs.nrows(), 2);
        assert_eq!(xs[(0, 0)], 30.0);
        assert_eq!(xs[(1, 5)], 15.0);
        assert_eq!(ys.as_slice(), &[3.0, 1.0]);
    }

    #[test]
    fn default_constants_match_the_study() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.split.test_size, 0.4);
        assert_eq!(cfg.sweep.trials, 100);
        assert_eq!(cfg.sweep.degree_count(), 10);
        assert_eq!(cfg.poly_degree, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn split_validation_rejects_out_of_range() {
        for bad in [0.0, 1.0, -0.1, f64::NAN] {
            assert!(SplitConfig { test_size: bad }.validate().is_err());
        }
    }

    #[test]
    fn degrees_above_the_limit_are_config_errors() {
        let sweep = SweepConfig {
            max_degree: MAX_DEGREE + 1,
            ..SweepConfig::default()
        };
        assert!(matches!(sweep.validate().unwrap_err(), AppError::Config(_)));

        let edge = SweepConfig {
            max_degree: MAX_DEGREE,
            ..SweepConfig::default()
        };
        assert!(edge.validate().is_ok());

        let run = RunConfig {
            poly_degree: 200,
            ..RunConfig::default()
        };
        let err = run.validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
