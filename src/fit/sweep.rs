//! Polynomial-degree sweep over repeated random splits.
//!
//! For each trial we draw one train/test split and reuse it for every degree,
//! so degrees are compared on identical data within a trial. Trials are
//! independent:
//!
//! - one seed per trial is drawn sequentially from the caller's RNG
//! - trials then run in parallel (rayon), each with its own `StdRng`
//! - scores are stored by trial index, so results do not depend on scheduling

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::domain::{Dataset, FeatureMap, Scores, SweepConfig};
use crate::error::AppError;
use crate::fit::fitter::{SplitData, fit_polynomial};
use crate::math::{PolynomialFeatures, split_sizes, train_test_split};

/// Per-trial, per-degree score table (`trials × degrees`).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    n_degrees: usize,
    rows: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    /// Build from per-trial rows; every row must have `n_degrees` entries.
    pub fn from_rows(n_degrees: usize, rows: Vec<Vec<f64>>) -> Result<Self, AppError> {
        if let Some(bad) = rows.iter().find(|r| r.len() != n_degrees) {
            return Err(AppError::shape(format!(
                "score row has {} entries, expected {n_degrees}",
                bad.len()
            )));
        }
        Ok(Self { n_degrees, rows })
    }

    pub fn n_trials(&self) -> usize {
        self.rows.len()
    }

    pub fn n_degrees(&self) -> usize {
        self.n_degrees
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn get(&self, trial: usize, degree_idx: usize) -> Option<f64> {
        self.rows.get(trial).and_then(|r| r.get(degree_idx)).copied()
    }

    /// Mean over trials, one value per degree.
    pub fn column_means(&self) -> Vec<f64> {
        let n = self.rows.len() as f64;
        (0..self.n_degrees)
            .map(|d| self.rows.iter().map(|r| r[d]).sum::<f64>() / n)
            .collect()
    }
}

/// Aggregated result of one sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub config: SweepConfig,
    pub degrees: Vec<usize>,
    /// Expanded design width per degree.
    pub n_columns: Vec<usize>,
    pub r2: ScoreMatrix,
    pub mse: ScoreMatrix,
    pub mean_r2: Vec<f64>,
    pub mean_mse: Vec<f64>,
}

impl SweepResult {
    /// Degree with the highest mean R² (lowest degree wins ties; NaN never wins).
    pub fn best_degree(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (&degree, &r2) in self.degrees.iter().zip(&self.mean_r2) {
            if !r2.is_finite() {
                continue;
            }
            match best {
                Some((_, b)) if r2 <= b => {}
                _ => best = Some((degree, r2)),
            }
        }
        best.map(|(d, _)| d)
    }
}

/// Runs the degree sweep for one dataset.
#[derive(Debug)]
pub struct ModelSweepRunner<'a> {
    dataset: &'a Dataset,
    config: SweepConfig,
    expansions: Vec<PolynomialFeatures>,
}

impl<'a> ModelSweepRunner<'a> {
    /// Validate the configuration against the dataset and prebuild expansions.
    pub fn new(dataset: &'a Dataset, config: SweepConfig) -> Result<Self, AppError> {
        config.validate()?;
        split_sizes(dataset.n_rows(), &config.split)?;

        let expansions = config
            .degrees()
            .map(|d| PolynomialFeatures::new(dataset.n_features(), d))
            .collect();

        Ok(Self {
            dataset,
            config,
            expansions,
        })
    }

    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SweepResult, AppError> {
        tracing::info!(
            trials = self.config.trials,
            max_degree = self.config.max_degree,
            test_size = self.config.split.test_size,
            rows = self.dataset.n_rows(),
            "starting degree sweep"
        );
        for poly in &self.expansions {
            tracing::debug!(
                degree = poly.degree(),
                columns = poly.n_output_features(),
                "expanded feature width"
            );
        }

        let seeds: Vec<u64> = (0..self.config.trials).map(|_| rng.r#gen()).collect();
        let trials: Vec<Vec<Scores>> = seeds
            .par_iter()
            .enumerate()
            .map(|(trial, &seed)| self.run_trial(trial, seed))
            .collect::<Result<_, _>>()?;

        let n_degrees = self.expansions.len();
        let r2 = ScoreMatrix::from_rows(
            n_degrees,
            trials.iter().map(|t| t.iter().map(|s| s.r2).collect()).collect(),
        )?;
        let mse = ScoreMatrix::from_rows(
            n_degrees,
            trials.iter().map(|t| t.iter().map(|s| s.mse).collect()).collect(),
        )?;

        let result = SweepResult {
            config: self.config,
            degrees: self.config.degrees().collect(),
            n_columns: self.expansions.iter().map(|p| p.n_output_features()).collect(),
            mean_r2: r2.column_means(),
            mean_mse: mse.column_means(),
            r2,
            mse,
        };
        tracing::info!(best_degree = ?result.best_degree(), "degree sweep finished");
        Ok(result)
    }

    /// One split, every degree.
    pub fn run_trial(&self, trial: usize, seed: u64) -> Result<Vec<Scores>, AppError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let split = train_test_split(self.dataset.n_rows(), &self.config.split, &mut rng)?;
        let (x_train, y_train) = self.dataset.select_rows(&split.train);
        let (x_test, y_test) = self.dataset.select_rows(&split.test);
        let data = SplitData {
            x_train,
            y_train,
            x_test,
            y_test,
        };

        let mut out = Vec::with_capacity(self.expansions.len());
        for poly in &self.expansions {
            let outcome = fit_polynomial(&data, poly).map_err(|e| match e {
                AppError::Fit(msg) => AppError::fit(format!(
                    "trial {trial}, {}: {msg}",
                    FeatureMap::Polynomial(poly.degree()).display_name()
                )),
                other => other,
            })?;
            tracing::trace!(
                trial,
                degree = poly.degree(),
                r2 = outcome.scores.r2,
                mse = outcome.scores.mse,
                "trial scored"
            );
            out.push(outcome.scores);
        }
        Ok(out)
    }
}

/// Convenience wrapper: build a runner and run it.
pub fn run_sweep<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: SweepConfig,
    rng: &mut R,
) -> Result<SweepResult, AppError> {
    ModelSweepRunner::new(dataset, config)?.run(rng)
}
