//! Shared study pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> describe -> linear fit -> degree sweep -> polynomial fit
//!
//! Each stage gets its own RNG stream derived from the run RNG, so the single
//! fits and every sweep trial use independent splits.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{ColumnStats, CorrelationMatrix, correlation_matrix, describe, hull_dataset};
use crate::domain::{DataSource, Dataset, FeatureMap, RunConfig};
use crate::error::AppError;
use crate::fit::{SingleFit, SweepResult, fit_single, run_sweep};
use crate::io::load_dataset;

/// All computed outputs of a full `yacht report` run.
#[derive(Debug, Clone)]
pub struct StudyOutput {
    pub dataset: Dataset,
    pub source: String,
    pub stats: Vec<ColumnStats>,
    pub correlation: CorrelationMatrix,
    pub linear: SingleFit,
    pub sweep: SweepResult,
    pub poly: SingleFit,
}

/// Run RNG: seeded when a seed is configured, OS entropy otherwise.
pub fn run_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Child RNG for one pipeline stage.
pub fn stage_rng(run: &mut StdRng) -> StdRng {
    StdRng::seed_from_u64(run.r#gen())
}

/// Load the configured data source; returns the dataset and a label for reports.
pub fn load_source(config: &RunConfig, run: &mut StdRng) -> Result<(Dataset, String), AppError> {
    match &config.source {
        DataSource::File(path) => Ok((load_dataset(path)?, path.display().to_string())),
        DataSource::Synthetic { rows, noise } => {
            let dataset = hull_dataset(*rows, *noise, &mut stage_rng(run))?;
            tracing::info!(rows, noise, "synthetic dataset generated");
            Ok((dataset, format!("synthetic ({rows} rows, noise sd {noise})")))
        }
    }
}

/// Execute the full study.
pub fn run_study(config: &RunConfig) -> Result<StudyOutput, AppError> {
    config.validate()?;
    let mut run = run_rng(config.seed);
    let (dataset, source) = load_source(config, &mut run)?;
    run_study_with_dataset(dataset, source, config, &mut run)
}

/// Execute the study on an already loaded dataset.
pub fn run_study_with_dataset(
    dataset: Dataset,
    source: String,
    config: &RunConfig,
    run: &mut StdRng,
) -> Result<StudyOutput, AppError> {
    let stats = describe(&dataset);
    let correlation = correlation_matrix(&dataset);

    let linear = fit_single(&dataset, FeatureMap::Raw, &config.split, &mut stage_rng(run))?;
    let sweep = run_sweep(&dataset, config.sweep, &mut stage_rng(run))?;
    let poly = fit_single(
        &dataset,
        FeatureMap::Polynomial(config.poly_degree),
        &config.split,
        &mut stage_rng(run),
    )?;

    Ok(StudyOutput {
        dataset,
        source,
        stats,
        correlation,
        linear,
        sweep,
        poly,
    })
}
