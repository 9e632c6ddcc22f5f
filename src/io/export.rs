//! Export sweep results.
//!
//! - CSV: one row per degree (easy to consume in spreadsheets)
//! - JSON: config, per-degree means and the full per-trial score tables

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::SweepConfig;
use crate::error::AppError;
use crate::fit::SweepResult;

/// One line of the per-degree table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeRow {
    pub degree: usize,
    pub n_columns: usize,
    pub mean_r2: f64,
    pub mean_mse: f64,
}

/// JSON export schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub n_rows: usize,
    pub config: SweepConfig,
    pub best_degree: Option<usize>,
    pub degrees: Vec<DegreeRow>,
    /// `trials × degrees`.
    pub r2_by_trial: Vec<Vec<f64>>,
    /// `trials × degrees`.
    pub mse_by_trial: Vec<Vec<f64>>,
}

pub fn degree_rows(result: &SweepResult) -> Vec<DegreeRow> {
    result
        .degrees
        .iter()
        .enumerate()
        .map(|(i, &degree)| DegreeRow {
            degree,
            n_columns: result.n_columns[i],
            mean_r2: result.mean_r2[i],
            mean_mse: result.mean_mse[i],
        })
        .collect()
}

/// Write the per-degree table as CSV.
pub fn write_sweep_csv(path: &Path, result: &SweepResult) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::io("create export CSV", path, e))?;
    let mut writer = csv::Writer::from_writer(file);
    for row in degree_rows(result) {
        writer
            .serialize(row)
            .map_err(|e| AppError::Export(format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::io("flush export CSV", path, e))?;
    tracing::info!(path = %path.display(), "sweep CSV written");
    Ok(())
}

/// Write the full sweep as pretty JSON.
pub fn write_sweep_json(path: &Path, result: &SweepResult, n_rows: usize) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::io("create sweep JSON", path, e))?;

    let out = SweepFile {
        tool: "yacht".to_string(),
        generated_at: Utc::now(),
        n_rows,
        config: result.config,
        best_degree: result.best_degree(),
        degrees: degree_rows(result),
        r2_by_trial: result.r2.rows().to_vec(),
        mse_by_trial: result.mse.rows().to_vec(),
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::Export(format!("Failed to write sweep JSON: {e}")))?;
    tracing::info!(path = %path.display(), "sweep JSON written");
    Ok(())
}

/// Read a sweep JSON file back.
pub fn read_sweep_json(path: &Path) -> Result<SweepFile, AppError> {
    let file = File::open(path).map_err(|e| AppError::io("open sweep JSON", path, e))?;
    serde_json::from_reader(file).map_err(|e| AppError::input_format(format!("Invalid sweep JSON: {e}")))
}
