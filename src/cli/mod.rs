//! Command-line parsing for the yacht regression study.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "yacht",
    version,
    about = "Residuary-resistance regression study for yacht hull hydrodynamics data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full study: summary tables, linear fit, degree sweep and polynomial fit.
    Report(StudyArgs),
    /// Print summary statistics and the correlation matrix only.
    Describe(StudyArgs),
    /// One fit on one random split (raw features unless `--degree` is given).
    Fit(StudyArgs),
    /// Polynomial degree sweep over repeated random splits.
    Sweep(StudyArgs),
}

/// Options shared by all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct StudyArgs {
    /// Whitespace-delimited 7-column data file (no header).
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Use a generated hull-like dataset with this many rows instead of a file.
    #[arg(long, value_name = "ROWS", conflicts_with = "data")]
    pub synthetic: Option<usize>,

    /// Noise standard deviation for `--synthetic` (ignored when reading `--data`).
    #[arg(long, default_value_t = 0.5)]
    pub noise: f64,

    /// Random seed (splits and synthetic data). Omit for a different run every time.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fraction of rows held out for scoring.
    #[arg(long, default_value_t = 0.4)]
    pub test_size: f64,

    /// Number of random splits in the degree sweep.
    #[arg(long, default_value_t = 100)]
    pub trials: usize,

    /// Highest polynomial degree in the sweep (inclusive, at most 9).
    #[arg(long, default_value_t = 9)]
    pub max_degree: usize,

    /// Polynomial degree of the single fit, at most 9 (report default: 3; `fit` default:
    /// raw features). Ignored by `describe` and `sweep`.
    #[arg(long)]
    pub degree: Option<usize>,

    /// Print fitted coefficients for single fits.
    #[arg(long)]
    pub show_coefficients: bool,

    /// Disable terminal plots.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the per-degree sweep table to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the full sweep (per-trial scores included) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}
