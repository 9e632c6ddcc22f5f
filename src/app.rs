//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the data file (or generates a synthetic sample)
//! - runs single fits and the degree sweep
//! - prints reports/plots
//! - writes optional exports

use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Command, StudyArgs};
use crate::domain::{DataSource, FeatureMap, PlotConfig, RunConfig, SplitConfig, SweepConfig};
use crate::error::AppError;
use crate::fit::{SingleFit, SweepResult};

pub mod pipeline;

/// Vertical range of the R² plot; very negative scores are pinned to the bottom.
const R2_PLOT_LIMITS: (f64, f64) = (-0.1, 1.1);

/// Entry point for the `yacht` binary.
pub fn run() -> Result<(), AppError> {
    // `yacht` and `yacht --seed 1` behave like `yacht report ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(&args),
        Command::Describe(args) => handle_describe(&args),
        Command::Fit(args) => handle_fit(&args),
        Command::Sweep(args) => handle_sweep(&args),
    }
}

fn handle_report(args: &StudyArgs) -> Result<(), AppError> {
    let config = run_config_from_args(args);
    let out = pipeline::run_study(&config)?;

    println!("{}", crate::report::format_dataset_header(&out.dataset, &out.source));
    println!("{}", crate::report::format_describe(&out.stats));
    println!("{}", crate::report::format_correlation(&out.correlation));

    print_single_fit(&out.linear, &config);
    print_sweep(&out.sweep, &config);
    print_single_fit(&out.poly, &config);

    export_sweep(&out.sweep, out.dataset.n_rows(), &config)
}

fn handle_describe(args: &StudyArgs) -> Result<(), AppError> {
    let config = run_config_from_args(args);
    config.validate()?;
    let mut run = pipeline::run_rng(config.seed);
    let (dataset, source) = pipeline::load_source(&config, &mut run)?;

    println!("{}", crate::report::format_dataset_header(&dataset, &source));
    println!("{}", crate::report::format_describe(&crate::data::describe(&dataset)));
    println!(
        "{}",
        crate::report::format_correlation(&crate::data::correlation_matrix(&dataset))
    );
    Ok(())
}

fn handle_fit(args: &StudyArgs) -> Result<(), AppError> {
    let config = run_config_from_args(args);
    config.validate()?;
    let mut run = pipeline::run_rng(config.seed);
    let (dataset, _) = pipeline::load_source(&config, &mut run)?;

    // `config.poly_degree` carries `--degree` and has been range-checked.
    let map = match args.degree {
        Some(_) => FeatureMap::Polynomial(config.poly_degree),
        None => FeatureMap::Raw,
    };
    let fit = crate::fit::fit_single(&dataset, map, &config.split, &mut pipeline::stage_rng(&mut run))?;
    print_single_fit(&fit, &config);
    Ok(())
}

fn handle_sweep(args: &StudyArgs) -> Result<(), AppError> {
    let config = run_config_from_args(args);
    config.validate()?;
    let mut run = pipeline::run_rng(config.seed);
    let (dataset, _) = pipeline::load_source(&config, &mut run)?;

    let sweep = crate::fit::run_sweep(&dataset, config.sweep, &mut pipeline::stage_rng(&mut run))?;
    print_sweep(&sweep, &config);
    export_sweep(&sweep, dataset.n_rows(), &config)
}

fn print_single_fit(fit: &SingleFit, config: &RunConfig) {
    println!("{}", crate::report::format_single_fit(fit, config.show_coefficients));
    if config.plot.enabled {
        let title = format!(
            "{}; Score:{:.3}; MSE:{:.3} (x=observed, y=predicted)",
            fit.feature_map.display_name(),
            fit.scores.r2,
            fit.scores.mse
        );
        println!(
            "{}",
            crate::plot::render_scatter(
                &fit.observed,
                &fit.predicted,
                config.plot.width,
                config.plot.height,
                &title
            )
        );
    }
}

fn print_sweep(sweep: &SweepResult, config: &RunConfig) {
    println!("{}", crate::report::format_sweep(sweep));
    if config.plot.enabled {
        let degrees: Vec<f64> = sweep.degrees.iter().map(|&d| d as f64).collect();
        println!(
            "{}",
            crate::plot::render_series(
                &degrees,
                &sweep.mean_r2,
                Some(R2_PLOT_LIMITS),
                config.plot.width,
                config.plot.height,
                "R2 Scores by degree"
            )
        );
        println!(
            "{}",
            crate::plot::render_series(
                &degrees,
                &sweep.mean_mse,
                None,
                config.plot.width,
                config.plot.height,
                "Mean Square Errors by degree"
            )
        );
    }
}

fn export_sweep(sweep: &SweepResult, n_rows: usize, config: &RunConfig) -> Result<(), AppError> {
    if let Some(path) = &config.export_csv {
        crate::io::export::write_sweep_csv(path, sweep)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::export::write_sweep_json(path, sweep, n_rows)?;
    }
    Ok(())
}

pub fn run_config_from_args(args: &StudyArgs) -> RunConfig {
    let source = match (args.synthetic, &args.data) {
        (Some(rows), _) => DataSource::Synthetic {
            rows,
            noise: args.noise,
        },
        (None, Some(path)) => DataSource::File(path.clone()),
        (None, None) => DataSource::File(PathBuf::from("raw/data.csv")),
    };
    let split = SplitConfig {
        test_size: args.test_size,
    };

    RunConfig {
        source,
        seed: args.seed,
        split,
        sweep: SweepConfig {
            trials: args.trials,
            max_degree: args.max_degree,
            split,
        },
        poly_degree: args.degree.unwrap_or(3),
        plot: PlotConfig {
            enabled: !args.no_plot,
            width: args.width,
            height: args.height,
        },
        show_coefficients: args.show_coefficients,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
    }
}

/// Rewrite argv so `yacht` defaults to `yacht report`.
///
/// Rules:
/// - `yacht`                      -> `yacht report`
/// - `yacht --seed 1 ...`         -> `yacht report --seed 1 ...`
/// - `yacht --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "describe" | "fit" | "sweep");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
