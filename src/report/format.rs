//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::data::{ColumnStats, CorrelationMatrix};
use crate::domain::Dataset;
use crate::fit::{SingleFit, SweepResult};

/// Dataset header: source size and column names.
pub fn format_dataset_header(dataset: &Dataset, source: &str) -> String {
    let mut out = String::new();
    out.push_str("=== yacht - residuary resistance study ===\n");
    out.push_str(&format!("Data: {source}\n"));
    out.push_str(&format!(
        "Rows: {} | features: {} | target: {}\n",
        dataset.n_rows(),
        dataset.n_features(),
        dataset.target_name()
    ));
    out
}

/// Per-column descriptive statistics, one line per column.
pub fn format_describe(stats: &[ColumnStats]) -> String {
    let mut out = String::new();
    out.push_str("Summary statistics:\n");
    out.push_str(
        format!(
            "{:<36} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}\n",
            "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<36} {:-<6} {:-<9} {:-<9} {:-<9} {:-<9} {:-<9} {:-<9} {:-<9}\n",
            "", "", "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for s in stats {
        out.push_str(&format!(
            "{:<36} {:>6} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3}\n",
            truncate(&s.name, 36),
            s.count,
            s.mean,
            s.std,
            s.min,
            s.q25,
            s.median,
            s.q75,
            s.max
        ));
    }
    out
}

/// Correlation matrix with numbered columns (names listed on the rows).
pub fn format_correlation(corr: &CorrelationMatrix) -> String {
    let mut out = String::new();
    out.push_str("Correlation (Pearson):\n");

    let mut header = format!("{:<40}", "");
    for i in 0..corr.names.len() {
        header.push_str(&format!(" {:>7}", format!("[{}]", i + 1)));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for (i, (name, row)) in corr.names.iter().zip(&corr.values).enumerate() {
        let mut line = format!("{:<40}", format!("[{}] {}", i + 1, truncate(name, 35)));
        for v in row {
            line.push_str(&format!(" {:>7}", fmt_opt(*v, 3)));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// One single-shot fit: sizes, scores and optionally the coefficients.
pub fn format_single_fit(fit: &SingleFit, show_coefficients: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:\n", fit.feature_map.display_name()));
    out.push_str(&format!(
        "- split: train={} test={} | columns={}\n",
        fit.n_train, fit.n_test, fit.n_columns
    ));
    out.push_str(&format!(
        "- Score: {:.3} | MSE: {:.3}\n",
        fit.scores.r2, fit.scores.mse
    ));

    if show_coefficients {
        out.push_str(&format!("- {:<44} {:>14.6}\n", "intercept", fit.model.intercept));
        for (name, coef) in fit.column_names.iter().zip(fit.model.coefficients.iter()) {
            out.push_str(&format!("- {:<44} {:>14.6}\n", truncate(name, 44), coef));
        }
    }
    out
}

/// Per-degree sweep table; `*` marks the degree with the best mean R².
pub fn format_sweep(result: &SweepResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Degree sweep: trials={} | test size={} | degrees 0..={}\n",
        result.config.trials, result.config.split.test_size, result.config.max_degree
    ));
    out.push_str(format!("  {:>6} {:>8} {:>12} {:>14}\n", "degree", "columns", "mean R2", "mean MSE").trim_end());
    out.push('\n');
    out.push_str(format!("  {:-<6} {:-<8} {:-<12} {:-<14}\n", "", "", "", "").trim_end());
    out.push('\n');

    let best = result.best_degree();
    for (i, &degree) in result.degrees.iter().enumerate() {
        let chosen = if Some(degree) == best { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:>6} {:>8} {:>12} {:>14}\n",
            degree,
            result.n_columns[i],
            fmt_opt(result.mean_r2[i], 4),
            fmt_opt(result.mean_mse[i], 4),
        ));
    }

    match best {
        Some(d) => out.push_str(&format!("Best mean R2 at degree {d}\n")),
        None => out.push_str("No degree produced a finite mean R2\n"),
    }
    out
}

/// Compact numbers: fixed precision, scientific once magnitudes get large.
fn fmt_opt(v: f64, precision: usize) -> String {
    if !v.is_finite() {
        return "-".to_string();
    }
    if v.abs() >= 1e6 {
        format!("{v:.2e}")
    } else {
        format!("{v:.precision$}")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
