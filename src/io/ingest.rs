//! Table ingest.
//!
//! The yacht hydrodynamics file is a whitespace-delimited table with exactly
//! seven numeric columns per row and no header:
//!
//! ```text
//! LCB  Cp  L/D  B/Dr  L/B  Fr  RR
//! ```
//!
//! Design goals:
//! - **Strict schema**: any row with the wrong column count or a non-numeric
//!   value aborts the load with the offending line number (exit code 2)
//! - blank lines (common at the end of the file) are ignored
//! - no fitting logic here

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::{DMatrix, DVector};

use crate::domain::{COLUMN_COUNT, Dataset, FEATURE_NAMES, TARGET_NAME};
use crate::error::AppError;

/// Load the table at `path` into a `Dataset`.
pub fn load_dataset(path: &Path) -> Result<Dataset, AppError> {
    let file = File::open(path).map_err(|e| AppError::io("open data file", path, e))?;
    let dataset = parse_rows(BufReader::new(file), path)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.n_rows(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parse a whitespace-delimited 7-column table.
pub fn parse_table<R: BufRead>(reader: R) -> Result<Dataset, AppError> {
    parse_rows(reader, Path::new("<input>"))
}

/// `source` labels read failures.
fn parse_rows<R: BufRead>(reader: R, source: &Path) -> Result<Dataset, AppError> {
    let n_features = COLUMN_COUNT - 1;
    let mut features = Vec::new();
    let mut target = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| AppError::io("read data file", source, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != COLUMN_COUNT {
            return Err(AppError::input_format(format!(
                "line {line_no}: expected {COLUMN_COUNT} columns, found {}",
                tokens.len()
            )));
        }

        for (col, token) in tokens.iter().enumerate() {
            let value = parse_value(token, line_no, col)?;
            if col < n_features {
                features.push(value);
            } else {
                target.push(value);
            }
        }
    }

    let n_rows = target.len();
    let x = DMatrix::from_row_slice(n_rows, n_features, &features);
    let y = DVector::from_vec(target);
    Dataset::with_yacht_columns(x, y)
}

fn parse_value(token: &str, line_no: usize, col: usize) -> Result<f64, AppError> {
    let name = column_name(col);
    let value: f64 = token.parse().map_err(|_| {
        AppError::input_format(format!(
            "line {line_no}, column {} ({name}): '{token}' is not a number",
            col + 1
        ))
    })?;
    if !value.is_finite() {
        return Err(AppError::input_format(format!(
            "line {line_no}, column {} ({name}): non-finite value '{token}'",
            col + 1
        )));
    }
    Ok(value)
}

fn column_name(col: usize) -> &'static str {
    FEATURE_NAMES.get(col).copied().unwrap_or(TARGET_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
-2.3 0.568 4.78 3.99 3.17 0.125 0.11
-2.3 0.568 4.78 3.99 3.17 0.150  0.27

-5.0 0.530 4.78 3.75 3.15 0.450 49.43
";

    #[test]
    fn parses_rows_and_skips_blank_lines() {
        let ds = parse_table(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(ds.n_rows(), 3);
        assert_eq!(ds.n_features(), 6);
        assert_eq!(ds.features()[(0, 0)], -2.3);
        assert_eq!(ds.features()[(1, 5)], 0.150);
        assert_eq!(ds.features()[(2, 1)], 0.530);
        assert_eq!(ds.target().as_slice(), &[0.11, 0.27, 49.43]);
        assert_eq!(ds.target_name(), TARGET_NAME);
    }

    #[test]
    fn wrong_column_count_reports_line() {
        let err = parse_table(Cursor::new("1 2 3 4 5 6 7\n1 2 3 4 5 6\n")).unwrap_err();
        assert!(matches!(err, AppError::InputFormat(_)));
        assert!(err.to_string().contains("line 2"), "{err}");
        assert!(err.to_string().contains("found 6"), "{err}");
    }

    #[test]
    fn non_numeric_value_names_the_column() {
        let err = parse_table(Cursor::new("1 2 3 4 5 abc 7\n")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Froude Number"), "{msg}");
        assert!(msg.contains("'abc'"), "{msg}");
    }

    #[test]
    fn nan_is_rejected() {
        let err = parse_table(Cursor::new("1 2 3 4 5 6 NaN\n")).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn empty_input_is_a_shape_error() {
        let err = parse_table(Cursor::new("\n\n")).unwrap_err();
        assert!(matches!(err, AppError::ShapeMismatch(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_dataset(Path::new("definitely/not/here.data")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unreadable_bytes_report_the_file_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1 2 3 4 5 6 7\n1 2 \xff\xfe 4 5 6 7\n").unwrap();
        file.flush().unwrap();

        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }), "{err}");
        assert!(err.to_string().contains(&file.path().display().to_string()), "{err}");
        assert_eq!(err.exit_code(), 2);
    }
}
