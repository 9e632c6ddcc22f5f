//! Application error type.
//!
//! Every failure carries the process exit code `main` should use:
//!
//! - `2`: bad configuration, unreadable/malformed input, export failures
//! - `3`: data shape problems (mismatched rows, empty dataset or split)
//! - `4`: the regression solver could not produce a usable fit

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input format error: {0}")]
    InputFormat(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Fit error: {0}")]
    Fit(String),

    #[error("Export failed: {0}")]
    Export(String),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn input_format(message: impl Into<String>) -> Self {
        Self::InputFormat(message.into())
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::ShapeMismatch(message.into())
    }

    pub fn fit(message: impl Into<String>) -> Self {
        Self::Fit(message.into())
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Io { .. } | Self::InputFormat(_) | Self::Export(_) => 2,
            Self::ShapeMismatch(_) => 3,
            Self::Fit(_) => 4,
        }
    }
}
