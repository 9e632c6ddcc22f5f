//! Dataset helpers that are not I/O: descriptive statistics and synthetic samples.

pub mod summary;
pub mod synthetic;

pub use summary::{ColumnStats, CorrelationMatrix, correlation_matrix, describe};
pub use synthetic::{hull_dataset, linear_dataset};
