//! Reporting utilities: formatted tables for summaries, fits and sweeps.

pub mod format;

pub use format::*;
