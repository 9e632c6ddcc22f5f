//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the immutable `Dataset` (feature matrix + target vector)
//! - run configuration (`SplitConfig`, `SweepConfig`, `RunConfig`)
//! - small result types shared by fits and reports (`Scores`, `FeatureMap`)

pub mod types;

pub use types::*;
