//! Input/output helpers.
//!
//! - whitespace-table ingest (`ingest`)
//! - sweep exports (CSV/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
