//! Numerical building blocks: feature expansion, least squares, splits and scores.

pub mod metrics;
pub mod ols;
pub mod poly;
pub mod split;

pub use metrics::*;
pub use ols::*;
pub use poly::*;
pub use split::*;
