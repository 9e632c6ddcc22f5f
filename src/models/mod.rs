//! Regression models.
//!
//! Only ordinary least squares is needed: polynomial regression is OLS on
//! expanded features.

pub mod linear;

pub use linear::*;
