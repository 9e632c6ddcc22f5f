//! Fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit one feature map on one split and score it (`fitter`)
//! - single-shot fits on their own random split (`single`)
//! - the repeated-split polynomial degree sweep (`sweep`)

pub mod fitter;
pub mod single;
pub mod sweep;

pub use fitter::*;
pub use single::*;
pub use sweep::*;
