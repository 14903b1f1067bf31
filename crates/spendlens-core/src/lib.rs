//! SpendLens Core Library
//!
//! Domain models and analysis logic for the receipt scanner demo.

pub mod analysis;
pub mod error;
pub mod money;

pub use error::{LensError, LensResult};
