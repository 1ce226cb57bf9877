//! # Shared types for the performance statistics workspace
//!
//! Layer 0 of the workspace. Every other crate depends on the vocabulary defined
//! here: the risk-free input, the closed enumerations that select a formula
//! variant, the periodicity constants and the base error taxonomy.
//!
//! ## Public API
//!
//! - `RiskFree`: a scalar rate or a per-period series.
//! - `SkewnessEstimator`, `KurtosisEstimator`, `DownsideMethod`, `TimingModel`:
//!   formula selectors, parseable from their string tags.
//! - `Frequency`: conventional periods-per-year values for `scale` arguments.
//! - `CoreError`: the input-validation errors shared by the pure calculators.

pub mod enums;
pub mod error;
pub mod types;

// Re-export the core types to provide a clean public API.
pub use enums::{DownsideMethod, KurtosisEstimator, SkewnessEstimator, TimingModel};
pub use error::CoreError;
pub use types::{Frequency, RiskFree, ensure_non_empty, ensure_same_len};
