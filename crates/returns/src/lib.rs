//! # Returns Calculator
//!
//! Derives and transforms return series: simple returns from a price path,
//! leveraged returns, excess returns over a risk-free input, and cumulative or
//! annualized aggregates.
//!
//! ## Architectural Principles
//!
//! - **Pure transformation:** every function takes borrowed slices and returns
//!   a fresh value. Nothing here holds state between calls.
//! - **Leaf crate:** depends only on `core-types`, so every higher layer
//!   (moments, CAPM, risk metrics, market timing) can build on it.
//!
//! ## Public API
//!
//! - `ReturnsCalculator`: an owned return series with the transforms as methods.
//! - `from_prices`, `with_leverage`, `excess`, `cumulative`: the same transforms
//!   as free functions over slices.
//! - `cum_sum`, `cum_prod`: running aggregates.
//! - `annualized_return`, `active_premium`: per-year aggregates driven by `scale`.

pub mod annualized;
pub mod calculator;
pub mod series;

pub use annualized::{active_premium, annualized_return};
pub use calculator::{ReturnsCalculator, cumulative, excess, from_prices, with_leverage};
pub use core_types::CoreError;
pub use series::{cum_prod, cum_sum};
