//! # Performance Analytics Engine
//!
//! Benchmark-relative and risk-adjusted measures of an asset's return series:
//! CAPM beta, alpha and timing ratio, the Sharpe ratio, drawdowns, tracking
//! error, the information ratio, the Hurst index and the Treynor-Mazuy /
//! Henriksson-Merton market-timing regressions.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O. Inputs are borrowed slices plus a `RiskFree`
//!   value; outputs are plain numbers or serializable structs.
//! - **Stateless calculation:** `AnalyticsEngine` holds only its
//!   `AnalysisSettings`. It takes the asset, benchmark and risk-free inputs and
//!   produces a `PerformanceReport`, calling the same free functions a caller
//!   can use directly.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: assembles every metric into one report.
//! - `PerformanceReport`: the standardized report; undefined values are `None`.
//! - `Capm`, `beta`: single-factor parameters.
//! - `sharpe_ratio`, `max_drawdown`, `drawdowns`, `tracking_error`,
//!   `information_ratio`, `hurst_index`: risk and relative-performance metrics.
//! - `market_timing`, `TimingFit`: the market-timing regressions.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

pub mod capm;
pub mod engine;
pub mod error;
pub mod report;
pub mod risk;
pub mod timing;

pub use capm::{Capm, CapmParameters, beta};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::PerformanceReport;
pub use risk::{drawdowns, hurst_index, information_ratio, max_drawdown, sharpe_ratio, tracking_error};
pub use timing::{TimingFit, market_timing};
