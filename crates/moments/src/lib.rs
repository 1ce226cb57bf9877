//! # Moments & Downside-Risk Engine
//!
//! Sample statistics over raw series: location, dispersion, co-movement,
//! higher moments and the downside family.
//!
//! ## Conventions
//!
//! - **Sample divisor:** variance, standard deviation, covariance and
//!   correlation divide by `n - 1`. Beta, Sharpe, tracking error and the Hurst
//!   index downstream all inherit this choice.
//! - **Malformed vs undefined:** empty or unequal-length input is an error;
//!   a computation that is well-formed but mathematically undefined (one
//!   observation, zero variance, `fisher` below three observations) returns
//!   NaN or an infinity instead.
//!
//! ## Public API
//!
//! - `mean`, `variance`, `std_dev`, `std_dev_annualized`, `covariance`, `correlation`
//! - `skewness`, `kurtosis` selected by `SkewnessEstimator` / `KurtosisEstimator`
//! - `downside_variance`, `downside_deviation`, `downside_potential`
//!   normalized by `DownsideMethod`

pub mod basic;
pub mod downside;
pub mod shape;

pub use basic::{correlation, covariance, mean, std_dev, std_dev_annualized, variance};
pub use core_types::{CoreError, DownsideMethod, KurtosisEstimator, SkewnessEstimator};
pub use downside::{downside_deviation, downside_potential, downside_variance};
pub use shape::{kurtosis, skewness};
