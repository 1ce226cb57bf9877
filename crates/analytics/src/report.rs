use core_types::TimingModel;
use serde::{Deserialize, Serialize};

/// A standardized report of an asset's performance against a benchmark.
///
/// This struct is the final output of the `AnalyticsEngine`. Every metric is
/// an `Option`: `None` means the value is mathematically undefined for the
/// input (NaN or infinite), for example a Sharpe ratio of a constant series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub observations: usize,
    /// Periods per year used for the annualized figures.
    pub scale: u32,

    // I. Return
    pub cumulative_return: Option<f64>,
    pub annualized_return: Option<f64>,
    pub active_premium: Option<f64>,

    // II. Risk and Drawdown
    pub annualized_std_dev: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub max_drawdown: Option<f64>,
    pub downside_deviation: Option<f64>,
    pub downside_potential: Option<f64>,

    // III. Distribution Shape
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub hurst_index: Option<f64>,

    // IV. Benchmark-Relative
    pub tracking_error: Option<f64>,
    pub information_ratio: Option<f64>,
    pub beta: Option<f64>,
    pub alpha: Option<f64>,
    pub timing_ratio: Option<f64>,

    // V. Market Timing
    pub timing_model: TimingModel,
    pub timing_alpha: Option<f64>,
    pub timing_beta: Option<f64>,
    pub timing_gamma: Option<f64>,
}

impl PerformanceReport {
    /// Creates an empty report for `observations` periods sampled `scale` times a year.
    pub fn new(observations: usize, scale: u32, timing_model: TimingModel) -> Self {
        Self {
            observations,
            scale,
            timing_model,
            ..Self::default()
        }
    }

    /// Label/value pairs in display order, for tabular rendering.
    pub fn rows(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("Cumulative return", self.cumulative_return),
            ("Annualized return", self.annualized_return),
            ("Active premium", self.active_premium),
            ("Annualized std dev", self.annualized_std_dev),
            ("Sharpe ratio", self.sharpe_ratio),
            ("Max drawdown", self.max_drawdown),
            ("Downside deviation", self.downside_deviation),
            ("Downside potential", self.downside_potential),
            ("Skewness", self.skewness),
            ("Kurtosis", self.kurtosis),
            ("Hurst index", self.hurst_index),
            ("Tracking error", self.tracking_error),
            ("Information ratio", self.information_ratio),
            ("Beta", self.beta),
            ("Alpha", self.alpha),
            ("Timing ratio", self.timing_ratio),
            ("Timing alpha", self.timing_alpha),
            ("Timing beta", self.timing_beta),
            ("Timing gamma", self.timing_gamma),
        ]
    }
}

/// Maps NaN and infinities to `None`.
pub(crate) fn defined(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
