use crate::error::ConfigError;
use core_types::{DownsideMethod, Frequency, KurtosisEstimator, SkewnessEstimator, TimingModel};
use serde::{Deserialize, Serialize};

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub risk_free: RiskFreeSettings,
}

/// Formula choices and scaling shared by every metric in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Periods per year: 252 daily, 52 weekly, 12 monthly, 4 quarterly.
    pub scale: u32,
    /// Compound returns when aggregating instead of summing them.
    pub geometric: bool,
    /// Minimum acceptable return, the threshold for downside statistics.
    pub mar: f64,
    pub downside_method: DownsideMethod,
    pub skewness_estimator: SkewnessEstimator,
    pub kurtosis_estimator: KurtosisEstimator,
    pub timing_model: TimingModel,
}

/// The risk-free rate used when no per-period risk-free column is supplied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFreeSettings {
    /// Per-period rate, already scaled to the sampling frequency.
    pub rate: f64,
}

// --- Default Implementations ---
// A missing file or section falls back to monthly data, geometric compounding
// and a zero threshold.

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            scale: Frequency::Monthly.periods_per_year(),
            geometric: true,
            mar: 0.0,
            downside_method: DownsideMethod::Full,
            skewness_estimator: SkewnessEstimator::Moment,
            kurtosis_estimator: KurtosisEstimator::Moment,
            timing_model: TimingModel::TreynorMazuy,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.scale == 0 {
            return Err(invalid("analysis.scale", "must be a positive number of periods per year"));
        }
        if !self.analysis.mar.is_finite() {
            return Err(invalid("analysis.mar", "must be a finite number"));
        }
        if !self.risk_free.rate.is_finite() {
            return Err(invalid("risk_free.rate", "must be a finite number"));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { key, reason: reason.to_string() }
}
