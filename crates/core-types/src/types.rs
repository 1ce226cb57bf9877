use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// The risk-free input used to turn returns into excess returns.
///
/// A `Scalar` rate is subtracted from every period; a `Series` is subtracted
/// elementwise and must be as long as the series it is paired with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskFree {
    Scalar(f64),
    Series(Vec<f64>),
}

impl RiskFree {
    /// Rate applicable to period `i`, or `None` past the end of a series.
    pub fn rate_at(&self, i: usize) -> Option<f64> {
        match self {
            RiskFree::Scalar(rate) => Some(*rate),
            RiskFree::Series(rates) => rates.get(i).copied(),
        }
    }

    /// Checks that the risk-free input can be paired with a series of length `n`.
    pub fn check_len(&self, n: usize) -> Result<(), CoreError> {
        match self {
            RiskFree::Scalar(_) => Ok(()),
            RiskFree::Series(rates) => ensure_same_len(n, rates.len()),
        }
    }
}

impl Default for RiskFree {
    fn default() -> Self {
        RiskFree::Scalar(0.0)
    }
}

impl From<f64> for RiskFree {
    fn from(rate: f64) -> Self {
        RiskFree::Scalar(rate)
    }
}

impl From<Vec<f64>> for RiskFree {
    fn from(rates: Vec<f64>) -> Self {
        RiskFree::Series(rates)
    }
}

impl From<&[f64]> for RiskFree {
    fn from(rates: &[f64]) -> Self {
        RiskFree::Series(rates.to_vec())
    }
}

/// Conventional sampling frequencies and their periods per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl Frequency {
    /// The `scale` value used by annualizing metrics.
    pub const fn periods_per_year(self) -> u32 {
        match self {
            Frequency::Daily => 252,
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
        }
    }
}

pub fn ensure_same_len(left: usize, right: usize) -> Result<(), CoreError> {
    if left != right {
        return Err(CoreError::DimensionMismatch { left, right });
    }
    Ok(())
}

pub fn ensure_non_empty(data: &[f64], what: &str) -> Result<(), CoreError> {
    if data.is_empty() {
        return Err(CoreError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(())
}
