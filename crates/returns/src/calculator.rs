use core_types::{CoreError, RiskFree};
use serde::{Deserialize, Serialize};

/// An owned return series with the usual transforms attached.
///
/// Build it from returns you already have (`new`), from a price path
/// (`from_prices`), or from a series scaled by leverage (`leveraged`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnsCalculator {
    returns: Vec<f64>,
}

impl ReturnsCalculator {
    pub fn new(returns: Vec<f64>) -> Self {
        Self { returns }
    }

    /// Simple returns of a price or value path.
    pub fn from_prices(prices: &[f64]) -> Result<Self, CoreError> {
        Ok(Self::new(from_prices(prices)?))
    }

    /// A copy of `returns` scaled by `multiplier`.
    pub fn leveraged(returns: &[f64], multiplier: f64) -> Self {
        Self::new(with_leverage(returns, multiplier))
    }

    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.returns
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    pub fn excess(&self, risk_free: &RiskFree) -> Result<Vec<f64>, CoreError> {
        excess(&self.returns, risk_free)
    }

    pub fn cumulative(&self, geometric: bool) -> f64 {
        cumulative(&self.returns, geometric)
    }
}

impl From<Vec<f64>> for ReturnsCalculator {
    fn from(returns: Vec<f64>) -> Self {
        Self::new(returns)
    }
}

/// `r[i] = (p[i+1] - p[i]) / p[i]`, one element shorter than `prices`.
///
/// Fails when fewer than two prices are given or a divisor price is zero.
pub fn from_prices(prices: &[f64]) -> Result<Vec<f64>, CoreError> {
    if prices.len() < 2 {
        return Err(CoreError::InvalidInput(format!(
            "at least two prices are required, got {}",
            prices.len()
        )));
    }
    if let Some(i) = prices[..prices.len() - 1].iter().position(|p| *p == 0.0) {
        return Err(CoreError::InvalidInput(format!(
            "price at index {i} is zero"
        )));
    }

    let returns: Vec<f64> = prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();
    tracing::trace!(prices = prices.len(), "derived simple returns from prices");
    Ok(returns)
}

pub fn with_leverage(returns: &[f64], multiplier: f64) -> Vec<f64> {
    returns.iter().map(|r| r * multiplier).collect()
}

/// Returns minus the risk-free input, period by period.
pub fn excess(returns: &[f64], risk_free: &RiskFree) -> Result<Vec<f64>, CoreError> {
    risk_free.check_len(returns.len())?;
    Ok(match risk_free {
        RiskFree::Scalar(rate) => returns.iter().map(|r| r - rate).collect(),
        RiskFree::Series(rates) => returns.iter().zip(rates).map(|(r, f)| r - f).collect(),
    })
}

/// Geometric: `prod(1 + r) - 1`. Arithmetic: `sum(r)`. Both are 0 for an empty series.
pub fn cumulative(returns: &[f64], geometric: bool) -> f64 {
    if geometric {
        returns.iter().fold(1.0, |acc, r| acc * (1.0 + r)) - 1.0
    } else {
        returns.iter().sum()
    }
}
