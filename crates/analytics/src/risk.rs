use crate::error::AnalyticsError;
use core_types::{RiskFree, ensure_non_empty, ensure_same_len};
use moments::{mean, std_dev};
use returns::{active_premium, excess};

/// Mean excess return over the standard deviation of the excess returns.
///
/// The divisor is the dispersion of `returns - risk_free`, not of the raw
/// returns. `scale` and `geometric` are accepted so every ratio shares one
/// calling shape; the ratio itself is per period and not annualized.
pub fn sharpe_ratio(
    returns: &[f64],
    risk_free: &RiskFree,
    _scale: u32,
    _geometric: bool,
) -> Result<f64, AnalyticsError> {
    let excess = excess(returns, risk_free)?;
    Ok(mean(&excess)? / std_dev(&excess)?)
}

/// Largest peak-to-trough decline of the compounded wealth path, as a positive fraction.
///
/// The running peak starts at zero, so the first period's wealth is the first
/// peak. A path that has never risen above zero wealth counts as a total
/// loss. An empty series has no drawdown.
pub fn max_drawdown(returns: &[f64]) -> f64 {
    let mut wealth = 1.0;
    let mut peak = 0.0;
    let mut deepest = 0.0_f64;
    for r in returns {
        wealth *= 1.0 + r;
        if wealth > peak {
            peak = wealth;
        }
        let drawdown = if peak > 0.0 { 1.0 - wealth / peak } else { 1.0 };
        deepest = deepest.max(drawdown);
    }
    deepest
}

/// Per-period drawdown `W_t / P_t - 1`, same length as `returns`, never positive.
///
/// The peak series is the running maximum of the wealth path prefixed with an
/// initial wealth of 1.
pub fn drawdowns(returns: &[f64]) -> Vec<f64> {
    let mut wealth = 1.0;
    let mut peak = 1.0_f64;
    returns
        .iter()
        .map(|r| {
            wealth *= 1.0 + r;
            peak = peak.max(wealth);
            wealth / peak - 1.0
        })
        .collect()
}

/// Annualized standard deviation of the active return `ra - rb`.
pub fn tracking_error(ra: &[f64], rb: &[f64], scale: u32) -> Result<f64, AnalyticsError> {
    ensure_same_len(ra.len(), rb.len())?;
    let active: Vec<f64> = ra.iter().zip(rb).map(|(a, b)| a - b).collect();
    Ok(std_dev(&active)? * f64::from(scale).sqrt())
}

/// Geometric active premium per unit of tracking error.
pub fn information_ratio(ra: &[f64], rb: &[f64], scale: u32) -> Result<f64, AnalyticsError> {
    let premium = active_premium(ra, rb, scale, true)?;
    Ok(premium / tracking_error(ra, rb, scale)?)
}

/// `ln((max - min) / sd) / ln(n)`.
pub fn hurst_index(data: &[f64]) -> Result<f64, AnalyticsError> {
    ensure_non_empty(data, "series")?;
    let (lo, hi) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| (lo.min(*x), hi.max(*x)));
    let range = hi - lo;
    Ok((range / std_dev(data)?).ln() / (data.len() as f64).ln())
}
