use crate::error::AnalyticsError;
use core_types::{RiskFree, TimingModel, ensure_same_len};
use regression::{DesignMatrix, Ols, OlsFit};
use returns::excess;
use serde::Serialize;

/// Coefficients of a market-timing regression plus the full fit behind them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingFit {
    pub model: TimingModel,
    /// Intercept: return not explained by benchmark exposure.
    pub alpha: f64,
    /// Loading on the benchmark excess return.
    pub beta: f64,
    /// Loading on the timing term; positive values indicate timing skill.
    pub gamma: f64,
    pub fit: OlsFit,
}

/// Regresses asset excess returns on `[1, excess_rb, excess_rb * D]`.
///
/// `D` is the benchmark excess return itself for Treynor-Mazuy and the
/// indicator `excess_rb < 0` for Henriksson-Merton.
#[tracing::instrument(name = "market_timing", skip(ra, rb, risk_free), fields(n = ra.len()))]
pub fn market_timing(
    ra: &[f64],
    rb: &[f64],
    risk_free: &RiskFree,
    model: TimingModel,
) -> Result<TimingFit, AnalyticsError> {
    ensure_same_len(ra.len(), rb.len())?;
    let excess_ra = excess(ra, risk_free)?;
    let excess_rb = excess(rb, risk_free)?;

    let timing_term: Vec<f64> = excess_rb
        .iter()
        .map(|x| {
            let d = match model {
                TimingModel::TreynorMazuy => *x,
                TimingModel::HenrikssonMerton => {
                    if *x < 0.0 {
                        1.0
                    } else {
                        0.0
                    }
                }
            };
            x * d
        })
        .collect();

    let design = DesignMatrix::builder()
        .intercept(true)
        .column("excess_benchmark", &excess_rb)
        .column("timing", &timing_term)
        .build()?;
    let fit = Ols::from_design(&design, &excess_ra)?.fit()?;

    let coef = fit.coefficients();
    let (alpha, beta, gamma) = (coef[0], coef[1], coef[2]);
    tracing::debug!(%model, alpha, beta, gamma, "market timing fit");

    Ok(TimingFit { model, alpha, beta, gamma, fit })
}
