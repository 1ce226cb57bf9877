use crate::error::AnalyticsError;
use core_types::{CoreError, RiskFree, ensure_non_empty, ensure_same_len};
use moments::{covariance, mean, variance};
use returns::excess;
use serde::Serialize;

/// CAPM view of an asset (`ra`) against a benchmark (`rb`) over the same periods.
#[derive(Debug, Clone, Copy)]
pub struct Capm<'a> {
    ra: &'a [f64],
    rb: &'a [f64],
}

/// Beta, alpha and timing ratio of one asset/benchmark pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapmParameters {
    pub beta: f64,
    /// Alpha for the risk-free input the parameters were computed with.
    pub alpha: f64,
    pub timing_ratio: f64,
}

impl<'a> Capm<'a> {
    pub fn new(ra: &'a [f64], rb: &'a [f64]) -> Result<Self, AnalyticsError> {
        ensure_same_len(ra.len(), rb.len())?;
        ensure_non_empty(ra, "asset returns")?;
        Ok(Self { ra, rb })
    }

    /// `cov(Ra, Rb) / var(Rb)`. A constant benchmark gives NaN or an infinity.
    pub fn beta(&self) -> Result<f64, AnalyticsError> {
        Ok(beta(self.ra, self.rb)?)
    }

    /// `mean(Ra - Rf) - beta * mean(Rb - Rf)`.
    pub fn alpha(&self, risk_free: &RiskFree) -> Result<f64, AnalyticsError> {
        let beta = self.beta()?;
        let excess_ra = excess(self.ra, risk_free)?;
        let excess_rb = excess(self.rb, risk_free)?;
        Ok(mean(&excess_ra)? - beta * mean(&excess_rb)?)
    }

    /// Up-market beta over down-market beta.
    ///
    /// Periods with `Rb > 0` form the up market; `Rb <= 0` (zero included)
    /// form the down market. A side with no observations yields NaN.
    pub fn timing_ratio(&self) -> Result<f64, AnalyticsError> {
        let (mut up_a, mut up_b, mut down_a, mut down_b) = (vec![], vec![], vec![], vec![]);
        for (a, b) in self.ra.iter().zip(self.rb) {
            if *b > 0.0 {
                up_a.push(*a);
                up_b.push(*b);
            } else {
                down_a.push(*a);
                down_b.push(*b);
            }
        }
        tracing::trace!(up = up_b.len(), down = down_b.len(), "timing ratio buckets");

        let beta_up = bucket_beta(&up_a, &up_b)?;
        let beta_down = bucket_beta(&down_a, &down_b)?;
        Ok(beta_up / beta_down)
    }

    pub fn parameters(&self, risk_free: &RiskFree) -> Result<CapmParameters, AnalyticsError> {
        Ok(CapmParameters {
            beta: self.beta()?,
            alpha: self.alpha(risk_free)?,
            timing_ratio: self.timing_ratio()?,
        })
    }
}

/// `cov(Ra, Rb) / var(Rb)` over two equal-length series.
pub fn beta(ra: &[f64], rb: &[f64]) -> Result<f64, CoreError> {
    Ok(covariance(ra, rb)? / variance(rb)?)
}

fn bucket_beta(ra: &[f64], rb: &[f64]) -> Result<f64, CoreError> {
    if rb.is_empty() {
        return Ok(f64::NAN);
    }
    beta(ra, rb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RB: [f64; 8] = [0.02, -0.01, 0.03, -0.02, 0.01, 0.04, -0.03, 0.0];

    #[test]
    fn beta_of_a_series_against_itself_is_one() {
        let ra = [0.011, -0.004, 0.023, 0.007, -0.015];
        assert_relative_eq!(Capm::new(&ra, &ra).unwrap().beta().unwrap(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn linear_asset_recovers_slope_and_intercept() {
        // Ra = 0.002 + 1.5 * Rb exactly.
        let ra: Vec<f64> = RB.iter().map(|b| 0.002 + 1.5 * b).collect();
        let capm = Capm::new(&ra, &RB).unwrap();
        assert_relative_eq!(capm.beta().unwrap(), 1.5, max_relative = 1e-10);
        assert_relative_eq!(capm.alpha(&RiskFree::Scalar(0.0)).unwrap(), 0.002, max_relative = 1e-9);
    }

    #[test]
    fn alpha_depends_on_the_risk_free_input() {
        // With beta = 1.5 a scalar rate shifts alpha by rf * (beta - 1).
        let ra: Vec<f64> = RB.iter().map(|b| 0.002 + 1.5 * b).collect();
        let capm = Capm::new(&ra, &RB).unwrap();
        let rf = 0.04 / 12.0;
        let expected = 0.002 + rf * (1.5 - 1.0);
        assert_relative_eq!(capm.alpha(&RiskFree::Scalar(rf)).unwrap(), expected, max_relative = 1e-9);

        let series = RiskFree::Series(vec![rf; RB.len()]);
        assert_relative_eq!(capm.alpha(&series).unwrap(), expected, max_relative = 1e-9);
    }

    #[test]
    fn alpha_rejects_a_short_risk_free_series() {
        let capm = Capm::new(&RB, &RB).unwrap();
        let err = capm.alpha(&RiskFree::Series(vec![0.0; 3])).unwrap_err();
        assert!(matches!(err, AnalyticsError::Input(CoreError::DimensionMismatch { .. })));
    }

    #[test]
    fn timing_ratio_compares_up_and_down_betas() {
        // Up-market slope 2, down-market slope 0.5.
        let ra: Vec<f64> = RB.iter().map(|b| if *b > 0.0 { 2.0 * b } else { 0.5 * b }).collect();
        let ratio = Capm::new(&ra, &RB).unwrap().timing_ratio().unwrap();
        assert_relative_eq!(ratio, 4.0, max_relative = 1e-10);
    }

    #[test]
    fn zero_benchmark_return_falls_in_the_down_bucket() {
        // Up market: Ra = 2 Rb. Down market: Ra = 0.001 + 0.5 Rb, which the
        // zero-return period sits on. Counted as up-market it would bend that line.
        let rb = [0.01, 0.02, 0.03, -0.01, -0.02, 0.0];
        let ra = [0.02, 0.04, 0.06, -0.004, -0.009, 0.001];
        let ratio = Capm::new(&ra, &rb).unwrap().timing_ratio().unwrap();
        assert_relative_eq!(ratio, 4.0, max_relative = 1e-10);
    }

    #[test]
    fn missing_down_market_gives_nan() {
        let rb = [0.01, 0.02, 0.03];
        let ratio = Capm::new(&rb, &rb).unwrap().timing_ratio().unwrap();
        assert!(ratio.is_nan());
    }

    #[test]
    fn constant_benchmark_beta_is_undefined() {
        let ra = [0.01, 0.02, 0.03];
        let rb = [0.01, 0.01, 0.01];
        assert!(!Capm::new(&ra, &rb).unwrap().beta().unwrap().is_finite());
    }

    #[test]
    fn mismatched_series_are_rejected() {
        let err = Capm::new(&RB, &RB[..4]).unwrap_err();
        assert_eq!(err, AnalyticsError::Input(CoreError::DimensionMismatch { left: 8, right: 4 }));
    }

    #[test]
    fn parameters_bundle_all_three() {
        let ra: Vec<f64> = RB.iter().map(|b| 0.001 + 0.8 * b).collect();
        let params = Capm::new(&ra, &RB).unwrap().parameters(&RiskFree::default()).unwrap();
        assert_relative_eq!(params.beta, 0.8, max_relative = 1e-10);
        assert_relative_eq!(params.alpha, 0.001, max_relative = 1e-8);
        assert_relative_eq!(params.timing_ratio, 1.0, max_relative = 1e-10);
    }
}
