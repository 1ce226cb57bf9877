use crate::capm::Capm;
use crate::error::AnalyticsError;
use crate::report::{PerformanceReport, defined};
use crate::risk::{hurst_index, information_ratio, max_drawdown, sharpe_ratio, tracking_error};
use crate::timing::market_timing;
use configuration::AnalysisSettings;
use core_types::{RiskFree, ensure_non_empty, ensure_same_len};
use moments::{downside_deviation, downside_potential, kurtosis, skewness, std_dev_annualized};
use returns::{active_premium, annualized_return, cumulative};

/// A stateless calculator for deriving a performance report from return series.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    settings: AnalysisSettings,
}

impl AnalyticsEngine {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// The main entry point for calculating performance metrics.
    ///
    /// # Arguments
    ///
    /// * `ra` - Asset returns, one per period.
    /// * `rb` - Benchmark returns over the same periods.
    /// * `risk_free` - A scalar rate or a per-period series as long as `ra`.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PerformanceReport` or an `AnalyticsError` when
    /// the inputs are empty or do not line up.
    #[tracing::instrument(name = "analytics_calculate", skip_all, fields(n = ra.len()))]
    pub fn calculate(
        &self,
        ra: &[f64],
        rb: &[f64],
        risk_free: &RiskFree,
    ) -> Result<PerformanceReport, AnalyticsError> {
        ensure_non_empty(ra, "asset returns")?;
        ensure_same_len(ra.len(), rb.len())?;
        risk_free.check_len(ra.len())?;

        let s = &self.settings;
        let mut report = PerformanceReport::new(ra.len(), s.scale, s.timing_model);

        self.calculate_returns(ra, rb, &mut report)?;
        self.calculate_risk(ra, risk_free, &mut report)?;
        self.calculate_shape(ra, &mut report)?;
        self.calculate_relative(ra, rb, risk_free, &mut report)?;
        self.calculate_timing(ra, rb, risk_free, &mut report);

        Ok(report)
    }

    fn calculate_returns(
        &self,
        ra: &[f64],
        rb: &[f64],
        report: &mut PerformanceReport,
    ) -> Result<(), AnalyticsError> {
        let s = &self.settings;
        report.cumulative_return = defined(cumulative(ra, s.geometric));
        report.annualized_return = defined(annualized_return(ra, s.scale, s.geometric)?);
        report.active_premium = defined(active_premium(ra, rb, s.scale, s.geometric)?);
        Ok(())
    }

    fn calculate_risk(
        &self,
        ra: &[f64],
        risk_free: &RiskFree,
        report: &mut PerformanceReport,
    ) -> Result<(), AnalyticsError> {
        let s = &self.settings;
        report.annualized_std_dev = defined(std_dev_annualized(ra, s.scale)?);
        report.sharpe_ratio = defined(sharpe_ratio(ra, risk_free, s.scale, s.geometric)?);
        report.max_drawdown = defined(max_drawdown(ra));
        report.downside_deviation = defined(downside_deviation(ra, s.mar, s.downside_method)?);
        report.downside_potential = defined(downside_potential(ra, s.mar, s.downside_method)?);
        Ok(())
    }

    fn calculate_shape(
        &self,
        ra: &[f64],
        report: &mut PerformanceReport,
    ) -> Result<(), AnalyticsError> {
        let s = &self.settings;
        report.skewness = defined(skewness(ra, s.skewness_estimator)?);
        report.kurtosis = defined(kurtosis(ra, s.kurtosis_estimator)?);
        report.hurst_index = defined(hurst_index(ra)?);
        Ok(())
    }

    fn calculate_relative(
        &self,
        ra: &[f64],
        rb: &[f64],
        risk_free: &RiskFree,
        report: &mut PerformanceReport,
    ) -> Result<(), AnalyticsError> {
        let s = &self.settings;
        report.tracking_error = defined(tracking_error(ra, rb, s.scale)?);
        report.information_ratio = defined(information_ratio(ra, rb, s.scale)?);

        let params = Capm::new(ra, rb)?.parameters(risk_free)?;
        report.beta = defined(params.beta);
        report.alpha = defined(params.alpha);
        report.timing_ratio = defined(params.timing_ratio);
        Ok(())
    }

    /// A regression that cannot be solved leaves the timing fields empty; the
    /// rest of the report stands.
    fn calculate_timing(
        &self,
        ra: &[f64],
        rb: &[f64],
        risk_free: &RiskFree,
        report: &mut PerformanceReport,
    ) {
        match market_timing(ra, rb, risk_free, self.settings.timing_model) {
            Ok(fit) => {
                report.timing_alpha = defined(fit.alpha);
                report.timing_beta = defined(fit.beta);
                report.timing_gamma = defined(fit.gamma);
            }
            Err(e) => {
                tracing::warn!(error = %e, "market timing regression skipped");
            }
        }
    }
}
