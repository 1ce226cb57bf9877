use crate::basic::mean;
use core_types::{CoreError, KurtosisEstimator, SkewnessEstimator};

/// Central moment sums shared by every estimator.
struct CentralSums {
    n: f64,
    /// Second, third and fourth population central moments (`sum(d^p) / n`).
    m2: f64,
    m3: f64,
    m4: f64,
}

impl CentralSums {
    fn of(data: &[f64]) -> Result<Self, CoreError> {
        let mu = mean(data)?;
        let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
        for x in data {
            let d = x - mu;
            let d2 = d * d;
            s2 += d2;
            s3 += d2 * d;
            s4 += d2 * d2;
        }
        let n = data.len() as f64;
        Ok(Self { n, m2: s2 / n, m3: s3 / n, m4: s4 / n })
    }

    /// Sample variance (`n - 1` divisor) expressed through `m2`.
    fn sample_variance(&self) -> f64 {
        self.m2 * self.n / (self.n - 1.0)
    }
}

/// Skewness of `data` under the chosen estimator.
///
/// `Fisher` is undefined for fewer than three observations and returns NaN.
pub fn skewness(data: &[f64], estimator: SkewnessEstimator) -> Result<f64, CoreError> {
    let c = CentralSums::of(data)?;
    let n = c.n;
    let moment = c.m3 / c.m2.powf(1.5);

    let value = match estimator {
        SkewnessEstimator::Moment => moment,
        SkewnessEstimator::Sample => {
            let s3 = c.sample_variance().powf(1.5);
            // sum((d / s)^3) == n * m3 / s^3
            (n * c.m3 / s3) * n / ((n - 1.0) * (n - 2.0))
        }
        SkewnessEstimator::Fisher => {
            if data.len() < 3 {
                f64::NAN
            } else {
                (n * (n - 1.0)).sqrt() / (n - 2.0) * moment
            }
        }
    };
    tracing::trace!(%estimator, n = data.len(), value, "skewness");
    Ok(value)
}

/// Kurtosis of `data` under the chosen estimator.
///
/// `Fisher` is undefined for fewer than three observations and returns NaN.
pub fn kurtosis(data: &[f64], estimator: KurtosisEstimator) -> Result<f64, CoreError> {
    let c = CentralSums::of(data)?;
    let n = c.n;
    let moment = c.m4 / (c.m2 * c.m2);
    let sample = || {
        let s4 = c.sample_variance().powi(2);
        (n * c.m4 / s4) * n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0))
    };

    let value = match estimator {
        KurtosisEstimator::Moment => moment,
        KurtosisEstimator::Excess => moment - 3.0,
        KurtosisEstimator::Sample => sample(),
        KurtosisEstimator::SampleExcess => {
            sample() - 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0))
        }
        KurtosisEstimator::Fisher => {
            if data.len() < 3 {
                f64::NAN
            } else {
                ((n + 1.0) * (n - 1.0) * (moment - 3.0 * (n - 1.0) / (n + 1.0)))
                    / ((n - 2.0) * (n - 3.0))
            }
        }
    };
    tracing::trace!(%estimator, n = data.len(), value, "kurtosis");
    Ok(value)
}
