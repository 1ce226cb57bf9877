use core_types::{CoreError, ensure_non_empty, ensure_same_len};

pub fn mean(data: &[f64]) -> Result<f64, CoreError> {
    ensure_non_empty(data, "series")?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample variance, divisor `n - 1`. A single observation gives NaN.
pub fn variance(data: &[f64]) -> Result<f64, CoreError> {
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    Ok(ss / (data.len() as f64 - 1.0))
}

pub fn std_dev(data: &[f64]) -> Result<f64, CoreError> {
    Ok(variance(data)?.sqrt())
}

/// Standard deviation scaled to a year of `scale` periods.
pub fn std_dev_annualized(data: &[f64], scale: u32) -> Result<f64, CoreError> {
    Ok(std_dev(data)? * f64::from(scale).sqrt())
}

/// Sample covariance, divisor `n - 1`.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64, CoreError> {
    ensure_same_len(x.len(), y.len())?;
    let mx = mean(x)?;
    let my = mean(y)?;
    let cross: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
    Ok(cross / (x.len() as f64 - 1.0))
}

/// Pearson correlation.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64, CoreError> {
    let cov = covariance(x, y)?;
    Ok(cov / (std_dev(x)? * std_dev(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const X: [f64; 5] = [2.0, 4.0, 4.0, 5.0, 10.0];
    const Y: [f64; 5] = [1.0, 3.0, 2.0, 6.0, 8.0];

    #[test]
    fn sample_variance_uses_n_minus_one() {
        assert_relative_eq!(mean(&X).unwrap(), 5.0);
        // Squared deviations sum to 36.
        assert_relative_eq!(variance(&X).unwrap(), 9.0);
        assert_relative_eq!(std_dev(&X).unwrap(), 3.0);
        assert_relative_eq!(std_dev_annualized(&X, 4).unwrap(), 6.0);
    }

    #[test]
    fn covariance_and_correlation() {
        // Cross products of deviations: 9 + 1 + 2 + 0 + 20.
        assert_relative_eq!(covariance(&X, &Y).unwrap(), 8.0);
        // var(Y) = (9 + 1 + 4 + 4 + 16) / 4 = 8.5
        let rho = correlation(&X, &Y).unwrap();
        assert_relative_eq!(rho, 8.0 / (3.0 * 8.5f64.sqrt()), max_relative = 1e-12);
        assert_relative_eq!(correlation(&X, &X).unwrap(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn covariance_with_itself_is_variance() {
        assert_relative_eq!(covariance(&X, &X).unwrap(), variance(&X).unwrap());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(mean(&[]), Err(CoreError::InvalidInput(_))));
        assert!(matches!(variance(&[]), Err(CoreError::InvalidInput(_))));
        assert!(matches!(covariance(&[], &[]), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn single_observation_variance_is_undefined() {
        assert!(variance(&[0.3]).unwrap().is_nan());
    }

    #[test]
    fn unequal_lengths_are_a_dimension_mismatch() {
        assert_eq!(
            covariance(&X, &Y[..3]),
            Err(CoreError::DimensionMismatch { left: 5, right: 3 })
        );
    }
}
