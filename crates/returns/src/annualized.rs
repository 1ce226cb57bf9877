use core_types::{CoreError, ensure_non_empty, ensure_same_len};

/// Annualized return for a series sampled `scale` times per year
/// (252 daily, 52 weekly, 12 monthly, 4 quarterly).
///
/// Geometric compounds the whole path and rescales the exponent to one year;
/// arithmetic multiplies the mean period return by `scale`.
pub fn annualized_return(returns: &[f64], scale: u32, geometric: bool) -> Result<f64, CoreError> {
    ensure_non_empty(returns, "returns")?;
    let n = returns.len() as f64;
    let scale = f64::from(scale);

    if geometric {
        let growth: f64 = returns.iter().map(|r| 1.0 + r).product();
        Ok(growth.powf(scale / n) - 1.0)
    } else {
        let mean = returns.iter().sum::<f64>() / n;
        Ok(mean * scale)
    }
}

/// Annualized asset return minus annualized benchmark return.
pub fn active_premium(
    ra: &[f64],
    rb: &[f64],
    scale: u32,
    geometric: bool,
) -> Result<f64, CoreError> {
    ensure_same_len(ra.len(), rb.len())?;
    Ok(annualized_return(ra, scale, geometric)? - annualized_return(rb, scale, geometric)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(true, 1.01f64.powi(12) - 1.0)]
    #[case(false, 0.12)]
    fn constant_monthly_return(#[case] geometric: bool, #[case] expected: f64) {
        let r = vec![0.01; 24];
        assert_relative_eq!(annualized_return(&r, 12, geometric).unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn geometric_uses_whole_path_length() {
        // Two quarters compound once more to fill the year.
        let r = [0.05, 0.02];
        let expected = (1.05f64 * 1.02).powi(2) - 1.0;
        assert_relative_eq!(annualized_return(&r, 4, true).unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn empty_series_is_invalid() {
        assert!(matches!(annualized_return(&[], 12, true), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn active_premium_is_difference_of_annualized_returns() {
        let ra = vec![0.02; 12];
        let rb = vec![0.01; 12];
        let expected = (1.02f64.powi(12) - 1.0) - (1.01f64.powi(12) - 1.0);
        assert_relative_eq!(active_premium(&ra, &rb, 12, true).unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn active_premium_rejects_unequal_lengths() {
        assert_eq!(
            active_premium(&[0.01, 0.02], &[0.01], 12, true),
            Err(CoreError::DimensionMismatch { left: 2, right: 1 })
        );
    }
}
