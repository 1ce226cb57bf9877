use core_types::{CoreError, DownsideMethod, ensure_non_empty};

/// Shortfalls (`threshold - r`) of the observations strictly below `threshold`,
/// together with the count used to normalize their sums.
fn shortfalls(
    data: &[f64],
    threshold: f64,
    method: DownsideMethod,
) -> Result<(Vec<f64>, f64), CoreError> {
    ensure_non_empty(data, "series")?;
    let below: Vec<f64> = data
        .iter()
        .filter(|r| **r < threshold)
        .map(|r| threshold - r)
        .collect();
    let count = match method {
        DownsideMethod::Full => data.len(),
        DownsideMethod::Subset => below.len(),
    };
    Ok((below, count as f64))
}

/// Mean squared shortfall below `threshold`.
///
/// With `DownsideMethod::Subset` and nothing below the threshold the result is NaN.
pub fn downside_variance(
    data: &[f64],
    threshold: f64,
    method: DownsideMethod,
) -> Result<f64, CoreError> {
    let (below, count) = shortfalls(data, threshold, method)?;
    Ok(below.iter().map(|s| s * s).sum::<f64>() / count)
}

pub fn downside_deviation(
    data: &[f64],
    threshold: f64,
    method: DownsideMethod,
) -> Result<f64, CoreError> {
    Ok(downside_variance(data, threshold, method)?.sqrt())
}

/// Mean shortfall below `threshold`, not squared.
pub fn downside_potential(
    data: &[f64],
    threshold: f64,
    method: DownsideMethod,
) -> Result<f64, CoreError> {
    let (below, count) = shortfalls(data, threshold, method)?;
    Ok(below.iter().sum::<f64>() / count)
}
