/// Running sum, same length as the input.
pub fn cum_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Running product, same length as the input.
pub fn cum_prod(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(1.0, |acc, v| {
            *acc *= v;
            Some(*acc)
        })
        .collect()
}
