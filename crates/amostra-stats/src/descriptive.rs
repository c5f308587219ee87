//! Descriptive statistics for summarizing samples.

/// Computes the arithmetic mean of `values`.
///
/// # Returns
///
/// * `Some(mean)` - if `values` contains at least one element
/// * `None` - if `values` is empty
///
/// # Examples
///
/// ```
/// # use amostra_stats::descriptive::mean;
/// assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the unbiased sample variance of `values` (Bessel's correction,
/// divisor `n - 1`).
///
/// # Returns
///
/// * `Some(variance)` - if `values` contains at least two elements
/// * `None` - otherwise (the sample variance is undefined for fewer)
///
/// # Examples
///
/// ```
/// # use amostra_stats::descriptive::sample_variance;
/// assert_eq!(sample_variance(&[1.0, 2.0, 3.0]), Some(1.0));
/// assert_eq!(sample_variance(&[1.0]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq = values.iter().map(|v| (v - m).powi(2)).sum::<f64>();
    Some(sum_sq / (values.len() - 1) as f64)
}
