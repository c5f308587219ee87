//! Per-sample descriptive summaries.

use serde::Serialize;

use amostra_stats::descriptive;

/// Descriptive summary of one generated sample.
///
/// Uses the unbiased sample variance (divisor `n - 1`), which is what the
/// t-test formulas consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl SampleSummary {
    /// Computes the summary of `values`.
    ///
    /// # Returns
    ///
    /// * `Some(summary)` - if `values` has at least two observations
    /// * `None` - otherwise (the sample variance is undefined)
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mean = descriptive::mean(values)?;
        let variance = descriptive::sample_variance(values)?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count: values.len(),
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_known_values() {
        let summary = SampleSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(summary.count, 5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.mean, 3.0);
        assert!((summary.variance - 2.5).abs() < 1e-12);
        assert!((summary.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn summary_requires_two_observations() {
        assert!(SampleSummary::new(&[]).is_none());
        assert!(SampleSummary::new(&[1.0]).is_none());
        assert!(SampleSummary::new(&[1.0, 2.0]).is_some());
    }
}
