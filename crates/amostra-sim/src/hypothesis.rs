//! Two-sample hypothesis tests.
//!
//! [`t_test`] compares the sample means with either the pooled-variance
//! (Student's) or the unequal-variance (Welch's) formulation; the caller
//! supplies the equal-variance flag, which the compute pass derives from
//! the variance-equality policy in [`config`](crate::config). [`ks_test`]
//! compares the full empirical distributions and never branches on
//! variances.
//!
//! Both functions are pure: deterministic in their inputs, no mutation, no
//! hidden state. Undersized samples fail with
//! [`SimulationError::InsufficientData`] before any formula runs, so no
//! path produces NaN from a division by zero.

use std::fmt;

use serde::Serialize;

use amostra_stats::{ks, special};

use crate::{SimulationError, summary::SampleSummary};

/// Which hypothesis test produced a [`TestResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestKind {
    TTest,
    Ks,
}

/// Outcome of one hypothesis test: the statistic and its two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    pub kind: TestKind,
    pub statistic: f64,
    pub p_value: f64,
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            TestKind::TTest => "t",
            TestKind::Ks => "KS",
        };
        write!(
            f,
            "{label} statistic: {:.4}, p-value: {:.4}",
            self.statistic, self.p_value
        )
    }
}

fn summarize(values: &[f64]) -> Result<SampleSummary, SimulationError> {
    SampleSummary::new(values).ok_or(SimulationError::InsufficientData {
        needed: 2,
        got: values.len(),
    })
}

/// Independent two-sample t-test with two-sided p-value.
///
/// With `equal_variance` the variances are pooled and the test has
/// `n_a + n_b - 2` degrees of freedom; without it Welch's statistic is used
/// with the Welch–Satterthwaite approximation.
///
/// # Errors
///
/// Returns [`SimulationError::InsufficientData`] if either sample has fewer
/// than two observations.
#[expect(clippy::cast_precision_loss)]
pub fn t_test(a: &[f64], b: &[f64], equal_variance: bool) -> Result<TestResult, SimulationError> {
    let summary_a = summarize(a)?;
    let summary_b = summarize(b)?;
    let n_a = summary_a.count as f64;
    let n_b = summary_b.count as f64;

    let (standard_error, df) = if equal_variance {
        let pooled = ((n_a - 1.0) * summary_a.variance + (n_b - 1.0) * summary_b.variance)
            / (n_a + n_b - 2.0);
        ((pooled * (1.0 / n_a + 1.0 / n_b)).sqrt(), n_a + n_b - 2.0)
    } else {
        let err_sq_a = summary_a.variance / n_a;
        let err_sq_b = summary_b.variance / n_b;
        let df = (err_sq_a + err_sq_b).powi(2)
            / (err_sq_a.powi(2) / (n_a - 1.0) + err_sq_b.powi(2) / (n_b - 1.0));
        ((err_sq_a + err_sq_b).sqrt(), df)
    };

    let difference = summary_a.mean - summary_b.mean;
    let statistic = if standard_error > 0.0 {
        difference / standard_error
    } else if difference.abs() > 0.0 {
        // Zero spread with distinct means: infinite evidence either way.
        f64::INFINITY.copysign(difference)
    } else {
        0.0
    };
    // An infinite statistic decides the test outright; the Welch df is
    // 0/0 (NaN) for two zero-variance samples, which would otherwise make
    // the p-value fall back to 1.
    let p_value = if statistic.is_infinite() {
        0.0
    } else {
        special::student_t_two_sided_p(statistic, df)
    };

    Ok(TestResult {
        kind: TestKind::TTest,
        statistic,
        p_value,
    })
}

/// Two-sample Kolmogorov–Smirnov test with asymptotic two-sided p-value.
///
/// The statistic is the maximum absolute difference between the two
/// empirical CDFs; the p-value evaluates the Kolmogorov survival function
/// at the effective-sample-size-corrected statistic.
///
/// # Errors
///
/// Returns [`SimulationError::InsufficientData`] if either sample has fewer
/// than two observations.
#[expect(clippy::cast_precision_loss)]
pub fn ks_test(a: &[f64], b: &[f64]) -> Result<TestResult, SimulationError> {
    for sample in [a, b] {
        if sample.len() < 2 {
            return Err(SimulationError::InsufficientData {
                needed: 2,
                got: sample.len(),
            });
        }
    }

    let statistic = ks::two_sample_statistic(a, b);
    let n_a = a.len() as f64;
    let n_b = b.len() as f64;
    let effective_n = (n_a * n_b / (n_a + n_b)).sqrt();
    // Small-sample correction from Numerical Recipes' probks usage.
    let lambda = (effective_n + 0.12 + 0.11 / effective_n) * statistic;
    let p_value = special::kolmogorov_sf(lambda);

    Ok(TestResult {
        kind: TestKind::Ks,
        statistic,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_A: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
    const SAMPLE_B: [f64; 4] = [2.0, 3.0, 4.0, 5.0];

    #[test]
    fn pooled_t_matches_analytic_result() {
        // Both samples have variance 5/3; pooled SE = sqrt(5/6).
        let result = t_test(&SAMPLE_A, &SAMPLE_B, true).unwrap();
        let expected = -1.0 / (5.0_f64 / 6.0).sqrt();
        assert!((result.statistic - expected).abs() < 1e-9);
        assert_eq!(result.kind, TestKind::TTest);
        // p for |t| = 1.095 with df = 6 sits well above the threshold.
        assert!(result.p_value > 0.25 && result.p_value < 0.40);
    }

    #[test]
    fn welch_agrees_with_pooled_for_homoscedastic_equal_sizes() {
        // Equal variances and sizes collapse Welch's df to n_a + n_b - 2.
        let pooled = t_test(&SAMPLE_A, &SAMPLE_B, true).unwrap();
        let welch = t_test(&SAMPLE_A, &SAMPLE_B, false).unwrap();
        assert!((pooled.statistic - welch.statistic).abs() < 1e-12);
        assert!((pooled.p_value - welch.p_value).abs() < 1e-12);
    }

    #[test]
    fn welch_diverges_from_pooled_for_heteroscedastic_data() {
        let tight = [0.9, 1.0, 1.1, 1.0];
        let wide = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
        let pooled = t_test(&tight, &wide, true).unwrap();
        let welch = t_test(&tight, &wide, false).unwrap();
        assert!((pooled.statistic - welch.statistic).abs() > 1e-3);
    }

    #[test]
    fn t_statistic_sign_follows_mean_order() {
        let low = [1.0, 2.0, 3.0];
        let high = [11.0, 12.0, 13.0];
        let result = t_test(&low, &high, true).unwrap();
        assert!(result.statistic < 0.0);
        let flipped = t_test(&high, &low, true).unwrap();
        assert!((result.statistic + flipped.statistic).abs() < 1e-12);
    }

    #[test]
    fn clearly_different_means_give_tiny_p() {
        let low: Vec<f64> = (0..50).map(|i| 1.0 + 0.01 * f64::from(i)).collect();
        let high: Vec<f64> = (0..50).map(|i| 100.0 + 0.01 * f64::from(i)).collect();
        let result = t_test(&low, &high, true).unwrap();
        assert!(result.p_value < 1e-9);
    }

    #[test]
    fn single_observation_is_insufficient_for_t() {
        let err = t_test(&[1.0], &SAMPLE_B, true).unwrap_err();
        assert_eq!(err, SimulationError::InsufficientData { needed: 2, got: 1 });
        let err = t_test(&SAMPLE_A, &[], false).unwrap_err();
        assert_eq!(err, SimulationError::InsufficientData { needed: 2, got: 0 });
    }

    #[test]
    fn identical_constant_samples_do_not_reject() {
        let constant = [3.0; 8];
        let result = t_test(&constant, &constant, true).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn distinct_constant_samples_reject_on_both_paths() {
        // Zero spread with distinct means: infinite evidence either way,
        // including on the Welch path where the Satterthwaite df is 0/0.
        for equal_variance in [true, false] {
            let result = t_test(&[3.0; 5], &[7.0; 5], equal_variance).unwrap();
            assert!(result.statistic.is_infinite());
            assert!(result.statistic < 0.0);
            assert_eq!(result.p_value, 0.0);
        }
    }

    #[test]
    fn ks_of_sample_with_itself_is_null() {
        let sample = [0.4, 1.9, 2.6, 3.3, 4.1];
        let result = ks_test(&sample, &sample).unwrap();
        assert_eq!(result.kind, TestKind::Ks);
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn ks_detects_disjoint_distributions() {
        let low: Vec<f64> = (0..8).map(f64::from).collect();
        let high: Vec<f64> = (0..8).map(|i| 100.0 + f64::from(i)).collect();
        let result = ks_test(&low, &high).unwrap();
        assert!((result.statistic - 1.0).abs() < 1e-12);
        assert!(result.p_value < 0.05);
    }

    #[test]
    fn single_observation_is_insufficient_for_ks() {
        let err = ks_test(&[1.0], &SAMPLE_B).unwrap_err();
        assert_eq!(err, SimulationError::InsufficientData { needed: 2, got: 1 });
    }

    #[test]
    fn results_format_with_four_decimals() {
        let result = TestResult {
            kind: TestKind::TTest,
            statistic: -0.123_456,
            p_value: 0.901_234,
        };
        assert_eq!(result.to_string(), "t statistic: -0.1235, p-value: 0.9012");
    }
}
