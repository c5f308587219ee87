//! Two-sample Kolmogorov–Smirnov statistic.

/// Computes the two-sample KS statistic: the maximum absolute difference
/// between the empirical CDFs of `a` and `b`.
///
/// Both samples are sorted internally and walked in a single merge pass;
/// tied values advance both CDFs before the gap is measured, so ties within
/// or across the samples are handled exactly.
///
/// # Panics
///
/// Panics if either sample is empty (the empirical CDF is undefined).
///
/// # Examples
///
/// ```
/// # use amostra_stats::ks::two_sample_statistic;
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [3.0, 4.0, 5.0, 6.0];
/// assert!((two_sample_statistic(&a, &b) - 0.5).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn two_sample_statistic(a: &[f64], b: &[f64]) -> f64 {
    assert!(
        !a.is_empty() && !b.is_empty(),
        "empirical CDF requires at least one observation per sample"
    );

    let mut a_sorted = a.to_vec();
    a_sorted.sort_by(f64::total_cmp);
    let mut b_sorted = b.to_vec();
    b_sorted.sort_by(f64::total_cmp);

    let n_a = a_sorted.len() as f64;
    let n_b = b_sorted.len() as f64;

    let mut i = 0;
    let mut j = 0;
    let mut statistic = 0.0_f64;
    while i < a_sorted.len() && j < b_sorted.len() {
        let x = a_sorted[i].min(b_sorted[j]);
        while i < a_sorted.len() && a_sorted[i] <= x {
            i += 1;
        }
        while j < b_sorted.len() && b_sorted[j] <= x {
            j += 1;
        }
        let cdf_a = i as f64 / n_a;
        let cdf_b = j as f64 / n_b;
        statistic = statistic.max((cdf_a - cdf_b).abs());
    }

    statistic
}
