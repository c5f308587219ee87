//! Shared binning and density histograms.
//!
//! Both samples are binned with one shared edge sequence spanning their
//! combined range, and each sample is normalized to a probability density
//! (the area under each histogram integrates to 1). That keeps samples of
//! different sizes visually and statistically comparable when overlaid.

use serde::Serialize;

use crate::SimulationError;

/// Shared bin edges applied identically to both samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinningScheme {
    edges: Vec<f64>,
}

impl BinningScheme {
    /// Computes a shared binning scheme for two samples.
    ///
    /// `requested_bins == 0` selects an automatic count via Sturges' rule on
    /// the larger sample, so the choice is deterministic in the input
    /// lengths; any positive request is used verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InsufficientData`] if either sample is
    /// empty.
    #[expect(clippy::cast_precision_loss)]
    pub fn compute(
        a: &[f64],
        b: &[f64],
        requested_bins: usize,
    ) -> Result<Self, SimulationError> {
        if a.is_empty() || b.is_empty() {
            return Err(SimulationError::InsufficientData { needed: 1, got: 0 });
        }

        let num_bins = if requested_bins == 0 {
            sturges(a.len().max(b.len()))
        } else {
            requested_bins
        };

        let min = a
            .iter()
            .chain(b)
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max = a
            .iter()
            .chain(b)
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let mut range = max - min;
        if range <= 0.0 {
            // All observations coincide; give the single point a unit-wide
            // home so densities stay finite.
            range = 1.0;
        }

        let width = range / num_bins as f64;
        let edges = (0..=num_bins).map(|i| min + i as f64 * width).collect();
        Ok(Self { edges })
    }

    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    #[must_use]
    pub fn num_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// Bins `sample` and normalizes the counts to a probability density.
    ///
    /// Values outside the scheme's range are ignored; for the samples the
    /// scheme was computed from there are none.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn density(&self, sample: &[f64]) -> Vec<f64> {
        let num_bins = self.num_bins();
        let min = self.edges[0];
        let max = self.edges[num_bins];
        let width = (max - min) / num_bins as f64;

        let mut counts = vec![0_u64; num_bins];
        for &value in sample {
            if value < min || value > max {
                continue;
            }
            // The final edge is inclusive so the maximum lands in the last bin.
            let index = (((value - min) / width).floor() as usize).min(num_bins - 1);
            counts[index] += 1;
        }

        let normalizer = sample.len() as f64 * width;
        counts
            .iter()
            .map(|&count| count as f64 / normalizer)
            .collect()
    }
}

/// Sturges' rule: `ceil(log2(n)) + 1` bins for a sample of size `n`.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn sturges(n: usize) -> usize {
    (n as f64).log2().ceil() as usize + 1
}

/// Overlay-ready histogram: shared edges plus one density per sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayHistogram {
    pub edges: Vec<f64>,
    pub density_a: Vec<f64>,
    pub density_b: Vec<f64>,
}

impl OverlayHistogram {
    #[must_use]
    pub fn new(scheme: &BinningScheme, a: &[f64], b: &[f64]) -> Self {
        Self {
            edges: scheme.edges().to_vec(),
            density_a: scheme.density(a),
            density_b: scheme.density(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(density: &[f64], edges: &[f64]) -> f64 {
        density
            .iter()
            .zip(edges.windows(2))
            .map(|(d, edge)| d * (edge[1] - edge[0]))
            .sum()
    }

    #[test]
    fn explicit_request_is_used_verbatim() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let scheme = BinningScheme::compute(&a, &b, 7).unwrap();
        assert_eq!(scheme.num_bins(), 7);
        assert_eq!(scheme.edges().len(), 8);
    }

    #[test]
    fn auto_request_follows_sturges_on_larger_sample() {
        let a: Vec<f64> = (0..1000).map(f64::from).collect();
        let b: Vec<f64> = (0..10000).map(f64::from).collect();
        let scheme = BinningScheme::compute(&a, &b, 0).unwrap();
        // ceil(log2(10000)) + 1 = 15
        assert_eq!(scheme.num_bins(), 15);
        // Deterministic: same lengths, same scheme.
        let again = BinningScheme::compute(&a, &b, 0).unwrap();
        assert_eq!(scheme, again);
    }

    #[test]
    fn edges_span_combined_range() {
        let a = [-3.0, 1.0];
        let b = [0.5, 9.0];
        let scheme = BinningScheme::compute(&a, &b, 4).unwrap();
        let edges = scheme.edges();
        assert_eq!(edges[0], -3.0);
        assert!((edges[edges.len() - 1] - 9.0).abs() < 1e-12);
    }

    #[test]
    fn densities_integrate_to_one_for_unequal_sizes() {
        let a: Vec<f64> = (0..40).map(f64::from).collect();
        let b: Vec<f64> = (0..400).map(|i| f64::from(i) * 0.1).collect();
        let scheme = BinningScheme::compute(&a, &b, 12).unwrap();
        assert!((area(&scheme.density(&a), scheme.edges()) - 1.0).abs() < 1e-9);
        assert!((area(&scheme.density(&b), scheme.edges()) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn constant_samples_stay_finite() {
        let a = [5.0; 10];
        let b = [5.0; 3];
        let scheme = BinningScheme::compute(&a, &b, 4).unwrap();
        let density = scheme.density(&a);
        assert!(density.iter().all(|d| d.is_finite()));
        assert!((area(&density, scheme.edges()) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_sample_is_rejected() {
        let err = BinningScheme::compute(&[], &[1.0], 5).unwrap_err();
        assert_eq!(err, SimulationError::InsufficientData { needed: 1, got: 0 });
    }

    #[test]
    fn overlay_uses_shared_edges() {
        let a = [1.0, 2.0, 2.5, 3.0];
        let b = [2.0, 3.0, 4.0];
        let scheme = BinningScheme::compute(&a, &b, 6).unwrap();
        let overlay = OverlayHistogram::new(&scheme, &a, &b);
        assert_eq!(overlay.edges, scheme.edges());
        assert_eq!(overlay.density_a.len(), 6);
        assert_eq!(overlay.density_b.len(), 6);
    }
}
