//! Immutable simulation parameters.
//!
//! Parameters are an explicit [`SimulationConfig`] value handed to
//! [`simulation::run`](crate::simulation::run) rather than mutable state
//! shared with a control panel, so a pass can never observe a half-updated
//! configuration.

use serde::Serialize;

use crate::SimulationError;

/// Seed used when the caller does not supply one. Every compute pass
/// re-seeds its own stream, so repeated runs with the same configuration
/// are fully reproducible.
pub const DEFAULT_SEED: u64 = 999;

/// Parameters of one normally distributed sample.
///
/// Validated on construction: the standard deviation must be a positive
/// finite number and the sample must contain at least one observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSpec {
    mean: f64,
    std_dev: f64,
    count: usize,
}

impl SampleSpec {
    /// Creates a validated sample specification.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if `mean` is not
    /// finite, `std_dev` is not a positive finite number, or `count` is
    /// zero.
    pub fn new(mean: f64, std_dev: f64, count: usize) -> Result<Self, SimulationError> {
        if !mean.is_finite() {
            return Err(SimulationError::InvalidParameter {
                param: "mean",
                reason: format!("must be finite, got {mean}"),
            });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                param: "std_dev",
                reason: format!("must be a positive finite number, got {std_dev}"),
            });
        }
        if count == 0 {
            return Err(SimulationError::InvalidParameter {
                param: "count",
                reason: "must be at least 1".to_owned(),
            });
        }
        Ok(Self {
            mean,
            std_dev,
            count,
        })
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Complete input of one compute pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationConfig {
    pub sample_a: SampleSpec,
    pub sample_b: SampleSpec,
    /// Requested histogram bin count; 0 selects an automatic rule.
    pub bins: usize,
    pub seed: u64,
}

impl SimulationConfig {
    /// Creates a configuration with the default seed and automatic binning.
    #[must_use]
    pub fn new(sample_a: SampleSpec, sample_b: SampleSpec) -> Self {
        Self {
            sample_a,
            sample_b,
            bins: 0,
            seed: DEFAULT_SEED,
        }
    }

    /// Applies the variance-equality policy to this configuration.
    #[must_use]
    pub fn assume_equal_variance(&self) -> bool {
        equal_variance_assumed(&self.sample_a, &self.sample_b)
    }
}

/// Decides whether the t-test may pool variances.
///
/// The configured standard deviations are compared literally: two samples
/// are treated as homoscedastic exactly when they were *parameterized* with
/// the same spread, regardless of the spread realized in the draws. A
/// statistical equal-variance test on the realized samples would change the
/// test's semantics, so the literal comparison is kept deliberately.
#[expect(clippy::float_cmp)]
#[must_use]
pub fn equal_variance_assumed(a: &SampleSpec, b: &SampleSpec) -> bool {
    a.std_dev == b.std_dev
}
