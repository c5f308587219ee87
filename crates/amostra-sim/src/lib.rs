//! Two-sample normal simulation core.
//!
//! This crate implements a single compute pass: draw two samples from
//! user-parameterized normal distributions with a seeded stream, bin them
//! into comparable density histograms, and run a two-sample t-test (pooled
//! or Welch, selected by the variance-equality policy) plus a two-sample
//! Kolmogorov–Smirnov test, interpreting both against a fixed 5%
//! significance threshold.
//!
//! # Modules
//!
//! - [`config`]: immutable sample/simulation parameters and the
//!   variance-equality policy
//! - [`generate`]: seeded normal sample generation
//! - [`summary`]: per-sample descriptive summaries
//! - [`hypothesis`]: t-test and KS test
//! - [`binning`]: shared binning and density histograms
//! - [`verdict`]: p-value interpretation
//! - [`simulation`]: the compute pass tying everything together

pub mod binning;
pub mod config;
pub mod generate;
pub mod hypothesis;
pub mod simulation;
pub mod summary;
pub mod verdict;

/// Input-validation failures raised before any statistical computation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SimulationError {
    /// A configured parameter is outside its valid domain.
    #[display("invalid parameter `{param}`: {reason}")]
    InvalidParameter { param: &'static str, reason: String },
    /// A sample is too small for the requested statistic.
    #[display("not enough observations: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },
}
