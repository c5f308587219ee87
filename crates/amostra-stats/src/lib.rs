//! Numeric building blocks for the amostra simulator.
//!
//! This crate provides the pure-math layer shared by the simulation crates:
//!
//! - **Descriptive statistics**: mean and unbiased sample variance
//! - **Special functions**: log-gamma, the regularized incomplete beta
//!   function, the two-sided Student-t p-value, and the asymptotic
//!   Kolmogorov survival function
//! - **Kolmogorov–Smirnov**: the two-sample KS statistic over empirical CDFs
//!
//! Everything here is a deterministic function of its inputs; randomness,
//! configuration, and error handling live in `amostra-sim`.
//!
//! # Examples
//!
//! ```
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(amostra_stats::descriptive::mean(&values), Some(3.0));
//! assert_eq!(amostra_stats::descriptive::sample_variance(&values), Some(2.5));
//! ```

pub mod descriptive;
pub mod ks;
pub mod special;
