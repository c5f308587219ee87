//! The compute pass.
//!
//! One invocation of [`run`] performs the whole pipeline synchronously:
//! seed a stream, draw sample A then sample B, compute the overlay
//! histogram, run both hypothesis tests with the variance policy's flag,
//! and interpret the p-values. Nothing is retained between passes; calling
//! [`run`] twice with the same configuration yields identical reports.

use serde::Serialize;

use crate::{
    SimulationError,
    binning::{BinningScheme, OverlayHistogram},
    config::SimulationConfig,
    generate::SampleStream,
    hypothesis::{self, TestResult},
    summary::SampleSummary,
    verdict::{self, ALPHA, Verdict},
};

/// A test result paired with its interpretation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestOutcome {
    pub result: TestResult,
    pub verdict: Verdict,
}

/// Everything a front end needs from one compute pass: the raw samples and
/// histogram for rendering, summaries and test outcomes for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub sample_a: Vec<f64>,
    pub sample_b: Vec<f64>,
    pub summary_a: SampleSummary,
    pub summary_b: SampleSummary,
    pub histogram: OverlayHistogram,
    pub t_test: TestOutcome,
    pub ks_test: TestOutcome,
}

/// Runs one compute pass over `config`.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] for out-of-domain
/// parameters and [`SimulationError::InsufficientData`] when a sample is
/// too small for the variance-based tests.
pub fn run(config: &SimulationConfig) -> Result<SimulationReport, SimulationError> {
    let mut stream = SampleStream::with_seed(config.seed);
    // Order matters: both samples share one seeded stream state.
    let sample_a = stream.generate(&config.sample_a)?;
    let sample_b = stream.generate(&config.sample_b)?;

    let equal_variance = config.assume_equal_variance();
    let t_result = hypothesis::t_test(&sample_a, &sample_b, equal_variance)?;
    let ks_result = hypothesis::ks_test(&sample_a, &sample_b)?;

    let summary_a = SampleSummary::new(&sample_a).ok_or(SimulationError::InsufficientData {
        needed: 2,
        got: sample_a.len(),
    })?;
    let summary_b = SampleSummary::new(&sample_b).ok_or(SimulationError::InsufficientData {
        needed: 2,
        got: sample_b.len(),
    })?;

    let scheme = BinningScheme::compute(&sample_a, &sample_b, config.bins)?;
    let histogram = OverlayHistogram::new(&scheme, &sample_a, &sample_b);

    Ok(SimulationReport {
        sample_a,
        sample_b,
        summary_a,
        summary_b,
        histogram,
        t_test: TestOutcome {
            verdict: verdict::interpret(&t_result, ALPHA),
            result: t_result,
        },
        ks_test: TestOutcome {
            verdict: verdict::interpret(&ks_result, ALPHA),
            result: ks_result,
        },
    })
}
