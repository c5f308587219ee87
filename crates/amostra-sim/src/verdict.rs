//! Interpretation of test results against the significance threshold.

use serde::Serialize;

use crate::hypothesis::{TestKind, TestResult};

/// Fixed significance threshold used by the simulator (5%).
pub const ALPHA: f64 = 0.05;

/// Human-readable accept/reject-null decision for one test result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub reject_null: bool,
    pub message: String,
}

/// Maps a test result's p-value to a verdict: reject the null hypothesis
/// exactly when `p_value < alpha`. The message is one of four fixed
/// templates selected by test kind and decision. Pure function, no I/O.
#[must_use]
pub fn interpret(result: &TestResult, alpha: f64) -> Verdict {
    let reject_null = result.p_value < alpha;
    let message = match (result.kind, reject_null) {
        (TestKind::TTest, true) => {
            "Reject the null hypothesis: the means are statistically different."
        }
        (TestKind::TTest, false) => {
            "Fail to reject the null hypothesis: no sufficient evidence the means differ."
        }
        (TestKind::Ks, true) => "Reject the null hypothesis: the distributions differ.",
        (TestKind::Ks, false) => {
            "Fail to reject the null hypothesis: no sufficient evidence the distributions differ."
        }
    }
    .to_owned();
    Verdict {
        reject_null,
        message,
    }
}
