//! Plain-text rendering of a simulation report: hypothesis preamble,
//! overlaid density histogram, and the two test verdicts.

use amostra_sim::{binning::OverlayHistogram, simulation::SimulationReport, summary::SampleSummary};

const BAR_WIDTH: usize = 40;

pub(crate) fn print_report(report: &SimulationReport) {
    println!("Two-sample comparison simulator");
    println!("  H0: the two sample means are equal");
    println!("  H1: the two sample means are different");
    println!("  significance level: 5%");
    println!();

    print_summary("A", &report.summary_a);
    print_summary("B", &report.summary_b);
    println!();

    print_histogram(&report.histogram);
    println!();

    println!("{}", report.t_test.result);
    println!("  {}", report.t_test.verdict.message);
    println!("{}", report.ks_test.result);
    println!("  {}", report.ks_test.verdict.message);
}

fn print_summary(name: &str, summary: &SampleSummary) {
    println!(
        "sample {name}: n = {}, mean = {:.4}, std dev = {:.4}",
        summary.count, summary.mean, summary.std_dev
    );
}

fn print_histogram(histogram: &OverlayHistogram) {
    let peak = histogram
        .density_a
        .iter()
        .chain(&histogram.density_b)
        .copied()
        .fold(0.0_f64, f64::max);

    for (index, window) in histogram.edges.windows(2).enumerate() {
        let (low, high) = (window[0], window[1]);
        println!(
            "[{low:10.2}, {high:10.2})  A {}",
            bar(histogram.density_a[index], peak)
        );
        println!("{:26}B {}", "", bar(histogram.density_b[index], peak));
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(density: f64, peak: f64) -> String {
    if peak <= 0.0 {
        return String::new();
    }
    #[expect(clippy::cast_precision_loss)]
    let length = ((density / peak) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(length)
}
