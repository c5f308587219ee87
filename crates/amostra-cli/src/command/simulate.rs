use std::path::PathBuf;

use anyhow::Context as _;

use amostra_sim::{
    config::{DEFAULT_SEED, SampleSpec, SimulationConfig},
    simulation,
};

use crate::{render, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Mean of sample A
    #[arg(long, default_value_t = 100.0)]
    mean_a: f64,
    /// Standard deviation of sample A
    #[arg(long, default_value_t = 10.0)]
    std_dev_a: f64,
    /// Size of sample A
    #[arg(long, default_value_t = 10000)]
    count_a: usize,
    /// Mean of sample B
    #[arg(long, default_value_t = 100.0)]
    mean_b: f64,
    /// Standard deviation of sample B
    #[arg(long, default_value_t = 10.0)]
    std_dev_b: f64,
    /// Size of sample B
    #[arg(long, default_value_t = 10000)]
    count_b: usize,
    /// Number of histogram bins (0 = automatic)
    #[arg(long, default_value_t = 0)]
    bins: usize,
    /// Seed for the sample stream
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Also write the full report as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for SimulateArg {
    fn default() -> Self {
        Self {
            mean_a: 100.0,
            std_dev_a: 10.0,
            count_a: 10000,
            mean_b: 100.0,
            std_dev_b: 10.0,
            count_b: 10000,
            bins: 0,
            seed: DEFAULT_SEED,
            output: None,
        }
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let config = SimulationConfig {
        sample_a: SampleSpec::new(arg.mean_a, arg.std_dev_a, arg.count_a)
            .context("invalid parameters for sample A")?,
        sample_b: SampleSpec::new(arg.mean_b, arg.std_dev_b, arg.count_b)
            .context("invalid parameters for sample B")?,
        bins: arg.bins,
        seed: arg.seed,
    };

    let report = simulation::run(&config).context("simulation pass failed")?;
    render::print_report(&report);

    if arg.output.is_some() {
        Output::save_json(&report, arg.output.clone())?;
    }
    Ok(())
}
