use std::path::PathBuf;

use clap::Parser;

use crate::core::fault;
use crate::core::model::{CounterModel, RandomWalk, Verdict, WalkReport};

/// Random-walk test of the counter against its reference model.
#[derive(Parser, Debug)]
#[command(name = "faultcounter", author, version, about, long_about = None)]
pub struct Args {
    /// Raise the fault flag so new counters start from a random value
    #[arg(long, default_value_t = false)]
    pub faulty: bool,
    #[arg(short, long, default_value_t = 100)]
    pub steps: usize,
    /// Walk seed; drawn at random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the walk report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    #[arg(long, default_value = "./logs")]
    pub log_dir: PathBuf,
}

/// Applies the fault flag, then walks a counter model built under it.
pub fn run(args: &Args) -> WalkReport {
    fault::set_faulty(args.faulty);

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut model = CounterModel::default();
    RandomWalk::new(seed, args.steps).run(&mut model)
}

/// Process exit status for a verdict: 0 on pass, 1 on fail.
pub fn exit_status(verdict: &Verdict) -> u8 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail { .. } => 1,
    }
}

pub fn summary(report: &WalkReport) -> String {
    match &report.verdict {
        Verdict::Pass => format!(
            "pass: {} steps, seed {}",
            report.steps_executed, report.seed
        ),
        Verdict::Fail { step, reason } => format!(
            "fail at step {}: {} (seed {})",
            step, reason, report.seed
        ),
    }
}

pub fn render(report: &WalkReport, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(report)
    } else {
        Ok(summary(report))
    }
}
