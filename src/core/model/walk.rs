use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::action::Action;
use super::harness::CounterModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail { step: usize, reason: String },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkReport {
    pub seed: u64,
    pub steps_executed: usize,
    pub trace: Vec<Action>,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Random exploration of the counter model: each step picks uniformly
/// among the actions enabled in the current state.
#[derive(Debug, Clone, Copy)]
pub struct RandomWalk {
    pub seed: u64,
    pub steps: usize,
}

impl RandomWalk {
    pub fn new(seed: u64, steps: usize) -> Self {
        Self { seed, steps }
    }

    #[instrument(name = "random_walk", level = "info", skip(model))]
    pub fn run(&self, model: &mut CounterModel) -> WalkReport {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut trace = Vec::new();

        for step in 0..self.steps {
            let enabled = model.enabled_actions();
            // Create or the four live-counter actions are always available.
            let Some(action) = enabled.choose(&mut rng).copied() else {
                break;
            };
            trace.push(action);

            if let Err(err) = model.execute(action) {
                warn!("Walk failed at step {} on {}: {}", step, action, err);
                return WalkReport {
                    seed: self.seed,
                    steps_executed: step + 1,
                    trace,
                    verdict: Verdict::Fail {
                        step,
                        reason: err.to_string(),
                    },
                };
            }
        }

        info!("Walk passed after {} steps", trace.len());
        WalkReport {
            seed: self.seed,
            steps_executed: trace.len(),
            trace,
            verdict: Verdict::Pass,
        }
    }
}
