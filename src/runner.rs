//! Episode driver.
//!
//! Runs a policy against the scheduling environment from `reset` to
//! termination and aggregates the un-normalized step info into a per-episode
//! summary, the way the evaluation harness scores a day.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::policy::Policy;
use crate::simulation::scheduling::{EnvironmentError, SchedulingEnvironment};

/// Aggregate result of one full episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub policy: String,
    /// Sum of per-step cost, currency units
    pub total_cost: f64,
    /// Sum of per-step power draw; with one-hour steps, kW sums to kWh
    pub total_energy_kwh: f64,
    pub peak_power_kw: f64,
    pub steps: usize,
}

/// Drive one episode to termination.
pub fn run_episode(
    env: &mut SchedulingEnvironment,
    policy: &mut dyn Policy,
) -> Result<EpisodeSummary, EnvironmentError> {
    let mut observation = env.reset();
    policy.reset();

    let mut total_cost = 0.0;
    let mut total_energy_kwh = 0.0;
    let mut peak_power_kw: f64 = 0.0;
    let mut steps = 0;

    loop {
        let action = policy.decide(&observation);
        let outcome = env.step(&action)?;

        total_cost += outcome.info.cost;
        total_energy_kwh += outcome.info.power;
        peak_power_kw = peak_power_kw.max(outcome.info.power);
        steps += 1;

        if outcome.terminated {
            break;
        }
        observation = outcome.observation;
    }

    debug!(policy = policy.name(), total_cost, steps, "episode complete");

    Ok(EpisodeSummary {
        policy: policy.name().to_string(),
        total_cost,
        total_energy_kwh,
        peak_power_kw,
        steps,
    })
}
