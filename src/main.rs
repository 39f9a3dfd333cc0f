use anyhow::{Context, Result};
use household_energy_sim::config::Config;
use household_energy_sim::policy::{FixedSchedulePolicy, OffPeakPolicy, Policy, RandomPolicy};
use household_energy_sim::runner::run_episode;
use household_energy_sim::simulation::{
    ApplianceCatalogue, HistoryEntry, SchedulingEnvironment, TariffTable,
};
use household_energy_sim::telemetry::init_tracing;
use std::fs::File;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;

    let catalogue = ApplianceCatalogue::default();
    let tariff = TariffTable::new(cfg.tariff);
    let appliance_count = catalogue.deferrable().len();
    let episodes = cfg.simulation.episodes.max(1);

    info!(
        appliances = appliance_count,
        episodes, "starting household energy evaluation"
    );

    let mut policies: Vec<Box<dyn Policy>> = vec![
        Box::new(FixedSchedulePolicy::new(appliance_count)),
        Box::new(OffPeakPolicy::new(appliance_count)),
        Box::new(RandomPolicy::new(appliance_count, cfg.simulation.random_seed)),
    ];

    let mut best: Option<(String, f64, Vec<HistoryEntry>)> = None;

    for policy in policies.iter_mut() {
        let mut total_cost = 0.0;
        let mut last_history = Vec::new();

        for _ in 0..episodes {
            let mut env = SchedulingEnvironment::new(catalogue.clone(), tariff.clone());
            let summary = run_episode(&mut env, policy.as_mut())?;
            total_cost += summary.total_cost;
            last_history = env.history().to_vec();
        }

        let mean_cost = total_cost / f64::from(episodes);
        info!(
            policy = policy.name(),
            mean_daily_cost = mean_cost,
            "policy evaluated"
        );

        let is_better = best
            .as_ref()
            .map(|(_, cost, _)| mean_cost < *cost)
            .unwrap_or(true);
        if is_better {
            best = Some((policy.name().to_string(), mean_cost, last_history));
        }
    }

    let (winner, mean_cost, history) = best.context("no policies evaluated")?;
    info!(policy = %winner, mean_daily_cost = mean_cost, "cheapest schedule");

    if let Some(path) = &cfg.output.history_path {
        let file = File::create(path)
            .with_context(|| format!("creating history file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &history)?;
        info!(path = %path.display(), "wrote winning episode history");
    }

    Ok(())
}
