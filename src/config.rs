use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

use crate::simulation::TariffRates;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub tariff: TariffRates,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Episodes per policy in the evaluation run
    pub episodes: u32,
    /// Seed for the stochastic baseline (None = entropy)
    pub random_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Where to write the best policy's episode history as JSON (None = skip)
    pub history_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("HES__").split("__"));
        Ok(figment.extract()?)
    }
}
