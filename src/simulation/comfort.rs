//! Thermal-comfort simulation (HVAC slow dynamics).
//!
//! A simpler variant of the scheduling environment's step/state-machine
//! shape: appliances switch instantly (no run commitments) and nothing is
//! priced. The reward tracks how far the indoor temperature drifts from the
//! occupant's setpoint.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComfortConfig {
    pub initial_indoor_c: f64,
    pub initial_outdoor_c: f64,
    pub desired_temp_c: f64,
    /// Steps per episode
    pub horizon_steps: usize,
    /// Random seed for the outdoor-temperature drift (None = entropy)
    pub random_seed: Option<u64>,
}

impl Default for ComfortConfig {
    fn default() -> Self {
        Self {
            initial_indoor_c: 24.0,
            initial_outdoor_c: 30.0,
            desired_temp_c: 24.0,
            horizon_steps: 200,
            random_seed: None,
        }
    }
}

/// Partial appliance update: unset fields keep the current state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ComfortAction {
    pub ac: Option<bool>,
    pub heater: Option<bool>,
    /// 0 = off, up to 3 = high; values above 3 are clamped
    pub fan_speed: Option<u8>,
    pub bulb: Option<bool>,
}

/// Temperatures visible to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortState {
    pub indoor_temp_c: f64,
    pub outdoor_temp_c: f64,
    pub desired_temp_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortHistoryEntry {
    pub step: usize,
    pub indoor_temp_c: f64,
    pub outdoor_temp_c: f64,
    pub fan_speed: u8,
    pub ac_on: bool,
    pub heater_on: bool,
}

pub struct ComfortSimulation {
    config: ComfortConfig,
    indoor_temp_c: f64,
    outdoor_temp_c: f64,
    ac_on: bool,
    heater_on: bool,
    fan_speed: u8,
    bulb_on: bool,
    step_count: usize,
    history: Vec<ComfortHistoryEntry>,
    rng: StdRng,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl ComfortSimulation {
    pub fn new(config: ComfortConfig) -> Self {
        let rng = make_rng(config.random_seed);

        Self {
            indoor_temp_c: config.initial_indoor_c,
            outdoor_temp_c: config.initial_outdoor_c,
            ac_on: false,
            heater_on: false,
            fan_speed: 0,
            bulb_on: false,
            step_count: 0,
            history: Vec::new(),
            rng,
            config,
        }
    }

    pub fn state(&self) -> ComfortState {
        ComfortState {
            indoor_temp_c: self.indoor_temp_c,
            outdoor_temp_c: self.outdoor_temp_c,
            desired_temp_c: self.config.desired_temp_c,
        }
    }

    pub fn history(&self) -> &[ComfortHistoryEntry] {
        &self.history
    }

    pub fn bulb_on(&self) -> bool {
        self.bulb_on
    }

    /// Restore the initial state. A seeded simulation replays the same
    /// outdoor-temperature trajectory after every reset.
    pub fn reset(&mut self) -> ComfortState {
        self.indoor_temp_c = self.config.initial_indoor_c;
        self.outdoor_temp_c = self.config.initial_outdoor_c;
        self.ac_on = false;
        self.heater_on = false;
        self.fan_speed = 0;
        self.bulb_on = false;
        self.step_count = 0;
        self.history.clear();
        self.rng = make_rng(self.config.random_seed);

        self.state()
    }

    /// Advance by one step; returns `(state, reward, done)`.
    pub fn step(&mut self, action: ComfortAction) -> (ComfortState, f64, bool) {
        if let Some(ac) = action.ac {
            self.ac_on = ac;
        }
        if let Some(heater) = action.heater {
            self.heater_on = heater;
        }
        if let Some(speed) = action.fan_speed {
            self.fan_speed = speed.min(3);
        }
        if let Some(bulb) = action.bulb {
            self.bulb_on = bulb;
        }

        // Outdoor temperature wanders a little each step.
        self.outdoor_temp_c += self.rng.gen_range(-0.2..=0.2);

        if self.ac_on {
            self.indoor_temp_c -= 0.3;
        }
        if self.heater_on {
            self.indoor_temp_c += 0.3;
        }
        self.indoor_temp_c -= 0.1 * f64::from(self.fan_speed);

        // Slow relaxation toward the outdoor temperature.
        self.indoor_temp_c += 0.05 * (self.outdoor_temp_c - self.indoor_temp_c);

        self.step_count += 1;
        self.history.push(ComfortHistoryEntry {
            step: self.step_count,
            indoor_temp_c: self.indoor_temp_c,
            outdoor_temp_c: self.outdoor_temp_c,
            fan_speed: self.fan_speed,
            ac_on: self.ac_on,
            heater_on: self.heater_on,
        });

        let reward = -(self.indoor_temp_c - self.config.desired_temp_c).abs();
        let done = self.step_count >= self.config.horizon_steps;

        (self.state(), reward, done)
    }
}
