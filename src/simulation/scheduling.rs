//! # Scheduling Environment
//!
//! The finite-horizon state machine at the heart of the simulator. Each
//! episode is one 24-hour day: an external driver calls [`SchedulingEnvironment::reset`],
//! then repeatedly picks an action from the current observation and calls
//! [`SchedulingEnvironment::step`] until the outcome reports termination.
//!
//! The transition function is fully deterministic given the action sequence.
//! Start requests for an appliance already mid-run are silently ignored:
//! appliance cycles cannot be interrupted, and that is a modeling choice,
//! not an error path.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::appliance::ApplianceCatalogue;
use super::tariff::{TariffTable, HOURS_PER_DAY};

/// Scheduling environment contract errors
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("action has {actual} flags but the catalogue has {expected} deferrable appliances")]
    ActionLengthMismatch { expected: usize, actual: usize },
}

/// A fixed-length observation vector, every component normalized to [0, 1]:
/// `[time_norm, remaining_norm per appliance..., price_norm]`.
///
/// On the terminating step the environment returns an all-zero vector of the
/// same shape. That sentinel signals "no further decision required" and must
/// only be used to detect termination, never as a meaningful state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation(pub Vec<f64>);

impl Observation {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Un-normalized physical readings for the step just taken.
///
/// This is the only channel through which a driver can recover real units;
/// reward and observation are scaled/negated and must not be used to
/// reconstruct cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Electricity spend for this hour (power * price), currency units
    pub cost: f64,
    /// Total household draw this hour, kW
    pub power: f64,
    /// Tariff price applied this hour, currency units per kWh
    pub price: f64,
}

/// One entry of the per-episode history log, appended per elapsed step.
/// Read-only inspection data for external renderers; never read back by the
/// transition logic itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub power_kw: f64,
    pub price: f64,
    pub action: Vec<bool>,
}

/// Result of a single transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub observation: Observation,
    /// Negated instantaneous cost; no shaping term, no terminal bonus
    pub reward: f64,
    /// True exactly once, on the step where the clock reaches the horizon.
    /// Termination is time-limit only; there is no separate truncation.
    pub terminated: bool,
    pub info: StepInfo,
}

/// Discrete-time household scheduling environment.
///
/// Owns the appliance catalogue, the tariff table, the episode clock, and
/// the per-step transition and reward logic. One instance serves one logical
/// caller at a time; use one instance per concurrent episode.
pub struct SchedulingEnvironment {
    catalogue: ApplianceCatalogue,
    tariff: TariffTable,
    horizon: usize,
    hour: usize,
    /// Hours left in each appliance's committed run; 0 means idle
    remaining: Vec<u32>,
    history: Vec<HistoryEntry>,
}

impl Default for SchedulingEnvironment {
    fn default() -> Self {
        Self::new(ApplianceCatalogue::default(), TariffTable::default())
    }
}

impl SchedulingEnvironment {
    pub fn new(catalogue: ApplianceCatalogue, tariff: TariffTable) -> Self {
        let appliance_count = catalogue.deferrable().len();

        Self {
            catalogue,
            tariff,
            horizon: HOURS_PER_DAY,
            hour: 0,
            remaining: vec![0; appliance_count],
            history: Vec::new(),
        }
    }

    pub fn catalogue(&self) -> &ApplianceCatalogue {
        &self.catalogue
    }

    pub fn tariff(&self) -> &TariffTable {
        &self.tariff
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Current episode clock, in [0, horizon].
    pub fn hour(&self) -> usize {
        self.hour
    }

    /// Per-step log of `(power, price, action)`, one entry per elapsed step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Length of every observation this environment produces:
    /// time + one remaining-fraction per appliance + price.
    pub fn observation_len(&self) -> usize {
        1 + self.catalogue.deferrable().len() + 1
    }

    /// Start a fresh episode and return the initial observation.
    ///
    /// Always succeeds; a second consecutive `reset` yields an identical
    /// observation.
    pub fn reset(&mut self) -> Observation {
        self.hour = 0;
        self.remaining.fill(0);
        self.history.clear();

        debug!(horizon = self.horizon, "episode reset");
        self.observe()
    }

    fn observe(&self) -> Observation {
        let mut values = Vec::with_capacity(self.observation_len());

        values.push(self.hour as f64 / (self.horizon - 1) as f64);
        for (spec, remaining) in self.catalogue.deferrable().iter().zip(&self.remaining) {
            values.push(f64::from(*remaining) / f64::from(spec.duration_hours));
        }
        values.push(self.tariff.normalized(self.hour));

        Observation(values)
    }

    /// Advance the episode by one hour.
    ///
    /// One flag per deferrable appliance, in catalogue order, meaning
    /// "request start now". A request for an appliance already mid-run has no
    /// effect. The action vector length must match the catalogue; a mismatch
    /// is a contract violation, never silently coerced.
    pub fn step(&mut self, action: &[bool]) -> Result<StepOutcome, EnvironmentError> {
        let expected = self.catalogue.deferrable().len();
        if action.len() != expected {
            return Err(EnvironmentError::ActionLengthMismatch {
                expected,
                actual: action.len(),
            });
        }

        // Commitment start. Requests while a run is in progress are ignored:
        // a committed cycle can neither be canceled nor restarted.
        for (i, requested) in action.iter().enumerate() {
            if *requested && self.remaining[i] == 0 {
                self.remaining[i] = self.catalogue.deferrable()[i].duration_hours;
            }
        }

        // Power aggregation. Committed appliances draw power every hour of
        // their run, including the hour they were just started.
        let mut total_power = self.catalogue.base_load_kw();
        for (spec, remaining) in self.catalogue.deferrable().iter().zip(&self.remaining) {
            if *remaining > 0 {
                total_power += spec.power_kw;
            }
        }

        let price_t = self.tariff.price(self.hour);
        let cost = total_power * price_t;
        let reward = -cost;

        for (spec, remaining) in self.catalogue.deferrable().iter().zip(&mut self.remaining) {
            if *remaining > 0 {
                *remaining -= 1;
            }
            debug_assert!(
                *remaining <= spec.duration_hours,
                "commitment counter out of range for {}",
                spec.name
            );
        }

        self.history.push(HistoryEntry {
            power_kw: total_power,
            price: price_t,
            action: action.to_vec(),
        });

        self.hour += 1;
        let terminated = self.hour >= self.horizon;

        let observation = if terminated {
            debug!(steps = self.history.len(), "episode terminated");
            Observation::zeros(self.observation_len())
        } else {
            self.observe()
        };

        Ok(StepOutcome {
            observation,
            reward,
            terminated,
            info: StepInfo {
                cost,
                power: total_power,
                price: price_t,
            },
        })
    }
}
