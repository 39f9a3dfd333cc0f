//! Baseline scheduling policies.
//!
//! Policies are external to the environment: they see only the normalized
//! observation and produce one start-request flag per deferrable appliance.
//! None of these learn anything; they exist as reference points for
//! evaluating smarter controllers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simulation::scheduling::Observation;
use crate::simulation::HOURS_PER_DAY;

/// A controller that maps observations to start requests.
pub trait Policy {
    fn name(&self) -> &str;

    /// One flag per deferrable appliance, in catalogue order.
    fn decide(&mut self, observation: &Observation) -> Vec<bool>;

    /// Called by the runner at the start of every episode. Stateless
    /// policies keep the no-op default.
    fn reset(&mut self) {}
}

/// Recover the hour-of-day from the observation's normalized time component.
fn hour_of(observation: &Observation) -> usize {
    let time_norm = observation.as_slice()[0];
    (time_norm * (HOURS_PER_DAY - 1) as f64).round() as usize
}

/// The classic hand-written household routine: small appliances in the
/// morning, the EV in the evening. Deliberately tariff-blind, so it pays the
/// evening peak for the EV run.
pub struct FixedSchedulePolicy {
    appliance_count: usize,
}

impl FixedSchedulePolicy {
    pub fn new(appliance_count: usize) -> Self {
        Self { appliance_count }
    }
}

impl Policy for FixedSchedulePolicy {
    fn name(&self) -> &str {
        "fixed-schedule"
    }

    fn decide(&mut self, observation: &Observation) -> Vec<bool> {
        let mut action = vec![false; self.appliance_count];
        let hour = hour_of(observation);

        if hour == 9 && self.appliance_count >= 2 {
            action[0] = true; // washer
            action[1] = true; // water heater
        }
        if hour == 18 && self.appliance_count >= 3 {
            action[2] = true; // EV charger, right into the peak
        }

        action
    }
}

/// Starts each appliance once per day, as soon as the normalized price falls
/// to the cheapest band.
pub struct OffPeakPolicy {
    appliance_count: usize,
    price_threshold: f64,
    started: Vec<bool>,
}

impl OffPeakPolicy {
    pub fn new(appliance_count: usize) -> Self {
        Self {
            appliance_count,
            price_threshold: 0.05,
            started: vec![false; appliance_count],
        }
    }

    pub fn with_threshold(mut self, price_threshold: f64) -> Self {
        self.price_threshold = price_threshold;
        self
    }
}

impl Policy for OffPeakPolicy {
    fn name(&self) -> &str {
        "off-peak"
    }

    fn decide(&mut self, observation: &Observation) -> Vec<bool> {
        let values = observation.as_slice();
        let price_norm = values[values.len() - 1];

        if price_norm > self.price_threshold {
            return vec![false; self.appliance_count];
        }

        // Request every idle appliance we have not run yet today.
        let remaining = &values[1..1 + self.appliance_count];
        let mut action = vec![false; self.appliance_count];
        for (i, remaining_norm) in remaining.iter().enumerate() {
            if *remaining_norm == 0.0 && !self.started[i] {
                action[i] = true;
                self.started[i] = true;
            }
        }
        action
    }

    fn reset(&mut self) {
        self.started.fill(false);
    }
}

/// Independent coin flip per appliance each hour. A sanity floor for
/// comparisons.
pub struct RandomPolicy {
    appliance_count: usize,
    start_probability: f64,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(appliance_count: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            appliance_count,
            start_probability: 0.1,
            rng,
        }
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(&mut self, _observation: &Observation) -> Vec<bool> {
        (0..self.appliance_count)
            .map(|_| self.rng.gen_bool(self.start_probability))
            .collect()
    }
}
