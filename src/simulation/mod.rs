//! # Household Simulation Module
//!
//! Simulates the loads inside a single household over a day.
//!
//! ## Components
//!
//! - **Appliance**: the deferrable-appliance catalogue and the always-on base load
//! - **Tariff**: the fixed 24-hour time-of-use price table
//! - **Scheduling**: the finite-horizon environment that prices scheduling decisions
//! - **Comfort**: a slow-dynamics thermal variant (HVAC) sharing the same step shape
//!
//! ## Usage
//!
//! ```rust
//! use household_energy_sim::simulation::SchedulingEnvironment;
//!
//! let mut env = SchedulingEnvironment::default();
//! let mut obs = env.reset();
//!
//! let mut total_cost = 0.0;
//! loop {
//!     let action = vec![false; env.catalogue().deferrable().len()];
//!     let outcome = env.step(&action).unwrap();
//!     total_cost += outcome.info.cost;
//!     if outcome.terminated {
//!         break;
//!     }
//!     obs = outcome.observation;
//! }
//! # let _ = obs;
//! ```

pub mod appliance;
pub mod comfort;
pub mod scheduling;
pub mod tariff;

pub use appliance::{ApplianceCatalogue, ApplianceSpec};
pub use comfort::{ComfortAction, ComfortConfig, ComfortSimulation, ComfortState};
pub use scheduling::{
    EnvironmentError, HistoryEntry, Observation, SchedulingEnvironment, StepInfo, StepOutcome,
};
pub use tariff::{TariffRates, TariffTable, HOURS_PER_DAY};
