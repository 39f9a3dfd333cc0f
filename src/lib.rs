//! # Household Energy Simulator
//!
//! Hour-by-hour simulation of a household's electricity consumption, built so
//! a scheduling policy can be evaluated against a time-of-use tariff.
//!
//! The core is [`simulation::SchedulingEnvironment`], a finite-horizon state
//! machine over deferrable appliances with fixed run-duration commitments.
//! [`policy`] provides baseline controllers and [`runner`] drives a full
//! episode from `reset` to termination.
//!
//! ```rust
//! use household_energy_sim::simulation::SchedulingEnvironment;
//!
//! let mut env = SchedulingEnvironment::default();
//! let _obs = env.reset();
//!
//! // Request the washer for the first hour, leave everything else idle.
//! let outcome = env.step(&[true, false, false]).unwrap();
//! assert!(outcome.info.cost > 0.0);
//! ```

pub mod config;
pub mod policy;
pub mod runner;
pub mod simulation;
pub mod telemetry;
