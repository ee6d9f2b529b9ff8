//! Monte Carlo simulation: configuration, single trials and equity
//! estimation for one (hero hand, opponent count) pair.
//!
//! The batch layer in [`crate::batch`] drives this module once per
//! starting hand and table size.

pub mod config;
pub mod estimator;
pub mod trial;

pub use config::{SimConfig, SimError, MAX_TABLE_SIZE, MIN_TABLE_SIZE};
pub use estimator::{EquityEstimator, SimulationResult};
pub use trial::{TrialEngine, TrialOutcome, MAX_OPPONENTS};
