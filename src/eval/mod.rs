//! Evaluation for the advisor
//!
//! - Exhaustive sweep over all 1024 answer combinations
//! - Scenario benchmark against answer sets with known expected results

pub mod scenarios;
pub mod sweep;

pub use scenarios::{load_all_scenarios, load_scenarios, run_scenarios, ScenarioCase, ScenarioResults};
pub use sweep::{sweep, SweepSummary};
