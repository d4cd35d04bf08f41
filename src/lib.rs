//! Single-resource scheduling policy comparison.
//!
//! Simulates a batch of jobs on one processor under three non-preemptive
//! policies (Shortest Job First, Earliest Deadline First, weighted
//! scheduling) and reports comparable metrics for each.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Schedule`, `ScheduleEntry`, `PolicyResult`
//! - **`validation`**: Input integrity checks (empty set, duplicate IDs, bad values)
//! - **`dispatching`**: Dispatching rules and the rule engine ordering jobs
//! - **`simulator`**: Single-resource simulation, KPIs, composite score
//! - **`aggregate`**: Runs all policies and picks the best one
//! - **`codec`**: JSON/CSV job input and the JSON response envelope
//! - **`generator`**: Random job sets
//!
//! # Pipeline
//!
//! validate → (per policy) dispatch order → simulate → KPI → score → compare
//!
//! The computation is pure: no global state, nothing outlives a call.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness"

pub mod aggregate;
pub mod codec;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod policy;
pub mod simulator;
pub mod validation;

pub use aggregate::{compare_policies, Aggregator, Comparison, Metric, Recommendation};
pub use config::{ExecutionMode, ScoringConfig, SimulationConfig};
pub use error::{SimulationError, SimulationResult};
pub use policy::Policy;
