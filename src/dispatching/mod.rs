//! Dispatching rules and rule engine.
//!
//! A dispatching rule scores each job; the engine turns scores into a
//! dispatch order. The three built-in rules back the three simulated
//! policies (SJF, EDF, weighted).
//!
//! # Usage
//!
//! ```
//! use u_policy_sim::dispatching::{rules, RuleEngine};
//! use u_policy_sim::models::Job;
//!
//! let jobs = vec![Job::new("A", 5.0), Job::new("B", 2.0)];
//! let engine = RuleEngine::new().with_rule(rules::ShortestJobFirst);
//! assert_eq!(engine.sort_indices(&jobs), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched earlier.
pub type RuleScore = f64;

/// A dispatching rule that evaluates job priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that prefer large values
/// (e.g. weight) negate them.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "EDF").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a job. Lower = dispatched first.
    fn evaluate(&self, job: &Job) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
