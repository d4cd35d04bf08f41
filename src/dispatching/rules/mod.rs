//! Built-in dispatching rules.
//!
//! | Rule | Key | Direction |
//! |------|-----|-----------|
//! | SJF | `execution_time` | ascending |
//! | EDF | `deadline` | ascending |
//! | WEIGHTED | `weight` | descending |
//!
//! # Score Convention
//! All rules return lower scores for jobs that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Job;

/// Shortest Job First.
///
/// Prioritizes jobs with shorter execution time.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine
/// when all jobs are available at t=0.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJobFirst;

impl DispatchingRule for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.execution_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Earliest Deadline First.
///
/// Prioritizes jobs with earlier deadlines. Deadlines are only a sort
/// key; missing one is not an error.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct EarliestDeadlineFirst;

impl DispatchingRule for EarliestDeadlineFirst {
    fn name(&self) -> &'static str {
        "EDF"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.deadline
    }

    fn description(&self) -> &'static str {
        "Earliest Deadline First"
    }
}

/// Highest weight first (weighted job scheduling).
///
/// Negated because lower score = higher priority.
#[derive(Debug, Clone, Copy)]
pub struct HighestWeightFirst;

impl DispatchingRule for HighestWeightFirst {
    fn name(&self) -> &'static str {
        "WEIGHTED"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        -job.weight
    }

    fn description(&self) -> &'static str {
        "Weighted Job Scheduling"
    }
}
