//! Non-preemptive single-resource simulator.
//!
//! # Algorithm
//!
//! 1. Order jobs with the policy's rule engine (stable on ties).
//! 2. Keep a resource-free cursor, starting at 0.
//! 3. For each job in dispatch order:
//!    `start = max(cursor, arrival)`, `end = start + execution`,
//!    `cursor = end`.
//!
//! Jobs are never reordered once chosen, and a later-arriving job
//! dispatched early makes the resource idle until it arrives.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the sweep.

use tracing::debug;

use super::{ScheduleKpi, ScoreComposer};
use crate::config::ScoringConfig;
use crate::dispatching::RuleEngine;
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Job, PolicyResult, Schedule, ScheduleEntry};
use crate::policy::Policy;

/// Simulates one dispatch order on a single always-available resource.
///
/// # Example
///
/// ```
/// use u_policy_sim::models::Job;
/// use u_policy_sim::policy::Policy;
/// use u_policy_sim::simulator::SingleResourceSimulator;
///
/// let jobs = vec![Job::new("A", 5.0), Job::new("B", 2.0)];
/// let schedule = SingleResourceSimulator::for_policy(Policy::Sjf)
///     .simulate(&jobs)
///     .unwrap();
/// assert_eq!(schedule.dispatch_order(), vec!["B", "A"]);
/// assert_eq!(schedule.makespan(), 7.0);
/// ```
#[derive(Debug, Clone)]
pub struct SingleResourceSimulator {
    engine: RuleEngine,
}

impl SingleResourceSimulator {
    /// Creates a simulator ordering jobs with the given engine.
    pub fn new(engine: RuleEngine) -> Self {
        Self { engine }
    }

    /// Creates a simulator for one of the built-in policies.
    pub fn for_policy(policy: Policy) -> Self {
        Self::new(policy.rule_engine())
    }

    /// Runs the simulation.
    ///
    /// # Errors
    /// [`SimulationError::NoJobs`] if `jobs` is empty.
    pub fn simulate(&self, jobs: &[Job]) -> SimulationResult<Schedule> {
        if jobs.is_empty() {
            return Err(SimulationError::NoJobs);
        }

        let mut schedule = Schedule::new();
        let mut cursor = 0.0_f64;

        for idx in self.engine.sort_indices(jobs) {
            let job = &jobs[idx];
            let start = cursor.max(job.arrival_time);
            let end = start + job.execution_time;
            schedule.push(ScheduleEntry::new(&job.id, start, end));
            cursor = end;
        }

        Ok(schedule)
    }
}

/// Simulates a [`Policy`] end to end: schedule, KPIs, score.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicySimulator {
    composer: ScoreComposer,
}

impl PolicySimulator {
    /// Creates a policy simulator with the given scoring constants.
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            composer: ScoreComposer::new(scoring),
        }
    }

    /// Simulates `policy` over `jobs` and reports its metrics.
    ///
    /// # Errors
    /// [`SimulationError::NoJobs`] if `jobs` is empty.
    pub fn run(&self, policy: Policy, jobs: &[Job]) -> SimulationResult<PolicyResult> {
        let schedule = SingleResourceSimulator::for_policy(policy).simulate(jobs)?;
        debug_assert!(schedule.is_resource_disjoint());
        let kpi = ScheduleKpi::calculate(&schedule, jobs);
        let overall_score = self.composer.score(&kpi);

        debug!(
            %policy,
            jobs = schedule.len(),
            makespan = kpi.makespan,
            idle = kpi.makespan - schedule.busy_time(),
            avg_turnaround = kpi.average_turnaround,
            cpu = kpi.cpu_utilization,
            score = overall_score,
            order = ?schedule.dispatch_order(),
            "policy simulated"
        );

        Ok(PolicyResult {
            name: policy.display_name().to_string(),
            total_execution_time: kpi.makespan,
            average_turnaround_time: kpi.average_turnaround,
            cpu_utilization: kpi.cpu_utilization,
            fairness_index: kpi.fairness_index,
            overall_score,
            job_schedule: schedule.into(),
        })
    }
}
