//! Per-policy simulation result.

use serde::{Deserialize, Serialize};

use super::ScheduleEntry;

/// Outcome of simulating one scheduling policy over a job set.
///
/// Serializes with camelCase keys, matching the response wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResult {
    /// Display name of the policy (e.g. "Shortest Job First (SJF)").
    pub name: String,
    /// Makespan: end time of the last-finishing job.
    pub total_execution_time: f64,
    /// Mean of (end - arrival) over all jobs.
    pub average_turnaround_time: f64,
    /// Busy fraction of the makespan (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Jain's fairness index over allocated/requested ratios.
    pub fairness_index: f64,
    /// Composite score, nominally 0..100. Higher is better.
    pub overall_score: f64,
    /// Schedule entries in dispatch order.
    pub job_schedule: Vec<ScheduleEntry>,
}

impl PolicyResult {
    /// Job IDs in the order they were dispatched.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.job_schedule.iter().map(|e| e.job_id.as_str()).collect()
    }
}
