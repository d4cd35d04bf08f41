//! Schedule quality metrics (KPIs).
//!
//! Computes the raw performance indicators of a completed
//! single-resource schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | End time of the last dispatched job |
//! | Avg Turnaround | Mean of (completion - arrival) |
//! | CPU Utilization | Σ execution time / makespan |
//! | Fairness | Jain's index over allocated/requested ratios |
//!
//! # References
//! - Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness and
//!   Discrimination for Resource Allocation in Shared Computer Systems"

use std::collections::HashMap;

use crate::models::{Job, Schedule};

/// Raw performance indicators of one simulated schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleKpi {
    /// Makespan: end time of the last dispatched job.
    pub makespan: f64,
    /// Mean turnaround time (completion - arrival).
    pub average_turnaround: f64,
    /// Fraction of the makespan spent executing (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Jain's fairness index (0.0..=1.0).
    pub fairness_index: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input jobs.
    ///
    /// Entries whose job ID is not in `jobs` contribute nothing.
    pub fn calculate(schedule: &Schedule, jobs: &[Job]) -> Self {
        let by_id: HashMap<&str, &Job> = jobs.iter().map(|j| (j.id.as_str(), j)).collect();

        let makespan = schedule.makespan();

        let mut total_turnaround = 0.0;
        let mut counted = 0usize;
        for entry in &schedule.entries {
            if let Some(job) = by_id.get(entry.job_id.as_str()) {
                total_turnaround += entry.end_time - job.arrival_time;
                counted += 1;
            }
        }
        let average_turnaround = if counted == 0 {
            0.0
        } else {
            total_turnaround / counted as f64
        };

        // Summed in dispatch order, the same order the cursor accumulated
        // the makespan in. Rounding can still push the ratio past 1.
        let requested: f64 = schedule
            .entries
            .iter()
            .filter_map(|entry| by_id.get(entry.job_id.as_str()))
            .map(|job| job.execution_time)
            .sum();
        let cpu_utilization = if makespan > 0.0 {
            (requested / makespan).min(1.0)
        } else {
            0.0
        };

        Self {
            makespan,
            average_turnaround,
            cpu_utilization,
            fairness_index: fairness_index(schedule, &by_id),
        }
    }
}

/// Jain's fairness index over the allocated/requested ratio of each job.
///
/// Jobs with non-positive requested time are skipped. Under
/// run-to-completion scheduling every ratio is exactly 1, so the index
/// is 1.0 whenever some job has positive duration.
fn fairness_index(schedule: &Schedule, by_id: &HashMap<&str, &Job>) -> f64 {
    let ratios = schedule.entries.iter().filter_map(|entry| {
        let requested = by_id.get(entry.job_id.as_str())?.execution_time;
        (requested > 0.0).then(|| entry.allocated() / requested)
    });
    jain_index(ratios)
}

/// Jain's index `(Σx)² / (n · Σx²)`.
///
/// Returns 0.0 for an empty input or when `Σx² == 0`. The result is
/// capped at 1.0 to absorb rounding in nearly equal ratios.
pub fn jain_index(values: impl IntoIterator<Item = f64>) -> f64 {
    let (n, sum, sum_sq) = values
        .into_iter()
        .fold((0usize, 0.0, 0.0), |(n, s, sq), x| (n + 1, s + x, sq + x * x));

    if n == 0 || sum_sq == 0.0 {
        return 0.0;
    }
    ((sum * sum) / (n as f64 * sum_sq)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn two_jobs() -> Vec<Job> {
        vec![
            Job::new("A", 5.0).with_deadline(10.0).with_weight(1.0),
            Job::new("B", 2.0).with_deadline(20.0).with_weight(2.0),
        ]
    }

    fn schedule_of(entries: &[(&str, f64, f64)]) -> Schedule {
        let mut s = Schedule::new();
        for &(id, start, end) in entries {
            s.push(ScheduleEntry::new(id, start, end));
        }
        s
    }

    #[test]
    fn test_kpi_basic() {
        let schedule = schedule_of(&[("B", 0.0, 2.0), ("A", 2.0, 7.0)]);
        let kpi = ScheduleKpi::calculate(&schedule, &two_jobs());
        assert!((kpi.makespan - 7.0).abs() < 1e-10);
        assert!((kpi.average_turnaround - 4.5).abs() < 1e-10); // (2+7)/2
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.fairness_index - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_gap() {
        // A arrives late: resource idles 0..4.
        let jobs = vec![Job::new("A", 2.0).with_arrival(4.0)];
        let schedule = schedule_of(&[("A", 4.0, 6.0)]);
        let kpi = ScheduleKpi::calculate(&schedule, &jobs);
        assert!((kpi.makespan - 6.0).abs() < 1e-10);
        assert!((kpi.average_turnaround - 2.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 2.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_zero_durations() {
        let jobs = vec![Job::new("A", 0.0), Job::new("B", 0.0)];
        let schedule = schedule_of(&[("A", 0.0, 0.0), ("B", 0.0, 0.0)]);
        let kpi = ScheduleKpi::calculate(&schedule, &jobs);
        assert_eq!(kpi.makespan, 0.0);
        assert_eq!(kpi.cpu_utilization, 0.0);
        assert_eq!(kpi.fairness_index, 0.0);
        assert_eq!(kpi.average_turnaround, 0.0);
    }

    #[test]
    fn test_fairness_skips_zero_requests() {
        let jobs = vec![Job::new("A", 0.0), Job::new("B", 3.0)];
        let schedule = schedule_of(&[("A", 0.0, 0.0), ("B", 0.0, 3.0)]);
        let kpi = ScheduleKpi::calculate(&schedule, &jobs);
        assert!((kpi.fairness_index - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_entry_ignored() {
        let schedule = schedule_of(&[("B", 0.0, 2.0), ("ghost", 2.0, 3.0)]);
        let kpi = ScheduleKpi::calculate(&schedule, &two_jobs());
        assert!((kpi.average_turnaround - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_fractional_durations_stay_within_bounds() {
        // Dispatched in reverse input order. Summed in input order,
        // 0.1 + 0.2 + 0.3 rounds above the 0.6 makespan.
        let jobs = vec![
            Job::new("A", 0.1).with_deadline(3.0),
            Job::new("B", 0.2).with_deadline(2.0),
            Job::new("C", 0.3).with_deadline(1.0),
        ];
        let mut schedule = Schedule::new();
        let mut cursor = 0.0;
        for job in jobs.iter().rev() {
            schedule.push(ScheduleEntry::new(job.id.as_str(), cursor, cursor + job.execution_time));
            cursor += job.execution_time;
        }
        let kpi = ScheduleKpi::calculate(&schedule, &jobs);
        assert!(kpi.cpu_utilization <= 1.0);
        assert!(kpi.fairness_index <= 1.0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.fairness_index - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_jain_index_capped() {
        // Ratios one ulp either side of 1.
        let near_one = [1.0 + f64::EPSILON, 1.0 - f64::EPSILON / 2.0, 1.0];
        let index = jain_index(near_one);
        assert!(index <= 1.0);
        assert!((index - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_jain_index() {
        assert!((jain_index([1.0, 1.0, 1.0]) - 1.0).abs() < 1e-10);
        // One job gets everything: 1/n.
        assert!((jain_index([1.0, 0.0, 0.0, 0.0]) - 0.25).abs() < 1e-10);
        // (1+2)^2 / (2 * (1+4)) = 0.9
        assert!((jain_index([1.0, 2.0]) - 0.9).abs() < 1e-10);
    }

    #[test]
    fn test_jain_index_degenerate() {
        assert_eq!(jain_index(std::iter::empty::<f64>()), 0.0);
        assert_eq!(jain_index([0.0, 0.0]), 0.0);
    }
}
