//! Schedule (simulation output) model.
//!
//! A schedule records, in dispatch order, when each job ran on the
//! single processing resource. Entries never overlap: each one starts
//! no earlier than the previous one ended.

use serde::{Deserialize, Serialize};

/// A completed single-resource schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Entries in the order jobs were dispatched (not input order).
    pub entries: Vec<ScheduleEntry>,
}

/// The execution interval of one job.
///
/// `end_time = start_time + execution_time(job)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Dispatched job ID.
    pub job_id: String,
    /// Instant the job started running.
    pub start_time: f64,
    /// Instant the job finished.
    pub end_time: f64,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(job_id: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            job_id: job_id.into(),
            start_time,
            end_time,
        }
    }

    /// Time the resource spent on this job (end - start).
    #[inline]
    pub fn allocated(&self) -> f64 {
        self.end_time - self.start_time
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry after the current last one.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Makespan: end time of the last dispatched job, 0 when empty.
    ///
    /// Entries are appended with a monotone cursor, so the last entry
    /// also finishes latest.
    pub fn makespan(&self) -> f64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(0.0)
    }

    /// Job IDs in dispatch order.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.job_id.as_str()).collect()
    }

    /// Total time the resource was busy (sum of allocated intervals).
    pub fn busy_time(&self) -> f64 {
        self.entries.iter().map(ScheduleEntry::allocated).sum()
    }

    /// Whether consecutive entries are disjoint on the resource.
    pub fn is_resource_disjoint(&self) -> bool {
        self.entries
            .windows(2)
            .all(|w| w[1].start_time >= w[0].end_time)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no job was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Schedule> for Vec<ScheduleEntry> {
    fn from(schedule: Schedule) -> Self {
        schedule.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.push(ScheduleEntry::new("B", 0.0, 2.0));
        s.push(ScheduleEntry::new("A", 2.0, 7.0));
        s.push(ScheduleEntry::new("C", 9.0, 10.0));
        s
    }

    #[test]
    fn test_schedule_makespan() {
        assert!((sample_schedule().makespan() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_entry_allocated() {
        let e = ScheduleEntry::new("A", 2.0, 7.0);
        assert!((e.allocated() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_dispatch_order_and_busy_time() {
        let s = sample_schedule();
        assert_eq!(s.dispatch_order(), vec!["B", "A", "C"]);
        // 2 + 5 + 1, idle gap 7..9 excluded
        assert!((s.busy_time() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_resource_disjoint() {
        assert!(sample_schedule().is_resource_disjoint());

        let mut overlapping = Schedule::new();
        overlapping.push(ScheduleEntry::new("A", 0.0, 5.0));
        overlapping.push(ScheduleEntry::new("B", 4.0, 6.0));
        assert!(!overlapping.is_resource_disjoint());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.makespan(), 0.0);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(s.is_resource_disjoint());
    }

    #[test]
    fn test_entry_wire_names() {
        let value = serde_json::to_value(ScheduleEntry::new("A", 0.0, 5.0)).unwrap();
        assert_eq!(value["jobId"], "A");
        assert_eq!(value["startTime"], 0.0);
        assert_eq!(value["endTime"], 5.0);
    }
}
