//! Job model.
//!
//! A job is a single, indivisible unit of work submitted to the
//! simulated processor. Jobs are immutable for the duration of a
//! simulation; every policy borrows the same slice.
//!
//! # Time Representation
//! Times are unitless simulated instants relative to t=0. The caller
//! decides what one unit means.

use serde::{Deserialize, Serialize};

/// A job to be scheduled on the single processing resource.
///
/// Field names serialize in camelCase (`arrivalTime`, `executionTime`)
/// to match the request wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique job identifier within a job set.
    pub id: String,
    /// Instant at which the job becomes eligible to run.
    pub arrival_time: f64,
    /// Processing duration once started (run to completion).
    pub execution_time: f64,
    /// Desired completion instant. Used only to order jobs under EDF.
    pub deadline: f64,
    /// Priority / profit value. Used only to order jobs under weighted scheduling.
    pub weight: f64,
}

impl Job {
    /// Creates a job with the given ID and execution time.
    ///
    /// Arrival defaults to 0, deadline to 0 and weight to 1.
    pub fn new(id: impl Into<String>, execution_time: f64) -> Self {
        Self {
            id: id.into(),
            arrival_time: 0.0,
            execution_time,
            deadline: 0.0,
            weight: 1.0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: f64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: f64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Earliest possible completion: arrival plus execution time.
    #[inline]
    pub fn earliest_completion(&self) -> f64 {
        self.arrival_time + self.execution_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("J1", 5.0)
            .with_arrival(2.0)
            .with_deadline(10.0)
            .with_weight(3.0);

        assert_eq!(job.id, "J1");
        assert_eq!(job.arrival_time, 2.0);
        assert_eq!(job.execution_time, 5.0);
        assert_eq!(job.deadline, 10.0);
        assert_eq!(job.weight, 3.0);
        assert!((job.earliest_completion() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_job_wire_names() {
        let job: Job = serde_json::from_str(
            r#"{"id":"A","arrivalTime":1,"executionTime":5,"deadline":10,"weight":2}"#,
        )
        .unwrap();
        assert_eq!(job, Job::new("A", 5.0).with_arrival(1.0).with_deadline(10.0).with_weight(2.0));

        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("arrivalTime").is_some());
        assert!(value.get("executionTime").is_some());
        assert!(value.get("arrival_time").is_none());
    }

    #[test]
    fn test_job_missing_field_rejected() {
        let parsed: Result<Job, _> =
            serde_json::from_str(r#"{"id":"A","arrivalTime":1,"executionTime":5,"weight":2}"#);
        assert!(parsed.is_err());
    }
}
