//! Random job-set generation for demos and property checks.
//!
//! Generated jobs are always valid: IDs `Job-1..=Job-n`, arrival in
//! `[0, 10)`, execution in `[1, 10]`, deadline at least
//! `arrival + execution`, weight in `[1, 10]`. Values are integral.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::models::Job;

/// Parameters for random job generation.
#[derive(Debug, Clone)]
pub struct JobGenerator {
    /// Number of jobs to generate (inclusive range).
    pub count: RangeInclusive<usize>,
    /// Arrival times are drawn from `0..max_arrival`.
    pub max_arrival: u32,
    /// Execution times are drawn from `1..=max_execution`.
    pub max_execution: u32,
    /// Deadline slack beyond earliest completion, from `0..max_slack`.
    pub max_slack: u32,
    /// Weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
}

impl Default for JobGenerator {
    fn default() -> Self {
        Self {
            count: 5..=14,
            max_arrival: 10,
            max_execution: 10,
            max_slack: 20,
            max_weight: 10,
        }
    }
}

impl JobGenerator {
    /// Sets the job count range.
    pub fn with_count(mut self, count: RangeInclusive<usize>) -> Self {
        self.count = count;
        self
    }

    /// Sets an exact job count.
    pub fn with_exact_count(self, count: usize) -> Self {
        self.with_count(count..=count)
    }

    /// Generates a job set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Job> {
        let count = if self.count.is_empty() {
            0
        } else {
            rng.random_range(self.count.clone())
        };

        (1..=count)
            .map(|i| {
                let arrival = rng.random_range(0..self.max_arrival.max(1));
                let execution = rng.random_range(1..=self.max_execution.max(1));
                let slack = rng.random_range(0..self.max_slack.max(1));
                let weight = rng.random_range(1..=self.max_weight.max(1));
                Job {
                    id: format!("Job-{i}"),
                    arrival_time: f64::from(arrival),
                    execution_time: f64::from(execution),
                    deadline: f64::from(arrival + execution + slack),
                    weight: f64::from(weight),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_jobs;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_default_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let jobs = JobGenerator::default().generate(&mut rng);
            assert!((5..=14).contains(&jobs.len()));
            for job in &jobs {
                assert!((0.0..10.0).contains(&job.arrival_time));
                assert!((1.0..=10.0).contains(&job.execution_time));
                assert!(job.deadline >= job.earliest_completion());
                assert!((1.0..=10.0).contains(&job.weight));
            }
        }
    }

    #[test]
    fn test_default_count_spans_five_to_fourteen() {
        let mut rng = SmallRng::seed_from_u64(3);
        let lens: Vec<usize> = (0..500)
            .map(|_| JobGenerator::default().generate(&mut rng).len())
            .collect();
        assert_eq!(lens.iter().min(), Some(&5));
        assert_eq!(lens.iter().max(), Some(&14));
    }

    #[test]
    fn test_generated_sets_are_valid() {
        let mut rng = SmallRng::seed_from_u64(7);
        let jobs = JobGenerator::default().generate(&mut rng);
        assert!(validate_jobs(&jobs).is_ok());
        assert_eq!(jobs[0].id, "Job-1");
    }

    #[test]
    fn test_exact_count() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(JobGenerator::default().with_exact_count(3).generate(&mut rng).len(), 3);
    }

    #[test]
    fn test_seed_reproducible() {
        let a = JobGenerator::default().generate(&mut SmallRng::seed_from_u64(99));
        let b = JobGenerator::default().generate(&mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
