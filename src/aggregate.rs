//! Policy comparison.
//!
//! Runs every [`Policy`] over the same job set and collects the results
//! in fixed order `[SJF, EDF, Weighted]`. Either all three results are
//! produced or an error is returned.
//!
//! A [`Comparison`] also ranks the policies against each other: the best
//! policy, a recommendation, and per-metric relative scores on a 0-100
//! scale where higher is always better.

use serde::{Deserialize, Serialize};
use std::thread;
use tracing::{info, warn};

use crate::config::{ExecutionMode, SimulationConfig};
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Job, PolicyResult};
use crate::policy::{Policy, PolicyProfile};
use crate::simulator::PolicySimulator;
use crate::validation::{validate_jobs, ValidationErrorKind};

/// A reported metric of [`PolicyResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    TotalExecutionTime,
    AverageTurnaroundTime,
    CpuUtilization,
    FairnessIndex,
    OverallScore,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Metric; 5] = [
        Metric::TotalExecutionTime,
        Metric::AverageTurnaroundTime,
        Metric::CpuUtilization,
        Metric::FairnessIndex,
        Metric::OverallScore,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::TotalExecutionTime => "Execution Time",
            Metric::AverageTurnaroundTime => "Turnaround Time",
            Metric::CpuUtilization => "CPU Utilization",
            Metric::FairnessIndex => "Fairness Index",
            Metric::OverallScore => "Overall Score",
        }
    }

    /// Whether larger raw values are better. Times are better when lower.
    pub fn higher_is_better(self) -> bool {
        !matches!(self, Metric::TotalExecutionTime | Metric::AverageTurnaroundTime)
    }

    /// Raw value of this metric in a result.
    pub fn value(self, result: &PolicyResult) -> f64 {
        match self {
            Metric::TotalExecutionTime => result.total_execution_time,
            Metric::AverageTurnaroundTime => result.average_turnaround_time,
            Metric::CpuUtilization => result.cpu_utilization,
            Metric::FairnessIndex => result.fairness_index,
            Metric::OverallScore => result.overall_score,
        }
    }
}

/// One metric min-max normalized across policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeScore {
    pub metric: Metric,
    /// 0-100 per policy, in result order. The best policy gets 100 and
    /// the worst 0; all get 100 when every policy has the same value.
    pub scores: Vec<f64>,
}

/// Recommendation for the best policy of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub policy: Policy,
    pub overall_score: f64,
    pub summary: String,
    #[serde(flatten)]
    pub profile: PolicyProfile,
}

/// Results of all policies, in [`Policy::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub results: Vec<PolicyResult>,
}

impl Comparison {
    /// Result for a specific policy.
    pub fn get(&self, policy: Policy) -> Option<&PolicyResult> {
        let pos = Policy::ALL.iter().position(|&p| p == policy)?;
        self.results.get(pos)
    }

    /// The policy with the highest overall score and its result.
    ///
    /// On an exact tie the later policy in result order wins.
    pub fn best(&self) -> Option<(Policy, &PolicyResult)> {
        Policy::ALL
            .iter()
            .copied()
            .zip(&self.results)
            .reduce(|best, cur| {
                if best.1.overall_score > cur.1.overall_score {
                    best
                } else {
                    cur
                }
            })
    }

    /// Recommendation for the best policy, `None` when there are no results.
    pub fn recommendation(&self) -> Option<Recommendation> {
        let (policy, best) = self.best()?;

        let mut strengths = vec!["execution time"];
        if best.cpu_utilization > 0.8 {
            strengths.push("CPU utilization");
        }
        if best.fairness_index > 0.8 {
            strengths.push("fairness");
        }
        let profile = policy.profile();

        let summary = format!(
            "{} performed best with an overall score of {:.1}, indicating that {} leads to \
             better overall efficiency for this job set (strong {}). Well suited to: {}.",
            best.name,
            best.overall_score,
            policy.rationale(),
            strengths.join(", "),
            profile.real_world_uses.join(", ")
        );

        Some(Recommendation {
            policy,
            overall_score: best.overall_score,
            summary,
            profile,
        })
    }

    /// Short human-readable summary naming the best policy.
    pub fn verdict(&self) -> String {
        match self.recommendation() {
            Some(recommendation) => recommendation.summary,
            None => "No clear winner among the scheduling policies.".to_string(),
        }
    }

    /// Every metric normalized across the policies, in [`Metric::ALL`] order.
    pub fn relative_scores(&self) -> Vec<RelativeScore> {
        Metric::ALL
            .iter()
            .map(|&metric| {
                let values: Vec<f64> = self.results.iter().map(|r| metric.value(r)).collect();
                RelativeScore {
                    metric,
                    scores: normalize(&values, metric.higher_is_better()),
                }
            })
            .collect()
    }
}

/// Min-max normalization to 0-100, inverted when lower is better.
fn normalize(values: &[f64], higher_is_better: bool) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    values
        .iter()
        .map(|&v| {
            if range == 0.0 {
                return 100.0;
            }
            let scaled = (v - min) / range * 100.0;
            if higher_is_better {
                scaled
            } else {
                100.0 - scaled
            }
        })
        .collect()
}

/// Runs and compares all policies under one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    config: SimulationConfig,
}

impl Aggregator {
    /// Creates an aggregator with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Validates `jobs` and simulates every policy over them.
    ///
    /// # Errors
    /// - [`SimulationError::NoJobs`] for an empty job set.
    /// - [`SimulationError::Invalid`] when full validation is enabled and
    ///   the job set fails it.
    pub fn compare(&self, jobs: &[Job]) -> SimulationResult<Comparison> {
        self.check(jobs)?;

        let simulator = PolicySimulator::new(self.config.scoring);
        let results = match self.config.execution {
            ExecutionMode::Sequential => Policy::ALL
                .iter()
                .map(|&p| simulator.run(p, jobs))
                .collect::<SimulationResult<Vec<_>>>()?,
            ExecutionMode::Parallel => thread::scope(|s| {
                let handles: Vec<_> = Policy::ALL
                    .iter()
                    .map(|&p| s.spawn(move || simulator.run(p, jobs)))
                    .collect();
                handles
                    .into_iter()
                    .map(|h| match h.join() {
                        Ok(result) => result,
                        Err(_) => Err(SimulationError::Internal(
                            "policy simulation panicked".into(),
                        )),
                    })
                    .collect::<SimulationResult<Vec<_>>>()
            })?,
        };

        let comparison = Comparison { results };
        if let Some((policy, best)) = comparison.best() {
            info!(
                jobs = jobs.len(),
                best = %policy,
                score = best.overall_score,
                mode = ?self.config.execution,
                "policy comparison complete"
            );
        }
        Ok(comparison)
    }

    fn check(&self, jobs: &[Job]) -> SimulationResult<()> {
        if jobs.is_empty() {
            warn!("rejected empty job set");
            return Err(SimulationError::NoJobs);
        }
        if !self.config.validate {
            return Ok(());
        }
        validate_jobs(jobs).map_err(|errors| {
            warn!(count = errors.len(), "job set failed validation");
            if errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyJobSet) {
                SimulationError::NoJobs
            } else {
                SimulationError::Invalid(errors)
            }
        })
    }
}

/// Compares all policies with the default configuration.
///
/// # Example
///
/// ```
/// use u_policy_sim::{compare_policies, models::Job};
///
/// let jobs = vec![
///     Job::new("A", 5.0).with_deadline(10.0).with_weight(1.0),
///     Job::new("B", 2.0).with_deadline(20.0).with_weight(2.0),
/// ];
/// let comparison = compare_policies(&jobs).unwrap();
/// assert_eq!(comparison.results.len(), 3);
/// assert_eq!(comparison.results[0].total_execution_time, 7.0);
/// ```
pub fn compare_policies(jobs: &[Job]) -> SimulationResult<Comparison> {
    Aggregator::default().compare(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_jobs() -> Vec<Job> {
        vec![
            Job::new("A", 5.0).with_deadline(10.0).with_weight(1.0),
            Job::new("B", 2.0).with_deadline(20.0).with_weight(2.0),
        ]
    }

    #[test]
    fn test_fixed_result_order() {
        let c = compare_policies(&two_jobs()).unwrap();
        let names: Vec<_> = c.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Shortest Job First (SJF)",
                "Earliest Deadline First (EDF)",
                "Weighted Job Scheduling"
            ]
        );
    }

    #[test]
    fn test_get() {
        let c = compare_policies(&two_jobs()).unwrap();
        assert!((c.get(Policy::Edf).unwrap().average_turnaround_time - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_best_prefers_later_on_tie() {
        // SJF and Weighted produce identical schedules here; EDF is worse.
        let c = compare_policies(&two_jobs()).unwrap();
        let (policy, best) = c.best().unwrap();
        assert_eq!(policy, Policy::Weighted);
        assert_eq!(best.name, "Weighted Job Scheduling");
    }

    #[test]
    fn test_best_strict_winner() {
        let jobs = vec![
            Job::new("A", 5.0).with_deadline(20.0).with_weight(9.0),
            Job::new("B", 2.0).with_deadline(5.0).with_weight(1.0),
            Job::new("C", 5.0).with_deadline(30.0).with_weight(1.0),
        ];
        let c = compare_policies(&jobs).unwrap();
        // SJF: B, A, C (A before C by input order), same as EDF, so they tie
        // and EDF is reported. Weighted runs A first: worse turnaround.
        let weighted = c.get(Policy::Weighted).unwrap().overall_score;
        assert!(weighted < c.get(Policy::Edf).unwrap().overall_score);
        assert_eq!(c.best().unwrap().0, Policy::Edf);
    }

    #[test]
    fn test_verdict_mentions_winner() {
        let c = compare_policies(&two_jobs()).unwrap();
        let verdict = c.verdict();
        assert!(verdict.starts_with("Weighted Job Scheduling performed best"));
        assert!(verdict.contains("CPU utilization"));
        assert!(verdict.contains("fairness"));
    }

    #[test]
    fn test_verdict_empty() {
        let c = Comparison { results: vec![] };
        assert!(c.best().is_none());
        assert!(c.recommendation().is_none());
        assert!(c.verdict().starts_with("No clear winner"));
        assert!(c.relative_scores().iter().all(|r| r.scores.is_empty()));
    }

    #[test]
    fn test_recommendation_carries_profile() {
        let c = compare_policies(&two_jobs()).unwrap();
        let rec = c.recommendation().unwrap();
        assert_eq!(rec.policy, Policy::Weighted);
        assert_eq!(rec.profile.title, "Weighted Job Scheduling is Recommended");
        assert!(rec.profile.weaknesses.contains(&"May lead to starvation of low-weight jobs"));
        assert!(rec.summary.contains("Resource allocation in cloud computing"));
        assert_eq!(c.verdict(), rec.summary);

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["policy"], "weighted");
        assert_eq!(json["realWorldUses"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_relative_scores_invert_times() {
        // SJF/Weighted: turnaround 4.5; EDF: 6.0. Makespans all 7.
        let c = compare_policies(&two_jobs()).unwrap();
        let relative = c.relative_scores();
        assert_eq!(
            relative.iter().map(|r| r.metric).collect::<Vec<_>>(),
            Metric::ALL.to_vec()
        );

        let turnaround = &relative[1];
        assert_eq!(turnaround.metric, Metric::AverageTurnaroundTime);
        assert_eq!(turnaround.scores, vec![100.0, 0.0, 100.0]);

        let overall = &relative[4];
        assert_eq!(overall.scores, vec![100.0, 0.0, 100.0]);
    }

    #[test]
    fn test_relative_scores_equal_values() {
        let c = compare_policies(&two_jobs()).unwrap();
        let relative = c.relative_scores();
        for metric in [Metric::TotalExecutionTime, Metric::CpuUtilization, Metric::FairnessIndex] {
            let row = relative.iter().find(|r| r.metric == metric).unwrap();
            assert_eq!(row.scores, vec![100.0; 3]);
        }
    }

    #[test]
    fn test_normalize_midpoint() {
        let lower_better = normalize(&[2.0, 4.0, 3.0], false);
        assert_eq!(lower_better, vec![100.0, 0.0, 50.0]);
        let higher_better = normalize(&[2.0, 4.0, 3.0], true);
        assert_eq!(higher_better, vec![0.0, 100.0, 50.0]);
    }

    #[test]
    fn test_empty_rejected() {
        let err = compare_policies(&[]).unwrap_err();
        assert!(matches!(err, SimulationError::NoJobs));
        assert_eq!(err.client_message(), "no jobs provided");
    }

    #[test]
    fn test_invalid_rejected() {
        let jobs = vec![Job::new("A", 1.0), Job::new("A", 2.0)];
        let err = compare_policies(&jobs).unwrap_err();
        assert!(matches!(err, SimulationError::Invalid(ref e) if e.len() == 1));
    }

    #[test]
    fn test_validation_disabled() {
        let jobs = vec![Job::new("A", 1.0), Job::new("A", 2.0)];
        let aggregator = Aggregator::new(SimulationConfig::default().with_validation(false));
        let c = aggregator.compare(&jobs).unwrap();
        assert_eq!(c.results.len(), 3);
        // Empty sets are still refused.
        assert!(matches!(aggregator.compare(&[]), Err(SimulationError::NoJobs)));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let jobs = vec![
            Job::new("J1", 4.0).with_arrival(1.0).with_deadline(9.0).with_weight(3.0),
            Job::new("J2", 2.0).with_arrival(0.0).with_deadline(12.0).with_weight(7.0),
            Job::new("J3", 6.0).with_arrival(3.0).with_deadline(6.0).with_weight(1.0),
            Job::new("J4", 1.0).with_arrival(8.0).with_deadline(20.0).with_weight(5.0),
        ];
        let seq = Aggregator::default().compare(&jobs).unwrap();
        let par = Aggregator::new(SimulationConfig::default().with_execution(ExecutionMode::Parallel))
            .compare(&jobs)
            .unwrap();
        assert_eq!(seq, par);
    }
}
