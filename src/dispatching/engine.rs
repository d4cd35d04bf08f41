//! Rule engine for dispatch ordering.
//!
//! Applies a primary rule, then any tie-breaking rules, then a final
//! tie-breaker. The sort is stable, so with the default
//! [`TieBreaker::InputOrder`] jobs with equal keys keep their input
//! relative order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore};
use crate::models::Job;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input relative order (stable sort).
    #[default]
    InputOrder,
    /// Deterministic by job ID (lexicographic).
    ById,
}

/// A composable rule engine for job prioritization.
///
/// # Example
/// ```
/// use u_policy_sim::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::EarliestDeadlineFirst)
///     .with_rule(rules::ShortestJobFirst);
/// assert_eq!(engine.rule_names(), vec!["EDF", "SJF"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. The first rule is primary; later ones only break ties.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, primary first.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts jobs by priority (dispatched first = first index).
    ///
    /// Returns indices into the input slice; the slice itself is not
    /// reordered.
    pub fn sort_indices(&self, jobs: &[Job]) -> Vec<usize> {
        // Scores are computed once per job; sort_by is stable.
        let scores: Vec<Vec<RuleScore>> = jobs.iter().map(|j| self.evaluate(j)).collect();

        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| {
            compare_scores(&scores[a], &scores[b]).then_with(|| match self.tie_breaker {
                TieBreaker::InputOrder => Ordering::Equal,
                TieBreaker::ById => jobs[a].id.cmp(&jobs[b].id),
            })
        });
        indices
    }

    /// Evaluates a single job and returns one score per rule.
    pub fn evaluate(&self, job: &Job) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(job)).collect()
    }
}

/// Lexicographic comparison of rule scores.
///
/// Non-NaN scores compare numerically (so `-0.0 == 0.0`); NaN falls back
/// to IEEE total order so the relation stays a total preorder.
fn compare_scores(a: &[RuleScore], b: &[RuleScore]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.partial_cmp(y).unwrap_or_else(|| x.total_cmp(y)))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
