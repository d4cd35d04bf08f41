//! The three compared scheduling policies.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dispatching::{rules, RuleEngine};

/// Recommendation content for a policy: what it is good and bad at and
/// where it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyProfile {
    pub title: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub real_world_uses: &'static [&'static str],
}

const SJF_PROFILE: PolicyProfile = PolicyProfile {
    title: "Shortest Job First (SJF) is Recommended",
    strengths: &[
        "Minimizes average waiting time when job lengths are known in advance",
        "Excellent for batch processing environments with predictable job durations",
        "Provides good CPU utilization by quickly processing short jobs",
    ],
    weaknesses: &[
        "May lead to starvation of longer jobs if short jobs keep arriving",
        "Requires accurate estimation of job execution times",
        "Not ideal for interactive or real-time systems",
    ],
    real_world_uses: &[
        "Batch processing systems",
        "Print queue management",
        "CPU scheduling in non-interactive systems",
    ],
};

const EDF_PROFILE: PolicyProfile = PolicyProfile {
    title: "Earliest Deadline First (EDF) is Recommended",
    strengths: &[
        "Optimal for meeting deadlines when all jobs can be scheduled",
        "Good for real-time systems with strict timing requirements",
        "Balances urgency with system utilization",
    ],
    weaknesses: &[
        "Can lead to poor performance under heavy load",
        "May cause domino effect of missed deadlines during overload",
        "Requires accurate knowledge of deadlines",
    ],
    real_world_uses: &[
        "Real-time operating systems",
        "Multimedia applications",
        "Industrial control systems",
        "Network packet scheduling",
    ],
};

const WEIGHTED_PROFILE: PolicyProfile = PolicyProfile {
    title: "Weighted Job Scheduling is Recommended",
    strengths: &[
        "Maximizes total value/profit from job execution",
        "Good for systems where jobs have different priorities or values",
        "Balances execution time with job importance",
    ],
    weaknesses: &[
        "More complex to implement than other algorithms",
        "May lead to starvation of low-weight jobs",
        "Requires accurate weight/profit assignments",
    ],
    real_world_uses: &[
        "Resource allocation in cloud computing",
        "Financial transaction processing",
        "Ad serving systems",
        "Project scheduling with different priorities",
    ],
};

/// A non-preemptive single-resource scheduling policy.
///
/// Policies differ only in how they order jobs before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Shortest Job First: `executionTime` ascending.
    Sjf,
    /// Earliest Deadline First: `deadline` ascending.
    Edf,
    /// Weighted Job Scheduling: `weight` descending.
    Weighted,
}

impl Policy {
    /// All policies in result order.
    pub const ALL: [Policy; 3] = [Policy::Sjf, Policy::Edf, Policy::Weighted];

    /// Display name reported in [`PolicyResult::name`](crate::models::PolicyResult).
    pub fn display_name(self) -> &'static str {
        match self {
            Policy::Sjf => "Shortest Job First (SJF)",
            Policy::Edf => "Earliest Deadline First (EDF)",
            Policy::Weighted => "Weighted Job Scheduling",
        }
    }

    /// Short label used in logs.
    pub fn short_name(self) -> &'static str {
        match self {
            Policy::Sjf => "SJF",
            Policy::Edf => "EDF",
            Policy::Weighted => "Weighted",
        }
    }

    /// Rule engine producing this policy's dispatch order.
    pub fn rule_engine(self) -> RuleEngine {
        match self {
            Policy::Sjf => RuleEngine::new().with_rule(rules::ShortestJobFirst),
            Policy::Edf => RuleEngine::new().with_rule(rules::EarliestDeadlineFirst),
            Policy::Weighted => RuleEngine::new().with_rule(rules::HighestWeightFirst),
        }
    }

    /// One-sentence explanation of what the policy prioritises.
    pub fn rationale(self) -> &'static str {
        match self {
            Policy::Sjf => "prioritizing shorter jobs",
            Policy::Edf => "prioritizing jobs with approaching deadlines",
            Policy::Weighted => "prioritizing jobs with higher weights",
        }
    }

    /// Strengths, weaknesses and typical uses, for recommendations.
    pub fn profile(self) -> PolicyProfile {
        match self {
            Policy::Sjf => SJF_PROFILE,
            Policy::Edf => EDF_PROFILE,
            Policy::Weighted => WEIGHTED_PROFILE,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
