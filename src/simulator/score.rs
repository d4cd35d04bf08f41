//! Composite scoring.
//!
//! Normalizes the four raw KPIs onto a nominal 0..100 scale and
//! combines them with fixed weights:
//!
//! | Component | Formula | Direction |
//! |-----------|---------|-----------|
//! | Makespan | `100 / (1 + makespan / 10)` | lower is better |
//! | Turnaround | `100 / (1 + avg_turnaround / 5)` | lower is better |
//! | CPU | `cpu_utilization * 100` | higher is better |
//! | Fairness | `fairness_index * 100` | higher is better |
//!
//! `overall = 0.25 * (makespan + turnaround + cpu + fairness)` with the
//! default [`ScoringConfig`].

use super::ScheduleKpi;
use crate::config::ScoringConfig;

/// Normalized score components and their weighted combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub makespan: f64,
    pub turnaround: f64,
    pub cpu: f64,
    pub fairness: f64,
    /// Weighted sum of the four components.
    pub overall: f64,
}

/// Turns [`ScheduleKpi`] values into a single comparable score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreComposer {
    config: ScoringConfig,
}

impl ScoreComposer {
    /// Creates a composer with the given constants.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Overall score for a KPI set. Higher is better.
    pub fn score(&self, kpi: &ScheduleKpi) -> f64 {
        self.breakdown(kpi).overall
    }

    /// All normalized components plus the overall score.
    pub fn breakdown(&self, kpi: &ScheduleKpi) -> ScoreBreakdown {
        let c = &self.config;
        let makespan = reciprocal(kpi.makespan, c.makespan_scale);
        let turnaround = reciprocal(kpi.average_turnaround, c.turnaround_scale);
        let cpu = kpi.cpu_utilization * 100.0;
        let fairness = kpi.fairness_index * 100.0;

        let w = &c.weights;
        let overall = w.makespan * makespan
            + w.turnaround * turnaround
            + w.cpu * cpu
            + w.fairness * fairness;

        ScoreBreakdown {
            makespan,
            turnaround,
            cpu,
            fairness,
            overall,
        }
    }
}

/// `100 / (1 + value / scale)`: 100 at zero, 50 at `value == scale`.
#[inline]
fn reciprocal(value: f64, scale: f64) -> f64 {
    100.0 / (1.0 + value / scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreWeights;

    fn kpi(makespan: f64, turnaround: f64, cpu: f64, fairness: f64) -> ScheduleKpi {
        ScheduleKpi {
            makespan,
            average_turnaround: turnaround,
            cpu_utilization: cpu,
            fairness_index: fairness,
        }
    }

    #[test]
    fn test_canonical_constants() {
        let composer = ScoreComposer::default();
        let b = composer.breakdown(&kpi(10.0, 5.0, 0.5, 1.0));
        assert!((b.makespan - 50.0).abs() < 1e-10);
        assert!((b.turnaround - 50.0).abs() < 1e-10);
        assert!((b.cpu - 50.0).abs() < 1e-10);
        assert!((b.fairness - 100.0).abs() < 1e-10);
        assert!((b.overall - 62.5).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_example_score() {
        // makespan 7, turnaround 4.5, cpu 1, fairness 1
        let score = ScoreComposer::default().score(&kpi(7.0, 4.5, 1.0, 1.0));
        let expected = 0.25 * (100.0 / 1.7 + 100.0 / 1.9 + 100.0 + 100.0);
        assert!((score - expected).abs() < 1e-10);
    }

    #[test]
    fn test_perfect_score() {
        let score = ScoreComposer::default().score(&kpi(0.0, 0.0, 1.0, 1.0));
        assert!((score - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_lower_makespan_scores_higher() {
        let composer = ScoreComposer::default();
        assert!(composer.score(&kpi(5.0, 3.0, 1.0, 1.0)) > composer.score(&kpi(9.0, 3.0, 1.0, 1.0)));
    }

    #[test]
    fn test_custom_weights() {
        let config = ScoringConfig::default().with_weights(ScoreWeights {
            makespan: 0.0,
            turnaround: 0.0,
            cpu: 1.0,
            fairness: 0.0,
        });
        let score = ScoreComposer::new(config).score(&kpi(100.0, 100.0, 0.4, 1.0));
        assert!((score - 40.0).abs() < 1e-10);
    }
}
