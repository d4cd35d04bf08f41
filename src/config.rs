//! Simulation configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! execution = "parallel"
//! validate = true
//!
//! [scoring]
//! makespan_scale = 10.0
//! turnaround_scale = 5.0
//!
//! [scoring.weights]
//! makespan = 0.25
//! turnaround = 0.25
//! cpu = 0.25
//! fairness = 0.25
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SimulationError, SimulationResult};

/// How the aggregator runs the three policy simulations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One after another on the calling thread.
    #[default]
    Sequential,
    /// One scoped thread per policy.
    Parallel,
}

/// Relative weights of the four normalized metrics in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub makespan: f64,
    pub turnaround: f64,
    pub cpu: f64,
    pub fairness: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            makespan: 0.25,
            turnaround: 0.25,
            cpu: 0.25,
            fairness: 0.25,
        }
    }
}

/// Normalization constants for the composite score.
///
/// The defaults (10, 5, equal weights) are the canonical values; scores
/// produced with other settings are not comparable with the canonical ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Makespan at which the makespan score halves (to 50).
    pub makespan_scale: f64,
    /// Average turnaround at which the turnaround score halves (to 50).
    pub turnaround_scale: f64,
    pub weights: ScoreWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            makespan_scale: 10.0,
            turnaround_scale: 5.0,
            weights: ScoreWeights::default(),
        }
    }
}

impl ScoringConfig {
    /// Sets the makespan normalization constant.
    pub fn with_makespan_scale(mut self, scale: f64) -> Self {
        self.makespan_scale = scale;
        self
    }

    /// Sets the turnaround normalization constant.
    pub fn with_turnaround_scale(mut self, scale: f64) -> Self {
        self.turnaround_scale = scale;
        self
    }

    /// Sets the metric weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    fn check(&self) -> SimulationResult<()> {
        if !(self.makespan_scale > 0.0 && self.makespan_scale.is_finite()) {
            return Err(SimulationError::Config(format!(
                "makespan_scale must be positive, got {}",
                self.makespan_scale
            )));
        }
        if !(self.turnaround_scale > 0.0 && self.turnaround_scale.is_finite()) {
            return Err(SimulationError::Config(format!(
                "turnaround_scale must be positive, got {}",
                self.turnaround_scale
            )));
        }
        let w = &self.weights;
        if [w.makespan, w.turnaround, w.cpu, w.fairness]
            .iter()
            .any(|x| !x.is_finite() || *x < 0.0)
        {
            return Err(SimulationError::Config(
                "score weights must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration for a policy comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub scoring: ScoringConfig,
    pub execution: ExecutionMode,
    /// Run the full job-set validator. When false only the empty-set
    /// check runs.
    pub validate: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            execution: ExecutionMode::Sequential,
            validate: true,
        }
    }
}

impl SimulationConfig {
    /// Sets the scoring configuration.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sets the execution mode.
    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Enables or disables full validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> SimulationResult<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.scoring.check()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> SimulationResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
