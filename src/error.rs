//! Simulation error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Message returned to callers for every failure that is not a
/// validation failure.
pub const GENERIC_FAILURE: &str = "failed to process jobs";

/// Errors that can occur while comparing scheduling policies.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The job set was empty. No policy was simulated.
    #[error("no jobs provided")]
    NoJobs,

    /// The job set failed value checks (duplicate IDs, negative times, ...).
    #[error("invalid job set: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    /// A job record could not be decoded (missing field, wrong type).
    #[error("malformed input: {0}")]
    Malformed(String),

    /// The simulation configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// A policy simulation did not complete.
    #[error("internal error: {0}")]
    Internal(String),

    /// A job or configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimulationResult<T> = Result<T, SimulationError>;

impl SimulationError {
    /// Whether the caller sent bad input (as opposed to an internal fault).
    ///
    /// Malformed records are not client errors; the boundary reports
    /// them as a generic failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NoJobs | Self::Invalid(_))
    }

    /// Message safe to hand back across the transport boundary.
    pub fn client_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            GENERIC_FAILURE.to_string()
        }
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<toml::de::Error> for SimulationError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
