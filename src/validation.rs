//! Input validation for job sets.
//!
//! Checks structural integrity of a job set before any policy is
//! simulated. Detects:
//! - Empty job sets
//! - Duplicate or empty IDs
//! - Non-finite numeric fields (NaN, ±inf)
//! - Negative arrival or execution times
//!
//! Zero execution time is accepted. Such jobs occupy no processor time
//! and are skipped by the fairness evaluator.

use crate::models::Job;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The job set contains no jobs.
    EmptyJobSet,
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job has an empty (or whitespace-only) ID.
    EmptyId,
    /// A numeric field is NaN or infinite.
    NonFiniteValue,
    /// A job arrives before t=0.
    NegativeArrival,
    /// A job requests a negative execution time.
    NegativeExecution,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job set.
///
/// Checks:
/// 1. At least one job
/// 2. No empty job IDs
/// 3. No duplicate job IDs
/// 4. All numeric fields finite
/// 5. Arrival times non-negative
/// 6. Execution times non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// An empty job set reports only [`ValidationErrorKind::EmptyJobSet`].
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    if jobs.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyJobSet,
            "no jobs provided",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for job in jobs {
        if job.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Job with empty ID",
            ));
        } else if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        let fields = [
            ("arrivalTime", job.arrival_time),
            ("executionTime", job.execution_time),
            ("deadline", job.deadline),
            ("weight", job.weight),
        ];
        let mut finite = true;
        for (name, value) in fields {
            if !value.is_finite() {
                finite = false;
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteValue,
                    format!("Job '{}' has non-finite {name}: {value}", job.id),
                ));
            }
        }
        if !finite {
            continue;
        }

        if job.arrival_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Job '{}' arrives at {}", job.id, job.arrival_time),
            ));
        }

        if job.execution_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeExecution,
                format!(
                    "Job '{}' has negative execution time {}",
                    job.id, job.execution_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
