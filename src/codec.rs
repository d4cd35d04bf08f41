//! Request/response codecs for the transport boundary.
//!
//! - JSON request: `{"jobs": [ {id, arrivalTime, executionTime, deadline, weight}, ... ]}`
//! - CSV job table: header row, then `id,arrivalTime,executionTime,deadline,weight`
//! - JSON response: `{"results": [...]}` or `{"error": "..."}` with a status code
//!
//! Decoding failures surface as [`SimulationError::Malformed`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{Aggregator, Comparison};
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Job, PolicyResult};

/// Fallback values for missing or zero CSV fields.
const CSV_DEFAULT_ARRIVAL: f64 = 0.0;
const CSV_DEFAULT_EXECUTION: f64 = 1.0;
const CSV_DEFAULT_DEADLINE: f64 = 10.0;
const CSV_DEFAULT_WEIGHT: f64 = 1.0;

/// Request envelope. A missing `jobs` key decodes as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequest {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobResponse {
    Results { results: Vec<PolicyResult> },
    Error { error: String },
}

/// Decodes a JSON request envelope.
pub fn parse_request(body: &str) -> SimulationResult<Vec<Job>> {
    let request: JobRequest = serde_json::from_str(body)?;
    Ok(request.jobs)
}

/// Decodes a bare JSON array of jobs.
pub fn parse_jobs_json(body: &str) -> SimulationResult<Vec<Job>> {
    Ok(serde_json::from_str(body)?)
}

/// Decodes a CSV job table.
///
/// The first row is a header and is ignored. Blank rows are skipped.
/// Missing, unparseable or zero numeric fields take the defaults
/// arrival 0, execution 1, deadline 10, weight 1; a missing ID becomes
/// `Job-<n>` where `n` is the data row's line offset from the header.
pub fn parse_jobs_csv(content: &str) -> SimulationResult<Vec<Job>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut jobs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SimulationError::Malformed(e.to_string()))?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let row = record
            .position()
            .map(|p| p.line().saturating_sub(1))
            .unwrap_or(jobs.len() as u64 + 1);
        let id = match record.get(0) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("Job-{row}"),
        };

        jobs.push(Job {
            id,
            arrival_time: csv_number(record.get(1), CSV_DEFAULT_ARRIVAL),
            execution_time: csv_number(record.get(2), CSV_DEFAULT_EXECUTION),
            deadline: csv_number(record.get(3), CSV_DEFAULT_DEADLINE),
            weight: csv_number(record.get(4), CSV_DEFAULT_WEIGHT),
        });
    }

    debug!(jobs = jobs.len(), "parsed csv job table");
    Ok(jobs)
}

/// Parses a CSV cell; empty, unparseable, non-finite or zero yields `default`.
///
/// Only the leading decimal number is read, so `"5abc"` is 5 and
/// `"2.5s"` is 2.5.
fn csv_number(cell: Option<&str>, default: f64) -> f64 {
    match cell.and_then(|c| numeric_prefix(c).parse::<f64>().ok()) {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => default,
    }
}

/// Longest prefix of `s` of the form `[+-]digits[.digits][e[+-]digits]`.
///
/// Returns `""` when `s` does not start with a number. An exponent marker
/// without digits is not part of the prefix.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    &s[..end]
}

/// HTTP-style status code for a comparison outcome.
pub fn status_code(outcome: &SimulationResult<Comparison>) -> u16 {
    match outcome {
        Ok(_) => 200,
        Err(e) if e.is_client_error() => 400,
        Err(_) => 500,
    }
}

/// Builds the response envelope for a comparison outcome.
pub fn response_body(outcome: SimulationResult<Comparison>) -> JobResponse {
    match outcome {
        Ok(comparison) => JobResponse::Results {
            results: comparison.results,
        },
        Err(e) => JobResponse::Error {
            error: e.client_message(),
        },
    }
}

/// Renders a comparison outcome as `(status, json)`.
pub fn render_response(
    outcome: SimulationResult<Comparison>,
    pretty: bool,
) -> SimulationResult<(u16, String)> {
    let status = status_code(&outcome);
    let body = response_body(outcome);
    let json = if pretty {
        serde_json::to_string_pretty(&body)
    } else {
        serde_json::to_string(&body)
    }
    .map_err(|e| SimulationError::Internal(e.to_string()))?;
    Ok((status, json))
}

/// Handles one JSON request body end to end: decode, compare, encode.
pub fn handle_request(aggregator: &Aggregator, body: &str) -> SimulationResult<(u16, String)> {
    let outcome = parse_request(body).and_then(|jobs| aggregator.compare(&jobs));
    render_response(outcome, false)
}
