//! Simulation domain models.
//!
//! Typed records exchanged with callers: the input [`Job`], the
//! simulated [`Schedule`] and its [`ScheduleEntry`] rows, and the
//! per-policy [`PolicyResult`].
//!
//! # Wire Names
//!
//! | Rust field | JSON key |
//! |------------|----------|
//! | `arrival_time` | `arrivalTime` |
//! | `execution_time` | `executionTime` |
//! | `job_id` | `jobId` |
//! | `total_execution_time` | `totalExecutionTime` |
//! | `job_schedule` | `jobSchedule` |

mod job;
mod result;
mod schedule;

pub use job::Job;
pub use result::PolicyResult;
pub use schedule::{Schedule, ScheduleEntry};
