//! Policy simulation, KPI evaluation and scoring.
//!
//! # Algorithm
//!
//! [`SingleResourceSimulator`] replays a dispatch order on one resource
//! without preemption. [`PolicySimulator`] wraps it with KPI evaluation
//! ([`ScheduleKpi`]) and composite scoring ([`ScoreComposer`]) to build
//! a [`PolicyResult`](crate::models::PolicyResult).
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, average turnaround, CPU utilization
//! and Jain's fairness index.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod kpi;
mod score;
mod single;

pub use kpi::{jain_index, ScheduleKpi};
pub use score::{ScoreBreakdown, ScoreComposer};
pub use single::{PolicySimulator, SingleResourceSimulator};
