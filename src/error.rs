//! Error types for the timetable library.
//!
//! These cover the abort path only: inputs so malformed that no grid can be
//! produced. Per-activity placement shortfall is *not* an error — it is
//! reported through `scheduler::PlacementOutcome` — and malformed individual
//! input rows are screened out silently before generation.

use thiserror::Error;

/// Errors that abort schedule generation before any grid is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Day count outside 1..=7
    #[error("day count must be between 1 and 7, got {0}")]
    InvalidDayCount(usize),
    /// Time range with start at or after end
    #[error("time range start ({start} min) must precede end ({end} min)")]
    InvalidTimeRange { start: u32, end: u32 },
    /// Work-day prefix larger than the day count
    #[error("work day count {work_days} exceeds day count {days}")]
    InvalidWorkDayCount { work_days: usize, days: usize },
    /// Nothing to schedule
    #[error("no activities to schedule")]
    NoActivities,
}
