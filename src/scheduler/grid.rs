//! Grid builder: derives the empty time-slot grid from user parameters.
//!
//! # Interval Sizing
//!
//! The row interval is the greatest common divisor of all per-session
//! durations, so every session spans a whole number of rows. An empty
//! activity list defaults to 30 minutes, and any computed value below 5
//! is clamped up to 5 as a safety floor against runaway row counts.

use crate::error::ScheduleError;
use crate::models::{Activity, TimeGrid, MIN_SESSION_MINUTES};

/// Interval used when no activity durations are available (minutes).
pub const DEFAULT_INTERVAL_MINUTES: u32 = 30;

/// Builds an all-`Empty` grid for the given parameters.
///
/// Row count = `ceil((end - start) / interval)`; the final row may
/// nominally extend past `end_minutes` when the range does not divide
/// evenly.
///
/// # Errors
/// - [`ScheduleError::InvalidDayCount`] when `day_count` is not in 1..=7.
/// - [`ScheduleError::InvalidTimeRange`] when `start_minutes >= end_minutes`.
/// - [`ScheduleError::InvalidWorkDayCount`] when the weekday prefix exceeds
///   the day count.
pub fn build_grid(
    day_count: usize,
    work_day_count: usize,
    start_minutes: u32,
    end_minutes: u32,
    interval_minutes: u32,
) -> Result<TimeGrid, ScheduleError> {
    if !(1..=7).contains(&day_count) {
        return Err(ScheduleError::InvalidDayCount(day_count));
    }
    if start_minutes >= end_minutes {
        return Err(ScheduleError::InvalidTimeRange {
            start: start_minutes,
            end: end_minutes,
        });
    }
    if work_day_count > day_count {
        return Err(ScheduleError::InvalidWorkDayCount {
            work_days: work_day_count,
            days: day_count,
        });
    }

    let interval = interval_minutes.max(MIN_SESSION_MINUTES);
    Ok(TimeGrid::new(
        interval,
        start_minutes,
        end_minutes,
        day_count,
        work_day_count,
    ))
}

/// Chooses the row interval for a set of activities: the gcd of all
/// per-session durations, defaulting to [`DEFAULT_INTERVAL_MINUTES`] for an
/// empty list and clamped to at least [`MIN_SESSION_MINUTES`].
pub fn interval_for(activities: &[Activity]) -> u32 {
    let mut iter = activities.iter().map(|a| a.session_minutes);
    let Some(first) = iter.next() else {
        return DEFAULT_INTERVAL_MINUTES;
    };
    let g = iter.fold(first, gcd);
    g.max(MIN_SESSION_MINUTES)
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
