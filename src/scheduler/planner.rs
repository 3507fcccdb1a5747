//! End-to-end schedule generation.
//!
//! `Planner` runs the three stages as one computation: build the empty
//! grid, resolve blocks onto it, then place activities. The whole run is a
//! pure, deterministic function of the request plus the fixed initial
//! cursor — safe to invoke repeatedly, safe to parallelize across
//! independent requests.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Activity, Block, TimeGrid};
use crate::scheduler::{
    apply_blocks, build_grid, interval_for, place_activities, PlacementOptions, PlacementReport,
};

/// Input container for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Activities in processing order. Order matters: the shared cursor
    /// and `After`/`Mid` hints make placement order-dependent.
    pub activities: Vec<Activity>,
    /// Blocked windows.
    pub blocks: Vec<Block>,
    /// Total day columns (1..=7).
    pub day_count: usize,
    /// Weekday prefix of the columns (cosmetic).
    pub work_day_count: usize,
    /// Working range start (minutes since midnight).
    pub start_minutes: u32,
    /// Working range end (minutes since midnight).
    pub end_minutes: u32,
    /// Weekday of column 0 (1 = Monday .. 7 = Sunday).
    pub start_day_of_week: u8,
}

impl PlanRequest {
    /// Creates a request for a Monday-through-Friday 08:00-17:00 week.
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            blocks: Vec::new(),
            day_count: 5,
            work_day_count: 5,
            start_minutes: 8 * 60,
            end_minutes: 17 * 60,
            start_day_of_week: 1,
        }
    }

    /// Sets the blocked windows.
    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Sets total and weekday column counts.
    pub fn with_days(mut self, day_count: usize, work_day_count: usize) -> Self {
        self.day_count = day_count;
        self.work_day_count = work_day_count;
        self
    }

    /// Sets the working time range (minutes since midnight).
    pub fn with_time_range(mut self, start_minutes: u32, end_minutes: u32) -> Self {
        self.start_minutes = start_minutes;
        self.end_minutes = end_minutes;
        self
    }

    /// Sets the weekday of the first column.
    pub fn with_start_day(mut self, start_day_of_week: u8) -> Self {
        self.start_day_of_week = start_day_of_week;
        self
    }
}

/// A completed generation run: the filled grid and the per-activity report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// The grid with blocked and occupied cells.
    pub grid: TimeGrid,
    /// Per-activity placement outcomes, in processing order.
    pub report: PlacementReport,
}

/// Schedule generator: grid builder, blocklist resolver, and placement
/// engine behind one call.
///
/// # Example
///
/// ```
/// use weekplan::models::{Activity, Block};
/// use weekplan::scheduler::{PlanRequest, Planner};
///
/// let request = PlanRequest::new(vec![Activity::new("Gym", 30, 3)])
///     .with_days(5, 5)
///     .with_time_range(8 * 60, 10 * 60)
///     .with_blocks(vec![Block::new(1, 8 * 60, 9 * 60)]);
///
/// let outcome = Planner::new().plan(&request).unwrap();
/// assert_eq!(outcome.report.outcome_for("Gym").unwrap().placed, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    options: PlacementOptions,
}

impl Planner {
    /// Creates a planner with legacy placement behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets engine options.
    pub fn with_options(mut self, options: PlacementOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs a full generation.
    ///
    /// The grid interval is sized from the activities' durations (gcd,
    /// 30-minute default, 5-minute floor). Aborts with no partial grid on
    /// an invalid day count, an invalid time range, or an empty activity
    /// list; per-activity shortfall is never an error.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanOutcome, ScheduleError> {
        if request.activities.is_empty() {
            return Err(ScheduleError::NoActivities);
        }

        let interval = interval_for(&request.activities);
        let mut grid = build_grid(
            request.day_count,
            request.work_day_count,
            request.start_minutes,
            request.end_minutes,
            interval,
        )?;

        apply_blocks(&mut grid, &request.blocks, request.start_day_of_week);
        let report = place_activities(&mut grid, &request.activities, self.options);

        Ok(PlanOutcome { grid, report })
    }
}
