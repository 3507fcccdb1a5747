//! Schedule generation stages.
//!
//! Three cooperating stages, run in order by [`Planner`]:
//!
//! 1. **Grid builder** ([`build_grid`], [`interval_for`]) — derives the
//!    empty time-slot grid from the day count, time range, and the gcd of
//!    activity durations.
//! 2. **Blocklist resolver** ([`apply_blocks`]) — marks cells fully
//!    contained in a blocked window.
//! 3. **Placement engine** ([`place_activities`]) — greedily places
//!    occurrences, threading one cursor across all activities.
//!
//! The stages mutate one [`crate::models::TimeGrid`] in sequence; the whole
//! run is single-threaded, deterministic, and free of partial-result
//! visibility.

mod blocks;
mod grid;
mod placement;
mod planner;

pub use blocks::apply_blocks;
pub use grid::{build_grid, interval_for, DEFAULT_INTERVAL_MINUTES};
pub use placement::{
    place_activities, place_activities_from, Cursor, PlacementOptions, PlacementOutcome,
    PlacementReport, MAX_ATTEMPTS,
};
pub use planner::{PlanOutcome, PlanRequest, Planner};
