//! Timetable domain models.
//!
//! Core data types for weekly schedule generation: the activity inputs,
//! the blocked-window inputs, and the time-slot grid the scheduler fills.
//!
//! # Domain Mappings
//!
//! | weekplan | School Timetable | Personal Planner | Shift Roster |
//! |----------|------------------|------------------|--------------|
//! | Activity | Subject | Habit/Errand | Shift Type |
//! | Block | Closed Period | Commitment | Off-Limits Window |
//! | TimeGrid | Weekly Timetable | Week View | Roster Grid |
//! | PlacedSlot | Lesson Slot | Booked Slot | Assigned Shift |

mod activity;
mod block;
mod grid;

pub use activity::{
    screen_activities, Activity, PlacedSlot, Repeat, RepeatKind, StartHint, MIN_SESSION_MINUTES,
};
pub use block::Block;
pub use grid::{CellState, TimeGrid};
