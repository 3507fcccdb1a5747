//! Weekly timetable generation.
//!
//! Lays out recurring activities into a day/time grid around fixed blocked
//! windows: given activities with durations, frequencies, and optional
//! start hints, plus per-weekday inaccessible intervals, `weekplan`
//! deterministically fills a discrete time-slot grid without conflicts.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `Block`, `TimeGrid`,
//!   `CellState`, `PlacedSlot`
//! - **`scheduler`**: The three generation stages (grid builder, blocklist
//!   resolver, placement engine) and the `Planner` facade
//! - **`parse`**: Form-style input parsing (`"HH:MM"`, `"5+2"` day specs,
//!   block rows)
//! - **`validation`**: Optional pre-flight integrity checks
//! - **`error`**: The abort-path error type
//!
//! # Determinism
//!
//! Generation is a pure function of its inputs: the same activities,
//! blocks, and grid parameters always produce the same grid. Placement is
//! order-dependent by design — one cursor is threaded across all
//! activities — so reordering the input changes the result.
//!
//! # Example
//!
//! ```
//! use weekplan::models::{Activity, Block};
//! use weekplan::scheduler::{PlanRequest, Planner};
//!
//! let request = PlanRequest::new(vec![
//!     Activity::new("Gym", 30, 3),
//!     Activity::new("Piano", 30, 2),
//! ])
//! .with_days(5, 5)
//! .with_time_range(8 * 60, 10 * 60)
//! .with_blocks(vec![Block::new(1, 8 * 60, 9 * 60)]);
//!
//! let outcome = Planner::new().plan(&request).unwrap();
//! assert!(outcome.report.is_fully_placed());
//! ```

pub mod error;
pub mod models;
pub mod parse;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
pub use models::{Activity, Block, CellState, PlacedSlot, TimeGrid};
pub use scheduler::{PlanOutcome, PlanRequest, Planner};
