//! Time-slot grid model.
//!
//! The grid is the schedule's backing store: a fixed matrix of cells,
//! one row per time slot and one column per day. Each cell is `Empty`,
//! `Blocked` (inside an inaccessible window), or `Occupied` by a named
//! activity.
//!
//! # Time Model
//! Rows discretize the working range `[start_minutes, end_minutes)` into
//! slots of `interval_minutes`. When the range does not divide evenly the
//! final row's nominal end extends past `end_minutes`; this is accepted
//! rather than truncated.
//!
//! # Invariant
//! Dimensions are fixed at construction. Only cell state mutates, and a
//! `Blocked` cell is never overwritten by placement.

use serde::{Deserialize, Serialize};

/// State of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Available for placement.
    Empty,
    /// Inside a blocked window; never written by placement.
    Blocked,
    /// Holds one slot of the named activity.
    Occupied(String),
}

/// A discrete day x time-slot grid.
///
/// Rendering concerns (the time-label column of the original table view)
/// are kept out of cell storage; labels are derived via
/// [`TimeGrid::row_start_minutes`] and [`TimeGrid::row_window`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    /// Duration of one row in minutes (>= 5).
    pub interval_minutes: u32,
    /// Working range start (minutes since midnight, inclusive).
    pub start_minutes: u32,
    /// Working range end (minutes since midnight, exclusive).
    pub end_minutes: u32,
    /// Total day columns (1..=7).
    pub day_count: usize,
    /// Prefix of columns classified as weekdays. Cosmetic only; has no
    /// effect on placement.
    pub work_day_count: usize,
    /// Cell states, `cells[row][day]`, dimensions `row_count x day_count`.
    cells: Vec<Vec<CellState>>,
}

impl TimeGrid {
    /// Creates a grid with all cells `Empty`.
    ///
    /// Row count = `ceil((end - start) / interval)`. Callers validate the
    /// range and interval first; see `scheduler::build_grid`.
    pub(crate) fn new(
        interval_minutes: u32,
        start_minutes: u32,
        end_minutes: u32,
        day_count: usize,
        work_day_count: usize,
    ) -> Self {
        let span = end_minutes - start_minutes;
        let row_count = span.div_ceil(interval_minutes) as usize;
        Self {
            interval_minutes,
            start_minutes,
            end_minutes,
            day_count,
            work_day_count,
            cells: vec![vec![CellState::Empty; day_count]; row_count],
        }
    }

    /// Number of time-slot rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Start of a row's slot (minutes since midnight).
    #[inline]
    pub fn row_start_minutes(&self, row: usize) -> u32 {
        self.start_minutes + row as u32 * self.interval_minutes
    }

    /// A row's slot window `(start, end)` in minutes since midnight.
    ///
    /// The last row's end may exceed `end_minutes`.
    pub fn row_window(&self, row: usize) -> (u32, u32) {
        let start = self.row_start_minutes(row);
        (start, start + self.interval_minutes)
    }

    /// The cell at `(row, day)`, or `None` when out of bounds.
    pub fn cell(&self, row: usize, day: usize) -> Option<&CellState> {
        self.cells.get(row).and_then(|r| r.get(day))
    }

    /// Whether the cell at `(row, day)` is in-bounds and `Empty`.
    pub fn is_free(&self, row: usize, day: usize) -> bool {
        matches!(self.cell(row, day), Some(CellState::Empty))
    }

    /// Whether the cell at `(row, day)` is marked `Blocked`.
    pub fn is_blocked(&self, row: usize, day: usize) -> bool {
        matches!(self.cell(row, day), Some(CellState::Blocked))
    }

    /// Marks a cell `Blocked`. No-op out of bounds.
    pub(crate) fn block_cell(&mut self, row: usize, day: usize) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(day)) {
            *cell = CellState::Blocked;
        }
    }

    /// Writes an activity into a cell. Callers check availability first;
    /// a `Blocked` cell is never passed here.
    pub(crate) fn occupy_cell(&mut self, row: usize, day: usize, name: &str) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(day)) {
            *cell = CellState::Occupied(name.to_string());
        }
    }

    /// All occupied cells as `(row, day, activity_name)` in row-major order.
    pub fn occupied_cells(&self) -> Vec<(usize, usize, &str)> {
        let mut out = Vec::new();
        for (row, cols) in self.cells.iter().enumerate() {
            for (day, cell) in cols.iter().enumerate() {
                if let CellState::Occupied(name) = cell {
                    out.push((row, day, name.as_str()));
                }
            }
        }
        out
    }

    /// Number of cells in a given state, across the whole grid.
    pub fn count_state(&self, state: &CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|r| r.iter())
            .filter(|c| *c == state)
            .count()
    }

    /// Whether a column index is in the weekday prefix.
    #[inline]
    pub fn is_work_day(&self, day: usize) -> bool {
        day < self.work_day_count
    }
}
