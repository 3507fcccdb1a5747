//! Blocklist resolver: marks inaccessible cells on a fresh grid.
//!
//! Runs once, after the grid is built and before any placement. Placement
//! never alters blocked cells.
//!
//! # Weekday Matching
//!
//! Column `i` is matched against blocks whose `day` equals
//! `start_day_of_week + i`, with *no* modulo wrap. With a start day near 7
//! the computed value can exceed 7 and will then match no block, even
//! though the column's display label wraps around the week. Existing
//! timetables depend on this; see DESIGN.md.

use crate::models::{Block, TimeGrid};

/// Marks every grid cell fully contained in a matching block as `Blocked`.
///
/// `start_day_of_week` is the weekday of column 0 (1 = Monday .. 7 = Sunday).
/// A cell is blocked iff some block with the column's matched weekday fully
/// contains the cell's slot window — partial overlap leaves the cell free.
pub fn apply_blocks(grid: &mut TimeGrid, blocks: &[Block], start_day_of_week: u8) {
    for day in 0..grid.day_count {
        // No wrap past 7: literal match against block.day.
        let weekday = start_day_of_week as u32 + day as u32;

        for row in 0..grid.row_count() {
            let slot_start = grid.row_start_minutes(row);
            let covered = blocks
                .iter()
                .filter(|b| b.day as u32 == weekday)
                .any(|b| b.covers_slot(slot_start, grid.interval_minutes));
            if covered {
                grid.block_cell(row, day);
            }
        }
    }
}
