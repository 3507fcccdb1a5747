//! Greedy placement engine.
//!
//! Places each activity's occurrences into the first available run of
//! free slots, walking a shared day/time cursor across the grid.
//!
//! # Algorithm
//!
//! 1. One cursor (day column, minutes) is threaded across *all* activities
//!    in input order; it is not reset between activities, so placements are
//!    order-dependent by design.
//! 2. Per activity: resolve its anchor, then make up to [`MAX_ATTEMPTS`]
//!    attempts. Each attempt scans the cursor's day column from the
//!    cursor's row downward for the first run of `slots_needed` consecutive
//!    cells that are neither blocked nor occupied, and writes the activity
//!    into the run on success.
//! 3. After every attempt the cursor moves to the next day column (wrapping);
//!    after a *failed* attempt it additionally advances one interval,
//!    wrapping back to the range start at the range end.
//!
//! # Failure Semantics
//!
//! An activity that cannot be fully placed within the attempt budget simply
//! ends with fewer occurrences than requested. This is never an error; the
//! shortfall is observable on [`PlacementOutcome`].
//!
//! # Anchor Quirk
//!
//! Each activity's anchor is resolved but, by default, never fed into the
//! search — the shared cursor wins. Existing timetables depend on this, so
//! it is the default; [`PlacementOptions::seed_cursor_from_anchor`]
//! enables the corrected seeding. See DESIGN.md.

use serde::{Deserialize, Serialize};

use crate::models::{Activity, PlacedSlot, StartHint, TimeGrid};

/// Attempt budget per activity.
pub const MAX_ATTEMPTS: u32 = 200;

/// The shared placement position: a day column and a time of day.
///
/// Explicit state threaded through the engine rather than ambient
/// globals, so tests can seed and inspect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Day column index (0-based).
    pub day: usize,
    /// Time of day (minutes since midnight).
    pub minutes: u32,
}

impl Cursor {
    /// The canonical initial cursor for a grid: day 0 at the range start.
    pub fn start_of(grid: &TimeGrid) -> Self {
        Self {
            day: 0,
            minutes: grid.start_minutes,
        }
    }
}

/// Engine switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlacementOptions {
    /// Seed each activity's search from its resolved anchor instead of the
    /// shared cursor. `false` keeps the legacy behavior, where the anchor
    /// is computed but unused.
    pub seed_cursor_from_anchor: bool,
}

/// Placement result for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// Activity name.
    pub name: String,
    /// Occurrences requested (the activity's frequency).
    pub requested: u32,
    /// Occurrences actually placed.
    pub placed: u32,
    /// Grid slots written, one record per *row* (a multi-row session
    /// contributes several records per occurrence).
    pub slots: Vec<PlacedSlot>,
}

impl PlacementOutcome {
    /// Whether every requested occurrence was placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.placed == self.requested
    }

    /// Occurrences that could not be placed.
    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.requested - self.placed
    }

    /// The last slot written, used to resolve `After` hints.
    pub fn last_slot(&self) -> Option<&PlacedSlot> {
        self.slots.last()
    }

    /// The middle slot by record index (floor), used to resolve `Mid` hints.
    pub fn mid_slot(&self) -> Option<&PlacedSlot> {
        self.slots.get(self.slots.len() / 2)
    }
}

/// Placement results for a whole run, in activity processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    /// One outcome per processed activity.
    pub outcomes: Vec<PlacementOutcome>,
}

impl PlacementReport {
    /// Finds an outcome by activity name, case-insensitively.
    pub fn outcome_for(&self, name: &str) -> Option<&PlacementOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
    }

    /// Whether every activity met its requested frequency.
    pub fn is_fully_placed(&self) -> bool {
        self.outcomes.iter().all(PlacementOutcome::is_complete)
    }

    /// Total grid rows written across all activities.
    pub fn total_rows_written(&self) -> usize {
        self.outcomes.iter().map(|o| o.slots.len()).sum()
    }
}

/// Places all activities, starting from the canonical cursor.
///
/// Equivalent to [`place_activities_from`] seeded with
/// [`Cursor::start_of`] the grid, which makes the run a pure function of
/// (grid, activities, options): identical inputs yield identical
/// placements.
pub fn place_activities(
    grid: &mut TimeGrid,
    activities: &[Activity],
    options: PlacementOptions,
) -> PlacementReport {
    let cursor = Cursor::start_of(grid);
    place_activities_from(grid, activities, options, cursor)
}

/// Places all activities from an explicit starting cursor.
///
/// The cursor persists across activity boundaries; a different seed or a
/// different activity order produces different placements.
pub fn place_activities_from(
    grid: &mut TimeGrid,
    activities: &[Activity],
    options: PlacementOptions,
    mut cursor: Cursor,
) -> PlacementReport {
    let mut report = PlacementReport::default();

    for activity in activities {
        let anchor = resolve_anchor(activity, grid, &report);
        if options.seed_cursor_from_anchor {
            cursor = anchor;
        }
        let outcome = place_one(grid, activity, &mut cursor);
        report.outcomes.push(outcome);
    }

    report
}

/// Resolves an activity's anchor against already-completed outcomes.
///
/// Unknown names, forward references, and targets with no placed slots all
/// fall back to the default anchor (day 0 at the range start). `After`
/// anchors at the end of the target's last slot; `Mid` at the start of the
/// target's middle slot record.
fn resolve_anchor(activity: &Activity, grid: &TimeGrid, report: &PlacementReport) -> Cursor {
    let default = Cursor {
        day: 0,
        minutes: grid.start_minutes,
    };

    match &activity.start {
        StartHint::None => default,
        StartHint::Day(n) => {
            let n = *n as usize;
            if (1..=grid.day_count).contains(&n) {
                Cursor {
                    day: n - 1,
                    minutes: grid.start_minutes,
                }
            } else {
                default
            }
        }
        StartHint::After(target) => report
            .outcome_for(target)
            .and_then(PlacementOutcome::last_slot)
            .map(|slot| Cursor {
                day: slot.day,
                minutes: slot.end_minutes,
            })
            .unwrap_or(default),
        StartHint::Mid(target) => report
            .outcome_for(target)
            .and_then(PlacementOutcome::mid_slot)
            .map(|slot| Cursor {
                day: slot.day,
                minutes: slot.start_minutes,
            })
            .unwrap_or(default),
    }
}

/// Runs the attempt loop for one activity, mutating the grid and cursor.
fn place_one(grid: &mut TimeGrid, activity: &Activity, cursor: &mut Cursor) -> PlacementOutcome {
    let interval = grid.interval_minutes;
    let slots_needed = activity.session_minutes.div_ceil(interval) as usize;

    let mut placed: u32 = 0;
    let mut slots: Vec<PlacedSlot> = Vec::new();
    let mut attempts: u32 = 0;

    while placed < activity.frequency && attempts < MAX_ATTEMPTS {
        attempts += 1;

        let row_index = (cursor.minutes.saturating_sub(grid.start_minutes) / interval) as usize;
        let run_start = find_free_run(grid, cursor.day, row_index, slots_needed);

        if let Some(run_start) = run_start {
            for row in run_start..run_start + slots_needed {
                grid.occupy_cell(row, cursor.day, &activity.name);
                let (start, end) = grid.row_window(row);
                slots.push(PlacedSlot::new(cursor.day, start, end));
            }
            placed += 1;
            cursor.day = (cursor.day + 1) % grid.day_count;
        } else {
            cursor.day = (cursor.day + 1) % grid.day_count;
            cursor.minutes += interval;
            if cursor.minutes >= grid.end_minutes {
                cursor.minutes = grid.start_minutes;
            }
        }
    }

    PlacementOutcome {
        name: activity.name.clone(),
        requested: activity.frequency,
        placed,
        slots,
    }
}

/// Finds the first run of `slots_needed` free consecutive rows in one day
/// column, starting the scan at `from_row`.
fn find_free_run(grid: &TimeGrid, day: usize, from_row: usize, slots_needed: usize) -> Option<usize> {
    if slots_needed == 0 {
        return None;
    }
    let rows = grid.row_count();
    let mut start = from_row;
    while start + slots_needed <= rows {
        if (start..start + slots_needed).all(|row| grid.is_free(row, day)) {
            return Some(start);
        }
        start += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, CellState};
    use crate::scheduler::{apply_blocks, build_grid};

    fn grid(days: usize, start: u32, end: u32, interval: u32) -> TimeGrid {
        build_grid(days, days, start, end, interval).unwrap()
    }

    #[test]
    fn test_single_activity_three_occurrences() {
        // 4 rows x 5 days, no blocks: Gym lands in row 0 of days 0, 1, 2.
        let mut g = grid(5, 480, 600, 30);
        let acts = vec![Activity::new("Gym", 30, 3)];

        let report = place_activities(&mut g, &acts, PlacementOptions::default());
        let gym = report.outcome_for("Gym").unwrap();

        assert_eq!(gym.placed, 3);
        assert!(gym.is_complete());
        assert_eq!(
            gym.slots,
            vec![
                PlacedSlot::new(0, 480, 510),
                PlacedSlot::new(1, 480, 510),
                PlacedSlot::new(2, 480, 510),
            ]
        );
        assert_eq!(g.occupied_cells().len(), 3);
    }

    #[test]
    fn test_occurrences_never_share_a_cell() {
        let mut g = grid(3, 480, 600, 30);
        let acts = vec![Activity::new("A", 30, 4), Activity::new("B", 30, 4)];

        place_activities(&mut g, &acts, PlacementOptions::default());

        let occ = g.occupied_cells();
        assert_eq!(occ.len(), 8);
        let mut seen = std::collections::HashSet::new();
        for (row, day, _) in occ {
            assert!(seen.insert((row, day)));
        }
    }

    #[test]
    fn test_multi_row_session_records_one_slot_per_row() {
        // 60-minute session on a 30-minute grid: two rows, two records, one
        // occurrence.
        let mut g = grid(5, 480, 600, 30);
        let acts = vec![Activity::new("Deep Work", 60, 2)];

        let report = place_activities(&mut g, &acts, PlacementOptions::default());
        let dw = &report.outcomes[0];

        assert_eq!(dw.placed, 2);
        assert_eq!(dw.slots.len(), 4); // placed * slots_needed
        assert_eq!(
            dw.slots[..2],
            [PlacedSlot::new(0, 480, 510), PlacedSlot::new(0, 510, 540)]
        );
        assert_eq!(report.total_rows_written(), 4);
    }

    #[test]
    fn test_blocked_cells_are_never_overwritten() {
        let mut g = grid(1, 480, 600, 30);
        // Block everything but row 2 on the single Monday column.
        let blocks = vec![Block::new(1, 480, 540), Block::new(1, 570, 600)];
        apply_blocks(&mut g, &blocks, 1);

        let acts = vec![Activity::new("Gym", 30, 2)];
        let report = place_activities(&mut g, &acts, PlacementOptions::default());

        assert_eq!(report.outcomes[0].placed, 1);
        assert_eq!(report.outcomes[0].slots, vec![PlacedSlot::new(0, 540, 570)]);
        assert_eq!(g.count_state(&CellState::Blocked), 3);
        assert!(g.is_blocked(0, 0));
        assert!(g.is_blocked(1, 0));
        assert!(g.is_blocked(3, 0));
    }

    #[test]
    fn test_shortfall_is_silent() {
        // 2 free rows, frequency 5: ends with placed < 5 and no panic.
        let mut g = grid(1, 480, 540, 30);
        let acts = vec![Activity::new("Gym", 30, 5)];

        let report = place_activities(&mut g, &acts, PlacementOptions::default());
        let gym = &report.outcomes[0];

        assert_eq!(gym.placed, 2);
        assert_eq!(gym.requested, 5);
        assert_eq!(gym.shortfall(), 3);
        assert!(!gym.is_complete());
        assert!(!report.is_fully_placed());
    }

    #[test]
    fn test_cursor_carries_across_activities() {
        // After A places on day 0 the cursor sits on day 1, so B starts
        // there rather than back at day 0.
        let mut g = grid(5, 480, 600, 30);
        let acts = vec![Activity::new("A", 30, 1), Activity::new("B", 30, 1)];

        let report = place_activities(&mut g, &acts, PlacementOptions::default());
        assert_eq!(report.outcomes[0].slots, vec![PlacedSlot::new(0, 480, 510)]);
        assert_eq!(report.outcomes[1].slots, vec![PlacedSlot::new(1, 480, 510)]);
    }

    #[test]
    fn test_explicit_cursor_seed() {
        let mut g = grid(5, 480, 600, 30);
        let acts = vec![Activity::new("A", 30, 1)];
        let seed = Cursor { day: 3, minutes: 540 };

        let report =
            place_activities_from(&mut g, &acts, PlacementOptions::default(), seed);
        assert_eq!(report.outcomes[0].slots, vec![PlacedSlot::new(3, 540, 570)]);
    }

    #[test]
    fn test_legacy_mode_ignores_day_hint() {
        // B asks for day 4 but the anchor never reaches the cursor: B lands
        // on day 1 only because the cursor happens to be there after A.
        let mut g = grid(5, 480, 600, 30);
        let acts = vec![
            Activity::new("A", 30, 1),
            Activity::new("B", 30, 1).with_start(StartHint::Day(4)),
        ];

        let report = place_activities(&mut g, &acts, PlacementOptions::default());
        assert_eq!(report.outcomes[1].slots, vec![PlacedSlot::new(1, 480, 510)]);
    }

    #[test]
    fn test_corrected_mode_seeds_from_day_hint() {
        let mut g = grid(5, 480, 600, 30);
        let acts = vec![
            Activity::new("A", 30, 1),
            Activity::new("B", 30, 1).with_start(StartHint::Day(4)),
        ];
        let options = PlacementOptions {
            seed_cursor_from_anchor: true,
        };

        let report = place_activities(&mut g, &acts, options);
        assert_eq!(report.outcomes[1].slots, vec![PlacedSlot::new(3, 480, 510)]);
    }

    #[test]
    fn test_corrected_mode_after_reference() {
        // Work places rows 0 of days 0 and 1; After("work") seeds at the
        // end of the last slot (day 1, 08:30), case-insensitively.
        let mut g = grid(5, 480, 600, 30);
        let acts = vec![
            Activity::new("Work", 30, 2),
            Activity::new("Gym", 30, 1).with_start(StartHint::After("work".into())),
        ];
        let options = PlacementOptions {
            seed_cursor_from_anchor: true,
        };

        let report = place_activities(&mut g, &acts, options);
        assert_eq!(report.outcomes[1].slots, vec![PlacedSlot::new(1, 510, 540)]);
    }

    #[test]
    fn test_corrected_mode_mid_reference() {
        // Work's three slot records sit on days 0, 1, 2; mid = index 1.
        let mut g = grid(5, 480, 600, 30);
        let acts = vec![
            Activity::new("Work", 30, 3),
            Activity::new("Gym", 30, 1).with_start(StartHint::Mid("Work".into())),
        ];
        let options = PlacementOptions {
            seed_cursor_from_anchor: true,
        };

        let report = place_activities(&mut g, &acts, options);
        // Day 1 row 0 is taken by Work; the scan falls through to row 1.
        assert_eq!(report.outcomes[1].slots, vec![PlacedSlot::new(1, 510, 540)]);
    }

    #[test]
    fn test_forward_reference_falls_back_to_default() {
        // B references C, which is processed later: anchor resolution fails
        // and the default applies even in corrected mode.
        let mut g = grid(5, 480, 600, 30);
        let acts = vec![
            Activity::new("B", 30, 1).with_start(StartHint::After("C".into())),
            Activity::new("C", 30, 1),
        ];
        let options = PlacementOptions {
            seed_cursor_from_anchor: true,
        };

        let report = place_activities(&mut g, &acts, options);
        assert_eq!(report.outcomes[0].slots, vec![PlacedSlot::new(0, 480, 510)]);
    }

    #[test]
    fn test_unknown_reference_falls_back() {
        let mut g = grid(5, 480, 600, 30);
        let acts =
            vec![Activity::new("B", 30, 1).with_start(StartHint::After("Nobody".into()))];
        let options = PlacementOptions {
            seed_cursor_from_anchor: true,
        };

        let report = place_activities(&mut g, &acts, options);
        assert_eq!(report.outcomes[0].slots, vec![PlacedSlot::new(0, 480, 510)]);
    }

    #[test]
    fn test_out_of_range_day_hint_falls_back() {
        let mut g = grid(3, 480, 600, 30);
        let acts = vec![Activity::new("A", 30, 1).with_start(StartHint::Day(6))];
        let options = PlacementOptions {
            seed_cursor_from_anchor: true,
        };

        let report = place_activities(&mut g, &acts, options);
        assert_eq!(report.outcomes[0].slots, vec![PlacedSlot::new(0, 480, 510)]);
    }

    #[test]
    fn test_idempotent_across_fresh_grids() {
        let acts = vec![
            Activity::new("A", 60, 2),
            Activity::new("B", 30, 3).with_start(StartHint::After("A".into())),
            Activity::new("C", 30, 1),
        ];

        let mut g1 = grid(5, 480, 660, 30);
        let r1 = place_activities(&mut g1, &acts, PlacementOptions::default());
        let mut g2 = grid(5, 480, 660, 30);
        let r2 = place_activities(&mut g2, &acts, PlacementOptions::default());

        assert_eq!(r1, r2);
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_order_dependence() {
        let ab = vec![Activity::new("A", 30, 1), Activity::new("B", 30, 1)];
        let ba = vec![Activity::new("B", 30, 1), Activity::new("A", 30, 1)];

        let mut g1 = grid(5, 480, 600, 30);
        let r1 = place_activities(&mut g1, &ab, PlacementOptions::default());
        let mut g2 = grid(5, 480, 600, 30);
        let r2 = place_activities(&mut g2, &ba, PlacementOptions::default());

        // Same cells get used, but by different activities.
        assert_eq!(r1.outcome_for("A").unwrap().slots[0].day, 0);
        assert_eq!(r2.outcome_for("A").unwrap().slots[0].day, 1);
    }

    #[test]
    fn test_session_longer_than_column_never_places() {
        // 4 rows of 30 minutes; a 150-minute session needs 5 rows.
        let mut g = grid(2, 480, 600, 30);
        let acts = vec![Activity::new("Marathon", 150, 1)];

        let report = place_activities(&mut g, &acts, PlacementOptions::default());
        assert_eq!(report.outcomes[0].placed, 0);
        assert!(report.outcomes[0].slots.is_empty());
        assert_eq!(g.occupied_cells().len(), 0);
    }

    #[test]
    fn test_fills_column_top_to_bottom_on_one_day_grid() {
        let mut g = grid(1, 480, 600, 30);
        let acts = vec![Activity::new("A", 30, 4)];

        let report = place_activities(&mut g, &acts, PlacementOptions::default());
        let days: Vec<usize> = report.outcomes[0].slots.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![0, 0, 0, 0]);
        assert_eq!(report.outcomes[0].placed, 4);
        assert_eq!(g.count_state(&CellState::Empty), 0);
    }

    #[test]
    fn test_find_free_run_scans_forward() {
        let mut g = grid(1, 480, 600, 30);
        g.occupy_cell(0, 0, "X");
        g.occupy_cell(2, 0, "X");

        assert_eq!(find_free_run(&g, 0, 0, 1), Some(1));
        assert_eq!(find_free_run(&g, 0, 0, 2), None); // no 2-run left
        assert_eq!(find_free_run(&g, 0, 2, 1), Some(3));
        assert_eq!(find_free_run(&g, 0, 4, 1), None); // past the end
    }
}
