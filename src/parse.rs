//! Input-string parsing for form-style schedule input.
//!
//! The UI supplies times as `"HH:MM"`, time ranges as `"HH:MM - HH:MM"`,
//! block rows as a weekday plus `"HH:MM-HH:MM"`, and the day count as
//! either a plain integer or a `"<workDays>+<extraDays>"` spec.
//!
//! All helpers return `Option`: a malformed row yields `None` and the
//! caller skips it silently, matching the form-input contract. Hard
//! validation of the surviving values happens in the scheduler.

use crate::models::Block;

/// Day-count spec: total columns and the weekday prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpec {
    /// Total day columns.
    pub total: usize,
    /// Columns classified as weekdays (the first '+'-part).
    pub work_days: usize,
}

/// Parses `"HH:MM"` into minutes since midnight.
///
/// Hours must be 0..=23 and minutes 0..=59; anything else yields `None`.
pub fn parse_clock(input: &str) -> Option<u32> {
    let (hours, minutes) = input.trim().split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Parses `"HH:MM - HH:MM"` (split on `-`) into a `(start, end)` pair of
/// minutes since midnight. Inverted or empty ranges yield `None`.
pub fn parse_time_range(input: &str) -> Option<(u32, u32)> {
    let (start, end) = input.split_once('-')?;
    let start = parse_clock(start)?;
    let end = parse_clock(end)?;
    if start >= end {
        return None;
    }
    Some((start, end))
}

/// Parses a day-count spec: `"5"`, `"5+2"`, `"4+1+2"`.
///
/// The total is the sum of the '+'-separated parts and must land in 1..=7;
/// the weekday prefix is the first part.
pub fn parse_day_spec(input: &str) -> Option<DaySpec> {
    let mut total: usize = 0;
    let mut work_days: Option<usize> = None;

    for part in input.split('+') {
        let value: usize = part.trim().parse().ok()?;
        if work_days.is_none() {
            work_days = Some(value);
        }
        total += value;
    }

    if !(1..=7).contains(&total) {
        return None;
    }
    Some(DaySpec {
        total,
        work_days: work_days?,
    })
}

/// Parses one block row: a weekday selector plus a `"HH:MM-HH:MM"` range.
///
/// Rows with an unparsable range, an inverted range, or a weekday outside
/// 1..=7 yield `None` for the caller to skip.
pub fn parse_block_row(day: u8, range: &str) -> Option<Block> {
    let (start, end) = parse_time_range(range)?;
    let block = Block::new(day, start, end);
    block.is_well_formed().then_some(block)
}

/// Parses a list of `(day, range)` rows, silently dropping malformed ones.
pub fn parse_block_rows<'a, I>(rows: I) -> Vec<Block>
where
    I: IntoIterator<Item = (u8, &'a str)>,
{
    rows.into_iter()
        .filter_map(|(day, range)| parse_block_row(day, range))
        .collect()
}
