//! Blocked time window model.
//!
//! A block is a fixed unavailable window on a specific weekday: lunch,
//! commute, a standing meeting. Blocks are parsed once from input and
//! consulted read-only by the blocklist resolver.
//!
//! # Time Model
//! All times are minutes since midnight (0..1440). Windows are half-open:
//! `[start_minutes, end_minutes)`.
//!
//! # Containment
//! A grid slot is blocked only when a block *fully* contains the slot's
//! window. Partial overlap leaves the slot free.

use serde::{Deserialize, Serialize};

/// A fixed unavailable time window on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Weekday, 1 = Monday .. 7 = Sunday.
    pub day: u8,
    /// Window start (minutes since midnight, inclusive).
    pub start_minutes: u32,
    /// Window end (minutes since midnight, exclusive).
    pub end_minutes: u32,
}

impl Block {
    /// Creates a new block. Callers are expected to pass `start < end`;
    /// inverted rows are screened out at parse time.
    pub fn new(day: u8, start_minutes: u32, end_minutes: u32) -> Self {
        Self {
            day,
            start_minutes,
            end_minutes,
        }
    }

    /// Window length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes.saturating_sub(self.start_minutes)
    }

    /// Whether this block fully contains the slot `[slot_start, slot_start + interval)`.
    ///
    /// This is the only test the resolver uses: partial overlap does not
    /// block a slot.
    #[inline]
    pub fn covers_slot(&self, slot_start: u32, interval_minutes: u32) -> bool {
        self.start_minutes <= slot_start && slot_start + interval_minutes <= self.end_minutes
    }

    /// Whether the window is well-formed (`start < end`, weekday in 1..=7).
    pub fn is_well_formed(&self) -> bool {
        (1..=7).contains(&self.day) && self.start_minutes < self.end_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_duration() {
        let b = Block::new(1, 480, 540); // Monday 08:00-09:00
        assert_eq!(b.duration_minutes(), 60);
    }

    #[test]
    fn test_covers_slot_full_containment() {
        let b = Block::new(1, 480, 540);
        assert!(b.covers_slot(480, 30)); // 08:00-08:30 inside
        assert!(b.covers_slot(510, 30)); // 08:30-09:00 inside
        assert!(!b.covers_slot(450, 30)); // 07:30-08:00 before
        assert!(!b.covers_slot(540, 30)); // 09:00-09:30 after
    }

    #[test]
    fn test_partial_overlap_does_not_cover() {
        // 08:15-08:45 block against a 30-minute grid starting at 08:00:
        // neither 08:00-08:30 nor 08:30-09:00 is fully contained.
        let b = Block::new(1, 495, 525);
        assert!(!b.covers_slot(480, 30));
        assert!(!b.covers_slot(510, 30));
    }

    #[test]
    fn test_exact_slot_covers() {
        let b = Block::new(3, 600, 630);
        assert!(b.covers_slot(600, 30)); // block == slot
        assert!(!b.covers_slot(600, 60)); // slot wider than block
    }

    #[test]
    fn test_well_formed() {
        assert!(Block::new(1, 480, 540).is_well_formed());
        assert!(!Block::new(0, 480, 540).is_well_formed()); // bad weekday
        assert!(!Block::new(8, 480, 540).is_well_formed());
        assert!(!Block::new(1, 540, 480).is_well_formed()); // inverted
        assert!(!Block::new(1, 480, 480).is_well_formed()); // empty
    }

    #[test]
    fn test_serde_round_trip() {
        let b = Block::new(5, 720, 780);
        let json = serde_json::to_string(&b).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
