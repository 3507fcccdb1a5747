//! Activity model.
//!
//! An activity is a recurring unit of work to place into the weekly grid:
//! it has a per-session duration, a frequency (occurrences per week), and
//! an optional start hint anchoring it to a day or to another activity's
//! placement.
//!
//! # Duration Model
//! `session_minutes` is either given directly or derived by dividing a
//! weekly total by the frequency, with a 5-minute floor.
//!
//! # Name Identity
//! Activity names are compared case-insensitively wherever they act as
//! lookup keys (start-hint targets, duplicate detection).

use serde::{Deserialize, Serialize};

/// Floor for per-session durations and grid intervals (minutes).
pub const MIN_SESSION_MINUTES: u32 = 5;

/// A recurring activity to be placed into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Display name; also the case-insensitive lookup key for start hints.
    pub name: String,
    /// Duration of one occurrence in minutes.
    pub session_minutes: u32,
    /// Occurrences to place per generation run (>= 1).
    pub frequency: u32,
    /// Recurrence metadata. Accepted and serialized but never consulted by
    /// placement; kept for forward compatibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repeat>,
    /// Where the placement search is conceptually meant to start.
    #[serde(default)]
    pub start: StartHint,
}

/// Recurrence metadata carried on an activity.
///
/// Placement ignores this entirely; it exists so callers can round-trip
/// recurrence settings through the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repeat {
    /// Recurrence unit.
    pub kind: RepeatKind,
    /// Every N units.
    pub interval: u32,
}

/// Recurrence unit for [`Repeat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatKind {
    Daily,
    Weekly,
    Monthly,
}

/// Anchor hint for an activity's placement search.
///
/// `After` and `Mid` name another activity and resolve against its slots
/// placed earlier in the same run; an unknown name, a forward reference,
/// or a target with no placed slots falls back to the default anchor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartHint {
    /// No preference: day 0 at the range start.
    #[default]
    None,
    /// A 1-based day column number.
    Day(u8),
    /// Immediately after the named activity's last placed slot.
    After(String),
    /// At the named activity's median placed slot (floor of the midpoint).
    Mid(String),
}

/// One grid slot written for an activity occurrence.
///
/// The engine records one of these per *row* written, not per occurrence,
/// so a 60-minute session on a 30-minute grid yields two records. See
/// `scheduler::PlacementOutcome::placed` for the occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSlot {
    /// Day column index (0-based).
    pub day: usize,
    /// Slot start (minutes since midnight).
    pub start_minutes: u32,
    /// Slot end (minutes since midnight).
    pub end_minutes: u32,
}

impl Activity {
    /// Creates an activity with an explicit per-session duration.
    pub fn new(name: impl Into<String>, session_minutes: u32, frequency: u32) -> Self {
        Self {
            name: name.into(),
            session_minutes,
            frequency,
            repeat: None,
            start: StartHint::None,
        }
    }

    /// Sets the per-session duration directly.
    pub fn with_session_minutes(mut self, minutes: u32) -> Self {
        self.session_minutes = minutes;
        self
    }

    /// Derives the per-session duration from a weekly total, dividing by
    /// `frequency` and flooring at [`MIN_SESSION_MINUTES`].
    pub fn with_total_minutes(mut self, total_minutes: u32) -> Self {
        let per_session = if self.frequency == 0 {
            total_minutes
        } else {
            total_minutes / self.frequency
        };
        self.session_minutes = per_session.max(MIN_SESSION_MINUTES);
        self
    }

    /// Sets the start hint.
    pub fn with_start(mut self, start: StartHint) -> Self {
        self.start = start;
        self
    }

    /// Sets recurrence metadata.
    pub fn with_repeat(mut self, kind: RepeatKind, interval: u32) -> Self {
        self.repeat = Some(Repeat { kind, interval });
        self
    }

    /// Whether this row survives input screening: non-empty name, positive
    /// duration, positive frequency.
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && self.session_minutes > 0 && self.frequency > 0
    }

    /// Whether this activity's name matches `other` case-insensitively.
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other)
    }
}

impl PlacedSlot {
    /// Creates a new placed-slot record.
    pub fn new(day: usize, start_minutes: u32, end_minutes: u32) -> Self {
        Self {
            day,
            start_minutes,
            end_minutes,
        }
    }
}

/// Drops malformed activity rows, preserving input order.
///
/// Mirrors the form-input contract: rows with an empty name, zero
/// duration, or zero frequency are skipped silently, not reported.
pub fn screen_activities(activities: Vec<Activity>) -> Vec<Activity> {
    activities
        .into_iter()
        .filter(Activity::is_well_formed)
        .collect()
}
