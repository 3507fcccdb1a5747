//! Pre-flight integrity checks for schedule inputs.
//!
//! Detects problems the engine would otherwise degrade silently:
//! duplicate activity names, malformed rows, unresolvable start-hint
//! references. Running this is optional — the placement engine never
//! throws for any of these — but it makes the degradations visible
//! before generation.
//!
//! All detected issues are collected and returned together.

use std::collections::HashSet;

use crate::models::{Activity, Block, StartHint};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two activities share a name (case-insensitive).
    DuplicateName,
    /// An activity row would be silently skipped by screening.
    MalformedActivity,
    /// A block row would be silently skipped by screening.
    MalformedBlock,
    /// A start hint names an activity that doesn't exist.
    UnknownReference,
    /// A start hint names an activity processed later in the run, which
    /// the engine cannot resolve.
    ForwardReference,
    /// A start hint names the activity itself.
    SelfReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates schedule inputs.
///
/// Checks:
/// 1. Every activity row is well-formed (non-empty name, positive
///    duration, positive frequency).
/// 2. No two activities share a case-insensitive name.
/// 3. Every block row is well-formed (weekday 1..=7, start before end).
/// 4. Every `After`/`Mid` hint targets an existing activity that appears
///    *earlier* in the processing order, and not itself.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(activities: &[Activity], blocks: &[Block]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen_names: HashSet<String> = HashSet::new();
    for activity in activities {
        if !activity.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedActivity,
                format!(
                    "Activity '{}' would be skipped (empty name, zero duration, or zero frequency)",
                    activity.name
                ),
            ));
        }

        let key = activity.name.trim().to_ascii_lowercase();
        if !key.is_empty() && !seen_names.insert(key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate activity name: {}", activity.name),
            ));
        }
    }

    for block in blocks {
        if !block.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedBlock,
                format!(
                    "Block on day {} ({}-{} min) would be skipped",
                    block.day, block.start_minutes, block.end_minutes
                ),
            ));
        }
    }

    check_references(activities, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks `After`/`Mid` targets against processing order.
fn check_references(activities: &[Activity], errors: &mut Vec<ValidationError>) {
    for (index, activity) in activities.iter().enumerate() {
        let target = match &activity.start {
            StartHint::After(name) | StartHint::Mid(name) => name,
            StartHint::None | StartHint::Day(_) => continue,
        };

        if activity.name_matches(target) {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfReference,
                format!("Activity '{}' references itself", activity.name),
            ));
            continue;
        }

        match activities.iter().position(|a| a.name_matches(target)) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!(
                    "Activity '{}' references unknown activity '{target}'",
                    activity.name
                ),
            )),
            Some(pos) if pos > index => errors.push(ValidationError::new(
                ValidationErrorKind::ForwardReference,
                format!(
                    "Activity '{}' references '{target}', which is processed later and will not resolve",
                    activity.name
                ),
            )),
            Some(_) => {}
        }
    }
}
