//! Input validation for process tables.
//!
//! Checks structural integrity of the batch before any simulation runs.
//! Detects:
//! - Duplicate process IDs
//! - Non-positive bursts (would never complete)
//! - Negative arrival times
//! - Batches whose last possible completion does not fit in `i64`
//!
//! All problems are collected so a caller can report them at once.

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before the simulation epoch.
    NegativeArrival,
    /// The latest arrival plus the total burst overflows the clock.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process table.
///
/// An empty table is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every simulated instant: latest arrival plus all work.
///
/// `None` when that bound overflows.
fn horizon(processes: &[Process]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst.max(0)))
}

/// Validates and converts failures into a [`ScheduleError`].
pub(crate) fn ensure_valid(processes: &[Process]) -> Result<(), ScheduleError> {
    validate_processes(processes).map_err(ScheduleError::Invalid)
}

/// Whether the table is sorted by ascending arrival.
pub fn is_arrival_ordered(processes: &[Process]) -> bool {
    processes.windows(2).all(|w| w[0].arrival <= w[1].arrival)
}
