//! Input validation for batch scheduling.
//!
//! Checks constraints and jobs before scheduling. Detects:
//! - Item limits below one
//! - Negative or NaN volume limits
//! - Negative or non-finite job volumes and print times
//!
//! Duplicate job ids are allowed: each input entry is scheduled on its own.

use std::fmt;

use crate::models::{Constraints, PrintJob};

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
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A capacity limit is out of range.
    InvalidConstraint,
    /// A job carries a negative or non-finite quantity.
    InvalidJob,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the input of a batch scheduling call.
///
/// Checks:
/// 1. `max_items` is at least 1
/// 2. `max_volume` is not negative or NaN (`+inf` means unbounded)
/// 3. Every job volume is finite and not negative
/// 4. Every job print time is finite and not negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[PrintJob], constraints: &Constraints) -> ValidationResult {
    let mut errors = Vec::new();

    if constraints.max_items < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraint,
            format!("max_items must be at least 1, got {}", constraints.max_items),
        ));
    }

    if constraints.max_volume.is_nan() || constraints.max_volume < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraint,
            format!(
                "max_volume must be non-negative, got {}",
                constraints.max_volume
            ),
        ));
    }

    for (position, job) in jobs.iter().enumerate() {
        if !is_non_negative_finite(job.volume) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidJob,
                format!(
                    "Job '{}' at position {} has invalid volume {}",
                    job.id, position, job.volume
                ),
            ));
        }
        if !is_non_negative_finite(job.print_time) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidJob,
                format!(
                    "Job '{}' at position {} has invalid print time {}",
                    job.id, position, job.print_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_non_negative_finite(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
