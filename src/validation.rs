//! Structural validation of the course catalogue.
//!
//! The engine itself never raises for data irregularities — malformed
//! enrollment counts, bad day tokens and the like degrade to defaults.
//! What it does expect is a structurally sound catalogue, and that is
//! checked here, before anything reaches the engine:
//! - no duplicate course codes (placeholder rows excepted: one
//!   placeholder per open elective slot is the convention)
//! - target years within 0..=4
//! - at least one contact hour per real course
//! - declared lab sections within 0..=2

use std::collections::HashSet;
use std::sync::Arc;

use crate::models::Course;

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
    /// Two non-placeholder courses share a code.
    DuplicateCode,
    /// Target year outside 0..=4.
    YearOutOfRange,
    /// Course with neither theory nor lab hours.
    NoContactHours,
    /// Declared lab section count outside 0..=2.
    BadSectionCount,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalogue.
///
/// `placeholder_code` is the caller's elective placeholder convention;
/// placeholder rows are exempt from the duplicate and contact-hour
/// checks since one row per open slot is expected.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_catalogue(courses: &[Arc<Course>], placeholder_code: &str) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for course in courses {
        let is_placeholder = course.code == placeholder_code;

        if !is_placeholder && !seen.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate course code: {}", course.code),
            ));
        }

        if course.year > 4 {
            errors.push(ValidationError::new(
                ValidationErrorKind::YearOutOfRange,
                format!("Course '{}' targets year {}", course.code, course.year),
            ));
        }

        if !is_placeholder && course.total_hours() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoContactHours,
                format!("Course '{}' has no contact hours", course.code),
            ));
        }

        if course.lab_sections > 2 {
            errors.push(ValidationError::new(
                ValidationErrorKind::BadSectionCount,
                format!(
                    "Course '{}' declares {} lab sections",
                    course.code, course.lab_sections
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
