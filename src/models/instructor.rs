//! Instructor identity and the derived instructor index.
//!
//! Instructors are matched by name: a value-typed identifier, not an
//! object reference. The empty string and the `"---"` sentinel mean
//! "unconstrained" — no availability or load checks apply to such
//! courses. The index is purely derived from the course list and can be
//! rebuilt at any time; it is never an independent source of truth.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::Course;

/// Value-typed instructor identifier.
///
/// Comparison is plain string equality. `""` and `"---"` are sentinels
/// for "no instructor constraint".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructorName(String);

impl InstructorName {
    /// Creates an instructor name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The unconstrained sentinel.
    pub fn unconstrained() -> Self {
        Self(String::new())
    }

    /// Whether this name places no constraint on scheduling.
    #[inline]
    pub fn is_unconstrained(&self) -> bool {
        self.0.is_empty() || self.0 == "---"
    }

    /// The raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstructorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstructorName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A derived index entry: one instructor and the courses naming them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    /// Identity key.
    pub name: InstructorName,
    /// Courses referencing this name.
    pub courses: Vec<Arc<Course>>,
}

impl Instructor {
    /// Rebuilds the instructor index from a course list.
    ///
    /// Unconstrained names are not indexed.
    pub fn index_from(courses: &[Arc<Course>]) -> HashMap<InstructorName, Instructor> {
        let mut index: HashMap<InstructorName, Instructor> = HashMap::new();
        for course in courses {
            if course.instructor.is_unconstrained() {
                continue;
            }
            index
                .entry(course.instructor.clone())
                .or_insert_with(|| Instructor {
                    name: course.instructor.clone(),
                    courses: Vec::new(),
                })
                .courses
                .push(Arc::clone(course));
        }
        index
    }

    /// Total weekly theory hours across this instructor's courses.
    pub fn weekly_theory_hours(&self) -> u32 {
        self.courses.iter().map(|c| c.theory_hours as u32).sum()
    }
}
