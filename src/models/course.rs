//! Course model.
//!
//! A course is a catalogue entry: code, contact hours, kind, an optional
//! instructor reference by name, and a department tag derived from the
//! code prefix. Courses are immutable once constructed; the engine never
//! mutates them.

use serde::{Deserialize, Serialize};

use super::InstructorName;

/// Course kind classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseKind {
    /// Required departmental course.
    Mandatory,
    /// Departmental elective (subject to mutual exclusion across years).
    Elective,
    /// Service course taught for another department.
    Service,
    /// Institution-wide common course.
    Common,
    /// Graduate-level course.
    Graduate,
    /// Technical elective with a lab component.
    TechnicalLabElective,
}

/// Department tag, derived deterministically from the course code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Seng,
    Ceng,
    Common,
}

impl Department {
    /// Derives the department from a course code prefix.
    ///
    /// `CENG*` → Ceng; common-pool prefixes (PHYS, MATH, ENG, TURK,
    /// HIST, BIO, ESR) → Common; everything else → Seng.
    pub fn from_code(code: &str) -> Department {
        if code.starts_with("CENG") {
            return Department::Ceng;
        }
        const COMMON_PREFIXES: [&str; 7] =
            ["PHYS", "MATH", "ENG", "TURK", "HIST", "BIO", "ESR"];
        if COMMON_PREFIXES.iter().any(|p| code.starts_with(p)) {
            Department::Common
        } else {
            Department::Seng
        }
    }
}

/// A catalogue course.
///
/// `year` 0 marks an elective-pool course not bound to a single year.
/// `student_count` is kept as the raw catalogue string and parsed
/// leniently where needed; malformed values degrade to defaults rather
/// than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique catalogue key.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Target year (1–4), or 0 for the any-year elective pool.
    pub year: u8,
    /// Weekly theory hours.
    pub theory_hours: u8,
    /// Weekly lab hours.
    pub lab_hours: u8,
    /// Course kind.
    pub kind: CourseKind,
    /// Instructor reference by name. Loose: not an owning pointer.
    pub instructor: InstructorName,
    /// Enrolled student count, raw catalogue field.
    pub student_count: String,
    /// Declared lab section count.
    pub lab_sections: u8,
    /// Department tag derived from the code prefix.
    pub department: Department,
}

impl Course {
    /// Creates a course. The department is derived from the code.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        year: u8,
        theory_hours: u8,
        lab_hours: u8,
        kind: CourseKind,
    ) -> Self {
        let code = code.into();
        let department = Department::from_code(&code);
        Self {
            code,
            name: name.into(),
            year,
            theory_hours,
            lab_hours,
            kind,
            instructor: InstructorName::unconstrained(),
            student_count: String::new(),
            lab_sections: 0,
            department,
        }
    }

    /// Sets the instructor name.
    pub fn with_instructor(mut self, name: impl Into<String>) -> Self {
        self.instructor = InstructorName::new(name);
        self
    }

    /// Sets the raw student-count field.
    pub fn with_student_count(mut self, count: impl Into<String>) -> Self {
        self.student_count = count.into();
        self
    }

    /// Sets the declared lab section count.
    pub fn with_lab_sections(mut self, sections: u8) -> Self {
        self.lab_sections = sections;
        self
    }

    /// Total weekly contact hours.
    #[inline]
    pub fn total_hours(&self) -> u8 {
        self.theory_hours + self.lab_hours
    }

    /// Whether the course is elective-typed.
    #[inline]
    pub fn is_elective(&self) -> bool {
        self.kind == CourseKind::Elective
    }

    /// Whether the course has a lab component.
    #[inline]
    pub fn has_lab(&self) -> bool {
        self.lab_hours > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_from_code() {
        assert_eq!(Department::from_code("CENG 301"), Department::Ceng);
        assert_eq!(Department::from_code("PHYS 131"), Department::Common);
        assert_eq!(Department::from_code("MATH 101"), Department::Common);
        assert_eq!(Department::from_code("HIST 101"), Department::Common);
        assert_eq!(Department::from_code("SENG 101"), Department::Seng);
        // SENG does not match the ENG common prefix
        assert_ne!(Department::from_code("SENG 271"), Department::Common);
        assert_eq!(Department::from_code("ENG 101"), Department::Common);
    }

    #[test]
    fn test_course_builder() {
        let c = Course::new("SENG 211", "Data Structures", 2, 3, 2, CourseKind::Mandatory)
            .with_instructor("A. Lovelace")
            .with_student_count("45")
            .with_lab_sections(2);
        assert_eq!(c.department, Department::Seng);
        assert_eq!(c.total_hours(), 5);
        assert!(c.has_lab());
        assert!(!c.is_elective());
        assert_eq!(c.lab_sections, 2);
    }

    #[test]
    fn test_pool_elective_year_zero() {
        let c = Course::new("SENG 471", "Special Topics", 0, 3, 0, CourseKind::Elective);
        assert_eq!(c.year, 0);
        assert!(c.is_elective());
        assert!(!c.has_lab());
    }
}
