//! Timetabling domain models.
//!
//! Core data types for the university timetabling problem: the course
//! catalogue, the derived instructor index, classrooms, and the per-year
//! schedule with its conflict log.
//!
//! Courses are immutable once loaded; placed slots share them by `Arc`.
//! Instructors are matched by name, never by reference.

mod classroom;
mod course;
mod instructor;
mod schedule;

pub use classroom::{default_classrooms, Classroom, ClassroomType};
pub use course::{Course, CourseKind, Department};
pub use instructor::{Instructor, InstructorName};
pub use schedule::{Conflict, ConflictReason, PlacedSlot, YearSchedule};
