//! University course timetabling engine.
//!
//! Assigns a fixed catalogue of courses to a weekly grid of discrete
//! time slots, one schedule per academic year (1–4), respecting
//! instructor availability, elective mutual exclusion across years,
//! and institutional rules: the Friday exam block, the daily theory
//! cap, and lab-section splitting.
//!
//! # Modules
//!
//! - **`grid`**: the immutable weekly grid — 5 days × 8 fixed
//!   50-minute slots — and the Friday exam-block rule
//! - **`models`**: domain types — `Course`, `Instructor`, `Classroom`,
//!   `PlacedSlot`, `YearSchedule`, `Conflict`
//! - **`engine`**: the placement search, fixed-position insertion, and
//!   the multi-year planner
//! - **`validation`**: structural catalogue checks run before the core
//!
//! # Conflict model
//!
//! Two tiers, deliberately distinct. The placement search proactively
//! rejects candidates that would collide; slots it produces never
//! populate a conflict log. Fixed-position entries bypass the search
//! and go through the reactive path: inserted unconditionally, with
//! every overlap logged. Callers detect under-scheduling by inspecting
//! the resulting schedules, not by catching errors — the engine is
//! silent-by-design for expected data irregularities.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use course_timetable::engine::TermPlanner;
//! use course_timetable::models::{Course, CourseKind};
//!
//! let catalogue = vec![
//!     Arc::new(
//!         Course::new("SENG 211", "Data Structures", 2, 3, 2, CourseKind::Mandatory)
//!             .with_instructor("A. Turing")
//!             .with_student_count("45"),
//!     ),
//!     Arc::new(Course::new("ELEC", "Elective Slot", 2, 3, 0, CourseKind::Elective)),
//! ];
//! let chosen = vec![Arc::new(Course::new(
//!     "SENG 471", "Special Topics", 0, 3, 0, CourseKind::Elective,
//! ))];
//!
//! let planner = TermPlanner::new(catalogue);
//! let schedules = planner.build_all(&chosen);
//! assert_eq!(schedules.len(), 4);
//! assert!(schedules[&2].contains_course("SENG 211"));
//! ```

pub mod engine;
pub mod grid;
pub mod models;
pub mod validation;
