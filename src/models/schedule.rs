//! Year schedule: placed slots and the reactive conflict log.
//!
//! A `YearSchedule` is the per-year solution container. Insertion is
//! deliberately permissive: an overlapping slot is still appended, and
//! every overlap found against the slots already present is recorded in
//! the conflict log with a classified reason. Conflicts are logged,
//! never dropped, and never prevent insertion — the proactive search in
//! the placement engine is a separate tier that keeps this log empty
//! for search-produced slots, while fixed-position entries bypass it
//! and may legitimately populate the log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::grid::Weekday;

use super::{Course, Department, InstructorName};

/// A grid cell assigned to a course.
///
/// Many slots share one `Course`; the reference is shared, not owned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedSlot {
    /// Teaching day.
    pub day: Weekday,
    /// Start, minutes since midnight (inclusive).
    pub start_min: u16,
    /// End, minutes since midnight (exclusive).
    pub end_min: u16,
    /// The course occupying this cell.
    pub course: Arc<Course>,
    /// Whether this is a lab hour.
    pub is_lab: bool,
    /// Section number (1 or 2).
    pub section: u8,
    /// Assigned room, if any. The engine never fills this.
    pub classroom: Option<String>,
}

impl PlacedSlot {
    /// Creates a placed slot with section 1 and no room.
    pub fn new(
        day: Weekday,
        start_min: u16,
        end_min: u16,
        course: Arc<Course>,
        is_lab: bool,
    ) -> Self {
        Self {
            day,
            start_min,
            end_min,
            course,
            is_lab,
            section: 1,
            classroom: None,
        }
    }

    /// Sets the section number.
    pub fn with_section(mut self, section: u8) -> Self {
        self.section = section;
        self
    }

    /// Whether two slots occupy intersecting time on the same day.
    ///
    /// Half-open interval test: touching slots do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &PlacedSlot) -> bool {
        self.day == other.day && self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Classified reason for a logged conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictReason {
    /// Both slots are taught by the same instructor.
    InstructorClash(InstructorName),
    /// Both slots are electives of the same department.
    ElectiveOverlap(Department),
    /// Plain time overlap with no further classification.
    TimeOverlap,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::InstructorClash(name) => write!(f, "Instructor {name} conflict"),
            ConflictReason::ElectiveOverlap(Department::Ceng) => write!(f, "CENG elective overlap"),
            ConflictReason::ElectiveOverlap(_) => write!(f, "SENG elective overlap"),
            ConflictReason::TimeOverlap => write!(f, "Time overlap"),
        }
    }
}

/// A pair of overlapping slots recorded at insertion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// The slot being inserted.
    pub incoming: PlacedSlot,
    /// The slot it collided with.
    pub existing: PlacedSlot,
    /// Classified reason.
    pub reason: ConflictReason,
}

/// The complete schedule for one academic year.
///
/// Created empty, mutated only during that year's construction, then
/// treated as read-only input for later years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSchedule {
    /// Academic year (1–4).
    pub year: u8,
    /// Placed slots in insertion order.
    pub slots: Vec<PlacedSlot>,
    /// Reactive conflict log.
    pub conflicts: Vec<Conflict>,
}

impl YearSchedule {
    /// Creates an empty schedule for a year.
    pub fn new(year: u8) -> Self {
        Self {
            year,
            slots: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// Inserts a slot, logging any overlaps with slots already present.
    ///
    /// The slot is appended even when it conflicts. Returns `true` when
    /// the insertion was conflict-free.
    pub fn insert(&mut self, slot: PlacedSlot) -> bool {
        let mut clean = true;
        for existing in &self.slots {
            if slot.overlaps(existing) {
                self.conflicts.push(Conflict {
                    incoming: slot.clone(),
                    existing: existing.clone(),
                    reason: classify(&slot, existing),
                });
                clean = false;
            }
        }
        self.slots.push(slot);
        clean
    }

    /// Slots on the given day, in insertion order.
    pub fn slots_on(&self, day: Weekday) -> impl Iterator<Item = &PlacedSlot> {
        self.slots.iter().filter(move |s| s.day == day)
    }

    /// Whether any slot references the given course code.
    pub fn contains_course(&self, code: &str) -> bool {
        self.slots.iter().any(|s| s.course.code == code)
    }

    /// Whether the reactive log is non-empty.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Removes all slots and conflicts.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.conflicts.clear();
    }
}

/// Classifies why two overlapping slots collide.
fn classify(a: &PlacedSlot, b: &PlacedSlot) -> ConflictReason {
    let ia = &a.course.instructor;
    if !ia.is_unconstrained() && ia == &b.course.instructor {
        return ConflictReason::InstructorClash(ia.clone());
    }
    if a.course.is_elective()
        && b.course.is_elective()
        && a.course.department == b.course.department
        && a.course.department != Department::Common
    {
        return ConflictReason::ElectiveOverlap(a.course.department);
    }
    ConflictReason::TimeOverlap
}
