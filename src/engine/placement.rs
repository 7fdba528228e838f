//! Per-year placement search.
//!
//! # Algorithm
//!
//! 1. Partition the year's courses: the designated priority course,
//!    then mandatory/technical courses, then electives; placeholder
//!    entries are skipped, as is any course already in the schedule.
//! 2. For each course, place a contiguous theory block, then (if the
//!    course has lab hours) a contiguous lab block starting on a later
//!    weekday than the theory block.
//! 3. Candidate days are ranked by current load ("smart distribution");
//!    within a day, start indices are tried in grid order. The first
//!    day/start combination whose every slot passes all checks wins.
//!
//! The search is the proactive conflict tier: a slot it produces never
//! collides with instructor availability, the current schedule, or
//! earlier years' electives, so the reactive log stays empty for
//! search-produced slots. Placement is all-or-nothing per block but
//! not per course: a lab section that fails leaves earlier sections
//! in place and reports failure through the boolean result only.

use std::sync::Arc;

use crate::grid::{self, Weekday};
use crate::models::{Course, CourseKind, InstructorName, PlacedSlot, YearSchedule};

use super::CompletedSchedules;

/// Default priority course, scheduled before everything else.
const DEFAULT_PRIORITY_CODE: &str = "SENG 429";
/// Default marker forcing two lab sections regardless of enrollment.
const DEFAULT_SPLIT_MARKER: &str = "SENG 101";
/// Default catalogue placeholder for a not-yet-chosen elective.
const DEFAULT_PLACEHOLDER_CODE: &str = "ELEC";
/// Maximum non-lab hours per instructor per day.
const DEFAULT_DAILY_THEORY_CAP: usize = 4;
/// Enrollment above which a lab splits into two sections.
const DEFAULT_SPLIT_THRESHOLD: u32 = 40;

/// The single-year placement engine.
///
/// Stateless between calls; all schedule state lives in the
/// [`YearSchedule`] being filled and the [`CompletedSchedules`]
/// accumulator it consults.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    priority_code: String,
    split_marker: String,
    placeholder_code: String,
    daily_theory_cap: usize,
    split_threshold: u32,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementEngine {
    /// Creates an engine with the institutional defaults.
    pub fn new() -> Self {
        Self {
            priority_code: DEFAULT_PRIORITY_CODE.into(),
            split_marker: DEFAULT_SPLIT_MARKER.into(),
            placeholder_code: DEFAULT_PLACEHOLDER_CODE.into(),
            daily_theory_cap: DEFAULT_DAILY_THEORY_CAP,
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
        }
    }

    /// Sets the priority course code.
    pub fn with_priority_code(mut self, code: impl Into<String>) -> Self {
        self.priority_code = code.into();
        self
    }

    /// Sets the forced two-section marker.
    pub fn with_split_marker(mut self, marker: impl Into<String>) -> Self {
        self.split_marker = marker.into();
        self
    }

    /// Sets the elective placeholder code.
    pub fn with_placeholder_code(mut self, code: impl Into<String>) -> Self {
        self.placeholder_code = code.into();
        self
    }

    /// Sets the per-day non-lab hour cap.
    pub fn with_daily_theory_cap(mut self, cap: usize) -> Self {
        self.daily_theory_cap = cap;
        self
    }

    /// Sets the enrollment threshold for lab splitting.
    pub fn with_split_threshold(mut self, threshold: u32) -> Self {
        self.split_threshold = threshold;
        self
    }

    /// The configured elective placeholder code.
    pub fn placeholder_code(&self) -> &str {
        &self.placeholder_code
    }

    /// Fills one year's schedule from its course list.
    ///
    /// Courses are partitioned into priority / mandatory / elective
    /// buckets and scheduled in that order, each bucket in catalogue
    /// order. Placeholder entries, courses of other kinds, and courses
    /// already present by code are skipped. Individual placement
    /// failures are silent; callers inspect the schedule afterwards.
    pub fn fill_year(
        &self,
        schedule: &mut YearSchedule,
        courses: &[Arc<Course>],
        completed: &CompletedSchedules,
    ) {
        let mut priority: Vec<&Arc<Course>> = Vec::new();
        let mut mandatory: Vec<&Arc<Course>> = Vec::new();
        let mut electives: Vec<&Arc<Course>> = Vec::new();

        for course in courses {
            if course.code == self.placeholder_code {
                continue;
            }
            if course.code == self.priority_code {
                priority.push(course);
                continue;
            }
            match course.kind {
                CourseKind::Mandatory | CourseKind::TechnicalLabElective => {
                    mandatory.push(course)
                }
                CourseKind::Elective => electives.push(course),
                _ => {}
            }
        }

        for course in priority.into_iter().chain(mandatory).chain(electives) {
            if !schedule.contains_course(&course.code) {
                self.place_course(schedule, course, completed);
            }
        }
    }

    /// Places one course: theory block, then lab block.
    ///
    /// Returns `false` when either block could not be placed in full.
    /// Nothing already appended is rolled back.
    pub fn place_course(
        &self,
        schedule: &mut YearSchedule,
        course: &Arc<Course>,
        completed: &CompletedSchedules,
    ) -> bool {
        if course.theory_hours > 0
            && !self.place_block(schedule, course, course.theory_hours as usize, false, completed)
        {
            return false;
        }
        if course.lab_hours > 0
            && !self.place_block(schedule, course, course.lab_hours as usize, true, completed)
        {
            return false;
        }
        true
    }

    /// Places one contiguous block (all sections of it).
    ///
    /// A lab block only considers days strictly after the day of the
    /// course's theory block; with no theory block present it fails
    /// outright. Each section is searched independently; the first
    /// failing section fails the call, earlier sections stay placed.
    fn place_block(
        &self,
        schedule: &mut YearSchedule,
        course: &Arc<Course>,
        hours: usize,
        is_lab: bool,
        completed: &CompletedSchedules,
    ) -> bool {
        let mut days = self.ranked_days(schedule, course, completed);

        if is_lab {
            let last_theory_day = schedule
                .slots
                .iter()
                .filter(|s| s.course.code == course.code && !s.is_lab)
                .map(|s| s.day.index())
                .max();
            match last_theory_day {
                Some(idx) => days.retain(|d| d.index() > idx),
                None => return false,
            }
        }

        let sections = if is_lab { self.lab_sections_for(course) } else { 1 };

        for section in 1..=sections {
            let mut placed = false;
            'search: for &day in &days {
                for start_idx in grid::valid_start_indices(day) {
                    if start_idx + hours > grid::SLOTS_PER_DAY {
                        continue;
                    }
                    if let Some(run) =
                        self.try_run(schedule, course, day, start_idx, hours, is_lab, section, completed)
                    {
                        for slot in run {
                            schedule.insert(slot);
                        }
                        placed = true;
                        break 'search;
                    }
                }
            }
            if !placed {
                return false;
            }
        }
        true
    }

    /// Builds the candidate run at (day, start), or `None` if any check
    /// fails.
    ///
    /// Every composing slot must be outside the Friday exam block, leave
    /// the instructor free across current and completed schedules, and
    /// not collide with the current schedule (nor, for electives, with
    /// earlier years' electives). Theory runs additionally respect the
    /// instructor's daily non-lab cap.
    #[allow(clippy::too_many_arguments)]
    fn try_run(
        &self,
        schedule: &YearSchedule,
        course: &Arc<Course>,
        day: Weekday,
        start_idx: usize,
        hours: usize,
        is_lab: bool,
        section: u8,
        completed: &CompletedSchedules,
    ) -> Option<Vec<PlacedSlot>> {
        let mut run = Vec::with_capacity(hours);
        for i in 0..hours {
            let (start, end) = grid::SLOT_TIMES[start_idx + i];
            if grid::is_exam_block(day, start, end) {
                return None;
            }
            if !instructor_available(&course.instructor, day, start, end, schedule, completed) {
                return None;
            }
            let slot = PlacedSlot::new(day, start, end, Arc::clone(course), is_lab)
                .with_section(section);
            if self.collides(schedule, &slot, completed) {
                return None;
            }
            run.push(slot);
        }
        if !is_lab
            && !self.within_daily_theory_cap(&course.instructor, day, hours, schedule, completed)
        {
            return None;
        }
        Some(run)
    }

    /// Proactive collision probe for a tentative slot.
    ///
    /// Any overlap with the current schedule rejects the slot; for
    /// elective courses, overlap with an elective slot of any earlier
    /// year rejects it too.
    fn collides(
        &self,
        schedule: &YearSchedule,
        slot: &PlacedSlot,
        completed: &CompletedSchedules,
    ) -> bool {
        if schedule.slots.iter().any(|existing| slot.overlaps(existing)) {
            return true;
        }
        if slot.course.is_elective() {
            for built in completed.iter() {
                if built
                    .slots
                    .iter()
                    .any(|existing| existing.course.is_elective() && slot.overlaps(existing))
                {
                    return true;
                }
            }
        }
        false
    }

    /// Ranks weekdays for a course, lightest first.
    ///
    /// score = 4 × (slots already on that day in the current schedule)
    ///       + (instructor's slots that day across current and earlier
    ///          years). Stable sort: ties keep Monday..Friday order.
    /// Pure function of the current counts.
    fn ranked_days(
        &self,
        schedule: &YearSchedule,
        course: &Arc<Course>,
        completed: &CompletedSchedules,
    ) -> Vec<Weekday> {
        let mut ranked = Weekday::ALL.to_vec();
        ranked.sort_by_key(|&day| {
            let day_load = schedule.slots_on(day).count();
            let instructor_load = if course.instructor.is_unconstrained() {
                0
            } else {
                completed
                    .iter()
                    .chain(std::iter::once(&*schedule))
                    .flat_map(|s| s.slots_on(day))
                    .filter(|s| s.course.instructor == course.instructor)
                    .count()
            };
            day_load * 4 + instructor_load
        });
        ranked
    }

    /// Daily non-lab cap check for a tentative theory run.
    fn within_daily_theory_cap(
        &self,
        instructor: &InstructorName,
        day: Weekday,
        hours: usize,
        schedule: &YearSchedule,
        completed: &CompletedSchedules,
    ) -> bool {
        if instructor.is_unconstrained() {
            return true;
        }
        let taught: usize = completed
            .iter()
            .chain(std::iter::once(schedule))
            .flat_map(|s| s.slots_on(day))
            .filter(|s| !s.is_lab && &s.course.instructor == instructor)
            .count();
        taught + hours <= self.daily_theory_cap
    }

    /// Lab section count for a course.
    ///
    /// 1 by default; 2 when the code carries the forced-split marker or
    /// the raw enrollment field parses above the threshold. Malformed
    /// enrollment keeps the default.
    fn lab_sections_for(&self, course: &Course) -> u8 {
        if course.code.contains(&self.split_marker) {
            return 2;
        }
        match course.student_count.trim().parse::<u32>() {
            Ok(count) if count > self.split_threshold => 2,
            _ => 1,
        }
    }
}

/// Whether the instructor is free for [start, end) on the given day
/// across the current schedule and every completed year.
///
/// Unconstrained names are always free.
fn instructor_available(
    instructor: &InstructorName,
    day: Weekday,
    start_min: u16,
    end_min: u16,
    schedule: &YearSchedule,
    completed: &CompletedSchedules,
) -> bool {
    if instructor.is_unconstrained() {
        return true;
    }
    for built in completed.iter().chain(std::iter::once(schedule)) {
        for slot in built.slots_on(day) {
            if &slot.course.instructor == instructor
                && start_min < slot.end_min
                && slot.start_min < end_min
            {
                return false;
            }
        }
    }
    true
}
