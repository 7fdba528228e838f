//! Multi-year planning orchestrator.
//!
//! Builds the four year schedules in order. Each year consumes its
//! share of the chosen electives (an elective placed once is gone for
//! later years), takes its fixed-position entries, and is searched
//! against the accumulator of the years already built. Visibility is
//! asymmetric by construction: year 1 sees nothing, year 4 sees years
//! 1–3, and nothing ever looks forward.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::models::{Course, YearSchedule};

use super::{insert_fixed_entries, CompletedSchedules, FixedEntry, PlacementEngine};

/// First academic year built.
const FIRST_YEAR: u8 = 1;
/// Last academic year built.
const LAST_YEAR: u8 = 4;

/// The four-year timetable planner.
///
/// Holds the course catalogue, per-year fixed entries, and the
/// placement engine. One `build_all` call is one atomic planning run;
/// runs share no schedule state.
#[derive(Debug, Clone)]
pub struct TermPlanner {
    catalogue: Vec<Arc<Course>>,
    fixed: BTreeMap<u8, Vec<FixedEntry>>,
    engine: PlacementEngine,
}

impl TermPlanner {
    /// Creates a planner over a course catalogue.
    pub fn new(catalogue: Vec<Arc<Course>>) -> Self {
        Self {
            catalogue,
            fixed: BTreeMap::new(),
            engine: PlacementEngine::new(),
        }
    }

    /// Registers fixed-position entries for a year.
    pub fn with_fixed_entries(mut self, year: u8, entries: Vec<FixedEntry>) -> Self {
        self.fixed.insert(year, entries);
        self
    }

    /// Replaces the placement engine.
    pub fn with_engine(mut self, engine: PlacementEngine) -> Self {
        self.engine = engine;
        self
    }

    /// The catalogue's elective-typed courses.
    pub fn elective_pool(&self) -> Vec<Arc<Course>> {
        self.catalogue
            .iter()
            .filter(|c| c.is_elective() && c.code != self.engine.placeholder_code())
            .cloned()
            .collect()
    }

    /// Builds all four year schedules.
    ///
    /// `selected_electives` is the caller's chosen elective list; each
    /// entry is eligible for its own year or, with year 0, for any
    /// year, and is consumed by the first year that places it.
    /// Deterministic: the same inputs produce the same map.
    pub fn build_all(&self, selected_electives: &[Arc<Course>]) -> BTreeMap<u8, YearSchedule> {
        let mut completed = CompletedSchedules::new();
        let mut used_electives: HashSet<String> = HashSet::new();
        let placeholder = self.engine.placeholder_code().to_string();

        for year in FIRST_YEAR..=LAST_YEAR {
            let eligible: Vec<Arc<Course>> = selected_electives
                .iter()
                .filter(|e| (e.year == year || e.year == 0) && !used_electives.contains(&e.code))
                .cloned()
                .collect();

            let mut courses: Vec<Arc<Course>> = self
                .catalogue
                .iter()
                .filter(|c| c.year == year && c.code != placeholder)
                .cloned()
                .collect();

            // One chosen elective per placeholder slot in this year's
            // catalogue, never more.
            let open_slots = self
                .catalogue
                .iter()
                .filter(|c| c.year == year && c.code == placeholder)
                .count();
            courses.extend(eligible.into_iter().take(open_slots));

            let mut schedule = YearSchedule::new(year);
            if let Some(entries) = self.fixed.get(&year) {
                insert_fixed_entries(&mut schedule, entries, &self.catalogue);
            }
            self.engine.fill_year(&mut schedule, &courses, &completed);

            for slot in &schedule.slots {
                if slot.course.is_elective() && slot.course.code != placeholder {
                    used_electives.insert(slot.course.code.clone());
                }
            }
            completed.insert(schedule);
        }

        completed.into_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseKind;

    fn catalogue_course(code: &str, year: u8, theory: u8, kind: CourseKind) -> Arc<Course> {
        Arc::new(Course::new(code, code, year, theory, 0, kind).with_instructor("---"))
    }

    fn small_catalogue() -> Vec<Arc<Course>> {
        vec![
            catalogue_course("SENG 101", 1, 2, CourseKind::Mandatory),
            catalogue_course("SENG 201", 2, 3, CourseKind::Mandatory),
            catalogue_course("SENG 301", 3, 3, CourseKind::Mandatory),
            catalogue_course("ELEC", 3, 3, CourseKind::Elective),
            catalogue_course("SENG 401", 4, 2, CourseKind::Mandatory),
            catalogue_course("ELEC", 4, 3, CourseKind::Elective),
            catalogue_course("SENG 441", 0, 3, CourseKind::Elective),
            catalogue_course("SENG 442", 0, 3, CourseKind::Elective),
        ]
    }

    #[test]
    fn test_builds_four_years() {
        let planner = TermPlanner::new(small_catalogue());
        let schedules = planner.build_all(&[]);
        assert_eq!(schedules.len(), 4);
        for year in 1..=4 {
            assert_eq!(schedules[&year].year, year);
        }
        assert!(schedules[&1].contains_course("SENG 101"));
        assert!(schedules[&2].contains_course("SENG 201"));
    }

    #[test]
    fn test_elective_consumed_once() {
        let planner = TermPlanner::new(small_catalogue());
        let chosen = vec![
            catalogue_course("SENG 441", 0, 3, CourseKind::Elective),
            catalogue_course("SENG 442", 0, 3, CourseKind::Elective),
        ];
        let schedules = planner.build_all(&chosen);

        // Year 3 has one placeholder slot, so it takes the first
        // any-year elective; year 4 must not reuse it.
        assert!(schedules[&3].contains_course("SENG 441"));
        assert!(!schedules[&4].contains_course("SENG 441"));
        assert!(schedules[&4].contains_course("SENG 442"));
        // Placeholder entries themselves never appear
        for year in 1..=4 {
            assert!(!schedules[&year].contains_course("ELEC"));
        }
    }

    #[test]
    fn test_electives_capped_by_placeholder_slots() {
        let planner = TermPlanner::new(small_catalogue());
        let chosen = vec![
            catalogue_course("SENG 441", 3, 3, CourseKind::Elective),
            catalogue_course("SENG 442", 3, 3, CourseKind::Elective),
        ];
        let schedules = planner.build_all(&chosen);

        // Year 3 has a single placeholder: only one of the two lands
        assert!(schedules[&3].contains_course("SENG 441"));
        assert!(!schedules[&3].contains_course("SENG 442"));
        // Year-3-bound electives are not eligible for year 4
        assert!(!schedules[&4].contains_course("SENG 442"));
    }

    #[test]
    fn test_cross_year_electives_never_collide() {
        let planner = TermPlanner::new(small_catalogue());
        let chosen = vec![
            catalogue_course("SENG 441", 0, 3, CourseKind::Elective),
            catalogue_course("SENG 442", 0, 3, CourseKind::Elective),
        ];
        let schedules = planner.build_all(&chosen);

        let year3_electives: Vec<_> = schedules[&3]
            .slots
            .iter()
            .filter(|s| s.course.is_elective())
            .collect();
        let year4_electives: Vec<_> = schedules[&4]
            .slots
            .iter()
            .filter(|s| s.course.is_elective())
            .collect();
        assert!(!year3_electives.is_empty());
        assert!(!year4_electives.is_empty());
        for a in &year3_electives {
            for b in &year4_electives {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn test_fixed_entries_feed_the_search() {
        let planner = TermPlanner::new(small_catalogue()).with_fixed_entries(
            1,
            vec![FixedEntry::new("MATH 101", "Mon", "09:20", "11:10")],
        );
        let schedules = planner.build_all(&[]);

        let year1 = &schedules[&1];
        assert!(year1.contains_course("MATH 101"));
        // The search sees the fixed slots and avoids them
        let fixed: Vec<_> = year1.slots.iter().filter(|s| s.course.code == "MATH 101").collect();
        let searched: Vec<_> =
            year1.slots.iter().filter(|s| s.course.code == "SENG 101").collect();
        for a in &fixed {
            for b in &searched {
                assert!(!a.overlaps(b));
            }
        }
        assert!(!year1.has_conflicts());
    }

    #[test]
    fn test_deterministic_runs() {
        let planner = TermPlanner::new(small_catalogue());
        let chosen = vec![
            catalogue_course("SENG 441", 0, 3, CourseKind::Elective),
            catalogue_course("SENG 442", 0, 3, CourseKind::Elective),
        ];
        let first = planner.build_all(&chosen);
        let second = planner.build_all(&chosen);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_search_produced_schedules_have_clean_logs() {
        // No fixed entries: the proactive tier must keep every reactive
        // log empty.
        let planner = TermPlanner::new(small_catalogue());
        let chosen = vec![catalogue_course("SENG 441", 0, 3, CourseKind::Elective)];
        let schedules = planner.build_all(&chosen);
        for schedule in schedules.values() {
            assert!(!schedule.has_conflicts());
        }
    }

    #[test]
    fn test_elective_pool() {
        let planner = TermPlanner::new(small_catalogue());
        let pool = planner.elective_pool();
        let codes: Vec<&str> = pool.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["SENG 441", "SENG 442"]);
    }
}
