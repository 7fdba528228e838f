//! Fixed-position insertion for externally pre-positioned entries.
//!
//! Some entries arrive with their day and time already decided by an
//! outside authority (faculty-wide common courses, service lectures).
//! They are not searched: each one is expanded into grid slots and
//! pushed straight through [`YearSchedule::insert`], the reactive
//! logging path, so any overlap they cause is recorded rather than
//! avoided.
//!
//! # Entry format
//! Day and time fields use a `/`-separated multi-day convention: the
//! i-th day pairs with the i-th start/end when present, else falls back
//! to the first. A day or time token that fails to parse skips that day
//! silently; the remaining days still go in.

use std::sync::Arc;

use crate::grid::{self, Weekday, SLOT_TIMES};
use crate::models::{Course, CourseKind, PlacedSlot, YearSchedule};

/// An externally scheduled entry, time and day(s) already fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEntry {
    /// Course label. May carry a section marker (`Lab-2`, `(2)`, `Gr2`).
    pub code: String,
    /// `/`-separated day tokens (e.g. `Mon/Wed`).
    pub days: String,
    /// `/`-separated start times (`HH:MM`).
    pub starts: String,
    /// `/`-separated end times (`HH:MM`).
    pub ends: String,
}

impl FixedEntry {
    /// Creates a fixed entry.
    pub fn new(
        code: impl Into<String>,
        days: impl Into<String>,
        starts: impl Into<String>,
        ends: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            days: days.into(),
            starts: starts.into(),
            ends: ends.into(),
        }
    }
}

/// Inserts pre-positioned entries into a year's schedule.
///
/// Entries with an empty or `---` label are ignored. The course is
/// looked up in the catalogue by label (also with a trailing `(..)`
/// suffix stripped); when no match exists a minimal synthetic Common
/// course is substituted so the slots still reference something.
pub fn insert_fixed_entries(
    schedule: &mut YearSchedule,
    entries: &[FixedEntry],
    catalogue: &[Arc<Course>],
) {
    for entry in entries {
        let code = entry.code.trim();
        if code.is_empty() || code == "---" {
            continue;
        }

        let section = section_from_label(code);
        let is_lab = code.contains("Lab");
        let course = resolve_course(code, catalogue, schedule.year);

        let days: Vec<&str> = entry.days.split('/').collect();
        let starts: Vec<&str> = entry.starts.split('/').collect();
        let ends: Vec<&str> = entry.ends.split('/').collect();

        for (i, day_token) in days.iter().enumerate() {
            let Some(day) = Weekday::from_token(day_token) else {
                continue;
            };
            let start_token = starts.get(i).or_else(|| starts.first());
            let end_token = ends.get(i).or_else(|| ends.first());
            let (Some(start), Some(end)) = (
                start_token.and_then(|t| grid::parse_time(t)),
                end_token.and_then(|t| grid::parse_time(t)),
            ) else {
                continue;
            };

            // Expand the entry span into the grid cells it covers
            for &(slot_start, slot_end) in SLOT_TIMES.iter() {
                if slot_start >= start && slot_end <= end {
                    schedule.insert(
                        PlacedSlot::new(day, slot_start, slot_end, Arc::clone(&course), is_lab)
                            .with_section(section),
                    );
                }
            }
        }
    }
}

/// Section number derived from marker tokens in the entry label.
fn section_from_label(code: &str) -> u8 {
    let upper = code.to_uppercase();
    if upper.contains("LAB-2") || code.contains("(2)") || upper.contains("GR2") || upper.contains("GR 2")
    {
        2
    } else {
        1
    }
}

/// Finds the catalogue course for a label, or synthesizes one.
fn resolve_course(code: &str, catalogue: &[Arc<Course>], year: u8) -> Arc<Course> {
    let stripped = code.split('(').next().unwrap_or(code).trim();
    catalogue
        .iter()
        .find(|c| c.code == code || c.code == stripped)
        .cloned()
        .unwrap_or_else(|| {
            Arc::new(Course::new(code, code, year, 2, 0, CourseKind::Common))
        })
}
