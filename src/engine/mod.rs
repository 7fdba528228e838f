//! Timetable construction engine.
//!
//! Three collaborating parts:
//!
//! - **`PlacementEngine`**: the per-year search — course classification,
//!   smart day ranking, contiguous-block placement, section splitting,
//!   and proactive conflict avoidance against earlier years.
//! - **`FixedEntry` insertion**: externally pre-positioned entries that
//!   bypass the search and go straight through the reactive logging path.
//! - **`TermPlanner`**: the multi-year orchestrator sequencing years
//!   1→4 and tracking consumed electives.
//!
//! Cross-year state is the explicit [`CompletedSchedules`] accumulator,
//! passed by reference into each year's build. Visibility is backward
//! only: year N consults years < N and nothing later.

use std::collections::BTreeMap;

use crate::models::YearSchedule;

mod fixed;
mod placement;
mod planner;

pub use fixed::{insert_fixed_entries, FixedEntry};
pub use placement::PlacementEngine;
pub use planner::TermPlanner;

/// Accumulator of finished year schedules.
///
/// Owned by the planner; the placement engine only ever reads it.
/// Iteration is in ascending year order.
#[derive(Debug, Clone, Default)]
pub struct CompletedSchedules {
    by_year: BTreeMap<u8, YearSchedule>,
}

impl CompletedSchedules {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a finished schedule under its year.
    pub fn insert(&mut self, schedule: YearSchedule) {
        self.by_year.insert(schedule.year, schedule);
    }

    /// The schedule for a year, if built.
    pub fn get(&self, year: u8) -> Option<&YearSchedule> {
        self.by_year.get(&year)
    }

    /// Finished schedules in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = &YearSchedule> {
        self.by_year.values()
    }

    /// Number of finished years.
    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    /// Whether no year has finished yet.
    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    /// Consumes the accumulator into the final year → schedule map.
    pub fn into_map(self) -> BTreeMap<u8, YearSchedule> {
        self.by_year
    }
}
