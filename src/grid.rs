//! The weekly time grid.
//!
//! Defines the fixed teaching week: 5 weekdays, 8 fixed 50-minute slots
//! per day starting at 09:20 with 10-minute breaks, and the Friday exam
//! block (13:20–15:10) during which nothing may be placed.
//!
//! # Time Model
//! All times are minutes since midnight (`u16`). Intervals are half-open:
//! a slot occupies [start, end).
//!
//! The grid is process-wide constant data; nothing here has state.

use serde::{Deserialize, Serialize};

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All teaching days in catalogue order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Position within the teaching week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }

    /// Parses a day token from external data.
    ///
    /// Accepts English and Turkish names, full or abbreviated.
    /// Returns `None` for anything else; callers skip such tokens.
    pub fn from_token(token: &str) -> Option<Weekday> {
        match token.trim() {
            "Monday" | "Mon" | "Pazartesi" | "Pzt" => Some(Weekday::Monday),
            "Tuesday" | "Tue" | "Salı" => Some(Weekday::Tuesday),
            "Wednesday" | "Wed" | "Çarşamba" | "Çar" => Some(Weekday::Wednesday),
            "Thursday" | "Thu" | "Perşembe" | "Per" => Some(Weekday::Thursday),
            "Friday" | "Fri" | "Cuma" | "Cum" => Some(Weekday::Friday),
            _ => None,
        }
    }
}

/// Minutes since midnight.
const fn hm(hour: u16, minute: u16) -> u16 {
    hour * 60 + minute
}

/// Number of slots per teaching day.
pub const SLOTS_PER_DAY: usize = 8;

/// The fixed (start, end) pairs of the daily grid, identical on all
/// five weekdays. 50-minute blocks, 10-minute breaks, first at 09:20.
pub const SLOT_TIMES: [(u16, u16); SLOTS_PER_DAY] = [
    (hm(9, 20), hm(10, 10)),
    (hm(10, 20), hm(11, 10)),
    (hm(11, 20), hm(12, 10)),
    (hm(12, 20), hm(13, 10)),
    (hm(13, 20), hm(14, 10)),
    (hm(14, 20), hm(15, 10)),
    (hm(15, 20), hm(16, 10)),
    (hm(16, 20), hm(17, 10)),
];

/// Friday exam block start (13:20).
pub const EXAM_BLOCK_START: u16 = hm(13, 20);
/// Friday exam block end (15:10).
pub const EXAM_BLOCK_END: u16 = hm(15, 10);

/// Whether [start, end) falls inside the Friday exam block.
///
/// True only on Friday, and only when the interval intersects
/// 13:20–15:10.
#[inline]
pub fn is_exam_block(day: Weekday, start_min: u16, end_min: u16) -> bool {
    day == Weekday::Friday && start_min < EXAM_BLOCK_END && end_min > EXAM_BLOCK_START
}

/// Slot indices usable for new placements on the given day.
///
/// Every index except those intersecting the Friday exam block.
pub fn valid_start_indices(day: Weekday) -> Vec<usize> {
    SLOT_TIMES
        .iter()
        .enumerate()
        .filter(|(_, &(start, end))| !is_exam_block(day, start, end))
        .map(|(idx, _)| idx)
        .collect()
}

/// Parses an `HH:MM` token into minutes since midnight.
///
/// Surrounding whitespace is tolerated; anything else yields `None`.
pub fn parse_time(token: &str) -> Option<u16> {
    let mut parts = token.trim().split(':');
    let hour: u16 = parts.next()?.parse().ok()?;
    let minute: u16 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || hour > 23 || minute > 59 {
        return None;
    }
    Some(hm(hour, minute))
}
