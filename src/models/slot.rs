//! Weekday and slot key models.
//!
//! A slot is one cell of the weekly grid, addressed by a weekday glyph and a
//! 1-based period number. Keys print in their canonical half-width form
//! (`月1`); [`SlotKey::to_full_width`] produces the full-width form (`月１`)
//! that stored assignment records commonly use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest period number a canonical key may carry.
pub const MAX_PERIOD: u8 = 6;

/// Number of regular periods shown when the sixth period is disabled.
pub const REGULAR_PERIODS: u8 = 5;

/// A teaching day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    /// Monday through Friday, in display order.
    pub const WEEKDAYS: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// All six teaching days, in display order.
    pub const ALL: [Day; 6] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat];

    /// The single-character glyph used in period descriptors.
    pub fn glyph(self) -> char {
        match self {
            Day::Mon => '月',
            Day::Tue => '火',
            Day::Wed => '水',
            Day::Thu => '木',
            Day::Fri => '金',
            Day::Sat => '土',
        }
    }

    /// Parses a day glyph. Sunday (`日`) is not a teaching day.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '月' => Some(Day::Mon),
            '火' => Some(Day::Tue),
            '水' => Some(Day::Wed),
            '木' => Some(Day::Thu),
            '金' => Some(Day::Fri),
            '土' => Some(Day::Sat),
            _ => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Canonical `(day, period)` key of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: Day,
    /// 1-based period number, `1..=MAX_PERIOD`.
    pub period: u8,
}

impl SlotKey {
    /// Creates a slot key. Returns `None` if the period is out of range.
    pub fn new(day: Day, period: u8) -> Option<Self> {
        (1..=MAX_PERIOD)
            .contains(&period)
            .then_some(Self { day, period })
    }

    /// Full-width rendering, e.g. `月１`.
    pub fn to_full_width(self) -> String {
        let digits: String = self
            .period
            .to_string()
            .chars()
            .filter_map(|c| char::from_u32(c as u32 + 0xFEE0))
            .collect();
        format!("{}{}", self.day.glyph(), digits)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.day.glyph(), self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_round_trip_all_days() {
        for day in Day::ALL {
            assert_eq!(Day::from_glyph(day.glyph()), Some(day));
        }
        assert_eq!(Day::from_glyph('日'), None);
        assert_eq!(Day::from_glyph('x'), None);
    }

    #[test]
    fn test_slot_key_range() {
        assert!(SlotKey::new(Day::Mon, 0).is_none());
        assert!(SlotKey::new(Day::Mon, 1).is_some());
        assert!(SlotKey::new(Day::Sat, MAX_PERIOD).is_some());
        assert!(SlotKey::new(Day::Sat, MAX_PERIOD + 1).is_none());
    }

    #[test]
    fn test_slot_key_display() {
        let key = SlotKey::new(Day::Wed, 3).unwrap();
        assert_eq!(key.to_string(), "水3");
        assert_eq!(key.to_full_width(), "水３");
    }
}
