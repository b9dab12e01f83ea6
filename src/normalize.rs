//! Period descriptor normalization.
//!
//! Turns raw period strings from the catalog or from stored assignments into
//! canonical [`SlotKey`]s. Descriptors arrive in several shapes:
//!
//! | Raw | Result |
//! |-----|--------|
//! | `月1`, `月１` | `Slot(月1)` |
//! | `月1 相模原` | `Slot(月1)`, annotation `相模原` |
//! | `〇曜`, `不定`, `集中` | `Irregular` |
//! | `月7`, `日1`, `` | `Irregular` |
//!
//! Only the leading day glyph and digit run form the key. Text after it is
//! kept as the annotation so the classifier can look for campus names.

use serde::{Deserialize, Serialize};

use crate::models::{Day, SlotKey};

/// Substrings that mark a lecture as not tied to a fixed weekly slot
/// ("some weekday", "unscheduled").
pub const IRREGULAR_MARKERS: [&str; 2] = ["曜", "不定"];

/// Offset between a full-width ASCII variant and its half-width form.
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Result of normalizing a period descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKey {
    /// A regular weekly slot.
    Slot(SlotKey),
    /// Not placeable on the weekly grid.
    Irregular,
}

impl PeriodKey {
    /// The slot, if regular.
    pub fn slot(self) -> Option<SlotKey> {
        match self {
            PeriodKey::Slot(slot) => Some(slot),
            PeriodKey::Irregular => None,
        }
    }

    pub fn is_irregular(self) -> bool {
        matches!(self, PeriodKey::Irregular)
    }
}

/// A normalized period descriptor with its trailing free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPeriod {
    pub key: PeriodKey,
    /// Text after the key (trimmed). For irregular descriptors, the whole
    /// normalized string.
    pub annotation: String,
}

/// Converts full-width ASCII variants (U+FF01..U+FF5E) and the ideographic
/// space to their half-width equivalents. Other characters pass through.
pub fn to_half_width(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c),
            '\u{3000}' => ' ',
            _ => c,
        })
        .collect()
}

/// Parses a raw period descriptor into a key and annotation.
pub fn parse_period(raw: &str) -> ParsedPeriod {
    let half = to_half_width(raw);
    let text = half.trim();

    let irregular = || ParsedPeriod {
        key: PeriodKey::Irregular,
        annotation: text.to_string(),
    };

    if text.is_empty() || IRREGULAR_MARKERS.iter().any(|m| text.contains(m)) {
        return irregular();
    }

    let mut chars = text.chars();
    let Some(day) = chars.next().and_then(Day::from_glyph) else {
        return irregular();
    };
    let rest = chars.as_str();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(digits_end);

    match digits
        .parse::<u8>()
        .ok()
        .and_then(|period| SlotKey::new(day, period))
    {
        Some(slot) => ParsedPeriod {
            key: PeriodKey::Slot(slot),
            annotation: tail.trim().to_string(),
        },
        None => irregular(),
    }
}

/// Normalizes a raw period descriptor to its key.
pub fn normalize_period(raw: &str) -> PeriodKey {
    parse_period(raw).key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: Day, period: u8) -> PeriodKey {
        PeriodKey::Slot(SlotKey::new(day, period).unwrap())
    }

    #[test]
    fn test_half_width_conversion() {
        assert_eq!(to_half_width("月１"), "月1");
        assert_eq!(to_half_width("ＡＢＣ１２３"), "ABC123");
        assert_eq!(to_half_width("月1\u{3000}相模原"), "月1 相模原");
        assert_eq!(to_half_width("火2"), "火2");
    }

    #[test]
    fn test_full_width_matches_half_width() {
        assert_eq!(normalize_period("月１"), normalize_period("月1"));
        assert_eq!(normalize_period("月１"), slot(Day::Mon, 1));
    }

    #[test]
    fn test_every_day_glyph() {
        for day in Day::ALL {
            let raw = format!("{}3", day.glyph());
            assert_eq!(normalize_period(&raw), slot(day, 3));
        }
    }

    #[test]
    fn test_trailing_campus_text() {
        let parsed = parse_period("月1 相模原");
        assert_eq!(parsed.key, slot(Day::Mon, 1));
        assert_eq!(parsed.annotation, "相模原");

        let parsed = parse_period("木４（青山）");
        assert_eq!(parsed.key, slot(Day::Thu, 4));
        assert_eq!(parsed.annotation, "(青山)");
    }

    #[test]
    fn test_irregular_markers() {
        assert!(normalize_period("不定").is_irregular());
        assert!(normalize_period("〇曜").is_irregular());
        assert!(normalize_period("月曜1").is_irregular());
        assert_eq!(parse_period("〇曜 集中").annotation, "〇曜 集中");
    }

    #[test]
    fn test_non_canonical_shapes() {
        assert!(normalize_period("").is_irregular());
        assert!(normalize_period("   ").is_irregular());
        assert!(normalize_period("集中").is_irregular());
        assert!(normalize_period("日1").is_irregular());
        assert!(normalize_period("月").is_irregular());
        assert!(normalize_period("月0").is_irregular());
        assert!(normalize_period("月7").is_irregular());
        assert!(normalize_period("月999").is_irregular());
        assert!(normalize_period("1月").is_irregular());
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(normalize_period("  金５ "), slot(Day::Fri, 5));
    }

    #[test]
    fn test_period_key_accessors() {
        assert_eq!(slot(Day::Tue, 2).slot(), SlotKey::new(Day::Tue, 2));
        assert_eq!(PeriodKey::Irregular.slot(), None);
    }
}
