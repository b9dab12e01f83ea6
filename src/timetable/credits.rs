//! Credit totals.
//!
//! Credit values arrive as catalog text. Anything that does not start with
//! a non-negative number counts as zero and is reported as
//! malformed; a malformed value never removes the lecture from the grid.
//!
//! | Raw | Parsed |
//! |-----|--------|
//! | `2`, `２` | 2.0 |
//! | `1.5` | 1.5 |
//! | `2単位` | 2.0 |
//! | `+2`, `.5e1` | 2.0, 5.0 |
//! | ``, `abc`, `-2` | malformed (0) |

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{LectureId, LectureRecord};
use crate::normalize::to_half_width;

/// Parses the leading non-negative number of a credit field.
///
/// Accepts an optional `+`, digits with an optional fraction (`1.5`, `.5`,
/// `3.`) and an optional exponent (`1e1`). Trailing text is ignored.
pub fn parse_credit(raw: &str) -> Option<f64> {
    let text = to_half_width(raw);
    let text = text.trim();
    let bytes = text.as_bytes();

    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(bytes.first().copied() == Some(b'+'));
    let int_len = digits_from(end);
    end += int_len;

    let mut frac_len = 0;
    if bytes.get(end).copied() == Some(b'.') {
        frac_len = digits_from(end + 1);
        if int_len > 0 || frac_len > 0 {
            end += 1 + frac_len;
        }
    }
    if int_len == 0 && frac_len == 0 {
        return None;
    }

    if matches!(bytes.get(end).copied(), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1).copied(), Some(b'+' | b'-')));
        let exp_len = digits_from(end + 1 + sign);
        if exp_len > 0 {
            end += 1 + sign + exp_len;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Sum of parsed credits, treating malformed values as zero.
pub fn total_credits<'a>(lectures: impl IntoIterator<Item = &'a LectureRecord>) -> f64 {
    lectures
        .into_iter()
        .filter_map(|l| parse_credit(&l.credits))
        .sum()
}

/// Credit total with data-quality details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditSummary {
    /// Sum of parsed credit values.
    pub total: f64,
    /// Number of lectures considered.
    pub lecture_count: usize,
    /// Lectures whose credit field did not parse.
    pub malformed: Vec<LectureId>,
}

impl CreditSummary {
    /// Sums credits over the given lectures. Callers pass each lecture once.
    pub fn calculate<'a>(lectures: impl IntoIterator<Item = &'a LectureRecord>) -> Self {
        let mut total = 0.0;
        let mut lecture_count = 0;
        let mut malformed = Vec::new();

        for lecture in lectures {
            lecture_count += 1;
            match parse_credit(&lecture.credits) {
                Some(value) => total += value,
                None => {
                    warn!(
                        lecture_id = lecture.id,
                        credits = %lecture.credits,
                        "malformed credit value counted as zero"
                    );
                    malformed.push(lecture.id);
                }
            }
        }

        Self {
            total,
            lecture_count,
            malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture(id: LectureId, credits: &str) -> LectureRecord {
        LectureRecord::new(id).with_credits(credits)
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_credit("2"), Some(2.0));
        assert_eq!(parse_credit(" 4 "), Some(4.0));
        assert_eq!(parse_credit("1.5"), Some(1.5));
        assert_eq!(parse_credit("0"), Some(0.0));
    }

    #[test]
    fn test_parse_full_width_and_suffix() {
        assert_eq!(parse_credit("２"), Some(2.0));
        assert_eq!(parse_credit("2単位"), Some(2.0));
        assert_eq!(parse_credit("1.5.3"), Some(1.5));
        assert_eq!(parse_credit("3."), Some(3.0));
    }

    #[test]
    fn test_parse_sign_and_exponent() {
        assert_eq!(parse_credit("+2"), Some(2.0));
        assert_eq!(parse_credit("1e1"), Some(10.0));
        assert_eq!(parse_credit("１Ｅ１"), Some(10.0));
        assert_eq!(parse_credit(".5"), Some(0.5));
        assert_eq!(parse_credit(".5e1"), Some(5.0));
        assert_eq!(parse_credit("2e"), Some(2.0));
        assert_eq!(parse_credit("2e+"), Some(2.0));
        assert_eq!(parse_credit("25e-1単位"), Some(2.5));
    }

    #[test]
    fn test_parse_malformed() {
        for raw in ["", "   ", "abc", "-2", "-", ".", "単位", "+"] {
            assert_eq!(parse_credit(raw), None, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_total_ignores_malformed() {
        let lectures = vec![lecture(1, "2"), lecture(2, "abc"), lecture(3, "1.5"), lecture(4, "")];
        assert!((total_credits(&lectures) - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_summary() {
        let lectures = vec![lecture(1, "2"), lecture(2, "abc"), lecture(3, "-1")];
        let summary = CreditSummary::calculate(&lectures);
        assert!((summary.total - 2.0).abs() < 1e-10);
        assert_eq!(summary.lecture_count, 3);
        assert_eq!(summary.malformed, vec![2, 3]);
    }

    #[test]
    fn test_empty_summary() {
        let none: Vec<LectureRecord> = Vec::new();
        let summary = CreditSummary::calculate(&none);
        assert_eq!(summary, CreditSummary::default());
    }
}
