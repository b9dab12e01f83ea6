//! Engine error types.
//!
//! Structural problems in the inputs are errors and propagate to the caller.
//! Slot conflicts during registration are expected outcomes and are returned
//! as [`crate::timetable::Conflict`] values instead.

use thiserror::Error;

use crate::models::CalendarId;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum TimetableError {
    /// Catalog or assignment set failed integrity validation.
    #[error("data integrity check failed: {}", summarize(.0))]
    Integrity(Vec<ValidationError>),

    #[error("calendar {calendar_id} is not public")]
    NotPublic { calendar_id: CalendarId },

    #[error("calendar {calendar_id} has no department configured")]
    MissingDepartment { calendar_id: CalendarId },

    #[error("invalid classifier configuration: {0}")]
    Config(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, TimetableError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_integrity_message_lists_all_problems() {
        let err = TimetableError::Integrity(vec![
            ValidationError::new(ValidationErrorKind::DuplicateLectureId, "Duplicate lecture ID: 1"),
            ValidationError::new(ValidationErrorKind::SlotCollision, "Slot 月1 claimed twice"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("Duplicate lecture ID: 1"));
        assert!(msg.contains("Slot 月1 claimed twice"));
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TimetableError = json_err.into();
        assert!(matches!(err, TimetableError::Config(_)));
    }
}
