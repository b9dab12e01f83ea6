//! Integrity validation for catalog and assignment inputs.
//!
//! Runs before indexing. Detects:
//! - Duplicate lecture IDs in the catalog
//! - Canonical slots claimed by two different lectures
//!
//! All problems are collected; validation never stops at the first one.
//! Irregular assignments are never checked for collisions, and an exact
//! repeat of an assignment (same slot, same lecture) is not a collision.

use std::collections::{HashMap, HashSet};

use crate::models::{Assignment, LectureId, LectureRecord, SlotKey};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two catalog records share the same ID.
    DuplicateLectureId,
    /// Two different lectures occupy the same canonical slot.
    SlotCollision,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog and one calendar's assignments.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(catalog: &[LectureRecord], assignments: &[Assignment]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut lecture_ids = HashSet::new();
    for lecture in catalog {
        if !lecture_ids.insert(lecture.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLectureId,
                format!("Duplicate lecture ID: {}", lecture.id),
            ));
        }
    }

    let mut occupants: HashMap<SlotKey, LectureId> = HashMap::new();
    for assignment in assignments {
        let Some(slot) = assignment.key().slot() else {
            continue;
        };
        match occupants.get(&slot) {
            Some(&existing) if existing != assignment.lecture_id => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SlotCollision,
                    format!(
                        "Slot {slot} is claimed by lectures {existing} and {}",
                        assignment.lecture_id
                    ),
                ));
            }
            Some(_) => {}
            None => {
                occupants.insert(slot, assignment.lecture_id);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<LectureRecord> {
        vec![
            LectureRecord::new(1).with_period("月1"),
            LectureRecord::new(2).with_period("火2"),
            LectureRecord::new(3).with_period("不定"),
        ]
    }

    #[test]
    fn test_valid_input() {
        let assignments = vec![
            Assignment::new("月１", 1),
            Assignment::new("火２", 2),
            Assignment::new("不定", 3),
        ];
        assert!(validate_input(&sample_catalog(), &assignments).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_input(&[], &[]).is_ok());
    }

    #[test]
    fn test_duplicate_lecture_id() {
        let catalog = vec![LectureRecord::new(1), LectureRecord::new(1)];
        let errors = validate_input(&catalog, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateLectureId));
    }

    #[test]
    fn test_slot_collision() {
        let assignments = vec![Assignment::new("月1", 1), Assignment::new("月1", 2)];
        let errors = validate_input(&sample_catalog(), &assignments).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::SlotCollision);
    }

    #[test]
    fn test_collision_across_width_forms() {
        let assignments = vec![Assignment::new("月1", 1), Assignment::new("月１", 2)];
        let errors = validate_input(&sample_catalog(), &assignments).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::SlotCollision);
    }

    #[test]
    fn test_repeated_assignment_is_not_collision() {
        let assignments = vec![Assignment::new("月1", 1), Assignment::new("月１", 1)];
        assert!(validate_input(&sample_catalog(), &assignments).is_ok());
    }

    #[test]
    fn test_irregular_never_collide() {
        let assignments = vec![Assignment::new("不定", 1), Assignment::new("不定", 2)];
        assert!(validate_input(&sample_catalog(), &assignments).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let catalog = vec![LectureRecord::new(1), LectureRecord::new(1)];
        let assignments = vec![Assignment::new("水3", 1), Assignment::new("水3", 2)];
        let errors = validate_input(&catalog, &assignments).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
