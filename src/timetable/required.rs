//! Bulk registration of a department's required courses.
//!
//! The calendar's first department selects the requirement rows: the
//! `学部` suffix is dropped so `社会情報学部` also matches rows listed as
//! `社会情報`. Every matching course goes through the slot guard.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::registry::Registration;
use crate::config::UNSPECIFIED;
use crate::error::{Result, TimetableError};
use crate::index::CatalogIndex;
use crate::models::{AssignmentSet, CalendarConfig, LectureId, LectureRecord, RequiredCourse};

/// Result of [`register_required`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredOutcome {
    pub registered: Vec<LectureId>,
    /// Already present or blocked by a slot conflict.
    pub skipped: Vec<LectureId>,
    /// Required lecture IDs absent from the catalog.
    pub missing: Vec<LectureId>,
}

/// Department text used to match requirement rows.
fn department_pattern(calendar: &CalendarConfig) -> Option<String> {
    calendar
        .departments
        .iter()
        .map(|d| d.trim())
        .find(|d| !d.is_empty() && *d != UNSPECIFIED)
        .map(|d| {
            let stripped = d.replace("学部", "");
            if stripped.is_empty() {
                d.to_string()
            } else {
                stripped
            }
        })
}

/// Registers the required courses of `grade` for the calendar's department.
///
/// # Errors
/// - [`TimetableError::MissingDepartment`] if the calendar has no department.
/// - [`TimetableError::Integrity`] if the catalog repeats a lecture ID.
pub fn register_required(
    set: &mut AssignmentSet,
    calendar: &CalendarConfig,
    grade: u8,
    required: &[RequiredCourse],
    catalog: &[LectureRecord],
) -> Result<RequiredOutcome> {
    let pattern = department_pattern(calendar).ok_or(TimetableError::MissingDepartment {
        calendar_id: calendar.id,
    })?;
    let index = CatalogIndex::build(catalog, &[])?;

    let mut outcome = RequiredOutcome::default();
    for course in required
        .iter()
        .filter(|c| c.grade == grade && c.department.contains(pattern.as_str()))
    {
        let Some(lecture) = index.lecture(course.lecture_id) else {
            warn!(
                lecture_id = course.lecture_id,
                department = %course.department,
                "required course missing from catalog"
            );
            outcome.missing.push(course.lecture_id);
            continue;
        };
        match set.register_lecture(lecture) {
            Ok(Registration::Registered) => outcome.registered.push(lecture.id),
            Ok(Registration::AlreadyRegistered) | Err(_) => outcome.skipped.push(lecture.id),
        }
    }

    debug!(
        calendar_id = calendar.id,
        grade,
        department = %pattern,
        registered = outcome.registered.len(),
        skipped = outcome.skipped.len(),
        missing = outcome.missing.len(),
        "required courses processed"
    );
    Ok(outcome)
}
