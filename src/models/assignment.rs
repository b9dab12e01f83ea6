//! Assignment records.
//!
//! An assignment says "this lecture occupies this period in this calendar".
//! The period is stored as the raw key the collaborator persisted (often
//! full-width, e.g. `月１`); it is normalized whenever it is read.
//!
//! Mutation goes through the registration methods in
//! [`crate::timetable`], which keep each canonical slot single-occupied.

use serde::{Deserialize, Serialize};

use super::{CalendarId, LectureId, SlotKey};
use crate::normalize::{normalize_period, PeriodKey};

/// One lecture placed in one period of a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Raw period key.
    pub period: String,
    /// Assigned lecture.
    #[serde(alias = "kougi_id")]
    pub lecture_id: LectureId,
}

impl Assignment {
    pub fn new(period: impl Into<String>, lecture_id: LectureId) -> Self {
        Self {
            period: period.into(),
            lecture_id,
        }
    }

    /// Normalized key of this assignment's period.
    pub fn key(&self) -> PeriodKey {
        normalize_period(&self.period)
    }
}

/// The ordered assignments of one calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSet {
    pub calendar_id: CalendarId,
    pub assignments: Vec<Assignment>,
}

impl AssignmentSet {
    /// Creates an empty set for a calendar.
    pub fn new(calendar_id: CalendarId) -> Self {
        Self {
            calendar_id,
            assignments: Vec::new(),
        }
    }

    /// Wraps assignments loaded from storage, without any checks.
    ///
    /// Integrity is verified when the set is indexed.
    pub fn from_assignments(calendar_id: CalendarId, assignments: Vec<Assignment>) -> Self {
        Self {
            calendar_id,
            assignments,
        }
    }

    /// Lecture occupying a canonical slot, if any.
    pub fn occupant(&self, slot: SlotKey) -> Option<LectureId> {
        self.assignments
            .iter()
            .find(|a| a.key() == PeriodKey::Slot(slot))
            .map(|a| a.lecture_id)
    }

    /// Whether any assignment references the lecture.
    pub fn is_registered(&self, lecture_id: LectureId) -> bool {
        self.assignments.iter().any(|a| a.lecture_id == lecture_id)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
