//! Slot-guarded registration.
//!
//! The only mutation path for an [`AssignmentSet`]. Each canonical slot
//! moves through:
//!
//! ```text
//! Empty --register(X)--> Occupied(X)
//! Occupied(X) --register(X)--> Occupied(X)      (idempotent)
//! Occupied(X) --register(Y)--> Occupied(X)      (Conflict)
//! Occupied(X) --unregister(X)--> Empty
//! ```
//!
//! Irregular keys bypass the slot check. Callers serialize registration per
//! calendar; the set itself holds no lock.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Assignment, AssignmentSet, LectureId, LectureRecord, SlotKey};
use crate::normalize::{parse_period, PeriodKey};

/// Successful registration outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Registration {
    /// A new assignment was added.
    Registered,
    /// The same lecture already held this key; nothing changed.
    AlreadyRegistered,
}

/// A registration refused because another lecture holds the slot.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[error("slot {slot} is occupied by lecture {occupant}; lecture {requested} was not registered")]
pub struct Conflict {
    pub slot: SlotKey,
    pub occupant: LectureId,
    pub requested: LectureId,
}

impl AssignmentSet {
    /// Registers a lecture under a raw period key.
    ///
    /// The key is stored as given. On conflict the set is left unchanged.
    pub fn register(
        &mut self,
        lecture_id: LectureId,
        period: &str,
    ) -> Result<Registration, Conflict> {
        let parsed = parse_period(period);

        let outcome = match parsed.key {
            PeriodKey::Slot(slot) => match self.occupant(slot) {
                Some(occupant) if occupant == lecture_id => Registration::AlreadyRegistered,
                Some(occupant) => {
                    debug!(
                        calendar_id = self.calendar_id,
                        slot = %slot,
                        occupant,
                        requested = lecture_id,
                        "registration conflict"
                    );
                    return Err(Conflict {
                        slot,
                        occupant,
                        requested: lecture_id,
                    });
                }
                None => Registration::Registered,
            },
            PeriodKey::Irregular => {
                let present = self.assignments.iter().any(|a| {
                    a.lecture_id == lecture_id
                        && a.key().is_irregular()
                        && parse_period(&a.period).annotation == parsed.annotation
                });
                if present {
                    Registration::AlreadyRegistered
                } else {
                    Registration::Registered
                }
            }
        };

        if outcome == Registration::Registered {
            self.assignments.push(Assignment::new(period, lecture_id));
            debug!(
                calendar_id = self.calendar_id,
                lecture_id,
                period,
                "lecture registered"
            );
        }
        Ok(outcome)
    }

    /// Registers a lecture under its own catalog period descriptor.
    pub fn register_lecture(&mut self, lecture: &LectureRecord) -> Result<Registration, Conflict> {
        self.register(lecture.id, &lecture.period)
    }

    /// Removes every assignment of a lecture. Returns how many were removed;
    /// zero is not an error.
    pub fn unregister(&mut self, lecture_id: LectureId) -> usize {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.lecture_id != lecture_id);
        let removed = before - self.assignments.len();
        debug!(
            calendar_id = self.calendar_id,
            lecture_id,
            removed,
            "lecture unregistered"
        );
        removed
    }
}

/// A lecture a batch could not register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    pub lecture_id: LectureId,
    /// Lectures occupying the requested slot.
    pub obstacles: Vec<LectureId>,
}

/// Result of [`register_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub registered: Vec<LectureId>,
    pub already_registered: Vec<LectureId>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Registers lectures in order under their own period descriptors.
///
/// A conflict is recorded and the batch continues.
pub fn register_batch(set: &mut AssignmentSet, lectures: &[LectureRecord]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for lecture in lectures {
        match set.register_lecture(lecture) {
            Ok(Registration::Registered) => outcome.registered.push(lecture.id),
            Ok(Registration::AlreadyRegistered) => outcome.already_registered.push(lecture.id),
            Err(conflict) => outcome.failures.push(BatchFailure {
                lecture_id: lecture.id,
                obstacles: vec![conflict.occupant],
            }),
        }
    }
    debug!(
        calendar_id = set.calendar_id,
        registered = outcome.registered.len(),
        failed = outcome.failures.len(),
        "batch registration finished"
    );
    outcome
}
