//! Catalog index.
//!
//! O(1) lookups from lecture ID to catalog record and from canonical slot to
//! the assignment occupying it. Built in one pass over the inputs after
//! integrity validation; borrows the inputs instead of copying them.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::{Result, TimetableError};
use crate::models::{Assignment, LectureId, LectureRecord, SlotKey};
use crate::normalize::{parse_period, PeriodKey};
use crate::validation::validate_input;

/// An assignment together with its normalized key.
#[derive(Debug, Clone, Copy)]
pub struct IndexedAssignment<'a> {
    pub key: PeriodKey,
    pub assignment: &'a Assignment,
}

/// Lookup tables over one catalog and one calendar's assignments.
#[derive(Debug, Clone)]
pub struct CatalogIndex<'a> {
    lectures: HashMap<LectureId, &'a LectureRecord>,
    slots: HashMap<SlotKey, &'a Assignment>,
    /// Distinct assignments in input order.
    entries: Vec<IndexedAssignment<'a>>,
}

impl<'a> CatalogIndex<'a> {
    /// Builds the index.
    ///
    /// # Errors
    /// [`TimetableError::Integrity`] if the catalog repeats a lecture ID or
    /// two different lectures claim the same canonical slot.
    pub fn build(catalog: &'a [LectureRecord], assignments: &'a [Assignment]) -> Result<Self> {
        validate_input(catalog, assignments).map_err(TimetableError::Integrity)?;

        let lectures: HashMap<LectureId, &LectureRecord> =
            catalog.iter().map(|l| (l.id, l)).collect();

        let mut slots: HashMap<SlotKey, &'a Assignment> = HashMap::new();
        let mut entries: Vec<IndexedAssignment<'a>> = Vec::with_capacity(assignments.len());
        let mut irregular: HashSet<(LectureId, String)> = HashSet::new();

        for assignment in assignments {
            let parsed = parse_period(&assignment.period);
            let key = parsed.key;
            let repeated = match key {
                PeriodKey::Slot(slot) => match slots.entry(slot) {
                    Entry::Occupied(_) => true,
                    Entry::Vacant(v) => {
                        v.insert(assignment);
                        false
                    }
                },
                PeriodKey::Irregular => {
                    !irregular.insert((assignment.lecture_id, parsed.annotation))
                }
            };
            if repeated {
                warn!(
                    period = %assignment.period,
                    lecture_id = assignment.lecture_id,
                    "repeated assignment ignored"
                );
                continue;
            }
            entries.push(IndexedAssignment { key, assignment });
        }

        Ok(Self {
            lectures,
            slots,
            entries,
        })
    }

    /// Catalog record for a lecture ID.
    pub fn lecture(&self, id: LectureId) -> Option<&'a LectureRecord> {
        self.lectures.get(&id).copied()
    }

    /// Assignment occupying a canonical slot.
    pub fn assignment_at(&self, slot: SlotKey) -> Option<&'a Assignment> {
        self.slots.get(&slot).copied()
    }

    /// Lecture occupying a canonical slot, if both the assignment and the
    /// catalog record exist.
    pub fn lecture_at(&self, slot: SlotKey) -> Option<&'a LectureRecord> {
        self.assignment_at(slot)
            .and_then(|a| self.lecture(a.lecture_id))
    }

    /// Distinct assignments in input order.
    pub fn entries(&self) -> &[IndexedAssignment<'a>] {
        &self.entries
    }

    /// Irregular assignments in input order.
    pub fn irregular(&self) -> impl Iterator<Item = &'a Assignment> + '_ {
        self.entries
            .iter()
            .filter(|e| e.key.is_irregular())
            .map(|e| e.assignment)
    }

    pub fn lecture_count(&self) -> usize {
        self.lectures.len()
    }
}
