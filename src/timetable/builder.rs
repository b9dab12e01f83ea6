//! Grid building.
//!
//! Resolves every `(day, period)` cell of a calendar's grid against the
//! catalog index and collects the assignments that cannot be placed.
//!
//! # Placement
//! An assignment lands on the grid iff its key is a canonical slot inside
//! the calendar's shape. Everything else (irregular keys, Saturday slots on
//! a weekday-only calendar, period 6 when the sixth period is off) goes to
//! the unmatched bucket in input order, so every resolved lecture is
//! reported exactly once.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::credits::CreditSummary;
use crate::classify::Classifier;
use crate::error::Result;
use crate::index::CatalogIndex;
use crate::models::{
    Assignment, AssignmentSet, CalendarConfig, CalendarId, Cell, CellContent, Grid, GridRow,
    LectureRecord, SlotKey, UnmatchedEntry,
};
use crate::normalize::PeriodKey;

/// Builds the grid and unmatched bucket for one calendar.
pub fn build_grid(
    index: &CatalogIndex<'_>,
    config: &CalendarConfig,
    classifier: &Classifier,
) -> (Grid, Vec<UnmatchedEntry>) {
    let days = config.days();

    let rows: Vec<GridRow> = (1..=config.period_count())
        .map(|period| GridRow {
            period,
            cells: days
                .iter()
                .map(|&day| {
                    let slot = SlotKey { day, period };
                    let content = match index.lecture_at(slot) {
                        Some(lecture) => CellContent::Occupied {
                            lecture: lecture.clone(),
                            category: classifier.classify(lecture),
                        },
                        None => CellContent::Empty,
                    };
                    Cell { slot, content }
                })
                .collect(),
        })
        .collect();

    let unmatched: Vec<UnmatchedEntry> = index
        .entries()
        .iter()
        .filter(|e| match e.key {
            PeriodKey::Slot(slot) => !config.contains(slot),
            PeriodKey::Irregular => true,
        })
        .filter_map(|e| {
            index.lecture(e.assignment.lecture_id).map(|lecture| UnmatchedEntry {
                assignment: e.assignment.clone(),
                lecture: lecture.clone(),
                category: classifier.classify(lecture),
            })
        })
        .collect();

    let grid = Grid { days, rows };
    debug!(
        calendar_id = config.id,
        cells = grid.cell_count(),
        occupied = grid.occupied_count(),
        unmatched = unmatched.len(),
        "grid built"
    );
    (grid, unmatched)
}

/// A calendar's complete derived view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    pub calendar_id: CalendarId,
    pub grid: Grid,
    /// Assignments not placeable on the grid, in input order.
    pub unmatched: Vec<UnmatchedEntry>,
    /// Assignments whose lecture is missing from the catalog.
    pub unresolved: Vec<Assignment>,
    /// Credits over [`Timetable::lectures`].
    pub credits: CreditSummary,
}

impl Timetable {
    /// Each distinct lecture in the grid or unmatched bucket, once.
    ///
    /// Grid lectures come first in row-major order, then unmatched ones.
    pub fn lectures(&self) -> Vec<&LectureRecord> {
        distinct_lectures(
            self.grid
                .cells()
                .filter_map(|c| c.lecture())
                .chain(self.unmatched.iter().map(|u| &u.lecture)),
        )
    }

    pub fn total_credits(&self) -> f64 {
        self.credits.total
    }
}

fn distinct_lectures<'a>(
    lectures: impl Iterator<Item = &'a LectureRecord>,
) -> Vec<&'a LectureRecord> {
    let mut seen = HashSet::new();
    lectures.filter(|l| seen.insert(l.id)).collect()
}

/// Builds the index, grid, unmatched bucket and credit total in one call.
///
/// # Errors
/// [`crate::TimetableError::Integrity`] if the catalog or assignment set
/// fails validation.
pub fn build_timetable(
    catalog: &[LectureRecord],
    set: &AssignmentSet,
    config: &CalendarConfig,
    classifier: &Classifier,
) -> Result<Timetable> {
    if set.calendar_id != config.id {
        warn!(
            set_calendar = set.calendar_id,
            config_calendar = config.id,
            "assignment set and configuration name different calendars"
        );
    }

    let index = CatalogIndex::build(catalog, &set.assignments)?;
    let (grid, unmatched) = build_grid(&index, config, classifier);

    let unresolved: Vec<Assignment> = index
        .entries()
        .iter()
        .filter(|e| index.lecture(e.assignment.lecture_id).is_none())
        .map(|e| e.assignment.clone())
        .collect();
    for a in &unresolved {
        warn!(
            calendar_id = config.id,
            lecture_id = a.lecture_id,
            period = %a.period,
            "assignment references a lecture missing from the catalog"
        );
    }

    let credits = {
        let lectures = distinct_lectures(
            grid.cells()
                .filter_map(|c| c.lecture())
                .chain(unmatched.iter().map(|u| &u.lecture)),
        );
        CreditSummary::calculate(lectures)
    };

    Ok(Timetable {
        calendar_id: config.id,
        grid,
        unmatched,
        unresolved,
        credits,
    })
}
