//! Weekly grid (derived timetable view).
//!
//! A grid is built from a catalog, an assignment set and a calendar
//! configuration, and is never edited afterwards: rebuilding is the only
//! way to reflect new data. Rendering collaborators iterate rows and cells.

use serde::{Deserialize, Serialize};

use super::{Assignment, Day, LectureRecord, SlotKey};

/// Display classification of a cell or lecture.
///
/// Used only by renderers to pick a color; no business rule depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayCategory {
    /// Unoccupied cell.
    Empty,
    /// Occupied, with no more specific category.
    Assigned,
    /// Highlighted by campus.
    Campus(String),
    /// Colored by offering department.
    Department(String),
}

static EMPTY_CATEGORY: DisplayCategory = DisplayCategory::Empty;

/// Content of one grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellContent {
    Empty,
    Occupied {
        lecture: LectureRecord,
        category: DisplayCategory,
    },
}

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub slot: SlotKey,
    pub content: CellContent,
}

impl Cell {
    pub fn lecture(&self) -> Option<&LectureRecord> {
        match &self.content {
            CellContent::Occupied { lecture, .. } => Some(lecture),
            CellContent::Empty => None,
        }
    }

    /// Display category; empty cells always use [`DisplayCategory::Empty`].
    pub fn category(&self) -> &DisplayCategory {
        match &self.content {
            CellContent::Occupied { category, .. } => category,
            CellContent::Empty => &EMPTY_CATEGORY,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self.content, CellContent::Occupied { .. })
    }
}

/// One period row; cells follow the grid's day order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub period: u8,
    pub cells: Vec<Cell>,
}

/// Period × day matrix of resolved cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Day columns, in display order.
    pub days: Vec<Day>,
    /// Period rows, ascending.
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// Cell at a slot, if the slot is within the grid.
    pub fn cell(&self, slot: SlotKey) -> Option<&Cell> {
        let col = self.days.iter().position(|&d| d == slot.day)?;
        self.rows
            .iter()
            .find(|r| r.period == slot.period)
            .and_then(|r| r.cells.get(col))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|c| c.is_occupied()).count()
    }
}

/// An assignment that could not be placed on the grid, with its lecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedEntry {
    pub assignment: Assignment,
    pub lecture: LectureRecord,
    pub category: DisplayCategory,
}
