//! Timetable domain models.
//!
//! Plain data exchanged with the collaborators around the engine: the
//! lecture catalog, per-calendar assignments and configuration in, and the
//! derived weekly grid out.
//!
//! # Ownership
//!
//! | Type | Supplied by | Engine access |
//! |------|-------------|---------------|
//! | `LectureRecord` | catalog fetch | read-only |
//! | `CalendarConfig` | calendar management | read-only |
//! | `AssignmentSet` | calendar persistence | mutated only by registration |
//! | `Grid`, `UnmatchedEntry` | engine | derived, never stored |

mod assignment;
mod calendar;
mod grid;
mod lecture;
mod required;
mod slot;

pub use assignment::{Assignment, AssignmentSet};
pub use calendar::{CalendarConfig, CalendarId};
pub use grid::{Cell, CellContent, DisplayCategory, Grid, GridRow, UnmatchedEntry};
pub use lecture::{LectureId, LectureRecord};
pub use required::RequiredCourse;
pub use slot::{Day, SlotKey, MAX_PERIOD, REGULAR_PERIODS};
