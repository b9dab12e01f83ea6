//! Weekly class timetable composition engine.
//!
//! Turns a flat lecture catalog, one calendar's assignments and its display
//! flags into a deterministic weekly grid, lists the assignments that cannot
//! be placed on it, totals credits, and guards each day/period slot against
//! double booking. Everything is a pure computation over caller-supplied
//! data: no I/O, no retained state.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `LectureRecord`, `Assignment`,
//!   `AssignmentSet`, `CalendarConfig`, `Grid`, `SlotKey`
//! - **`normalize`**: Period descriptor → canonical slot key
//! - **`validation`**: Input integrity checks (duplicate IDs, slot collisions)
//! - **`index`**: O(1) lookups over catalog and assignments
//! - **`classify`**: Display categories (campus, then department)
//! - **`timetable`**: Grid building, credit totals, slot-guarded registration
//! - **`public`**: Published-timetable view, search and counts
//!
//! # Example
//!
//! ```
//! use timetable_engine::classify::Classifier;
//! use timetable_engine::models::{AssignmentSet, CalendarConfig, LectureRecord};
//! use timetable_engine::timetable::build_timetable;
//!
//! let catalog = vec![
//!     LectureRecord::new(1).with_subject("線形代数").with_period("月１").with_credits("2"),
//! ];
//! let config = CalendarConfig::new(1);
//! let mut set = AssignmentSet::new(1);
//! set.register_lecture(&catalog[0]).unwrap();
//!
//! let timetable = build_timetable(&catalog, &set, &config, &Classifier::default()).unwrap();
//! assert_eq!(timetable.grid.occupied_count(), 1);
//! assert_eq!(timetable.total_credits(), 2.0);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod public;
pub mod timetable;
pub mod validation;

pub use error::TimetableError;
