//! Timetable composition and registration.
//!
//! Provides the grid builder, credit aggregation, and the slot-guarded
//! registration flow that is the only way an assignment set changes.
//!
//! # Builder
//!
//! `build_timetable` indexes the catalog and assignments, resolves every
//! grid cell, collects unplaceable assignments, and totals credits. Results
//! are never cached; callers rebuild after every change.
//!
//! # Registration
//!
//! `AssignmentSet::register` enforces single occupancy of each canonical
//! slot. Conflicts are returned as values. `register_batch` and
//! `register_required` apply it to many lectures at once.

mod builder;
mod credits;
mod registry;
mod required;

pub use builder::{build_grid, build_timetable, Timetable};
pub use credits::{parse_credit, total_credits, CreditSummary};
pub use registry::{register_batch, BatchFailure, BatchOutcome, Conflict, Registration};
pub use required::{register_required, RequiredOutcome};
