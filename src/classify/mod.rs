//! Display classification of lectures.
//!
//! Each occupied cell gets a [`DisplayCategory`] from a chain of rules.
//! The first rule that recognizes the lecture wins; a lecture no rule
//! recognizes is [`DisplayCategory::Assigned`].
//!
//! # Default chain
//!
//! 1. [`rules::CampusRule`]: a campus name in the text after the period key
//!    (`月1 相模原`) gives that campus's category.
//! 2. [`rules::DepartmentRule`]: an offering unit that exactly equals a
//!    known department gives that department's category.
//!
//! ```
//! use timetable_engine::classify::Classifier;
//! use timetable_engine::models::{DisplayCategory, LectureRecord};
//!
//! let classifier = Classifier::default();
//! let lecture = LectureRecord::new(1).with_period("月1 相模原").with_department("経済学部");
//! assert_eq!(classifier.classify(&lecture), DisplayCategory::Campus("相模原".into()));
//! ```

mod engine;
pub mod rules;

pub use engine::Classifier;

use crate::models::{DisplayCategory, LectureRecord};
use std::fmt::Debug;

/// A rule that may recognize a lecture.
pub trait ClassificationRule: Send + Sync + Debug {
    /// Rule name (e.g., "CAMPUS").
    fn name(&self) -> &'static str;

    /// Returns a category if this rule recognizes the lecture.
    fn classify(&self, lecture: &LectureRecord) -> Option<DisplayCategory>;

    fn description(&self) -> &'static str {
        self.name()
    }
}
