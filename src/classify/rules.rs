//! Built-in classification rules.

use super::ClassificationRule;
use crate::models::{DisplayCategory, LectureRecord};
use crate::normalize::parse_period;

/// Campus highlight.
///
/// Looks for a campus name in the free text that follows the period key of
/// the lecture's own descriptor. Campuses are tried in configured order.
#[derive(Debug, Clone)]
pub struct CampusRule {
    campuses: Vec<String>,
}

impl CampusRule {
    pub fn new(campuses: Vec<String>) -> Self {
        Self { campuses }
    }
}

impl ClassificationRule for CampusRule {
    fn name(&self) -> &'static str {
        "CAMPUS"
    }

    fn classify(&self, lecture: &LectureRecord) -> Option<DisplayCategory> {
        let annotation = parse_period(&lecture.period).annotation;
        if annotation.is_empty() {
            return None;
        }
        self.campuses
            .iter()
            .find(|campus| !campus.is_empty() && annotation.contains(campus.as_str()))
            .map(|campus| DisplayCategory::Campus(campus.clone()))
    }

    fn description(&self) -> &'static str {
        "Campus named after the period key"
    }
}

/// Department color.
///
/// Matches the offering unit exactly; partial or padded names do not match.
#[derive(Debug, Clone)]
pub struct DepartmentRule {
    departments: Vec<String>,
}

impl DepartmentRule {
    pub fn new(departments: Vec<String>) -> Self {
        Self { departments }
    }
}

impl ClassificationRule for DepartmentRule {
    fn name(&self) -> &'static str {
        "DEPARTMENT"
    }

    fn classify(&self, lecture: &LectureRecord) -> Option<DisplayCategory> {
        self.departments
            .iter()
            .find(|d| **d == lecture.department)
            .map(|d| DisplayCategory::Department(d.clone()))
    }

    fn description(&self) -> &'static str {
        "Offering department"
    }
}
