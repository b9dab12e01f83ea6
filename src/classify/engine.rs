//! First-match rule chain.

use std::sync::Arc;

use super::rules::{CampusRule, DepartmentRule};
use super::ClassificationRule;
use crate::config::ClassifierConfig;
use crate::models::{DisplayCategory, LectureRecord};

/// An ordered chain of classification rules.
///
/// # Example
/// ```
/// use timetable_engine::classify::{rules, Classifier};
///
/// let classifier = Classifier::new()
///     .with_rule(rules::DepartmentRule::new(vec!["法学部".into()]));
/// ```
#[derive(Clone)]
pub struct Classifier {
    rules: Vec<Arc<dyn ClassificationRule>>,
}

impl Classifier {
    /// Creates an empty chain; everything classifies as `Assigned`.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Campus rule first, then department rule.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new()
            .with_rule(CampusRule::new(config.campuses.clone()))
            .with_rule(DepartmentRule::new(config.departments.clone()))
    }

    /// Appends a rule with lower priority than those already present.
    pub fn with_rule<R: ClassificationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Category of an occupied cell holding this lecture.
    pub fn classify(&self, lecture: &LectureRecord) -> DisplayCategory {
        self.rules
            .iter()
            .find_map(|rule| rule.classify(lecture))
            .unwrap_or(DisplayCategory::Assigned)
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// `(name, description)` of each rule, in priority order.
    pub fn rule_descriptions(&self) -> Vec<(&'static str, &'static str)> {
        self.rules
            .iter()
            .map(|r| (r.name(), r.description()))
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("rules", &self.rule_descriptions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_overrides_department() {
        let lecture = LectureRecord::new(1)
            .with_period("月1 相模原")
            .with_department("理工学部共通");
        assert_eq!(
            Classifier::default().classify(&lecture),
            DisplayCategory::Campus("相模原".into())
        );
    }

    #[test]
    fn test_department_when_no_campus() {
        let lecture = LectureRecord::new(1)
            .with_period("月1")
            .with_department("理工学部共通");
        assert_eq!(
            Classifier::default().classify(&lecture),
            DisplayCategory::Department("理工学部共通".into())
        );
    }

    #[test]
    fn test_fallback_assigned() {
        let lecture = LectureRecord::new(1)
            .with_period("月1")
            .with_department("未知の学部");
        assert_eq!(Classifier::default().classify(&lecture), DisplayCategory::Assigned);
    }

    #[test]
    fn test_empty_chain() {
        let lecture = LectureRecord::new(1).with_period("月1 青山").with_department("法学部");
        assert_eq!(Classifier::new().classify(&lecture), DisplayCategory::Assigned);
    }

    #[test]
    fn test_placeholder_is_not_a_department() {
        let lecture = LectureRecord::new(1).with_department(crate::config::UNSPECIFIED);
        assert_eq!(Classifier::default().classify(&lecture), DisplayCategory::Assigned);
    }

    #[test]
    fn test_debug_lists_rule_descriptions() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.rule_descriptions(),
            vec![
                ("CAMPUS", "Campus named after the period key"),
                ("DEPARTMENT", "Offering department"),
            ]
        );
        let debug = format!("{classifier:?}");
        assert!(debug.contains("Offering department"));
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(Classifier::default().rule_names(), vec!["CAMPUS", "DEPARTMENT"]);
        let reversed = Classifier::new()
            .with_rule(DepartmentRule::new(vec!["法学部".into()]))
            .with_rule(CampusRule::new(vec!["青山".into()]));
        let lecture = LectureRecord::new(1).with_period("月1 青山").with_department("法学部");
        assert_eq!(
            reversed.classify(&lecture),
            DisplayCategory::Department("法学部".into())
        );
    }
}
