//! Classifier configuration and catalog vocabularies.
//!
//! The defaults reproduce the lists the catalog is published with. A
//! deployment can override them from JSON; omitted fields keep defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Placeholder label meaning "not specified" in selection lists.
pub const UNSPECIFIED: &str = "指定なし";

/// Campus names.
pub const CAMPUSES: [&str; 2] = ["青山", "相模原"];

/// Offering departments, in catalog order.
pub const DEPARTMENTS: [&str; 29] = [
    "青山スタンダード科目",
    "文学部共通",
    "文学部外国語科目",
    "英米文学科",
    "フランス文学科",
    "比較芸術学科",
    "教育人間　外国語科目",
    "教育人間　教育学科",
    "教育人間　心理学科",
    "経済学部",
    "法学部",
    "経営学部",
    "教職課程科目",
    "国際政治経済学部",
    "総合文化政策学部",
    "日本文学科",
    "史学科",
    "理工学部共通",
    "物理科学",
    "数理サイエンス",
    "物理・数理",
    "電気電子工学科",
    "機械創造",
    "経営システム",
    "情報テクノロジ－",
    "社会情報学部",
    "地球社会共生学部",
    "コミュニティ人間科学部",
    "化学・生命",
];

/// Offering-term labels.
pub const SEMESTERS: [&str; 19] = [
    "前期",
    "通年",
    "後期",
    "後期前半",
    "後期後半",
    "通年隔１",
    "前期前半",
    "前期後半",
    "通年隔２",
    "前期集中",
    "夏休集中",
    "集中",
    "春休集中",
    "後期集中",
    "前期隔２",
    "前期隔１",
    "後期隔２",
    "後期隔１",
    "通年集中",
];

/// Names the classifier recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Campus names searched for in period annotations, in priority order.
    pub campuses: Vec<String>,
    /// Department names matched exactly against a lecture's offering unit.
    pub departments: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            campuses: CAMPUSES.iter().map(|s| s.to_string()).collect(),
            departments: DEPARTMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ClassifierConfig {
    /// Parses a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimetableError;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.campuses, vec!["青山", "相模原"]);
        assert_eq!(config.departments.len(), DEPARTMENTS.len());
        assert!(!config.departments.iter().any(|d| d == UNSPECIFIED));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ClassifierConfig::from_json_str(r#"{"campuses": ["渋谷"]}"#).unwrap();
        assert_eq!(config.campuses, vec!["渋谷"]);
        assert_eq!(config.departments.len(), DEPARTMENTS.len());
    }

    #[test]
    fn test_malformed_json() {
        let err = ClassifierConfig::from_json_str("{campuses").unwrap_err();
        assert!(matches!(err, TimetableError::Config(_)));
    }
}
