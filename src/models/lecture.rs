//! Lecture catalog record.
//!
//! One offered lecture as delivered by the catalog collaborator. Records are
//! read-only to the engine. Field names accept the catalog's own column
//! names (`科目`, `教員`, `開講`, `時限`, `単位`, `学年`) when deserialized.

use serde::{Deserialize, Serialize};

/// Lecture identifier, unique within a catalog.
pub type LectureId = u64;

/// A lecture offered in the catalog.
///
/// `period` is the raw period descriptor: it may mix full-width and
/// half-width digits, carry trailing campus notes (`月1 相模原`), or be an
/// irregular marker (`不定`, `〇曜`). `credits` is kept as text because the
/// catalog does not guarantee it is numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LectureRecord {
    /// Unique lecture identifier.
    pub id: LectureId,
    /// Subject name.
    #[serde(alias = "科目", default)]
    pub subject: String,
    /// Instructor name.
    #[serde(alias = "教員", default)]
    pub instructor: String,
    /// Offering unit (department) name.
    #[serde(alias = "開講", default)]
    pub department: String,
    /// Raw period descriptor.
    #[serde(alias = "時限", default)]
    pub period: String,
    /// Raw credit value.
    #[serde(alias = "単位", default)]
    pub credits: String,
    /// Target grade label (e.g. `1年`).
    #[serde(alias = "学年", default)]
    pub grade: String,
    /// Syllabus URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl LectureRecord {
    /// Creates a lecture with the given ID and empty fields.
    pub fn new(id: LectureId) -> Self {
        Self {
            id,
            subject: String::new(),
            instructor: String::new(),
            department: String::new(),
            period: String::new(),
            credits: String::new(),
            grade: String::new(),
            url: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    pub fn with_credits(mut self, credits: impl Into<String>) -> Self {
        self.credits = credits.into();
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lecture_builder() {
        let lecture = LectureRecord::new(7)
            .with_subject("線形代数")
            .with_instructor("山田")
            .with_department("理工学部共通")
            .with_period("月1")
            .with_credits("2")
            .with_grade("1年")
            .with_url("https://example.invalid/7");

        assert_eq!(lecture.id, 7);
        assert_eq!(lecture.subject, "線形代数");
        assert_eq!(lecture.department, "理工学部共通");
        assert_eq!(lecture.period, "月1");
        assert_eq!(lecture.credits, "2");
        assert_eq!(lecture.url.as_deref(), Some("https://example.invalid/7"));
    }

    #[test]
    fn test_deserialize_catalog_columns() {
        let json = r#"{
            "id": 12,
            "科目": "経済学入門",
            "教員": "佐藤",
            "開講": "経済学部",
            "時限": "火２",
            "単位": "2",
            "学年": "1年",
            "url": null
        }"#;
        let lecture: LectureRecord = serde_json::from_str(json).unwrap();
        assert_eq!(lecture.id, 12);
        assert_eq!(lecture.subject, "経済学入門");
        assert_eq!(lecture.department, "経済学部");
        assert_eq!(lecture.period, "火２");
        assert!(lecture.url.is_none());
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let lecture: LectureRecord = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(lecture, LectureRecord::new(3));
    }
}
