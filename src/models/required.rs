//! Required-course table.

use serde::{Deserialize, Serialize};

use super::LectureId;

/// A lecture that a department requires of students in a grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredCourse {
    /// Department name as listed in the requirement table.
    pub department: String,
    /// Grade number (1-based).
    pub grade: u8,
    #[serde(alias = "kougi_id")]
    pub lecture_id: LectureId,
    #[serde(default)]
    pub campus: Option<String>,
}

impl RequiredCourse {
    pub fn new(department: impl Into<String>, grade: u8, lecture_id: LectureId) -> Self {
        Self {
            department: department.into(),
            grade,
            lecture_id,
            campus: None,
        }
    }

    pub fn with_campus(mut self, campus: impl Into<String>) -> Self {
        self.campus = Some(campus.into());
        self
    }
}
