//! Calendar (named timetable) configuration.
//!
//! A calendar is one named timetable owned by a user. Its flags decide the
//! shape of the weekly grid; its campus, department and semester lists are
//! descriptive and drive published-timetable search.
//!
//! # Grid Shape
//! Columns are Monday to Friday, plus Saturday iff `saturday_enabled`.
//! Rows are periods 1 to 5, plus period 6 iff `sixth_period_enabled`.

use serde::{Deserialize, Serialize};

use super::{Day, SlotKey, MAX_PERIOD, REGULAR_PERIODS};

/// Calendar identifier.
pub type CalendarId = u64;

/// Configuration of one calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Calendar identifier.
    pub id: CalendarId,
    /// Display name.
    #[serde(alias = "calendar_name", default)]
    pub name: String,
    /// Owning user, if known.
    #[serde(alias = "user_id", default)]
    pub owner_id: Option<u64>,
    /// Whether Saturday is shown.
    #[serde(alias = "sat_flag", default)]
    pub saturday_enabled: bool,
    /// Whether the sixth period is shown.
    #[serde(alias = "sixth_period_flag", default)]
    pub sixth_period_enabled: bool,
    /// Campus names.
    #[serde(alias = "campus", default)]
    pub campuses: Vec<String>,
    /// Department names.
    #[serde(alias = "department", default)]
    pub departments: Vec<String>,
    /// Semester labels.
    #[serde(alias = "semester", default)]
    pub semesters: Vec<String>,
    /// Grade label (e.g. `1年`).
    #[serde(default)]
    pub grade: Option<String>,
    /// Whether other users may view this calendar.
    #[serde(default)]
    pub is_public: bool,
}

impl CalendarConfig {
    /// Creates a Monday-Friday, five-period, private calendar.
    pub fn new(id: CalendarId) -> Self {
        Self {
            id,
            name: String::new(),
            owner_id: None,
            saturday_enabled: false,
            sixth_period_enabled: false,
            campuses: Vec::new(),
            departments: Vec::new(),
            semesters: Vec::new(),
            grade: None,
            is_public: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_owner(mut self, owner_id: u64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_saturday(mut self, enabled: bool) -> Self {
        self.saturday_enabled = enabled;
        self
    }

    pub fn with_sixth_period(mut self, enabled: bool) -> Self {
        self.sixth_period_enabled = enabled;
        self
    }

    pub fn with_campus(mut self, campus: impl Into<String>) -> Self {
        self.campuses.push(campus.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.departments.push(department.into());
        self
    }

    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semesters.push(semester.into());
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Day columns of the grid, in display order.
    pub fn days(&self) -> Vec<Day> {
        if self.saturday_enabled {
            Day::ALL.to_vec()
        } else {
            Day::WEEKDAYS.to_vec()
        }
    }

    /// Number of period rows of the grid.
    pub fn period_count(&self) -> u8 {
        if self.sixth_period_enabled {
            MAX_PERIOD
        } else {
            REGULAR_PERIODS
        }
    }

    /// Whether a slot lies inside this calendar's grid.
    pub fn contains(&self, slot: SlotKey) -> bool {
        (self.saturday_enabled || slot.day != Day::Sat)
            && (1..=self.period_count()).contains(&slot.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let cal = CalendarConfig::new(1);
        assert_eq!(cal.days(), Day::WEEKDAYS.to_vec());
        assert_eq!(cal.period_count(), 5);
    }

    #[test]
    fn test_extended_shape() {
        let cal = CalendarConfig::new(1)
            .with_saturday(true)
            .with_sixth_period(true);
        assert_eq!(cal.days().len(), 6);
        assert_eq!(cal.days()[5], Day::Sat);
        assert_eq!(cal.period_count(), 6);
    }

    #[test]
    fn test_contains() {
        let narrow = CalendarConfig::new(1);
        let wide = CalendarConfig::new(2)
            .with_saturday(true)
            .with_sixth_period(true);
        let sat1 = SlotKey::new(Day::Sat, 1).unwrap();
        let mon6 = SlotKey::new(Day::Mon, 6).unwrap();
        let fri5 = SlotKey::new(Day::Fri, 5).unwrap();

        assert!(!narrow.contains(sat1));
        assert!(!narrow.contains(mon6));
        assert!(narrow.contains(fri5));
        assert!(wide.contains(sat1));
        assert!(wide.contains(mon6));
    }

    #[test]
    fn test_deserialize_stored_flags() {
        let json = r#"{
            "id": 4,
            "calendar_name": "2年前期",
            "user_id": 9,
            "sat_flag": true,
            "sixth_period_flag": false,
            "campus": ["相模原"],
            "department": ["理工学部共通"],
            "semester": ["前期"]
        }"#;
        let cal: CalendarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cal.name, "2年前期");
        assert_eq!(cal.owner_id, Some(9));
        assert!(cal.saturday_enabled);
        assert!(!cal.sixth_period_enabled);
        assert_eq!(cal.campuses, vec!["相模原".to_string()]);
        assert!(!cal.is_public);
    }
}
