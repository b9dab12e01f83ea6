//! Published timetables.
//!
//! Students may publish a calendar so others can browse it. This module
//! gates the timetable view on the publish flag and provides search and
//! summary counts over calendar configurations. Results preserve input
//! order; counts use ordered maps so output is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::config::SEMESTERS;
use crate::error::{Result, TimetableError};
use crate::models::{AssignmentSet, CalendarConfig, LectureRecord};
use crate::timetable::{build_timetable, Timetable};

/// Builds the timetable of a published calendar.
///
/// # Errors
/// [`TimetableError::NotPublic`] if the calendar is private, otherwise the
/// errors of [`build_timetable`].
pub fn published_timetable(
    config: &CalendarConfig,
    catalog: &[LectureRecord],
    set: &AssignmentSet,
    classifier: &Classifier,
) -> Result<Timetable> {
    if !config.is_public {
        return Err(TimetableError::NotPublic {
            calendar_id: config.id,
        });
    }
    build_timetable(catalog, set, config, classifier)
}

/// Search filter over published calendars. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicQuery {
    pub department: Option<String>,
    pub campus: Option<String>,
    pub semester: Option<String>,
    /// Substring of the calendar name.
    pub keyword: Option<String>,
}

impl PublicQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_campus(mut self, campus: impl Into<String>) -> Self {
        self.campus = Some(campus.into());
        self
    }

    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Whether a calendar is public and satisfies every set field.
    pub fn matches(&self, config: &CalendarConfig) -> bool {
        fn listed(wanted: &Option<String>, values: &[String]) -> bool {
            match wanted.as_deref().map(str::trim) {
                None | Some("") => true,
                Some(w) => values.iter().any(|v| v == w),
            }
        }

        let keyword_ok = match self.keyword.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(k) => config.name.contains(k),
        };

        config.is_public
            && listed(&self.department, &config.departments)
            && listed(&self.campus, &config.campuses)
            && listed(&self.semester, &config.semesters)
            && keyword_ok
    }
}

/// Public calendars matching the query, in input order.
pub fn search<'a>(configs: &'a [CalendarConfig], query: &PublicQuery) -> Vec<&'a CalendarConfig> {
    configs.iter().filter(|c| query.matches(c)).collect()
}

/// Counts over published calendars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicStats {
    pub total: usize,
    pub by_campus: BTreeMap<String, usize>,
    pub by_department: BTreeMap<String, usize>,
    /// Counts per semester in catalog term order; labels outside
    /// [`SEMESTERS`] follow, sorted.
    pub by_semester: Vec<(String, usize)>,
}

impl PublicStats {
    /// Counts public calendars; private ones are ignored.
    pub fn calculate(configs: &[CalendarConfig]) -> Self {
        let mut stats = Self::default();
        let mut semesters: BTreeMap<String, usize> = BTreeMap::new();
        for config in configs.iter().filter(|c| c.is_public) {
            stats.total += 1;
            for campus in &config.campuses {
                *stats.by_campus.entry(campus.clone()).or_insert(0) += 1;
            }
            for department in &config.departments {
                *stats.by_department.entry(department.clone()).or_insert(0) += 1;
            }
            for semester in &config.semesters {
                *semesters.entry(semester.clone()).or_insert(0) += 1;
            }
        }

        for label in SEMESTERS {
            if let Some(count) = semesters.remove(label) {
                stats.by_semester.push((label.to_string(), count));
            }
        }
        stats.by_semester.extend(semesters);
        stats
    }
}
