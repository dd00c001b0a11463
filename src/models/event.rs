//! Event facts: the engine's only per-call input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted for `event_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Facts describing one event.
///
/// `event_date` stays a string so that a malformed value can be reported
/// and replaced during synthesis instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFacts {
    /// Display name; optional.
    #[serde(default)]
    pub event_name: String,
    /// Machine event type, e.g. `concert_opening`, `conference`.
    pub event_type: String,
    /// Calendar date in `YYYY-MM-DD`.
    pub event_date: String,
    /// Free-text venue description.
    #[serde(default)]
    pub venue: String,
    /// Everyone on the organizing team, leads included.
    pub headcount_total: u32,
    /// Raw department names, possibly noisy.
    pub departments: Vec<String>,
    /// Caller-supplied requirements merged into the insights.
    #[serde(default)]
    pub special_requirements: Vec<String>,
}

impl EventFacts {
    /// Creates facts for an event of `event_type` on `event_date`.
    pub fn new(event_type: impl Into<String>, event_date: impl Into<String>) -> Self {
        Self {
            event_name: String::new(),
            event_type: event_type.into(),
            event_date: event_date.into(),
            venue: String::new(),
            headcount_total: 0,
            departments: Vec::new(),
            special_requirements: Vec::new(),
        }
    }

    /// Sets the event name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.event_name = name.into();
        self
    }

    /// Sets the venue description.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Sets the total headcount.
    pub fn with_headcount(mut self, headcount: u32) -> Self {
        self.headcount_total = headcount;
        self
    }

    /// Appends a raw department name.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.departments.push(department.into());
        self
    }

    /// Appends a special requirement.
    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.special_requirements.push(requirement.into());
        self
    }

    /// Strict `%Y-%m-%d` parse of `event_date`.
    pub fn parsed_event_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.event_date.trim(), DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_event_date() {
        let facts = EventFacts::new("concert", "2025-12-20");
        assert_eq!(facts.parsed_event_date(), NaiveDate::from_ymd_opt(2025, 12, 20));

        for bad in ["20/12/2025", "2025-13-01", "", "tomorrow"] {
            assert_eq!(EventFacts::new("concert", bad).parsed_event_date(), None, "{bad}");
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "event_type": "conference",
            "event_date": "2025-06-01",
            "headcount_total": 20,
            "departments": ["Marketing"]
        }"#;
        let facts: EventFacts = serde_json::from_str(json).unwrap();
        assert_eq!(facts.event_name, "");
        assert_eq!(facts.venue, "");
        assert!(facts.special_requirements.is_empty());
        assert_eq!(facts.departments, vec!["Marketing".to_string()]);
    }
}
