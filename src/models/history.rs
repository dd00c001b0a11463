//! Historical event records used for precedent retrieval.

use serde::{Deserialize, Serialize};

use super::VenueTier;

/// A completed past event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEventRecord {
    /// Record identifier.
    pub event_id: String,
    /// Display name.
    #[serde(default)]
    pub event_name: String,
    /// Machine event type.
    pub event_type: String,
    /// Venue tier at the time.
    pub venue_tier: VenueTier,
    /// Organizing team size.
    pub headcount_total: u32,
    /// Raw department names.
    #[serde(default)]
    pub departments: Vec<String>,
    /// Notable tasks.
    #[serde(default)]
    pub key_tasks: Vec<String>,
    /// Retrospective notes.
    #[serde(default)]
    pub lessons_learned: Vec<String>,
    /// Permits, insurance, and similar obligations.
    #[serde(default)]
    pub special_requirements: Vec<String>,
}

impl HistoricalEventRecord {
    /// Creates a record with empty lists.
    pub fn new(
        event_id: impl Into<String>,
        event_type: impl Into<String>,
        venue_tier: VenueTier,
        headcount_total: u32,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            event_name: String::new(),
            event_type: event_type.into(),
            venue_tier,
            headcount_total,
            departments: Vec::new(),
            key_tasks: Vec::new(),
            lessons_learned: Vec::new(),
            special_requirements: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.event_name = name.into();
        self
    }

    /// Sets the department list.
    pub fn with_departments<S: Into<String>>(mut self, departments: impl IntoIterator<Item = S>) -> Self {
        self.departments = departments.into_iter().map(Into::into).collect();
        self
    }

    /// Sets key tasks.
    pub fn with_key_tasks<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.key_tasks = items.into_iter().map(Into::into).collect();
        self
    }

    /// Sets lessons learned.
    pub fn with_lessons<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.lessons_learned = items.into_iter().map(Into::into).collect();
        self
    }

    /// Sets special requirements.
    pub fn with_requirements<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.special_requirements = items.into_iter().map(Into::into).collect();
        self
    }
}
