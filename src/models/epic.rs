//! Epic model: one department-scoped group of tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DepartmentBucket, Task};

/// Inclusive calendar span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day.
    pub start: NaiveDate,
    /// Last day.
    pub end: NaiveDate,
}

impl DateRange {
    /// Smallest range covering every task window, or `None` when empty.
    pub fn covering<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Option<Self> {
        tasks.into_iter().fold(None, |range, task| {
            Some(match range {
                None => Self {
                    start: task.start_date,
                    end: task.deadline,
                },
                Some(r) => Self {
                    start: r.start.min(task.start_date),
                    end: r.end.max(task.deadline),
                },
            })
        })
    }
}

/// A department-scoped grouping of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    /// Plan-wide identifier (`EP-001`, ...).
    pub epic_id: String,
    /// Epic title.
    pub name: String,
    /// Department display name.
    pub department: String,
    /// Canonical department bucket.
    pub bucket: DepartmentBucket,
    /// Scope summary.
    pub description: String,
    /// Span of the epic's tasks; absent until scheduled or when empty.
    pub date_range: Option<DateRange>,
}

impl Epic {
    /// Formats the epic id for a 1-based ordinal.
    pub fn id_for(ordinal: usize) -> String {
        format!("EP-{ordinal:03}")
    }
}
