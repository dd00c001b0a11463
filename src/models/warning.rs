//! Soft defects recovered during synthesis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A defect the engine recovered from without aborting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SynthesisWarning {
    /// `event_date` did not parse; `substituted` was used instead.
    InvalidEventDate { value: String, substituted: NaiveDate },
    /// A template name was already used elsewhere in the plan.
    DuplicateTaskName { epic_id: String, name: String },
    /// A dependency name did not resolve within the epic.
    UnresolvedDependency { task_id: String, dependency: String },
    /// A dependency edge closing a cycle was ignored.
    CycleEdgeSkipped { task_id: String, dependency_id: String },
    /// Task scheduled on its nominal duration ending on the event date.
    FallbackScheduled { task_id: String },
}

impl fmt::Display for SynthesisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEventDate { value, substituted } => {
                write!(f, "invalid event date '{value}', using {substituted}")
            }
            Self::DuplicateTaskName { epic_id, name } => {
                write!(f, "duplicate task name '{name}' skipped in {epic_id}")
            }
            Self::UnresolvedDependency {
                task_id,
                dependency,
            } => write!(f, "task {task_id}: dependency '{dependency}' not found in epic"),
            Self::CycleEdgeSkipped {
                task_id,
                dependency_id,
            } => write!(f, "task {task_id}: cyclic dependency on {dependency_id} ignored"),
            Self::FallbackScheduled { task_id } => {
                write!(f, "task {task_id}: scheduled by fallback")
            }
        }
    }
}
