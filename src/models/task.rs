//! Task and milestone models.
//!
//! A task is one instantiated catalog template, owned by an epic. Its dates
//! are filled in by the backward scheduler; until then they sit at the
//! event date with the nominal duration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Level;

/// A scheduled unit of work inside an epic.
///
/// # Date Representation
/// Dates are inclusive calendar days. A one-day task has
/// `start_date == deadline`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Plan-wide identifier (`T-001`, `T-002`, ...).
    pub task_id: String,
    /// Owning epic.
    pub epic_id: String,
    /// Human-readable name, unique within a plan.
    pub name: String,
    /// Epic name the task was drawn for.
    pub category: String,
    /// What the work involves.
    pub description: String,
    /// Priority from the catalog template.
    pub priority: Level,
    /// First working day.
    #[serde(rename = "start-date")]
    pub start_date: NaiveDate,
    /// Last working day.
    pub deadline: NaiveDate,
    /// Scheduled length in days, after tier scaling and anchoring.
    pub duration_days: u32,
    /// Template duration before scaling.
    #[serde(skip)]
    pub nominal_duration_days: u32,
    /// Task ids this task waits on (same epic only).
    pub depends_on: Vec<String>,
    /// Priority raised for large venues.
    pub complexity: Level,
}

impl Task {
    /// Creates a one-day task dated on `date`.
    pub fn new(task_id: impl Into<String>, epic_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            task_id: task_id.into(),
            epic_id: epic_id.into(),
            name: String::new(),
            category: String::new(),
            description: String::new(),
            priority: Level::Medium,
            start_date: date,
            deadline: date,
            duration_days: 1,
            nominal_duration_days: 1,
            depends_on: Vec::new(),
            complexity: Level::Medium,
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets priority; complexity follows it until overridden.
    pub fn with_priority(mut self, priority: Level) -> Self {
        self.priority = priority;
        self.complexity = priority;
        self
    }

    /// Sets complexity.
    pub fn with_complexity(mut self, complexity: Level) -> Self {
        self.complexity = complexity;
        self
    }

    /// Sets both the nominal and the scheduled duration.
    pub fn with_duration(mut self, days: u32) -> Self {
        let days = days.max(1);
        self.nominal_duration_days = days;
        self.duration_days = days;
        self
    }

    /// Adds a dependency by task id.
    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.depends_on.push(task_id.into());
        self
    }

    /// Sets the scheduled window and derives `duration_days` from it.
    pub fn set_window(&mut self, start: NaiveDate, deadline: NaiveDate) {
        self.start_date = start;
        self.deadline = deadline;
        let span = (deadline - start).num_days() + 1;
        self.duration_days = u32::try_from(span.max(1)).unwrap_or(u32::MAX);
    }

    /// Whether this task produces a milestone.
    pub fn is_milestone(&self) -> bool {
        self.priority == Level::Critical
    }

    /// Whether the task has no dependencies.
    pub fn is_root(&self) -> bool {
        self.depends_on.is_empty()
    }
}

/// Checkpoint derived from a critical task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Name of the originating task.
    pub name: String,
    /// Originating task id.
    pub task_id: String,
    /// The task's deadline.
    pub date: NaiveDate,
}

impl Milestone {
    /// Builds a milestone dated on the task's deadline.
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            task_id: task.task_id.clone(),
            date: task.deadline,
        }
    }
}
