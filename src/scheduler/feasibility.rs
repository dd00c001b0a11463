//! Staffing feasibility.
//!
//! Estimates aggregate effort from the planned tasks and checks it against
//! the team size.
//!
//! # Effort Model
//!
//! | Priority | Base effort |
//! |----------|-------------|
//! | critical | 3.0 |
//! | high | 2.0 |
//! | medium | 1.5 |
//! | low | 1.0 |
//!
//! Each dependency adds 20% to a task's base effort.
//! `min_required_headcount = max(1, floor(total / 10))`.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Level, Task};

/// Effort units one person covers.
const EFFORT_PER_PERSON: f64 = 10.0;

/// Shortest lead time suggested for an infeasible plan.
const MIN_REQUIRED_DAYS: u32 = 7;

/// Feasibility verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeasibilityStatus {
    /// The team covers the estimated effort.
    Feasible,
    /// The team is too small.
    Infeasible,
}

/// Feasibility estimate for a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    /// Verdict.
    pub status: FeasibilityStatus,
    /// Sum of per-task effort.
    pub total_effort: f64,
    /// People needed for `total_effort`.
    pub min_required_headcount: u32,
    /// Lead time needed; infeasible plans only.
    pub required_days: Option<u32>,
    /// `today + required_days`; infeasible plans only.
    pub earliest_feasible_date: Option<NaiveDate>,
    /// Suggested task merges. Not computed.
    pub recommended_merges: Vec<String>,
    /// Optional tasks to drop. Not computed.
    pub dropped_optional_tasks: Vec<String>,
}

/// Base effort for a priority.
pub fn base_effort(priority: Level) -> f64 {
    match priority {
        Level::Critical => 3.0,
        Level::High => 2.0,
        Level::Medium => 1.5,
        Level::Low => 1.0,
    }
}

/// Effort of one task: base × (1 + 0.2 × dependencies).
pub fn task_effort(task: &Task) -> f64 {
    let deps = task.depends_on.len() as f64;
    base_effort(task.priority) * (5.0 + deps) / 5.0
}

impl FeasibilityReport {
    /// Computes feasibility for `tasks` against `headcount_total`.
    ///
    /// `today` anchors the suggested date of an infeasible plan.
    pub fn calculate(tasks: &[Task], headcount_total: u32, today: NaiveDate) -> Self {
        let total_effort: f64 = tasks.iter().map(task_effort).sum();
        let min_required_headcount = ((total_effort / EFFORT_PER_PERSON).floor() as u32).max(1);

        if min_required_headcount <= headcount_total {
            return Self {
                status: FeasibilityStatus::Feasible,
                total_effort,
                min_required_headcount,
                required_days: None,
                earliest_feasible_date: None,
                recommended_merges: Vec::new(),
                dropped_optional_tasks: Vec::new(),
            };
        }

        let per_head = total_effort / f64::from(headcount_total.max(1));
        let required_days = (per_head.floor() as u32).max(MIN_REQUIRED_DAYS);
        let earliest_feasible_date = today.checked_add_days(Days::new(u64::from(required_days)));

        Self {
            status: FeasibilityStatus::Infeasible,
            total_effort,
            min_required_headcount,
            required_days: Some(required_days),
            earliest_feasible_date,
            recommended_merges: Vec::new(),
            dropped_optional_tasks: Vec::new(),
        }
    }

    /// Whether the verdict is feasible.
    pub fn is_feasible(&self) -> bool {
        self.status == FeasibilityStatus::Feasible
    }
}
