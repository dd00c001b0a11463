//! Backward scheduling from the event date.
//!
//! # Algorithm
//!
//! Per epic, on the cycle-free dependency graph, in reverse topological order:
//!
//! 1. `deadline = min(start of dependents) − 1 day`, or the event date for
//!    tasks nothing waits on
//! 2. `duration = ceil(nominal × tier multiplier)`,
//!    `start = deadline − (duration − 1)`
//! 3. A matching milestone anchor earlier than `start` pulls `start` back to
//!    the anchor and the duration is recomputed; anchors never push later
//!
//! Tasks on a dependency cycle get their nominal duration ending on the
//! event date (anchors still apply). Ordering among them is not guaranteed.

use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::DependencyGraph;
use crate::models::{Milestone, SynthesisWarning, Task, VenueTier};

/// A named checkpoint fixed at a number of days before the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneAnchor {
    /// Lowercase phrase matched against task names.
    pub keyword: String,
    /// Days before the event date.
    pub days_before: u32,
}

impl MilestoneAnchor {
    /// Creates an anchor.
    pub fn new(keyword: impl Into<String>, days_before: u32) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            days_before,
        }
    }

    /// Built-in anchors: final rehearsal D-1, site ready D-2, permits approved D-8.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("final rehearsal", 1),
            Self::new("site ready", 2),
            Self::new("permits approved", 8),
        ]
    }

    fn matches(&self, task_name: &str) -> bool {
        task_name.to_lowercase().contains(&self.keyword)
    }
}

/// Assigns dates to tasks working back from the event date.
#[derive(Debug, Clone)]
pub struct BackwardScheduler {
    event_date: NaiveDate,
    tier: VenueTier,
    anchors: Vec<MilestoneAnchor>,
}

impl BackwardScheduler {
    /// Creates a scheduler with the default anchors.
    pub fn new(event_date: NaiveDate, tier: VenueTier) -> Self {
        Self {
            event_date,
            tier,
            anchors: MilestoneAnchor::defaults(),
        }
    }

    /// Adds an anchor.
    pub fn with_anchor(mut self, keyword: impl Into<String>, days_before: u32) -> Self {
        self.anchors.push(MilestoneAnchor::new(keyword, days_before));
        self
    }

    /// Replaces all anchors.
    pub fn with_anchors(mut self, anchors: Vec<MilestoneAnchor>) -> Self {
        self.anchors = anchors;
        self
    }

    /// The event date everything is scheduled against.
    pub fn event_date(&self) -> NaiveDate {
        self.event_date
    }

    /// Schedules every task in place, epic by epic.
    ///
    /// Never fails; graph defects come back as warnings.
    pub fn schedule(&self, tasks: &mut [Task]) -> Vec<SynthesisWarning> {
        let mut warnings = Vec::new();

        let mut epics: Vec<String> = Vec::new();
        let mut members: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, task) in tasks.iter().enumerate() {
            let group = members.entry(task.epic_id.clone()).or_default();
            if group.is_empty() {
                epics.push(task.epic_id.clone());
            }
            group.push(i);
        }

        for epic_id in &epics {
            self.schedule_epic(tasks, &members[epic_id], &mut warnings);
        }

        warnings
    }

    fn schedule_epic(&self, tasks: &mut [Task], indices: &[usize], warnings: &mut Vec<SynthesisWarning>) {
        let graph = {
            let local: HashMap<&str, usize> = indices
                .iter()
                .enumerate()
                .map(|(pos, &i)| (tasks[i].task_id.as_str(), pos))
                .collect();
            let deps: Vec<Vec<usize>> = indices
                .iter()
                .map(|&i| {
                    tasks[i]
                        .depends_on
                        .iter()
                        .filter_map(|d| local.get(d.as_str()).copied())
                        .collect()
                })
                .collect();
            DependencyGraph::build(&deps)
        };
        for &(node, dep) in graph.skipped_edges() {
            let task_id = tasks[indices[node]].task_id.clone();
            let dependency_id = tasks[indices[dep]].task_id.clone();
            warn!(task = %task_id, dependency = %dependency_id, "cyclic dependency edge skipped");
            warnings.push(SynthesisWarning::CycleEdgeSkipped {
                task_id,
                dependency_id,
            });
        }

        let mut starts: Vec<Option<NaiveDate>> = vec![None; indices.len()];
        for &node in graph.order().iter().rev() {
            let task = &mut tasks[indices[node]];

            let (deadline, duration) = if graph.is_cyclic(node) {
                warn!(task = %task.task_id, "scheduled by cycle fallback");
                warnings.push(SynthesisWarning::FallbackScheduled {
                    task_id: task.task_id.clone(),
                });
                (self.event_date, task.nominal_duration_days.max(1))
            } else {
                let earliest_dependent = graph
                    .dependents(node)
                    .iter()
                    .filter_map(|&d| starts[d])
                    .min();
                let deadline = earliest_dependent
                    .map_or(self.event_date, |s| s - Days::new(1));
                (deadline, self.tier.scale_days(task.nominal_duration_days))
            };

            let mut start = deadline - Days::new(u64::from(duration - 1));
            if let Some(anchor) = self.anchors.iter().find(|a| a.matches(&task.name)) {
                let anchor_date = self.event_date - Days::new(u64::from(anchor.days_before));
                if anchor_date < start {
                    start = anchor_date;
                }
            }

            task.set_window(start, deadline);
            starts[node] = Some(start);
        }

        debug!(tasks = indices.len(), cycles = graph.skipped_edges().len(), "epic scheduled");
    }
}

/// One milestone per critical task, dated at its deadline.
pub fn milestones(tasks: &[Task]) -> Vec<Milestone> {
    tasks
        .iter()
        .filter(|t| t.is_milestone())
        .map(Milestone::from_task)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn task(id: &str, name: &str, days: u32, deps: &[&str]) -> Task {
        let mut t = Task::new(id, "EP-001", date(3, 20))
            .with_name(name)
            .with_duration(days);
        for d in deps {
            t = t.with_dependency(*d);
        }
        t
    }

    #[test]
    fn test_linear_chain_medium_tier() {
        let mut tasks = vec![
            task("T-001", "A", 1, &[]),
            task("T-002", "B", 2, &["T-001"]),
            task("T-003", "C", 1, &["T-002"]),
        ];
        let warnings = BackwardScheduler::new(date(3, 20), VenueTier::M).schedule(&mut tasks);

        assert!(warnings.is_empty());
        assert_eq!((tasks[2].start_date, tasks[2].deadline), (date(3, 20), date(3, 20)));
        assert_eq!((tasks[1].start_date, tasks[1].deadline), (date(3, 18), date(3, 19)));
        assert_eq!((tasks[0].start_date, tasks[0].deadline), (date(3, 17), date(3, 17)));
    }

    #[test]
    fn test_tier_scales_durations() {
        let mut tasks = vec![task("T-001", "A", 2, &[])];
        BackwardScheduler::new(date(3, 20), VenueTier::Xl).schedule(&mut tasks);
        assert_eq!(tasks[0].duration_days, 3);
        assert_eq!(tasks[0].start_date, date(3, 18));
    }

    #[test]
    fn test_deadline_is_min_of_dependents() {
        // B (3 days) and C (1 day) both wait on A
        let mut tasks = vec![
            task("T-001", "A", 1, &[]),
            task("T-002", "B", 3, &["T-001"]),
            task("T-003", "C", 1, &["T-001"]),
        ];
        BackwardScheduler::new(date(3, 20), VenueTier::M).schedule(&mut tasks);
        assert_eq!(tasks[1].start_date, date(3, 18));
        assert_eq!(tasks[0].deadline, date(3, 17));
    }

    #[test]
    fn test_anchor_pulls_start_earlier() {
        let mut tasks = vec![task("T-001", "Run Final Rehearsal", 1, &[])];
        BackwardScheduler::new(date(3, 20), VenueTier::M).schedule(&mut tasks);
        assert_eq!(tasks[0].start_date, date(3, 19));
        assert_eq!(tasks[0].deadline, date(3, 20));
        assert_eq!(tasks[0].duration_days, 2);
    }

    #[test]
    fn test_anchor_never_pushes_later() {
        let mut tasks = vec![task("T-001", "permits approved", 20, &[])];
        BackwardScheduler::new(date(3, 20), VenueTier::M).schedule(&mut tasks);
        assert_eq!(tasks[0].start_date, date(3, 1));
        assert_eq!(tasks[0].duration_days, 20);
    }

    #[test]
    fn test_cycle_fallback() {
        let mut tasks = vec![
            task("T-001", "A", 2, &["T-002"]),
            task("T-002", "B", 2, &["T-001"]),
            task("T-003", "C", 1, &["T-001"]),
        ];
        let warnings = BackwardScheduler::new(date(3, 20), VenueTier::Xl).schedule(&mut tasks);

        assert!(warnings
            .iter()
            .any(|w| matches!(w, SynthesisWarning::CycleEdgeSkipped { .. })));
        let fallback: Vec<_> = warnings
            .iter()
            .filter_map(|w| match w {
                SynthesisWarning::FallbackScheduled { task_id } => Some(task_id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fallback.len(), 2);
        // nominal, unscaled duration ending on the event date
        for t in &tasks[..2] {
            assert_eq!(t.deadline, date(3, 20));
            assert_eq!(t.duration_days, 2);
        }
        for t in &tasks {
            assert!(t.start_date <= t.deadline && t.deadline <= date(3, 20));
        }
    }

    #[test]
    fn test_epics_are_independent() {
        let mut tasks = vec![
            task("T-001", "A", 1, &[]),
            Task::new("T-002", "EP-002", date(3, 20)).with_name("B").with_dependency("T-001"),
        ];
        BackwardScheduler::new(date(3, 20), VenueTier::M).schedule(&mut tasks);
        // the cross-epic reference does not constrain A
        assert_eq!(tasks[0].deadline, date(3, 20));
    }

    #[test]
    fn test_milestones_from_critical_tasks() {
        let mut tasks = vec![
            task("T-001", "A", 1, &[]).with_priority(Level::Critical),
            task("T-002", "B", 1, &["T-001"]),
        ];
        BackwardScheduler::new(date(3, 20), VenueTier::M).schedule(&mut tasks);
        let ms = milestones(&tasks);
        assert_eq!(ms.len(), 1);
        assert_eq!(ms[0].task_id, "T-001");
        assert_eq!(ms[0].date, date(3, 19));
    }
}
