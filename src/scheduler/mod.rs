//! Task instantiation, dependency-aware scheduling, and plan analysis.
//!
//! # Pipeline
//!
//! 1. [`instantiate_tasks`] draws templates per epic (bounded by allocated
//!    workers) and resolves dependency names to task ids within the epic
//! 2. [`BackwardScheduler`] builds a [`DependencyGraph`] per epic and assigns
//!    dates back from the event date, honoring milestone anchors
//! 3. [`critical_path`] and [`FeasibilityReport`] summarize the result
//!
//! Graph defects never abort: cyclic edges are skipped, unresolvable names
//! dropped, and both are reported as warnings.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22
//! - PMI (2021), "PMBOK Guide", Schedule Management

mod backward;
mod critical_path;
mod feasibility;
mod graph;
mod instantiate;

pub use backward::{milestones, BackwardScheduler, MilestoneAnchor};
pub use critical_path::critical_path;
pub use feasibility::{base_effort, task_effort, FeasibilityReport, FeasibilityStatus};
pub use graph::DependencyGraph;
pub use instantiate::{instantiate_tasks, target_task_count, task_id_for, Instantiated};
