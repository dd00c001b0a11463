//! Task instantiation from catalog templates.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::allocation::WorkerAllocation;
use crate::catalog::{TaskCatalog, TaskTemplate};
use crate::models::{Epic, SynthesisWarning, Task, VenueTier};

/// Tasks drawn for an epic: `min(templates, max(3, 2 × workers))`.
pub fn target_task_count(templates: usize, workers: u32) -> usize {
    let per_workers = usize::try_from(workers.saturating_mul(2)).unwrap_or(usize::MAX);
    templates.min(per_workers.max(3))
}

/// Formats the task id for a 1-based ordinal.
pub fn task_id_for(ordinal: usize) -> String {
    format!("T-{ordinal:03}")
}

/// Output of [`instantiate_tasks`].
#[derive(Debug, Clone, Default)]
pub struct Instantiated {
    /// Tasks in epic order, then template order.
    pub tasks: Vec<Task>,
    /// Duplicate names and unresolved dependency names.
    pub warnings: Vec<SynthesisWarning>,
}

/// Instantiates tasks for every epic.
///
/// Ids are assigned plan-wide in order. Dependency names resolve against
/// the tasks instantiated for the same epic; anything else is dropped with
/// a warning. Tasks start out as unscheduled windows on `event_date`.
pub fn instantiate_tasks(
    epics: &[Epic],
    allocation: &WorkerAllocation,
    catalog: &dyn TaskCatalog,
    tier: VenueTier,
    event_date: NaiveDate,
) -> Instantiated {
    let mut out = Instantiated::default();
    let mut used_names: HashSet<String> = HashSet::new();

    for epic in epics {
        let templates = catalog.templates(&epic.bucket);
        let workers = allocation.workers_for(&epic.bucket).max(1);
        let target = target_task_count(templates.len(), workers);
        let suffix = catalog.suffix_names(&epic.bucket);

        // template name -> task id, for this epic only
        let mut local: HashMap<&str, String> = HashMap::new();
        let mut drawn: Vec<(&TaskTemplate, Task)> = Vec::with_capacity(target);

        for template in &templates[..target] {
            let name = if suffix {
                format!("{} - {}", template.name, epic.department)
            } else {
                template.name.to_string()
            };
            if !used_names.insert(name.clone()) {
                warn!(epic = %epic.epic_id, name = %name, "duplicate task name skipped");
                out.warnings.push(SynthesisWarning::DuplicateTaskName {
                    epic_id: epic.epic_id.clone(),
                    name,
                });
                continue;
            }

            let task_id = task_id_for(out.tasks.len() + drawn.len() + 1);
            local.insert(template.name, task_id.clone());
            let task = Task::new(task_id, epic.epic_id.clone(), event_date)
                .with_name(name)
                .with_category(epic.name.clone())
                .with_description(template.description)
                .with_priority(template.priority)
                .with_complexity(tier.bump(template.priority))
                .with_duration(template.duration_days);
            drawn.push((template, task));
        }

        for (template, mut task) in drawn {
            for dep_name in template.depends_on {
                match local.get(dep_name) {
                    Some(dep_id) if !task.depends_on.contains(dep_id) => {
                        task.depends_on.push(dep_id.clone());
                    }
                    Some(_) => {}
                    None => {
                        warn!(task = %task.task_id, dependency = %dep_name, "unresolved dependency dropped");
                        out.warnings.push(SynthesisWarning::UnresolvedDependency {
                            task_id: task.task_id.clone(),
                            dependency: (*dep_name).to_string(),
                        });
                    }
                }
            }
            out.tasks.push(task);
        }

        debug!(epic = %epic.epic_id, workers, target, "tasks instantiated");
    }

    out
}
