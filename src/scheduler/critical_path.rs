//! Critical path: the longest dependency chain.
//!
//! Depth-first from every task without dependencies, following edges to
//! the tasks that wait on it. A node already in the current chain is not
//! revisited, which keeps cyclic input finite. The first chain found wins
//! ties, and tasks are visited in input order.

use std::collections::HashMap;

use crate::models::Task;

/// Task ids of one longest chain, root first.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_wbs::models::Task;
/// use u_wbs::scheduler::critical_path;
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
/// let tasks = vec![
///     Task::new("A", "EP-001", day),
///     Task::new("B", "EP-001", day).with_dependency("A"),
///     Task::new("C", "EP-001", day).with_dependency("B"),
/// ];
/// assert_eq!(critical_path(&tasks), vec!["A", "B", "C"]);
/// ```
pub fn critical_path(tasks: &[Task]) -> Vec<String> {
    let index: HashMap<&str, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.task_id.as_str(), i))
        .collect();

    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
    for (i, task) in tasks.iter().enumerate() {
        for dep in &task.depends_on {
            if let Some(&d) = index.get(dep.as_str()) {
                if !dependents[d].contains(&i) {
                    dependents[d].push(i);
                }
            }
        }
    }

    let mut best: Vec<usize> = Vec::new();
    let mut chain: Vec<usize> = Vec::new();
    for (i, task) in tasks.iter().enumerate() {
        if task.is_root() {
            chain.push(i);
            extend(i, &dependents, &mut chain, &mut best);
            chain.pop();
        }
    }

    best.into_iter().map(|i| tasks[i].task_id.clone()).collect()
}

fn extend(node: usize, dependents: &[Vec<usize>], chain: &mut Vec<usize>, best: &mut Vec<usize>) {
    if chain.len() > best.len() {
        best.clone_from(chain);
    }
    for &next in &dependents[node] {
        if !chain.contains(&next) {
            chain.push(next);
            extend(next, dependents, chain, best);
            chain.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: &str, deps: &[&str]) -> Task {
        let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        deps.iter()
            .fold(Task::new(id, "EP-001", day), |t, d| t.with_dependency(*d))
    }

    #[test]
    fn test_linear_chain() {
        let tasks = vec![task("A", &[]), task("B", &["A"]), task("C", &["B"])];
        assert_eq!(critical_path(&tasks), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_longest_branch_wins() {
        let tasks = vec![
            task("A", &[]),
            task("B", &["A"]),
            task("C", &["A"]),
            task("D", &["C"]),
            task("E", &[]),
        ];
        assert_eq!(critical_path(&tasks), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_tie_keeps_first() {
        let tasks = vec![task("A", &[]), task("B", &["A"]), task("C", &[]), task("D", &["C"])];
        assert_eq!(critical_path(&tasks), vec!["A", "B"]);
    }

    #[test]
    fn test_cycle_is_finite() {
        // R -> X -> Y -> X
        let tasks = vec![task("R", &[]), task("X", &["R", "Y"]), task("Y", &["X"])];
        assert_eq!(critical_path(&tasks), vec!["R", "X", "Y"]);
    }

    #[test]
    fn test_empty() {
        assert!(critical_path(&[]).is_empty());
    }
}
