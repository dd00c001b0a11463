//! Integrity checks for task catalogs.
//!
//! Synthesis tolerates defective catalogs, but every defect degrades the
//! plan. These checks are for catalog authors. They detect:
//! - Duplicate template names
//! - Dependencies on names the catalog does not define
//! - Circular dependencies (DAG validation)
//! - Zero nominal durations
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use crate::catalog::{TaskCatalog, TaskTemplate};
use crate::models::DepartmentBucket;
use crate::scheduler::DependencyGraph;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two templates share a name.
    DuplicateName,
    /// A dependency names no template in the catalog.
    UnknownDependency,
    /// Dependency graph contains a cycle.
    CyclicDependency,
    /// A template has a nominal duration of zero days.
    ZeroDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates one department's template list.
///
/// Checks:
/// 1. No duplicate names
/// 2. Every nominal duration is at least one day
/// 3. Every dependency names a template in the same list
/// 4. No circular dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(templates: &[TaskTemplate]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, t) in templates.iter().enumerate() {
        if index.insert(t.name, i).is_some() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate template name: {}", t.name),
            ));
        }
        if t.duration_days == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Template '{}' has a zero duration", t.name),
            ));
        }
    }

    for t in templates {
        for dep in t.depends_on {
            if !index.contains_key(dep) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDependency,
                    format!("Template '{}' depends on unknown template '{}'", t.name, dep),
                ));
            }
        }
    }

    errors.extend(detect_cycles(templates, &index));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the templates of every canonical bucket plus the fallback
/// chain used for unmapped departments.
pub fn validate_task_catalog(catalog: &dyn TaskCatalog) -> ValidationResult {
    let fallback = DepartmentBucket::Other("Other".into());
    let mut seen: HashSet<*const TaskTemplate> = HashSet::new();
    let mut errors = Vec::new();

    for bucket in DepartmentBucket::CANONICAL.iter().chain(std::iter::once(&fallback)) {
        let templates = catalog.templates(bucket);
        if !seen.insert(templates.as_ptr()) {
            continue;
        }
        if let Err(found) = validate_catalog(templates) {
            errors.extend(found.into_iter().map(|e| ValidationError {
                message: format!("[{}] {}", bucket.key(), e.message),
                ..e
            }));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports one error per dependency edge that closes a cycle.
fn detect_cycles(templates: &[TaskTemplate], index: &HashMap<&str, usize>) -> Vec<ValidationError> {
    let deps: Vec<Vec<usize>> = templates
        .iter()
        .map(|t| t.depends_on.iter().filter_map(|d| index.get(d).copied()).collect())
        .collect();

    DependencyGraph::build(&deps)
        .skipped_edges()
        .iter()
        .map(|&(node, dep)| {
            ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!(
                    "Circular dependency detected: '{}' -> '{}'",
                    templates[node].name, templates[dep].name
                ),
            )
        })
        .collect()
}
