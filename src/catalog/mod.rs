//! Static task and risk catalogs.
//!
//! Each canonical department bucket owns an ordered list of task templates.
//! Dependencies are written by template name for readability and resolved
//! to task ids at instantiation. Unmapped departments fall back to a short
//! generic chain.
//!
//! The catalogs are process-wide constants; reads need no synchronization.
//! [`TaskCatalog`] is the seam for swapping in other template sets.

mod risks;
mod tasks;

use std::fmt::Debug;

use crate::models::{DepartmentBucket, Level};

pub use risks::{risk_templates, OVERALL_RISKS};
pub use tasks::GENERIC_TEMPLATES;

/// A task definition in a department catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    /// Name, unique within its catalog.
    pub name: &'static str,
    /// What the work involves.
    pub description: &'static str,
    /// Priority.
    pub priority: Level,
    /// Nominal duration in days (≥ 1).
    pub duration_days: u32,
    /// Names of templates in the same catalog this one waits on.
    pub depends_on: &'static [&'static str],
}

impl TaskTemplate {
    /// Creates a template.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        priority: Level,
        duration_days: u32,
        depends_on: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            description,
            priority,
            duration_days,
            depends_on,
        }
    }
}

/// A risk definition before tier scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskTemplate {
    /// Stable identifier.
    pub id: &'static str,
    /// Short title.
    pub title: &'static str,
    /// Level at tiers without a bump.
    pub base_level: Level,
    /// Details.
    pub description: &'static str,
}

/// Source of task templates per department.
pub trait TaskCatalog: Send + Sync + Debug {
    /// Ordered templates for `bucket`.
    fn templates(&self, bucket: &DepartmentBucket) -> &[TaskTemplate];

    /// Whether instantiated names get the department appended.
    ///
    /// Used for shared templates so that two departments never produce
    /// the same task name.
    fn suffix_names(&self, bucket: &DepartmentBucket) -> bool {
        !bucket.is_canonical()
    }
}

/// The built-in event catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl TaskCatalog for BuiltinCatalog {
    fn templates(&self, bucket: &DepartmentBucket) -> &[TaskTemplate] {
        tasks::templates_for(bucket)
    }
}

/// Epic title and scope for a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicDescriptor {
    /// Epic title.
    pub name: String,
    /// Scope summary.
    pub description: String,
}

/// Returns the epic title and scope for `bucket`.
pub fn epic_descriptor(bucket: &DepartmentBucket) -> EpicDescriptor {
    let (name, description) = match bucket {
        DepartmentBucket::Logistics => (
            "Operations & logistics coordination",
            "Infrastructure, supplies, transport, site security and vendor coordination",
        ),
        DepartmentBucket::Marketing => (
            "Communications & marketing rollout",
            "Key visual, print collateral, multi-channel communications plan, social and paid media",
        ),
        DepartmentBucket::Technical => (
            "Technical & production management",
            "IT systems, sound, lighting, streaming and technical support",
        ),
        DepartmentBucket::Finance => (
            "Event finance management",
            "Budget, procurement and service contracts, payments, settlement and cost control",
        ),
        DepartmentBucket::ExternalRelations => (
            "Artist & partner relations",
            "Outreach, negotiation, artist and partner contracts, riders and itineraries",
        ),
        DepartmentBucket::Other(dept) => {
            return EpicDescriptor {
                name: format!("Coordinate {dept}"),
                description: format!("Plan and coordinate the work of the {dept} department"),
            }
        }
    };
    EpicDescriptor {
        name: name.to_string(),
        description: description.to_string(),
    }
}
