//! Risk output models.

use serde::{Deserialize, Serialize};

use super::{DepartmentBucket, Level};

/// One risk with its tier-scaled level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    /// Catalog identifier, e.g. `HC-004`.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Level after venue scaling.
    pub level: Level,
    /// Details.
    pub description: String,
    /// Owning department; `None` for cross-cutting risks.
    pub owner: Option<DepartmentBucket>,
}

/// Risks owned by one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRisks {
    /// Owning department.
    pub department: DepartmentBucket,
    /// Its risk items, in catalog order.
    pub items: Vec<RiskItem>,
}

/// Complete risk output of a synthesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Per-department risks, in epic order.
    pub by_department: Vec<DepartmentRisks>,
    /// Cross-cutting risks.
    pub overall: Vec<RiskItem>,
}

impl RiskBreakdown {
    /// All items, department risks first.
    pub fn all(&self) -> impl Iterator<Item = &RiskItem> {
        self.by_department
            .iter()
            .flat_map(|d| d.items.iter())
            .chain(self.overall.iter())
    }

    /// Number of items rated `level` or higher.
    pub fn count_at_least(&self, level: Level) -> usize {
        self.all().filter(|r| r.level >= level).count()
    }
}
