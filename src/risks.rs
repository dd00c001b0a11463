//! Risk generation.
//!
//! Static catalog items are emitted with their level raised through
//! [`VenueTier::bump`], the same function that scales task complexity.
//! Departments without a catalog produce no items.

use crate::catalog::{risk_templates, RiskTemplate, OVERALL_RISKS};
use crate::models::{DepartmentBucket, DepartmentRisks, RiskBreakdown, RiskItem, VenueTier};

fn scaled(template: &RiskTemplate, tier: VenueTier, owner: Option<&DepartmentBucket>) -> RiskItem {
    RiskItem {
        id: template.id.to_string(),
        title: template.title.to_string(),
        level: tier.bump(template.base_level),
        description: template.description.to_string(),
        owner: owner.cloned(),
    }
}

/// Risks owned by `bucket`, scaled to `tier`.
pub fn department_risks(bucket: &DepartmentBucket, tier: VenueTier) -> Vec<RiskItem> {
    risk_templates(bucket)
        .iter()
        .map(|t| scaled(t, tier, Some(bucket)))
        .collect()
}

/// Cross-cutting risks, scaled to `tier`.
pub fn overall_risks(tier: VenueTier) -> Vec<RiskItem> {
    OVERALL_RISKS.iter().map(|t| scaled(t, tier, None)).collect()
}

/// Full breakdown for the given departments.
///
/// Departments without risk items are left out of `by_department`.
pub fn assess(buckets: &[DepartmentBucket], tier: VenueTier) -> RiskBreakdown {
    let by_department = buckets
        .iter()
        .filter_map(|bucket| {
            let items = department_risks(bucket, tier);
            (!items.is_empty()).then(|| DepartmentRisks {
                department: bucket.clone(),
                items,
            })
        })
        .collect();

    RiskBreakdown {
        by_department,
        overall: overall_risks(tier),
    }
}
