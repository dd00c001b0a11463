//! Worker allocation.
//!
//! One event lead and one lead per department manage rather than execute;
//! everyone else forms the pool of individual contributors. The pool is
//! split across departments in proportion to workload weight, scaled by
//! venue tier.
//!
//! # Algorithm
//!
//! 1. `share = floor(weight / Σweight × pool)`, at least 1 per department
//! 2. `pool − Σshare` (possibly negative) goes to the first department with
//!    the highest weight, which is then clamped to at least 1
//!
//! The allocations sum to `pool` exactly whenever `pool ≥ departments`.
//! Smaller pools are oversubscribed so that every department keeps a worker.

use serde::{Deserialize, Serialize};

use crate::models::{DepartmentBucket, VenueTier};

/// Individual contributors left after reserving leads.
///
/// `max(1, headcount − 1 − departments)`.
///
/// # Example
/// ```
/// use u_wbs::allocation::available_workers;
///
/// assert_eq!(available_workers(10, 4), 5);
/// assert_eq!(available_workers(3, 5), 1);
/// ```
pub fn available_workers(headcount_total: u32, num_departments: usize) -> u32 {
    let reserved = i64::try_from(num_departments).unwrap_or(i64::MAX).saturating_add(1);
    let available = i64::from(headcount_total) - reserved;
    u32::try_from(available.max(1)).unwrap_or(u32::MAX)
}

/// Workers given to one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAllocation {
    /// Department display name.
    pub department: String,
    /// Canonical bucket.
    pub bucket: DepartmentBucket,
    /// Tier-scaled workload weight.
    pub weight: f64,
    /// Assigned workers (≥ 1).
    pub workers: u32,
}

/// Result of splitting the worker pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerAllocation {
    /// Pool that was split.
    pub pool: u32,
    /// Per-department shares, in input order.
    pub departments: Vec<DepartmentAllocation>,
}

impl WorkerAllocation {
    /// Workers assigned to `bucket`, or 0 if absent.
    pub fn workers_for(&self, bucket: &DepartmentBucket) -> u32 {
        self.departments
            .iter()
            .find(|d| &d.bucket == bucket)
            .map_or(0, |d| d.workers)
    }

    /// Sum of all shares.
    pub fn total_allocated(&self) -> u32 {
        self.departments.iter().map(|d| d.workers).sum()
    }
}

/// Splits `pool` across `departments` by tier-scaled workload weight.
pub fn distribute(pool: u32, departments: &[DepartmentBucket], tier: VenueTier) -> WorkerAllocation {
    if departments.is_empty() {
        return WorkerAllocation {
            pool,
            departments: Vec::new(),
        };
    }

    let factor = tier.workload_factor();
    let weights: Vec<f64> = departments
        .iter()
        .map(|b| b.workload_weight() * factor)
        .collect();
    let total_weight: f64 = weights.iter().sum();

    let mut shares: Vec<i64> = weights
        .iter()
        .map(|w| ((w / total_weight * f64::from(pool)).floor() as i64).max(1))
        .collect();

    let assigned: i64 = shares.iter().sum();
    let remainder = i64::from(pool) - assigned;
    if remainder != 0 {
        // First maximum wins ties.
        let heaviest = weights
            .iter()
            .enumerate()
            .fold(0, |best, (i, w)| if *w > weights[best] { i } else { best });
        shares[heaviest] = (shares[heaviest] + remainder).max(1);
    }

    let departments = departments
        .iter()
        .zip(weights)
        .zip(shares)
        .map(|((bucket, weight), workers)| DepartmentAllocation {
            department: bucket.display_name(),
            bucket: bucket.clone(),
            weight,
            workers: u32::try_from(workers).unwrap_or(u32::MAX),
        })
        .collect();

    WorkerAllocation { pool, departments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DepartmentBucket::*;

    #[test]
    fn test_available_workers() {
        assert_eq!(available_workers(10, 4), 5);
        assert_eq!(available_workers(100, 4), 95);
        assert_eq!(available_workers(5, 4), 1);
        assert_eq!(available_workers(0, 3), 1);
    }

    #[test]
    fn test_remainder_goes_to_heaviest() {
        let alloc = distribute(10, &[Logistics, Finance], VenueTier::M);
        assert_eq!(alloc.workers_for(&Logistics), 7);
        assert_eq!(alloc.workers_for(&Finance), 3);
        assert_eq!(alloc.total_allocated(), 10);
    }

    #[test]
    fn test_sum_matches_pool() {
        let depts = [Logistics, Marketing, Technical, Finance, ExternalRelations];
        for tier in VenueTier::ALL {
            for pool in 5..60 {
                let alloc = distribute(pool, &depts, tier);
                assert_eq!(alloc.total_allocated(), pool, "pool {pool} tier {tier}");
                assert!(alloc.departments.iter().all(|d| d.workers >= 1));
            }
        }
    }

    #[test]
    fn test_small_pool_oversubscribes() {
        let depts = [Logistics, Marketing, Technical];
        let alloc = distribute(1, &depts, VenueTier::M);
        assert!(alloc.departments.iter().all(|d| d.workers >= 1));
        assert_eq!(alloc.total_allocated(), 3);
    }

    #[test]
    fn test_equal_weights_favor_first() {
        let depts = [ExternalRelations, Other("Security".into())];
        let alloc = distribute(5, &depts, VenueTier::Xl);
        assert_eq!(alloc.departments[0].workers, 3);
        assert_eq!(alloc.departments[1].workers, 2);
    }

    #[test]
    fn test_empty_departments() {
        let alloc = distribute(10, &[], VenueTier::M);
        assert!(alloc.departments.is_empty());
        assert_eq!(alloc.total_allocated(), 0);
    }
}
