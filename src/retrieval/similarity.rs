//! Weighted similarity between the current event and a past record.
//!
//! # Weights (percent)
//!
//! | Feature | Full match | Partial |
//! |---------|-----------|---------|
//! | Event type | 40 (exact) | 20 (same group) |
//! | Venue tier | 25 (exact) | 15 (adjacent) |
//! | Headcount | 20 × min/max | |
//! | Departments | 15 × Jaccard | |
//!
//! Scores are summed in percent and divided by 100 once, so an identical
//! record scores exactly 1.0.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{DepartmentBucket, HistoricalEventRecord, VenueTier};

const TYPE_EXACT: f64 = 40.0;
const TYPE_GROUP: f64 = 20.0;
const TIER_EXACT: f64 = 25.0;
const TIER_ADJACENT: f64 = 15.0;
const HEADCOUNT: f64 = 20.0;
const DEPARTMENTS: f64 = 15.0;

/// Event types treated as close relatives.
const SIMILAR_TYPE_GROUPS: [&[&str]; 4] = [
    &["concert_opening", "concert", "music_event"],
    &["conference", "seminar", "workshop"],
    &["career_fair", "expo", "exhibition"],
    &["sport_competition", "tournament", "championship"],
];

/// The current event, reduced to the features that are compared.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityQuery {
    /// Machine event type.
    pub event_type: String,
    /// Classified venue tier.
    pub venue_tier: VenueTier,
    /// Team size.
    pub headcount_total: u32,
    /// Normalized departments.
    pub departments: Vec<DepartmentBucket>,
}

/// Whether two distinct types share a similarity group.
pub fn is_similar_event_type(a: &str, b: &str) -> bool {
    SIMILAR_TYPE_GROUPS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Scores `record` against `query`, in `[0, 1]`.
pub fn similarity(query: &SimilarityQuery, record: &HistoricalEventRecord) -> f64 {
    let mut score = 0.0;

    if query.event_type == record.event_type {
        score += TYPE_EXACT;
    } else if is_similar_event_type(&query.event_type, &record.event_type) {
        score += TYPE_GROUP;
    }

    if query.venue_tier == record.venue_tier {
        score += TIER_EXACT;
    } else if query.venue_tier.is_adjacent(record.venue_tier) {
        score += TIER_ADJACENT;
    }

    let high = query.headcount_total.max(record.headcount_total);
    if high > 0 {
        let low = query.headcount_total.min(record.headcount_total);
        score += HEADCOUNT * f64::from(low) / f64::from(high);
    }

    let current: HashSet<String> = query.departments.iter().map(DepartmentBucket::key).collect();
    let past: HashSet<String> = record
        .departments
        .iter()
        .map(|d| DepartmentBucket::normalize(d).key())
        .collect();
    score += DEPARTMENTS * jaccard(&current, &past);

    score / 100.0
}

/// A record paired with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The past event.
    pub record: HistoricalEventRecord,
    /// Similarity in `[0, 1]`.
    pub score: f64,
}

/// Scores all records and keeps the best `k`, highest first.
///
/// Equal scores keep corpus order.
pub fn rank(records: &[HistoricalEventRecord], query: &SimilarityQuery, k: usize) -> Vec<ScoredRecord> {
    let mut scored: Vec<ScoredRecord> = records
        .iter()
        .map(|r| ScoredRecord {
            score: similarity(query, r),
            record: r.clone(),
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);
    scored
}

/// Aggregated practices from a set of similar events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPractices {
    /// Notable tasks.
    pub key_tasks: Vec<String>,
    /// Retrospective notes.
    pub lessons_learned: Vec<String>,
    /// Permits, insurance, and similar obligations.
    pub special_requirements: Vec<String>,
}

/// Appends `items` to `out`, skipping anything already present.
pub(crate) fn extend_unique<'a>(out: &mut Vec<String>, items: impl IntoIterator<Item = &'a String>) {
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
}

/// Concatenates the lists of `similar`, keeping first occurrences only.
pub fn extract_best_practices(similar: &[ScoredRecord]) -> BestPractices {
    let mut practices = BestPractices::default();
    for scored in similar {
        let record = &scored.record;
        extend_unique(&mut practices.key_tasks, &record.key_tasks);
        extend_unique(&mut practices.lessons_learned, &record.lessons_learned);
        extend_unique(&mut practices.special_requirements, &record.special_requirements);
    }
    practices
}

/// Standing checklist for a venue tier.
pub fn venue_requirements(tier: VenueTier) -> &'static [&'static str] {
    match tier {
        VenueTier::Xs => &[],
        VenueTier::S => &[
            "Book the room one week ahead",
            "Check projector and sound system",
            "Prepare handouts for 50-100 people",
        ],
        VenueTier::M => &[
            "Book the venue two weeks ahead",
            "Test sound and lighting",
            "Prepare signage and wayfinding",
            "Arrange parking for 50+ vehicles",
        ],
        VenueTier::L => &[
            "Book the venue one month ahead",
            "Set up a professional sound system",
            "Prepare a crowd flow plan",
            "Obtain permits from the relevant authorities",
            "Event insurance",
        ],
        VenueTier::Xl => &[
            "Book the venue 2-3 months ahead",
            "Police permit for large gatherings",
            "Large-scale sound and lighting",
            "Detailed security plan",
            "Event and public liability insurance",
            "Medical team and ambulance on standby",
            "Backup power system",
            "Emergency response plan",
        ],
    }
}
