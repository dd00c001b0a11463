//! Precedent retrieval over historical events.
//!
//! Scores the corpus against the current event, keeps the top matches, and
//! condenses them into insights attached to the plan. Retrieval never feeds
//! back into scheduling.

mod corpus;
mod similarity;

use serde::{Deserialize, Serialize};

pub use corpus::{default_records, HistoricalCorpus};
pub use similarity::{
    extract_best_practices, is_similar_event_type, rank, similarity, venue_requirements,
    BestPractices, ScoredRecord, SimilarityQuery,
};

use crate::models::VenueTier;

/// Summary of one similar past event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarEvent {
    /// Record identifier.
    pub event_id: String,
    /// Display name.
    pub event_name: String,
    /// Machine event type.
    pub event_type: String,
    /// Venue tier.
    pub venue_tier: VenueTier,
    /// Similarity in `[0, 1]`.
    pub score: f64,
}

/// Context drawn from similar past events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalInsights {
    /// Best matches, highest first.
    pub similar_events: Vec<SimilarEvent>,
    /// Leading lessons learned.
    pub key_learnings: Vec<String>,
    /// Notable tasks from the matches.
    pub key_tasks: Vec<String>,
    /// Caller requirements followed by those of the matches, deduplicated.
    pub special_requirements: Vec<String>,
    /// Standing checklist for the venue tier.
    pub venue_requirements: Vec<String>,
}

impl RetrievalInsights {
    /// Gathers insights for `query`.
    ///
    /// `similar_count` bounds the matches, `learning_limit` the lessons.
    pub fn gather(
        corpus: &HistoricalCorpus,
        query: &SimilarityQuery,
        caller_requirements: &[String],
        similar_count: usize,
        learning_limit: usize,
    ) -> Self {
        let similar = corpus.similar_events(query, similar_count);
        let practices = extract_best_practices(&similar);

        let mut special_requirements = Vec::new();
        similarity::extend_unique(&mut special_requirements, caller_requirements);
        similarity::extend_unique(&mut special_requirements, &practices.special_requirements);

        Self {
            similar_events: similar
                .iter()
                .map(|s| SimilarEvent {
                    event_id: s.record.event_id.clone(),
                    event_name: s.record.event_name.clone(),
                    event_type: s.record.event_type.clone(),
                    venue_tier: s.record.venue_tier,
                    score: s.score,
                })
                .collect(),
            key_learnings: practices
                .lessons_learned
                .into_iter()
                .take(learning_limit)
                .collect(),
            key_tasks: practices.key_tasks,
            special_requirements,
            venue_requirements: venue_requirements(query.venue_tier)
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DepartmentBucket;

    #[test]
    fn test_gather() {
        let corpus = HistoricalCorpus::builtin();
        let query = SimilarityQuery {
            event_type: "sport_competition".into(),
            venue_tier: VenueTier::Xl,
            headcount_total: 120,
            departments: vec![DepartmentBucket::Logistics, DepartmentBucket::Marketing],
        };
        let caller = vec!["Sports insurance".to_string(), "Drone permit".to_string()];
        let insights = RetrievalInsights::gather(&corpus, &query, &caller, 2, 4);

        assert_eq!(insights.similar_events.len(), 2);
        assert_eq!(insights.similar_events[0].event_id, "EVT-2023-012");
        assert!(insights.key_learnings.len() <= 4);
        assert_eq!(insights.special_requirements[0], "Sports insurance");
        assert_eq!(insights.special_requirements[1], "Drone permit");
        let dupes = insights
            .special_requirements
            .iter()
            .filter(|r| r.as_str() == "Sports insurance")
            .count();
        assert_eq!(dupes, 1);
        assert_eq!(insights.venue_requirements.len(), 8);
    }
}
