//! The synthesis pipeline.
//!
//! # Algorithm
//!
//! 1. Resolve the event date (malformed ⇒ today, with a warning)
//! 2. Classify the venue tier and normalize departments
//! 3. One epic per distinct bucket, in input order
//! 4. Split the worker pool across departments
//! 5. Instantiate tasks from the catalog, bounded by each department's workers
//! 6. Schedule backward from the event date
//! 7. Derive epic spans, milestones, critical path, and feasibility
//! 8. Generate tier-scaled risks
//! 9. Attach insights from similar past events
//!
//! Synthesis is a pure function of the facts, the catalog, the corpus, and
//! "today". It never fails: every defect is recovered and reported as a
//! [`SynthesisWarning`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::allocation::{available_workers, distribute, WorkerAllocation};
use crate::catalog::{epic_descriptor, BuiltinCatalog, TaskCatalog};
use crate::config::EngineConfig;
use crate::models::{
    DateRange, DepartmentBucket, Epic, EventFacts, Milestone, RiskBreakdown, SynthesisWarning,
    Task, VenueTier,
};
use crate::retrieval::{HistoricalCorpus, RetrievalInsights, SimilarityQuery};
use crate::risks;
use crate::scheduler::{
    critical_path, instantiate_tasks, milestones, BackwardScheduler, FeasibilityReport,
    Instantiated, MilestoneAnchor,
};

/// The facts the plan was built from, after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFacts {
    /// Display name, possibly empty.
    pub event_name: String,
    /// Machine event type.
    pub event_type: String,
    /// Resolved event date.
    pub event_date: NaiveDate,
    /// Venue as given.
    pub venue: String,
    /// Classified tier.
    pub venue_tier: VenueTier,
    /// Team size, leads included.
    pub headcount_total: u32,
    /// Department display names, one per epic.
    pub departments: Vec<String>,
    /// Caller-supplied requirements.
    pub special_requirements: Vec<String>,
}

/// Tasks of one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentTasks {
    /// Department display name.
    pub department: String,
    /// Canonical bucket.
    pub bucket: DepartmentBucket,
    /// Epic holding the tasks.
    pub epic_id: String,
    /// Tasks in id order.
    pub tasks: Vec<Task>,
}

/// A synthesized work breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WbsPlan {
    /// Resolved input.
    pub facts: ExtractedFacts,
    /// Classified venue tier.
    pub venue_tier: VenueTier,
    /// Worker split.
    pub allocation: WorkerAllocation,
    /// One per department.
    pub epics: Vec<Epic>,
    /// Scheduled tasks grouped by department.
    pub departments: Vec<DepartmentTasks>,
    /// Critical tasks with their dates.
    pub milestones: Vec<Milestone>,
    /// Task ids of one longest dependency chain.
    pub critical_path: Vec<String>,
    /// Effort versus headcount.
    pub feasibility: FeasibilityReport,
    /// Department and cross-cutting risks.
    pub risks: RiskBreakdown,
    /// Context from similar past events.
    pub insights: RetrievalInsights,
    /// Recovered defects.
    pub warnings: Vec<SynthesisWarning>,
}

impl WbsPlan {
    /// All tasks, in id order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.departments.iter().flat_map(|d| d.tasks.iter())
    }

    /// Looks a task up by id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks().find(|t| t.task_id == task_id)
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.departments.iter().map(|d| d.tasks.len()).sum()
    }
}

/// Builds [`WbsPlan`]s.
///
/// Cheap to clone; the corpus and catalog are shared. A single synthesizer
/// may serve concurrent calls.
///
/// # Example
/// ```
/// use u_wbs::models::EventFacts;
/// use u_wbs::synthesis::Synthesizer;
///
/// let facts = EventFacts::new("conference", "2025-11-20")
///     .with_venue("Lecture hall")
///     .with_headcount(12)
///     .with_department("Marketing")
///     .with_department("Technical");
///
/// let plan = Synthesizer::default()
///     .with_today(chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
///     .synthesize(&facts);
///
/// assert_eq!(plan.epics.len(), 2);
/// assert!(plan.tasks().all(|t| t.start_date <= t.deadline));
/// ```
#[derive(Debug, Clone)]
pub struct Synthesizer {
    corpus: Arc<HistoricalCorpus>,
    catalog: Arc<dyn TaskCatalog>,
    config: EngineConfig,
    anchors: Vec<MilestoneAnchor>,
    today: Option<NaiveDate>,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(Arc::new(HistoricalCorpus::builtin()))
    }
}

impl Synthesizer {
    /// Creates a synthesizer over `corpus` with the built-in catalog.
    pub fn new(corpus: Arc<HistoricalCorpus>) -> Self {
        Self {
            corpus,
            catalog: Arc::new(BuiltinCatalog),
            config: EngineConfig::default(),
            anchors: MilestoneAnchor::defaults(),
            today: None,
        }
    }

    /// Creates a synthesizer from configuration, loading the corpus it names.
    pub fn from_config(config: EngineConfig) -> Self {
        let corpus = HistoricalCorpus::load_or_default(config.corpus_path.as_deref());
        Self::new(Arc::new(corpus)).with_config(config)
    }

    /// Replaces the task catalog.
    pub fn with_catalog(mut self, catalog: Arc<dyn TaskCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replaces the configuration. The corpus is kept.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the milestone anchors.
    pub fn with_anchors(mut self, anchors: Vec<MilestoneAnchor>) -> Self {
        self.anchors = anchors;
        self
    }

    /// Pins "today" instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The shared corpus.
    pub fn corpus(&self) -> &Arc<HistoricalCorpus> {
        &self.corpus
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Synthesizes a plan for `facts`.
    pub fn synthesize(&self, facts: &EventFacts) -> WbsPlan {
        let today = self.today.unwrap_or_else(|| self.config.today());
        let mut warnings = Vec::new();

        let event_date = match facts.parsed_event_date() {
            Some(date) => date,
            None => {
                warn!(value = %facts.event_date, substituted = %today, "malformed event date");
                warnings.push(SynthesisWarning::InvalidEventDate {
                    value: facts.event_date.clone(),
                    substituted: today,
                });
                today
            }
        };

        let tier = VenueTier::classify(&facts.venue);
        let buckets = DepartmentBucket::normalize_all(&facts.departments);
        debug!(tier = %tier, departments = buckets.len(), "event classified");

        let mut epics = build_epics(&buckets);

        let pool = available_workers(facts.headcount_total, buckets.len());
        let allocation = distribute(pool, &buckets, tier);
        debug!(pool, allocated = allocation.total_allocated(), "workers allocated");

        let Instantiated {
            mut tasks,
            warnings: drawn,
        } = instantiate_tasks(&epics, &allocation, self.catalog.as_ref(), tier, event_date);
        warnings.extend(drawn);

        let scheduler = BackwardScheduler::new(event_date, tier).with_anchors(self.anchors.clone());
        warnings.extend(scheduler.schedule(&mut tasks));

        for epic in &mut epics {
            epic.date_range = DateRange::covering(tasks.iter().filter(|t| t.epic_id == epic.epic_id));
        }

        let milestones = milestones(&tasks);
        let critical_path = critical_path(&tasks);
        let feasibility = FeasibilityReport::calculate(&tasks, facts.headcount_total, today);
        let risks = risks::assess(&buckets, tier);

        let query = SimilarityQuery {
            event_type: facts.event_type.clone(),
            venue_tier: tier,
            headcount_total: facts.headcount_total,
            departments: buckets,
        };
        let insights = RetrievalInsights::gather(
            &self.corpus,
            &query,
            &facts.special_requirements,
            self.config.similar_event_count,
            self.config.key_learning_limit,
        );

        debug!(
            epics = epics.len(),
            tasks = tasks.len(),
            warnings = warnings.len(),
            status = ?feasibility.status,
            "plan synthesized"
        );

        WbsPlan {
            facts: ExtractedFacts {
                event_name: facts.event_name.clone(),
                event_type: facts.event_type.clone(),
                event_date,
                venue: facts.venue.clone(),
                venue_tier: tier,
                headcount_total: facts.headcount_total,
                departments: epics.iter().map(|e| e.department.clone()).collect(),
                special_requirements: facts.special_requirements.clone(),
            },
            venue_tier: tier,
            allocation,
            departments: group_by_epic(&epics, tasks),
            epics,
            milestones,
            critical_path,
            feasibility,
            risks,
            insights,
            warnings,
        }
    }
}

fn build_epics(buckets: &[DepartmentBucket]) -> Vec<Epic> {
    buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let descriptor = epic_descriptor(bucket);
            Epic {
                epic_id: Epic::id_for(i + 1),
                name: descriptor.name,
                department: bucket.display_name(),
                bucket: bucket.clone(),
                description: descriptor.description,
                date_range: None,
            }
        })
        .collect()
}

fn group_by_epic(epics: &[Epic], tasks: Vec<Task>) -> Vec<DepartmentTasks> {
    let mut groups: Vec<DepartmentTasks> = epics
        .iter()
        .map(|e| DepartmentTasks {
            department: e.department.clone(),
            bucket: e.bucket.clone(),
            epic_id: e.epic_id.clone(),
            tasks: Vec::new(),
        })
        .collect();
    let slot: HashMap<String, usize> = epics
        .iter()
        .enumerate()
        .map(|(i, e)| (e.epic_id.clone(), i))
        .collect();

    for task in tasks {
        if let Some(&i) = slot.get(&task.epic_id) {
            groups[i].tasks.push(task);
        }
    }
    groups
}
