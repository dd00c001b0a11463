//! Historical event corpus.
//!
//! Read-mostly: synthesis takes a read lock; [`HistoricalCorpus::add_record`]
//! appends under the write lock.

use std::fs;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use tracing::{info, warn};

use super::similarity::{rank, ScoredRecord, SimilarityQuery};
use crate::error::WbsError;
use crate::models::{HistoricalEventRecord, VenueTier};

/// Append-only store of past events.
#[derive(Debug, Default)]
pub struct HistoricalCorpus {
    records: RwLock<Vec<HistoricalEventRecord>>,
}

impl HistoricalCorpus {
    /// Creates a corpus from records.
    pub fn new(records: Vec<HistoricalEventRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// The built-in corpus.
    pub fn builtin() -> Self {
        Self::new(default_records())
    }

    /// Loads a JSON array of records from `path`.
    pub fn load(path: &Path) -> Result<Self, WbsError> {
        let text = fs::read_to_string(path).map_err(|source| WbsError::CorpusIo {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<HistoricalEventRecord> =
            serde_json::from_str(&text).map_err(|source| WbsError::CorpusParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(records))
    }

    /// Loads from `path` when given, falling back to the built-in corpus
    /// on any error or when the file holds no records.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(corpus) if !corpus.is_empty() => {
                info!(path = %path.display(), records = corpus.len(), "corpus loaded");
                corpus
            }
            Ok(_) => {
                warn!(path = %path.display(), "corpus file is empty, using built-in corpus");
                Self::builtin()
            }
            Err(err) => {
                warn!(error = %err, "using built-in corpus");
                Self::builtin()
            }
        }
    }

    /// Appends a record.
    pub fn add_record(&self, record: HistoricalEventRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all records.
    pub fn records(&self) -> Vec<HistoricalEventRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Top `k` records by similarity to `query`.
    pub fn similar_events(&self, query: &SimilarityQuery, k: usize) -> Vec<ScoredRecord> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        rank(&records, query, k)
    }
}

/// Records shipped with the crate.
pub fn default_records() -> Vec<HistoricalEventRecord> {
    vec![
        HistoricalEventRecord::new("EVT-2024-001", "concert_opening", VenueTier::Xl, 150)
            .with_name("University Opening Concert 2024")
            .with_departments(["logistics", "marketing", "technical", "finance"])
            .with_key_tasks([
                "Survey stadium capacity",
                "Install high-power sound system",
                "Design crowd flow for 5000+ attendees",
                "Test livestream at 100Mbps bandwidth",
                "Provide 20+ portable toilets",
            ])
            .with_lessons([
                "Large venues need two extra setup days",
                "Double security for XL venues",
                "Backup power is mandatory",
            ])
            .with_requirements([
                "Police permit for large gatherings",
                "Event insurance",
                "Emergency response plan",
            ]),
        HistoricalEventRecord::new("EVT-2024-002", "career_fair", VenueTier::M, 50)
            .with_name("Tech Career Fair 2024")
            .with_departments(["logistics", "marketing", "finance", "external relations"])
            .with_key_tasks([
                "Design booth layout for 30+ companies",
                "Set up QR code check-in",
                "Prepare backdrop and standees",
                "Contact recruiting companies",
                "Print 500 visitor guides",
            ])
            .with_lessons([
                "Book the hall two weeks ahead",
                "QR check-in halves queueing time",
                "Digital handouts beat print",
            ]),
        HistoricalEventRecord::new("EVT-2023-005", "food_festival", VenueTier::L, 80)
            .with_name("Campus Food Festival 2023")
            .with_departments(["logistics", "marketing", "technical", "finance"])
            .with_key_tasks([
                "Apply for food safety permit",
                "Rent 15+ food trucks and stalls",
                "Set up cashless payment",
                "Prepare handwashing and sanitation areas",
                "Run interactive game shows",
            ])
            .with_lessons([
                "Food safety permits take a month to approve",
                "Cashless payment shortens queues",
                "Food events need extra sanitation points",
            ])
            .with_requirements(["Food safety permit", "Food liability insurance", "Medical standby"]),
        HistoricalEventRecord::new("EVT-2024-007", "conference", VenueTier::S, 25)
            .with_name("Seminar: AI & Future Tech")
            .with_departments(["marketing", "technical", "finance"])
            .with_key_tasks([
                "Book the classroom",
                "Set up projector and microphones",
                "Prepare slides and handouts",
                "Order water and snacks",
                "Film and photograph the session",
            ])
            .with_lessons([
                "Small rooms need only one setup day",
                "Wireless microphones beat wired ones",
                "Digital handouts save money",
            ]),
        HistoricalEventRecord::new("EVT-2023-012", "sport_competition", VenueTier::Xl, 120)
            .with_name("Campus Marathon 2023")
            .with_departments(["logistics", "marketing", "technical", "finance", "medical"])
            .with_key_tasks([
                "Register the road race permit",
                "Measure and mark the 10km course",
                "Set up 10+ water stations",
                "Keep two ambulances on standby",
                "Print 500+ bibs and timing chips",
            ])
            .with_lessons([
                "Road permits take six weeks",
                "Medical standby is mandatory for sport events",
                "Timing chips are more accurate than manual timing",
            ])
            .with_requirements([
                "Public road use permit",
                "Sports insurance",
                "Onsite medical team",
                "Traffic police coordination",
            ]),
    ]
}
