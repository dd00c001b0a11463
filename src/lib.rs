//! Work-breakdown synthesis for live events.
//!
//! Turns a handful of event facts (type, date, venue, headcount, departments)
//! into epics, dated tasks, milestones, a critical path, a feasibility
//! verdict, tier-scaled risks, and insights from similar past events. The
//! same input always yields the same plan.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `EventFacts`, `VenueTier`, `DepartmentBucket`,
//!   `Level`, `Epic`, `Task`, `Milestone`, `RiskItem`, `HistoricalEventRecord`
//! - **`catalog`**: Static task and risk catalogs, `TaskCatalog` seam
//! - **`allocation`**: Worker pool and workload-weighted apportionment
//! - **`scheduler`**: Dependency graph, backward scheduling, critical path, feasibility
//! - **`risks`**: Department and cross-cutting risk generation
//! - **`retrieval`**: Historical corpus, similarity ranking, best practices
//! - **`synthesis`**: The end-to-end pipeline producing a `WbsPlan`
//! - **`validation`**: Catalog integrity checks (duplicate names, DAG cycles, dangling refs)
//! - **`config`**: Layered engine configuration
//!
//! # Quick start
//!
//! ```
//! use u_wbs::{EventFacts, Synthesizer};
//!
//! let facts = EventFacts::new("concert_opening", "2025-12-20")
//!     .with_venue("University stadium")
//!     .with_headcount(20)
//!     .with_department("Logistics")
//!     .with_department("Marketing");
//!
//! let plan = Synthesizer::default().synthesize(&facts);
//! assert_eq!(plan.venue_tier, u_wbs::models::VenueTier::Xl);
//! assert!(!plan.critical_path.is_empty());
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22 (DFS, topological sort)
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - PMI (2019), "Practice Standard for Work Breakdown Structures"

pub mod allocation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod retrieval;
pub mod risks;
pub mod scheduler;
pub mod synthesis;
pub mod validation;

pub use config::EngineConfig;
pub use error::{ConfigError, WbsError};
pub use models::EventFacts;
pub use synthesis::{Synthesizer, WbsPlan};
