//! Work-breakdown domain models.
//!
//! Input facts, the qualitative ladders that drive scaling, and the output
//! entities of a synthesized plan.
//!
//! # Concept Mappings
//!
//! | u-wbs | Project management | Event operations |
//! |-------|-------------------|------------------|
//! | Epic | Work package | Department workstream |
//! | Task | Activity | Assignment for one crew member |
//! | Milestone | Checkpoint | Rehearsal, site handover |
//! | VenueTier | Project size class | Venue scale |

mod department;
mod epic;
mod event;
mod history;
mod level;
mod risk;
mod task;
mod tier;
mod warning;

pub use department::DepartmentBucket;
pub use epic::{DateRange, Epic};
pub use event::{EventFacts, DATE_FORMAT};
pub use history::HistoricalEventRecord;
pub use level::Level;
pub use risk::{DepartmentRisks, RiskBreakdown, RiskItem};
pub use task::{Milestone, Task};
pub use tier::VenueTier;
pub use warning::SynthesisWarning;
