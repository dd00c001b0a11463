//! Four-step qualitative ladder.
//!
//! One ordinal scale backs task priority, task complexity, and risk level.
//! Scaling under larger venues goes through [`VenueTier::bump`](super::VenueTier::bump),
//! so every caller shifts along the same ladder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal level: `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Lowest rung.
    Low,
    /// Default rung for unlabelled work.
    #[default]
    Medium,
    /// Elevated.
    High,
    /// Ceiling; bumps clamp here.
    Critical,
}

impl Level {
    /// The ladder in ascending order.
    pub const LADDER: [Level; 4] = [Level::Low, Level::Medium, Level::High, Level::Critical];

    /// Position on the ladder (0-indexed).
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Level at `ordinal`, clamped to the ceiling.
    pub fn from_ordinal(ordinal: usize) -> Self {
        Self::LADDER[ordinal.min(Self::LADDER.len() - 1)]
    }

    /// Moves up `steps` rungs, clamped at `Critical`.
    pub fn raised(self, steps: usize) -> Self {
        Self::from_ordinal(self.ordinal().saturating_add(steps))
    }

    /// Serialize to a short label.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Parse from label (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
