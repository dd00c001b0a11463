//! Venue tier classification and tier-driven scaling.
//!
//! A venue description is reduced to an ordinal size class. The tier then
//! stretches task durations, raises qualitative levels for large venues,
//! and weights department workloads.
//!
//! # Scaling Table
//!
//! | Tier | Duration multiplier | Level bump | Workload factor |
//! |------|--------------------|-----------|-----------------|
//! | XS | 0.80 | 0 | 1.0 |
//! | S  | 0.90 | 0 | 0.8 |
//! | M  | 1.00 | 0 | 1.0 |
//! | L  | 1.25 | 1 | 1.1 |
//! | XL | 1.50 | 1 | 1.3 |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Level;

/// Ordinal venue size class: `XS < S < M < L < XL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VenueTier {
    /// Fallback when no keyword matches.
    #[serde(rename = "XS")]
    Xs,
    /// Meeting rooms, small spaces.
    S,
    /// Halls, indoor venues.
    M,
    /// Squares, auditoriums, outdoor grounds.
    L,
    /// Stadiums, arenas, closed-off streets.
    #[serde(rename = "XL")]
    Xl,
}

/// Keyword table, evaluated top to bottom; first containment match wins.
const TIER_KEYWORDS: [(VenueTier, &[&str]); 4] = [
    (
        VenueTier::Xl,
        &["sân vận động", "stadium", "đường 30m", "arena", "outdoor lớn"],
    ),
    (
        VenueTier::L,
        &["quảng trường", "large hall", "ngoài trời", "auditorium", "square", "outdoor"],
    ),
    (
        VenueTier::M,
        &["hội trường", "hall", "trung bình", "indoor"],
    ),
    (VenueTier::S, &["phòng họp", "meeting room", "nhỏ", "classroom"]),
];

impl VenueTier {
    /// All tiers in ascending order.
    pub const ALL: [VenueTier; 5] = [
        VenueTier::Xs,
        VenueTier::S,
        VenueTier::M,
        VenueTier::L,
        VenueTier::Xl,
    ];

    /// Classifies a free-text venue description.
    ///
    /// Matching is case-insensitive keyword containment, checked XL → L → M → S.
    /// Empty or unmatched text yields `XS`.
    ///
    /// # Example
    /// ```
    /// use u_wbs::models::VenueTier;
    ///
    /// assert_eq!(VenueTier::classify("National Stadium"), VenueTier::Xl);
    /// assert_eq!(VenueTier::classify("Large Hall B"), VenueTier::L);
    /// assert_eq!(VenueTier::classify(""), VenueTier::Xs);
    /// ```
    pub fn classify(venue: &str) -> Self {
        let text = venue.to_lowercase();
        TIER_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(tier, _)| *tier)
            .unwrap_or(VenueTier::Xs)
    }

    /// Position on the ordinal ladder (XS = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Duration stretch factor.
    pub fn multiplier(self) -> f64 {
        f64::from(self.multiplier_percent()) / 100.0
    }

    /// Duration stretch factor in whole percent.
    pub fn multiplier_percent(self) -> u32 {
        match self {
            Self::Xs => 80,
            Self::S => 90,
            Self::M => 100,
            Self::L => 125,
            Self::Xl => 150,
        }
    }

    /// Scales a nominal duration: `ceil(days × multiplier)`, at least 1 day.
    ///
    /// Integer arithmetic keeps the rounding exact.
    pub fn scale_days(self, nominal_days: u32) -> u32 {
        let pct = self.multiplier_percent();
        (nominal_days.saturating_mul(pct).div_ceil(100)).max(1)
    }

    /// Rungs a qualitative level is raised by under this tier.
    pub fn bump_steps(self) -> usize {
        match self {
            Self::Xs | Self::S | Self::M => 0,
            Self::L | Self::Xl => 1,
        }
    }

    /// Raises `level` for large venues, clamped at `Critical`.
    ///
    /// Shared by task complexity and risk scaling.
    pub fn bump(self, level: Level) -> Level {
        level.raised(self.bump_steps())
    }

    /// Multiplier applied to every department's workload weight.
    pub fn workload_factor(self) -> f64 {
        match self {
            Self::Xl => 1.3,
            Self::L => 1.1,
            Self::S => 0.8,
            Self::Xs | Self::M => 1.0,
        }
    }

    /// Whether two tiers sit next to each other on the ladder.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.index().abs_diff(other.index()) == 1
    }

    /// Serialize to a short label.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        }
    }

    /// Parse from label (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "XS" => Some(Self::Xs),
            "S" => Some(Self::S),
            "M" => Some(Self::M),
            "L" => Some(Self::L),
            "XL" => Some(Self::Xl),
            _ => None,
        }
    }
}

impl fmt::Display for VenueTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
