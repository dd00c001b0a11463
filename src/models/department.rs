//! Department canonicalization.
//!
//! Raw department strings arrive with typos, missing diacritics, mixed
//! languages, and inconsistent casing. Each one maps to exactly one
//! [`DepartmentBucket`]: a canonical bucket when a keyword matches, or an
//! `Other` bucket carrying the title-cased original.
//!
//! # Matching
//!
//! Text is lowercased and whitespace-collapsed. Keywords longer than three
//! characters match as substrings; shorter ones ("it", "pr") must match a
//! whole word, so "security" does not land in `Technical`. Buckets are tried
//! in declaration order and the first hit wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical department key.
///
/// Serializes as its key string (`"logistics"`, `"external-relations"`, or
/// the lowercased name of an unmapped department).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DepartmentBucket {
    /// Operations, venue, transport, equipment.
    Logistics,
    /// Communications, media, promotion.
    Marketing,
    /// Sound, light, IT, streaming.
    Technical,
    /// Budget, contracts, payments.
    Finance,
    /// Artists, partners, sponsors.
    ExternalRelations,
    /// Unmapped department; holds the title-cased display name.
    Other(String),
}

const BUCKET_KEYWORDS: [(DepartmentBucket, &[&str]); 5] = [
    (
        DepartmentBucket::Logistics,
        &[
            "hậu cần", "hau can", "haucan", "logistics", "vận hành", "van hanh", "operations",
        ],
    ),
    (
        DepartmentBucket::Marketing,
        &[
            "marketing",
            "maketing",
            "marketting",
            "media",
            "truyền thông",
            "truyen thong",
            "truyenthong",
            "communications",
        ],
    ),
    (
        DepartmentBucket::Technical,
        &[
            "chuyên môn",
            "chuyen mon",
            "chuyenmon",
            "technical",
            "it",
            "kỹ thuật",
            "ky thuat",
            "kythuat",
        ],
    ),
    (
        DepartmentBucket::Finance,
        &[
            "tài chính", "tai chinh", "taichinh", "finance", "accounting", "kế toán", "ke toan",
        ],
    ),
    (
        DepartmentBucket::ExternalRelations,
        &[
            "đối ngoại",
            "doi ngoai",
            "doingoai",
            "external",
            "relations",
            "external relations",
            "pr",
        ],
    ),
];

impl DepartmentBucket {
    /// The five canonical buckets, in matching order.
    pub const CANONICAL: [DepartmentBucket; 5] = [
        DepartmentBucket::Logistics,
        DepartmentBucket::Marketing,
        DepartmentBucket::Technical,
        DepartmentBucket::Finance,
        DepartmentBucket::ExternalRelations,
    ];

    /// Maps a raw department string to its bucket.
    ///
    /// # Example
    /// ```
    /// use u_wbs::models::DepartmentBucket;
    ///
    /// assert_eq!(DepartmentBucket::normalize("Maketing"), DepartmentBucket::Marketing);
    /// assert_eq!(DepartmentBucket::normalize("hau can"), DepartmentBucket::Logistics);
    /// assert_eq!(
    ///     DepartmentBucket::normalize("  sound crew "),
    ///     DepartmentBucket::Other("Sound Crew".into()),
    /// );
    /// ```
    pub fn normalize(raw: &str) -> Self {
        let text = collapse_whitespace(&raw.to_lowercase());
        let words: Vec<&str> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        BUCKET_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords.iter().any(|k| {
                    if k.chars().count() <= 3 {
                        words.contains(k)
                    } else {
                        text.contains(k)
                    }
                })
            })
            .map(|(bucket, _)| bucket.clone())
            .unwrap_or_else(|| Self::Other(title_case(raw)))
    }

    /// Normalizes a list, dropping blank entries and buckets already seen
    /// (first occurrence wins).
    pub fn normalize_all<S: AsRef<str>>(departments: &[S]) -> Vec<Self> {
        let mut buckets: Vec<Self> = Vec::with_capacity(departments.len());
        for dept in departments {
            let dept = dept.as_ref();
            if dept.trim().is_empty() {
                continue;
            }
            let bucket = Self::normalize(dept);
            if !buckets.contains(&bucket) {
                buckets.push(bucket);
            }
        }
        buckets
    }

    /// Internal lowercase key.
    pub fn key(&self) -> String {
        match self {
            Self::Logistics => "logistics".into(),
            Self::Marketing => "marketing".into(),
            Self::Technical => "technical".into(),
            Self::Finance => "finance".into(),
            Self::ExternalRelations => "external-relations".into(),
            Self::Other(name) => name.to_lowercase(),
        }
    }

    /// Human-facing name. Feeding it back through [`normalize`](Self::normalize)
    /// yields the same bucket.
    pub fn display_name(&self) -> String {
        match self {
            Self::Logistics => "Logistics".into(),
            Self::Marketing => "Marketing".into(),
            Self::Technical => "Technical".into(),
            Self::Finance => "Finance".into(),
            Self::ExternalRelations => "External Relations".into(),
            Self::Other(name) => name.clone(),
        }
    }

    /// Whether this is one of the five canonical buckets.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Relative workload used when apportioning workers.
    pub fn workload_weight(&self) -> f64 {
        match self {
            Self::Logistics => 1.5,
            Self::Marketing => 1.2,
            Self::Technical => 1.3,
            Self::Finance => 0.8,
            Self::ExternalRelations | Self::Other(_) => 1.0,
        }
    }
}

impl From<String> for DepartmentBucket {
    fn from(value: String) -> Self {
        Self::CANONICAL
            .iter()
            .find(|b| b.key() == value)
            .cloned()
            .unwrap_or_else(|| Self::normalize(&value))
    }
}

impl From<DepartmentBucket> for String {
    fn from(value: DepartmentBucket) -> Self {
        value.key()
    }
}

impl fmt::Display for DepartmentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Capitalizes the first letter of each word and lowercases the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
