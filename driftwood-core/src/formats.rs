//! User-defined custom formats and per-profile format scoring.
//!
//! Matching a release against format definitions happens in the release
//! parser; this module only turns an already-matched tag set into a single
//! integer score under a profile's weight table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a user-defined custom format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomFormatId(pub u32);

impl CustomFormatId {
    /// Creates a format id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying id as u32.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CustomFormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-defined classification matched against a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFormat {
    pub id: CustomFormatId,
    pub name: String,
}

impl CustomFormat {
    /// Creates a custom format.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: CustomFormatId::new(id),
            name: name.into(),
        }
    }
}

/// Weight assigned to one custom format by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatWeight {
    pub format: CustomFormatId,
    pub score: i32,
}

/// Per-profile format weight table with acceptance and upgrade thresholds.
///
/// `min_score` is the floor below which a release is not acceptable at all;
/// `cutoff_score` is the ceiling above which format-driven upgrade seeking
/// stops. Weights may be negative to penalize unwanted attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatScoring {
    pub weights: Vec<FormatWeight>,
    pub min_score: i32,
    pub cutoff_score: i32,
}

impl FormatScoring {
    /// Creates an empty table: every release scores 0 and the cutoff is met.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the weight for a format.
    pub fn with_weight(mut self, format: CustomFormatId, score: i32) -> Self {
        if let Some(existing) = self.weights.iter_mut().find(|w| w.format == format) {
            existing.score = score;
        } else {
            self.weights.push(FormatWeight { format, score });
        }
        self
    }

    /// Sets the acceptance floor.
    pub fn with_min_score(mut self, min_score: i32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Sets the upgrade ceiling.
    pub fn with_cutoff_score(mut self, cutoff_score: i32) -> Self {
        self.cutoff_score = cutoff_score;
        self
    }

    /// Sums the weights of every matched format.
    ///
    /// Formats absent from the table contribute 0, so an unknown tag can
    /// never fail an evaluation.
    pub fn score(&self, matched: &[CustomFormat]) -> i32 {
        matched
            .iter()
            .filter_map(|format| {
                self.weights
                    .iter()
                    .find(|w| w.format == format.id)
                    .map(|w| w.score)
            })
            .sum()
    }

    /// Whether a score clears the acceptance floor.
    pub fn meets_minimum(&self, score: i32) -> bool {
        score >= self.min_score
    }

    /// Whether a score has reached the upgrade ceiling.
    pub fn cutoff_met(&self, score: i32) -> bool {
        score >= self.cutoff_score
    }
}
