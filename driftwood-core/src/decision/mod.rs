//! Release upgrade decisions.
//!
//! Orchestrates rank tables, format scoring, and revision comparison into
//! the two questions the acquisition pipeline asks: "does the held copy
//! already satisfy policy" and "is this candidate worth grabbing". Every
//! operation is a pure read over borrowed profiles and facts.

pub mod comparer;
pub mod engine;

use serde::{Deserialize, Serialize};

pub use comparer::ReleaseComparer;
pub use engine::UpgradeEngine;

use crate::formats::CustomFormat;
use crate::language::Language;
use crate::profiles::ProfileError;
use crate::quality::{QualityError, ReleaseQuality};

/// Structured facts about one release, held or candidate.
///
/// Produced by the release parser (for candidates) or the library state
/// tracker (for held files); the decision engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    pub quality: ReleaseQuality,
    pub language: Language,
    #[serde(default)]
    pub formats: Vec<CustomFormat>,
}

impl ReleaseDescriptor {
    /// Creates a descriptor with no matched custom formats.
    pub fn new(quality: ReleaseQuality, language: Language) -> Self {
        Self {
            quality,
            language,
            formats: Vec::new(),
        }
    }

    /// Sets the matched custom formats.
    pub fn with_formats(mut self, formats: Vec<CustomFormat>) -> Self {
        self.formats = formats;
        self
    }
}

/// Errors that can abort a decision evaluation.
///
/// Both kinds are local to the single evaluation; the engine never retries
/// (it is deterministic, a retry would reproduce the error). The enclosing
/// orchestrator decides whether to skip the candidate, the item, or the
/// batch.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Quality error: {0}")]
    Quality(#[from] QualityError),
}
