//! Driftwood Core - release upgrade decisions for a personal media library
//!
//! This crate is the decision heart of the Driftwood library manager: given
//! a user's quality and language profiles and the facts about a held file
//! and a candidate release, it decides whether the candidate is worth
//! acquiring and which of several candidates is best. Everything is a pure
//! function over borrowed inputs; persistence, searching, and downloading
//! live in the surrounding services.

pub mod decision;
pub mod formats;
pub mod language;
pub mod logging;
pub mod profiles;
pub mod quality;

// Re-export main types for convenient access
pub use decision::{DecisionError, ReleaseComparer, ReleaseDescriptor, UpgradeEngine};
pub use formats::{CustomFormat, CustomFormatId, FormatScoring, FormatWeight};
pub use language::Language;
pub use profiles::{
    LanguageItem, LanguageProfile, ProfileError, QualityItem, QualityProfile, RankTable,
};
pub use quality::{QualityError, ReleaseQuality, Revision, VideoQuality};

/// Core errors that can bubble up from any Driftwood subsystem.
#[derive(Debug, thiserror::Error)]
pub enum DriftwoodError {
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Quality error: {0}")]
    Quality(#[from] QualityError),

    #[error("Decision error: {0}")]
    Decision(#[from] DecisionError),
}

impl DriftwoodError {
    /// Whether this error is fixable by correcting user configuration.
    ///
    /// Profile errors point at a malformed profile the user can repair;
    /// cross-tier comparisons indicate a bug in the calling orchestration.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DriftwoodError::Profile(_)
                | DriftwoodError::Decision(DecisionError::Profile(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, DriftwoodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_errors_are_user_errors() {
        let error = DriftwoodError::Profile(ProfileError::EmptyProfile);
        assert!(error.is_user_error());

        let error = DriftwoodError::Decision(DecisionError::Quality(
            QualityError::CrossTierComparison {
                left: VideoQuality::Sdtv,
                right: VideoQuality::Remux,
            },
        ));
        assert!(!error.is_user_error());
    }
}
