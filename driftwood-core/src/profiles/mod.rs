//! User policy profiles: ordered preference sequences with a cutoff.
//!
//! A profile owns the rank order for one axis (quality tiers or languages).
//! Rank is derived from the item sequence a user configured, never from the
//! intrinsic declaration order of the underlying enum.

pub mod language_profile;
pub mod presets;
pub mod quality_profile;
pub mod rank;

pub use language_profile::{LanguageItem, LanguageProfile};
pub use quality_profile::{QualityItem, QualityProfile};
pub use rank::RankTable;

/// Configuration-integrity violations in a profile.
///
/// Any of these means the profile cannot be used for decisions: an unknown
/// rank must abort the evaluation, never silently default to lowest or
/// highest.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile has no items")]
    EmptyProfile,

    #[error("Profile lists {value} more than once")]
    DuplicateEntry { value: String },

    #[error("Profile cutoff {cutoff} does not appear in its item sequence")]
    CutoffNotInProfile { cutoff: String },

    #[error("Value {value} does not appear in the profile's item sequence")]
    NotInProfile { value: String },
}
