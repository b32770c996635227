//! Quality profiles: per-user policy over quality tiers.

use serde::{Deserialize, Serialize};

use super::{ProfileError, RankTable};
use crate::formats::FormatScoring;
use crate::quality::VideoQuality;

/// One entry in a profile's ordered tier sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityItem {
    pub quality: VideoQuality,
    pub allowed: bool,
}

impl QualityItem {
    /// Creates an entry the profile will accept releases of.
    pub fn allowed(quality: VideoQuality) -> Self {
        Self {
            quality,
            allowed: true,
        }
    }

    /// Creates an entry the profile ranks but will not accept.
    pub fn not_allowed(quality: VideoQuality) -> Self {
        Self {
            quality,
            allowed: false,
        }
    }
}

/// A user's quality policy: rank order, cutoff, and format weights.
///
/// `items` is the preference sequence from least to most preferred; its
/// order is the rank function. `cutoff` is the tier the user considers good
/// enough — once held, ordinary quality-driven upgrade seeking stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfile {
    pub name: String,
    pub items: Vec<QualityItem>,
    pub cutoff: VideoQuality,
    #[serde(default = "default_upgrades_allowed")]
    pub upgrades_allowed: bool,
    #[serde(default)]
    pub formats: FormatScoring,
}

fn default_upgrades_allowed() -> bool {
    true
}

impl QualityProfile {
    /// Creates a validated profile with upgrades allowed and no format weights.
    pub fn new(
        name: impl Into<String>,
        items: Vec<QualityItem>,
        cutoff: VideoQuality,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            name: name.into(),
            items,
            cutoff,
            upgrades_allowed: true,
            formats: FormatScoring::default(),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Sets whether any upgrade path is considered for this profile.
    pub fn with_upgrades_allowed(mut self, upgrades_allowed: bool) -> Self {
        self.upgrades_allowed = upgrades_allowed;
        self
    }

    /// Attaches a format weight table.
    pub fn with_formats(mut self, formats: FormatScoring) -> Self {
        self.formats = formats;
        self
    }

    /// Checks the profile invariants: non-empty, duplicate-free, cutoff present.
    ///
    /// Deserialized profiles must be validated before use; `new` does this
    /// automatically.
    pub fn validate(&self) -> Result<(), ProfileError> {
        self.rank_table().map(|_| ())
    }

    /// Builds the rank table for this profile's tier sequence.
    pub fn rank_table(&self) -> Result<RankTable<VideoQuality>, ProfileError> {
        RankTable::new(
            self.items.iter().map(|item| item.quality).collect(),
            self.cutoff,
        )
    }

    /// Whether the profile accepts releases of this tier at all.
    ///
    /// Tiers absent from the sequence are not accepted; unlike rank lookup
    /// this is a plain membership question, not a configuration error.
    pub fn is_allowed(&self, quality: VideoQuality) -> bool {
        self.items
            .iter()
            .any(|item| item.quality == quality && item.allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_missing_cutoff() {
        let error = QualityProfile::new(
            "Broken",
            vec![QualityItem::allowed(VideoQuality::Sdtv)],
            VideoQuality::BluRay1080p,
        )
        .unwrap_err();

        assert!(matches!(error, ProfileError::CutoffNotInProfile { .. }));
    }

    #[test]
    fn test_is_allowed_honors_item_flag() {
        let profile = QualityProfile::new(
            "HD only",
            vec![
                QualityItem::not_allowed(VideoQuality::Sdtv),
                QualityItem::allowed(VideoQuality::Hdtv720p),
            ],
            VideoQuality::Hdtv720p,
        )
        .unwrap();

        assert!(!profile.is_allowed(VideoQuality::Sdtv));
        assert!(profile.is_allowed(VideoQuality::Hdtv720p));
        assert!(!profile.is_allowed(VideoQuality::Remux));
    }

    #[test]
    fn test_rank_table_follows_item_order() {
        let profile = QualityProfile::new(
            "Standard",
            vec![
                QualityItem::allowed(VideoQuality::Sdtv),
                QualityItem::allowed(VideoQuality::Hdtv720p),
                QualityItem::allowed(VideoQuality::BluRay1080p),
            ],
            VideoQuality::Hdtv720p,
        )
        .unwrap();

        let ranks = profile.rank_table().unwrap();
        assert_eq!(ranks.rank_of(VideoQuality::BluRay1080p).unwrap(), 2);
        assert_eq!(ranks.cutoff_rank(), 1);
    }
}
