//! Quality tiers and per-release quality observations.
//!
//! The tier ladder is a global enumeration; how a particular user ranks the
//! tiers is decided by their quality profile, never by the enum order here.

pub mod revision;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use revision::Revision;

/// Discrete quality tier of a media release.
///
/// Identifies a resolution/source class. The declaration order is only the
/// default ladder used by presets; profiles define their own rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoQuality {
    Unknown,
    Sdtv,
    Dvd,
    WebRip,
    Hdtv720p,
    WebDl720p,
    BluRay720p,
    Hdtv1080p,
    WebDl1080p,
    BluRay1080p,
    BluRay4K,
    Remux,
}

impl VideoQuality {
    /// Every known quality tier, in default ladder order (worst to best).
    pub const ALL: [VideoQuality; 12] = [
        VideoQuality::Unknown,
        VideoQuality::Sdtv,
        VideoQuality::Dvd,
        VideoQuality::WebRip,
        VideoQuality::Hdtv720p,
        VideoQuality::WebDl720p,
        VideoQuality::BluRay720p,
        VideoQuality::Hdtv1080p,
        VideoQuality::WebDl1080p,
        VideoQuality::BluRay1080p,
        VideoQuality::BluRay4K,
        VideoQuality::Remux,
    ];

    /// Returns the display name used in profiles and release titles.
    pub fn as_str(self) -> &'static str {
        match self {
            VideoQuality::Unknown => "Unknown",
            VideoQuality::Sdtv => "SDTV",
            VideoQuality::Dvd => "DVD",
            VideoQuality::WebRip => "WEBRip",
            VideoQuality::Hdtv720p => "HDTV-720p",
            VideoQuality::WebDl720p => "WEBDL-720p",
            VideoQuality::BluRay720p => "Bluray-720p",
            VideoQuality::Hdtv1080p => "HDTV-1080p",
            VideoQuality::WebDl1080p => "WEBDL-1080p",
            VideoQuality::BluRay1080p => "Bluray-1080p",
            VideoQuality::BluRay4K => "Bluray-4K",
            VideoQuality::Remux => "Remux",
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete quality observation for one media file or candidate release.
///
/// Pairs a tier with the revision markers parsed from the release. Attached
/// both to held library files and to candidates under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseQuality {
    pub quality: VideoQuality,
    #[serde(default)]
    pub revision: Revision,
}

impl ReleaseQuality {
    /// Creates a release quality with the default first revision.
    pub fn new(quality: VideoQuality) -> Self {
        Self {
            quality,
            revision: Revision::default(),
        }
    }

    /// Sets the revision markers.
    pub fn with_revision(mut self, revision: Revision) -> Self {
        self.revision = revision;
        self
    }

    /// Orders this release's revision against another of the same tier.
    ///
    /// Revision markers are only comparable within one tier; invoking this
    /// across tiers is an orchestration bug and fails fast rather than
    /// producing a meaningless ordering.
    pub fn compare_same_tier(&self, other: &ReleaseQuality) -> Result<std::cmp::Ordering, QualityError> {
        if self.quality != other.quality {
            return Err(QualityError::CrossTierComparison {
                left: self.quality,
                right: other.quality,
            });
        }

        Ok(self.revision.compare(&other.revision))
    }
}

impl fmt::Display for ReleaseQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quality, self.revision)
    }
}

/// Errors from quality comparisons.
#[derive(Debug, thiserror::Error)]
pub enum QualityError {
    #[error("Cannot compare revisions across quality tiers: {left} vs {right}")]
    CrossTierComparison {
        left: VideoQuality,
        right: VideoQuality,
    },
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn test_display_names_match_profile_spelling() {
        assert_eq!(VideoQuality::Sdtv.to_string(), "SDTV");
        assert_eq!(VideoQuality::Hdtv720p.to_string(), "HDTV-720p");
        assert_eq!(VideoQuality::WebDl1080p.to_string(), "WEBDL-1080p");
        assert_eq!(VideoQuality::BluRay1080p.to_string(), "Bluray-1080p");
    }

    #[test]
    fn test_all_table_has_no_duplicates() {
        for (i, a) in VideoQuality::ALL.iter().enumerate() {
            for b in &VideoQuality::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_same_tier_comparison_orders_by_revision() {
        let v1 = ReleaseQuality::new(VideoQuality::Hdtv720p);
        let v2 = ReleaseQuality::new(VideoQuality::Hdtv720p).with_revision(Revision::new(2));

        assert_eq!(v2.compare_same_tier(&v1).unwrap(), Ordering::Greater);
        assert_eq!(v1.compare_same_tier(&v2).unwrap(), Ordering::Less);
        assert_eq!(v1.compare_same_tier(&v1).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_cross_tier_comparison_is_rejected() {
        let held = ReleaseQuality::new(VideoQuality::Hdtv720p);
        let candidate = ReleaseQuality::new(VideoQuality::BluRay1080p);

        let error = held.compare_same_tier(&candidate).unwrap_err();
        assert!(matches!(
            error,
            QualityError::CrossTierComparison {
                left: VideoQuality::Hdtv720p,
                right: VideoQuality::BluRay1080p,
            }
        ));
    }
}
