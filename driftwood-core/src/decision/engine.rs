//! The upgrade decision engine.
//!
//! Evaluates one library item against policy as a short chain of axis
//! stages in fixed priority order: quality, language, custom-format score,
//! then the same-tier revision ratchet. Each stage either signals room to
//! improve or defers to the next, which keeps the priority order auditable
//! and each stage independently testable.

use std::cmp::Ordering;

use super::{DecisionError, ReleaseDescriptor};
use crate::profiles::{LanguageProfile, QualityProfile};
use crate::quality::ReleaseQuality;

/// Which axis still has room to improve below its cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpgradeSignal {
    QualityBelowCutoff,
    LanguageBelowCutoff,
    FormatScoreBelowCutoff,
}

/// Stateless evaluator for upgrade decisions.
///
/// Holds no state and performs no I/O; safe to share and call from any
/// number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpgradeEngine;

impl UpgradeEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Whether the held state already satisfies every cutoff in the policy.
    ///
    /// `false` means some axis is still below its cutoff and search should
    /// continue for this item.
    ///
    /// # Errors
    ///
    /// `DecisionError::Profile` when a profile is malformed or a held value
    /// does not appear in its profile's sequence. The evaluation fails
    /// closed: no verdict is produced from an unknown rank.
    pub fn meets_policy(
        &self,
        quality_profile: &QualityProfile,
        language_profile: &LanguageProfile,
        held: &ReleaseDescriptor,
    ) -> Result<bool, DecisionError> {
        let pending = self.pending_upgrade(quality_profile, language_profile, held)?;
        if let Some(signal) = pending {
            tracing::debug!(
                profile = %quality_profile.name,
                held = %held.quality,
                ?signal,
                "held state below cutoff"
            );
        }
        Ok(pending.is_none())
    }

    /// Whether acquiring `candidate` is warranted for an item holding `held`.
    ///
    /// While any axis is below its cutoff the answer is `true` regardless
    /// of what the candidate offers; the comparer picks the best candidate
    /// afterwards. Once every cutoff is met the cutoff acts as a hard
    /// ceiling: a candidate of a different tier never reopens the decision,
    /// and a candidate of the identical tier only does so when its revision
    /// strictly supersedes the held one.
    ///
    /// # Errors
    ///
    /// `DecisionError::Profile` on configuration-integrity violations, as
    /// for [`meets_policy`](Self::meets_policy).
    pub fn is_worth_acquiring(
        &self,
        quality_profile: &QualityProfile,
        language_profile: &LanguageProfile,
        held: &ReleaseDescriptor,
        candidate: &ReleaseQuality,
    ) -> Result<bool, DecisionError> {
        if let Some(signal) = self.pending_upgrade(quality_profile, language_profile, held)? {
            tracing::debug!(
                profile = %quality_profile.name,
                candidate = %candidate,
                ?signal,
                "cutoff not met, candidate in scope"
            );
            return Ok(true);
        }

        // Every cutoff is satisfied: the ceiling is closed except for the
        // same-tier revision ratchet.
        if candidate.quality == held.quality.quality
            && quality_profile.upgrades_allowed
            && candidate.compare_same_tier(&held.quality)? == Ordering::Greater
        {
            tracing::debug!(
                held = %held.quality,
                candidate = %candidate,
                "revision ratchet reopens decision"
            );
            return Ok(true);
        }

        Ok(false)
    }

    /// Runs the axis stages in priority order.
    ///
    /// Rank lookups are performed on every axis even when that axis has
    /// upgrades disabled, so configuration errors surface regardless of
    /// policy flags.
    fn pending_upgrade(
        &self,
        quality_profile: &QualityProfile,
        language_profile: &LanguageProfile,
        held: &ReleaseDescriptor,
    ) -> Result<Option<UpgradeSignal>, DecisionError> {
        let quality_ranks = quality_profile.rank_table()?;
        let quality_met = quality_ranks.cutoff_met_by(held.quality.quality)?;
        if quality_profile.upgrades_allowed && !quality_met {
            return Ok(Some(UpgradeSignal::QualityBelowCutoff));
        }

        let language_ranks = language_profile.rank_table()?;
        let language_met = language_ranks.cutoff_met_by(held.language)?;
        if language_profile.upgrades_allowed && !language_met {
            return Ok(Some(UpgradeSignal::LanguageBelowCutoff));
        }

        let score = quality_profile.formats.score(&held.formats);
        if quality_profile.upgrades_allowed && !quality_profile.formats.cutoff_met(score) {
            return Ok(Some(UpgradeSignal::FormatScoreBelowCutoff));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{CustomFormat, CustomFormatId, FormatScoring};
    use crate::language::Language;
    use crate::profiles::{LanguageItem, ProfileError, QualityItem, presets};
    use crate::quality::{Revision, VideoQuality};

    fn quality_profile(cutoff: VideoQuality) -> QualityProfile {
        QualityProfile::new("test", presets::default_quality_items(), cutoff).unwrap()
    }

    fn language_profile(cutoff: Language) -> LanguageProfile {
        LanguageProfile::new(
            "test",
            vec![
                LanguageItem::allowed(Language::English),
                LanguageItem::allowed(Language::French),
                LanguageItem::allowed(Language::Spanish),
                LanguageItem::allowed(Language::Arabic),
            ],
            cutoff,
        )
        .unwrap()
    }

    fn held(quality: VideoQuality, language: Language) -> ReleaseDescriptor {
        ReleaseDescriptor::new(ReleaseQuality::new(quality), language)
    }

    #[test]
    fn test_policy_not_met_when_quality_below_cutoff() {
        let engine = UpgradeEngine::new();

        let met = engine
            .meets_policy(
                &quality_profile(VideoQuality::BluRay1080p),
                &language_profile(Language::English),
                &held(VideoQuality::Dvd, Language::English),
            )
            .unwrap();

        assert!(!met);
    }

    #[test]
    fn test_policy_met_when_quality_equals_cutoff() {
        let engine = UpgradeEngine::new();

        let met = engine
            .meets_policy(
                &quality_profile(VideoQuality::Hdtv720p),
                &language_profile(Language::English),
                &held(VideoQuality::Hdtv720p, Language::English),
            )
            .unwrap();

        assert!(met);
    }

    #[test]
    fn test_policy_met_when_quality_above_cutoff() {
        let engine = UpgradeEngine::new();

        let met = engine
            .meets_policy(
                &quality_profile(VideoQuality::Hdtv720p),
                &language_profile(Language::English),
                &held(VideoQuality::BluRay1080p, Language::English),
            )
            .unwrap();

        assert!(met);
    }

    #[test]
    fn test_quality_axis_dominates_any_candidate() {
        let engine = UpgradeEngine::new();

        // Quality below cutoff keeps the item in scope even for a candidate
        // that is worse than what is held.
        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::BluRay1080p),
                &language_profile(Language::English),
                &held(VideoQuality::Hdtv720p, Language::English),
                &ReleaseQuality::new(VideoQuality::Sdtv),
            )
            .unwrap();

        assert!(worth);
    }

    #[test]
    fn test_language_axis_reopens_decision_when_quality_capped() {
        let engine = UpgradeEngine::new();

        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::Hdtv720p),
                &language_profile(Language::Spanish),
                &held(VideoQuality::Hdtv720p, Language::English),
                &ReleaseQuality::new(VideoQuality::BluRay1080p),
            )
            .unwrap();

        assert!(worth);
    }

    #[test]
    fn test_ceiling_blocks_higher_tier_once_cutoffs_met() {
        let engine = UpgradeEngine::new();

        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::Hdtv720p),
                &language_profile(Language::Spanish),
                &held(VideoQuality::Hdtv720p, Language::Spanish),
                &ReleaseQuality::new(VideoQuality::BluRay1080p),
            )
            .unwrap();

        assert!(!worth);
    }

    #[test]
    fn test_ceiling_holds_when_language_above_cutoff() {
        let engine = UpgradeEngine::new();

        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::Hdtv720p),
                &language_profile(Language::Spanish),
                &held(VideoQuality::Hdtv720p, Language::Arabic),
                &ReleaseQuality::new(VideoQuality::BluRay1080p),
            )
            .unwrap();

        assert!(!worth);
    }

    #[test]
    fn test_revision_ratchet_allows_same_tier_fixup() {
        let engine = UpgradeEngine::new();

        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::Hdtv720p),
                &language_profile(Language::English),
                &held(VideoQuality::Hdtv720p, Language::English),
                &ReleaseQuality::new(VideoQuality::Hdtv720p).with_revision(Revision::new(2)),
            )
            .unwrap();

        assert!(worth);
    }

    #[test]
    fn test_revision_ratchet_applies_above_cutoff_too() {
        let engine = UpgradeEngine::new();

        // Held WEBDL-1080p v1 against a HDTV-1080p cutoff: quality is capped,
        // but a v2 of the exact held tier is still a fix-up acquisition.
        let current = held(VideoQuality::WebDl1080p, Language::English);
        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::Hdtv1080p),
                &language_profile(Language::English),
                &current,
                &ReleaseQuality::new(VideoQuality::WebDl1080p).with_revision(Revision::new(2)),
            )
            .unwrap();

        assert!(worth);
    }

    #[test]
    fn test_equal_or_inferior_revision_does_not_ratchet() {
        let engine = UpgradeEngine::new();
        let profile = quality_profile(VideoQuality::Hdtv720p);
        let languages = language_profile(Language::English);
        let current = ReleaseDescriptor::new(
            ReleaseQuality::new(VideoQuality::Hdtv720p).with_revision(Revision::new(2)),
            Language::English,
        );

        let equal = engine
            .is_worth_acquiring(
                &profile,
                &languages,
                &current,
                &ReleaseQuality::new(VideoQuality::Hdtv720p).with_revision(Revision::new(2)),
            )
            .unwrap();
        let inferior = engine
            .is_worth_acquiring(
                &profile,
                &languages,
                &current,
                &ReleaseQuality::new(VideoQuality::Hdtv720p).with_revision(Revision::new(1)),
            )
            .unwrap();

        assert!(!equal);
        assert!(!inferior);
    }

    #[test]
    fn test_proper_supersedes_plain_after_cutoff() {
        let engine = UpgradeEngine::new();

        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::Hdtv720p),
                &language_profile(Language::English),
                &held(VideoQuality::Hdtv720p, Language::English),
                &ReleaseQuality::new(VideoQuality::Hdtv720p)
                    .with_revision(Revision::new(1).with_proper()),
            )
            .unwrap();

        assert!(worth);
    }

    #[test]
    fn test_language_upgrades_disabled_silences_language_axis() {
        let engine = UpgradeEngine::new();

        // Language is below cutoff, but the language profile forbids
        // upgrades, so neither the axis nor any candidate reopens scope.
        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::WebDl1080p),
                &language_profile(Language::Arabic).with_upgrades_allowed(false),
                &held(VideoQuality::WebDl1080p, Language::English),
                &ReleaseQuality::new(VideoQuality::BluRay1080p),
            )
            .unwrap();

        assert!(!worth);
    }

    #[test]
    fn test_quality_upgrades_disabled_silences_quality_axis() {
        let engine = UpgradeEngine::new();

        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::BluRay1080p).with_upgrades_allowed(false),
                &language_profile(Language::English),
                &held(VideoQuality::Hdtv720p, Language::English),
                &ReleaseQuality::new(VideoQuality::BluRay1080p),
            )
            .unwrap();

        assert!(!worth);
    }

    #[test]
    fn test_quality_upgrades_disabled_also_disables_ratchet() {
        let engine = UpgradeEngine::new();

        let worth = engine
            .is_worth_acquiring(
                &quality_profile(VideoQuality::Hdtv720p).with_upgrades_allowed(false),
                &language_profile(Language::English),
                &held(VideoQuality::Hdtv720p, Language::English),
                &ReleaseQuality::new(VideoQuality::Hdtv720p).with_revision(Revision::new(2)),
            )
            .unwrap();

        assert!(!worth);
    }

    #[test]
    fn test_unmet_format_cutoff_keeps_item_in_scope() {
        let engine = UpgradeEngine::new();
        let profile = quality_profile(VideoQuality::Hdtv720p).with_formats(
            FormatScoring::new()
                .with_weight(CustomFormatId::new(1), 25)
                .with_cutoff_score(25),
        );
        let languages = language_profile(Language::English);

        let plain = held(VideoQuality::Hdtv720p, Language::English);
        assert!(!engine.meets_policy(&profile, &languages, &plain).unwrap());
        assert!(
            engine
                .is_worth_acquiring(
                    &profile,
                    &languages,
                    &plain,
                    &ReleaseQuality::new(VideoQuality::Hdtv720p),
                )
                .unwrap()
        );

        let scored = plain.with_formats(vec![CustomFormat::new(1, "Surround Audio")]);
        assert!(engine.meets_policy(&profile, &languages, &scored).unwrap());
    }

    #[test]
    fn test_held_tier_missing_from_profile_fails_closed() {
        let engine = UpgradeEngine::new();
        let narrow = QualityProfile::new(
            "narrow",
            vec![
                QualityItem::allowed(VideoQuality::Sdtv),
                QualityItem::allowed(VideoQuality::Hdtv720p),
            ],
            VideoQuality::Hdtv720p,
        )
        .unwrap();

        let error = engine
            .meets_policy(
                &narrow,
                &language_profile(Language::English),
                &held(VideoQuality::Remux, Language::English),
            )
            .unwrap_err();

        assert!(matches!(
            error,
            DecisionError::Profile(ProfileError::NotInProfile { .. })
        ));
    }

    #[test]
    fn test_configuration_errors_surface_even_with_upgrades_disabled() {
        let engine = UpgradeEngine::new();
        let narrow = QualityProfile::new(
            "narrow",
            vec![QualityItem::allowed(VideoQuality::Hdtv720p)],
            VideoQuality::Hdtv720p,
        )
        .unwrap()
        .with_upgrades_allowed(false);

        let error = engine
            .meets_policy(
                &narrow,
                &language_profile(Language::English),
                &held(VideoQuality::Remux, Language::English),
            )
            .unwrap_err();

        assert!(matches!(
            error,
            DecisionError::Profile(ProfileError::NotInProfile { .. })
        ));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let engine = UpgradeEngine::new();
        let profile = quality_profile(VideoQuality::Hdtv720p);
        let languages = language_profile(Language::Spanish);
        let current = held(VideoQuality::Hdtv720p, Language::English);
        let candidate = ReleaseQuality::new(VideoQuality::BluRay1080p);

        let first = engine
            .is_worth_acquiring(&profile, &languages, &current, &candidate)
            .unwrap();
        let second = engine
            .is_worth_acquiring(&profile, &languages, &current, &candidate)
            .unwrap();

        assert_eq!(first, second);
    }
}
