//! Cutoff policy scenarios across both axes.
//!
//! Profiles here use the ladder SDTV < HDTV-720p < HDTV-1080p < WEBDL-1080p
//! < Bluray-1080p and the language order English < French < Spanish <
//! Arabic, matching the canonical product scenarios.

use driftwood_core::{
    Language, LanguageItem, LanguageProfile, QualityItem, QualityProfile, ReleaseDescriptor,
    ReleaseQuality, Revision, UpgradeEngine, VideoQuality, logging,
};

fn quality_profile(cutoff: VideoQuality) -> QualityProfile {
    QualityProfile::new(
        "scenario",
        vec![
            QualityItem::allowed(VideoQuality::Sdtv),
            QualityItem::allowed(VideoQuality::Hdtv720p),
            QualityItem::allowed(VideoQuality::Hdtv1080p),
            QualityItem::allowed(VideoQuality::WebDl1080p),
            QualityItem::allowed(VideoQuality::BluRay1080p),
        ],
        cutoff,
    )
    .unwrap()
}

fn language_profile(cutoff: Language) -> LanguageProfile {
    LanguageProfile::new(
        "scenario",
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
fn test_quality_far_below_cutoff_leaves_room_to_improve() {
    logging::init_for_tests();
    let engine = UpgradeEngine::new();

    let met = engine
        .meets_policy(
            &quality_profile(VideoQuality::BluRay1080p),
            &language_profile(Language::English),
            &held(VideoQuality::Sdtv, Language::English),
        )
        .unwrap();

    assert!(!met);
}

#[test]
fn test_both_cutoffs_met_satisfies_policy() {
    logging::init_for_tests();
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
fn test_quality_above_cutoff_satisfies_policy() {
    logging::init_for_tests();
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
fn test_same_tier_revision_ratchet_after_cutoff() {
    logging::init_for_tests();
    let engine = UpgradeEngine::new();
    let current = ReleaseDescriptor::new(
        ReleaseQuality::new(VideoQuality::Hdtv720p).with_revision(Revision::new(1)),
        Language::English,
    );

    let worth = engine
        .is_worth_acquiring(
            &quality_profile(VideoQuality::Hdtv720p),
            &language_profile(Language::English),
            &current,
            &ReleaseQuality::new(VideoQuality::Hdtv720p).with_revision(Revision::new(2)),
        )
        .unwrap();

    assert!(worth);
}

#[test]
fn test_ceiling_blocks_different_tier_after_cutoff() {
    logging::init_for_tests();
    let engine = UpgradeEngine::new();
    let current = ReleaseDescriptor::new(
        ReleaseQuality::new(VideoQuality::Hdtv720p).with_revision(Revision::new(2)),
        Language::English,
    );

    let worth = engine
        .is_worth_acquiring(
            &quality_profile(VideoQuality::Hdtv720p),
            &language_profile(Language::English),
            &current,
            &ReleaseQuality::new(VideoQuality::BluRay1080p).with_revision(Revision::new(2)),
        )
        .unwrap();

    assert!(!worth);
}

#[test]
fn test_unmet_language_cutoff_reopens_decision_alone() {
    logging::init_for_tests();
    let engine = UpgradeEngine::new();

    // Quality is capped but English has not reached the Spanish cutoff, so
    // the item stays in scope even for a higher-tier candidate.
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
