//! Profile persistence shape and configuration-integrity behavior.
//!
//! The settings subsystem stores profiles as JSON; deserialized profiles
//! must validate before the engine will produce verdicts from them.

use driftwood_core::{
    Language, LanguageItem, LanguageProfile, ProfileError, QualityProfile, ReleaseDescriptor,
    ReleaseQuality, UpgradeEngine, VideoQuality, logging,
    profiles::presets,
};

#[test]
fn test_quality_profile_round_trips_through_json() {
    logging::init_for_tests();
    let profile = presets::high_definition_1080p();

    let json = serde_json::to_string(&profile).unwrap();
    let restored: QualityProfile = serde_json::from_str(&json).unwrap();
    restored.validate().unwrap();

    assert_eq!(restored.name, profile.name);
    assert_eq!(restored.cutoff, profile.cutoff);
    assert_eq!(restored.items, profile.items);
}

#[test]
fn test_stored_profile_defaults_apply() {
    logging::init_for_tests();

    // Older stored profiles omit upgrade and format settings entirely.
    let json = r#"{
        "name": "HD",
        "items": [
            {"quality": "Hdtv720p", "allowed": true},
            {"quality": "BluRay1080p", "allowed": true}
        ],
        "cutoff": "Hdtv720p"
    }"#;

    let profile: QualityProfile = serde_json::from_str(json).unwrap();
    profile.validate().unwrap();

    assert!(profile.upgrades_allowed);
    assert_eq!(profile.formats.score(&[]), 0);
    assert!(profile.formats.cutoff_met(0));
}

#[test]
fn test_deserialized_profile_with_foreign_cutoff_fails_validation() {
    logging::init_for_tests();

    let json = r#"{
        "name": "Broken",
        "items": [{"quality": "Hdtv720p", "allowed": true}],
        "cutoff": "Remux"
    }"#;

    let profile: QualityProfile = serde_json::from_str(json).unwrap();
    let error = profile.validate().unwrap_err();

    assert!(matches!(error, ProfileError::CutoffNotInProfile { .. }));
}

#[test]
fn test_malformed_profile_blocks_every_decision_for_the_item() {
    logging::init_for_tests();
    let engine = UpgradeEngine::new();

    // The held language is missing from the profile sequence. Neither
    // "already satisfied" nor "needs upgrade" may be reported; the item
    // must surface the configuration problem instead.
    let narrow = LanguageProfile::new(
        "English only",
        vec![LanguageItem::allowed(Language::English)],
        Language::English,
    )
    .unwrap();
    let held = ReleaseDescriptor::new(
        ReleaseQuality::new(VideoQuality::BluRay1080p),
        Language::Japanese,
    );

    let result = engine.meets_policy(&presets::standard_definition(), &narrow, &held);
    assert!(result.is_err());

    let result = engine.is_worth_acquiring(
        &presets::standard_definition(),
        &narrow,
        &held,
        &ReleaseQuality::new(VideoQuality::BluRay1080p),
    );
    assert!(result.is_err());
}
