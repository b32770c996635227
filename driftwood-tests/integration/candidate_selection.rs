//! End-to-end candidate evaluation: boolean gate plus best-of selection.
//!
//! Mirrors the acquisition orchestrator's flow: every discovered candidate
//! passes through `is_worth_acquiring`, then the comparer picks the single
//! best of those that passed.

use driftwood_core::{
    CustomFormat, CustomFormatId, FormatScoring, Language, ReleaseComparer, ReleaseDescriptor,
    ReleaseQuality, Revision, UpgradeEngine, VideoQuality, logging,
    profiles::presets,
};

fn candidates() -> Vec<ReleaseDescriptor> {
    vec![
        ReleaseDescriptor::new(ReleaseQuality::new(VideoQuality::Sdtv), Language::English),
        ReleaseDescriptor::new(ReleaseQuality::new(VideoQuality::Hdtv720p), Language::English),
        ReleaseDescriptor::new(
            ReleaseQuality::new(VideoQuality::WebDl1080p),
            Language::English,
        ),
        ReleaseDescriptor::new(
            ReleaseQuality::new(VideoQuality::Unknown),
            Language::English,
        ),
    ]
}

#[test]
fn test_search_flow_picks_highest_ranked_passing_candidate() {
    logging::init_for_tests();
    let engine = UpgradeEngine::new();
    let quality = presets::high_definition_1080p();
    let language = presets::english_only();
    let held = ReleaseDescriptor::new(ReleaseQuality::new(VideoQuality::Sdtv), Language::English);

    let pool = candidates();
    let mut passing = Vec::new();
    for candidate in &pool {
        if engine
            .is_worth_acquiring(&quality, &language, &held, &candidate.quality)
            .unwrap()
        {
            passing.push(candidate.clone());
        }
    }

    // Quality is below cutoff, so every candidate passes the boolean gate;
    // selection is what narrows the grab to one release.
    assert_eq!(passing.len(), pool.len());

    let comparer = ReleaseComparer::new(&quality, &language).unwrap();
    let best = comparer.select_best(&passing).unwrap().unwrap();
    assert_eq!(best.quality.quality, VideoQuality::WebDl1080p);
}

#[test]
fn test_after_cutoff_only_ratchet_candidates_pass_the_gate() {
    logging::init_for_tests();
    let engine = UpgradeEngine::new();
    let quality = presets::high_definition_1080p();
    let language = presets::english_only();
    let held = ReleaseDescriptor::new(
        ReleaseQuality::new(VideoQuality::WebDl1080p),
        Language::English,
    );

    let proper = ReleaseQuality::new(VideoQuality::WebDl1080p)
        .with_revision(Revision::new(1).with_proper());
    let higher_tier = ReleaseQuality::new(VideoQuality::BluRay1080p);

    assert!(
        engine
            .is_worth_acquiring(&quality, &language, &held, &proper)
            .unwrap()
    );
    assert!(
        !engine
            .is_worth_acquiring(&quality, &language, &held, &higher_tier)
            .unwrap()
    );
}

#[test]
fn test_format_weights_break_ties_between_equal_tiers() {
    logging::init_for_tests();
    let quality = presets::high_definition_1080p().with_formats(
        FormatScoring::new()
            .with_weight(CustomFormatId::new(1), 25)
            .with_weight(CustomFormatId::new(2), -50),
    );
    let language = presets::english_only();
    let comparer = ReleaseComparer::new(&quality, &language).unwrap();

    let surround = ReleaseDescriptor::new(
        ReleaseQuality::new(VideoQuality::WebDl1080p),
        Language::English,
    )
    .with_formats(vec![CustomFormat::new(1, "Surround Audio")]);
    let upscaled = ReleaseDescriptor::new(
        ReleaseQuality::new(VideoQuality::WebDl1080p),
        Language::English,
    )
    .with_formats(vec![CustomFormat::new(2, "Upscaled")]);
    let plain = ReleaseDescriptor::new(
        ReleaseQuality::new(VideoQuality::WebDl1080p),
        Language::English,
    );

    let pool = vec![upscaled, plain, surround];
    let best = comparer.select_best(&pool).unwrap().unwrap();
    assert_eq!(
        best.formats.first().map(|f| f.name.as_str()),
        Some("Surround Audio")
    );
}
