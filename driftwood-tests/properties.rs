//! Property tests for the decision engine and comparer.
//!
//! Profiles are generated as random shuffled subsequences of the global
//! tier and language tables, so every invariant is checked against
//! user-defined rank orders rather than the intrinsic enum order.

use std::cmp::Ordering;

use driftwood_core::{
    Language, LanguageItem, LanguageProfile, QualityItem, QualityProfile, ReleaseComparer,
    ReleaseDescriptor, ReleaseQuality, Revision, UpgradeEngine, VideoQuality,
};
use proptest::prelude::*;
use proptest::sample::{Index, subsequence};

/// Random rank order over a subset of tiers, plus a cutoff position.
fn quality_axis() -> impl Strategy<Value = (Vec<VideoQuality>, usize)> {
    subsequence(VideoQuality::ALL.to_vec(), 2..=VideoQuality::ALL.len())
        .prop_shuffle()
        .prop_flat_map(|ladder| {
            let len = ladder.len();
            (Just(ladder), 0..len)
        })
}

/// Random rank order over a subset of languages, plus a cutoff position.
fn language_axis() -> impl Strategy<Value = (Vec<Language>, usize)> {
    subsequence(Language::ALL.to_vec(), 2..=Language::ALL.len())
        .prop_shuffle()
        .prop_flat_map(|order| {
            let len = order.len();
            (Just(order), 0..len)
        })
}

fn quality_profile(ladder: &[VideoQuality], cutoff: usize) -> QualityProfile {
    QualityProfile::new(
        "prop",
        ladder.iter().map(|&q| QualityItem::allowed(q)).collect(),
        ladder[cutoff],
    )
    .unwrap()
}

fn language_profile(order: &[Language], cutoff: usize) -> LanguageProfile {
    LanguageProfile::new(
        "prop",
        order.iter().map(|&l| LanguageItem::allowed(l)).collect(),
        order[cutoff],
    )
    .unwrap()
}

proptest! {
    /// A held quality below the cutoff dominates every other input: the
    /// policy is unmet and any candidate whatsoever is in scope.
    #[test]
    fn quality_below_cutoff_dominates(
        (ladder, cutoff) in quality_axis(),
        (order, lang_cutoff) in language_axis(),
        held_sel in any::<Index>(),
        lang_sel in any::<Index>(),
        cand_sel in any::<Index>(),
    ) {
        prop_assume!(cutoff > 0);
        let engine = UpgradeEngine::new();
        let qp = quality_profile(&ladder, cutoff);
        let lp = language_profile(&order, lang_cutoff);

        let held = ReleaseDescriptor::new(
            ReleaseQuality::new(ladder[held_sel.index(cutoff)]),
            order[lang_sel.index(order.len())],
        );
        let candidate = ReleaseQuality::new(ladder[cand_sel.index(ladder.len())]);

        prop_assert!(!engine.meets_policy(&qp, &lp, &held).unwrap());
        prop_assert!(engine.is_worth_acquiring(&qp, &lp, &held, &candidate).unwrap());
    }

    /// With no format weights, policy is met exactly when both axes sit at
    /// or above their cutoff ranks.
    #[test]
    fn policy_met_iff_both_axes_at_cutoff(
        (ladder, cutoff) in quality_axis(),
        (order, lang_cutoff) in language_axis(),
        held_sel in any::<Index>(),
        lang_sel in any::<Index>(),
    ) {
        let engine = UpgradeEngine::new();
        let qp = quality_profile(&ladder, cutoff);
        let lp = language_profile(&order, lang_cutoff);

        let held_idx = held_sel.index(ladder.len());
        let lang_idx = lang_sel.index(order.len());
        let held = ReleaseDescriptor::new(
            ReleaseQuality::new(ladder[held_idx]),
            order[lang_idx],
        );

        let expected = held_idx >= cutoff && lang_idx >= lang_cutoff;
        prop_assert_eq!(engine.meets_policy(&qp, &lp, &held).unwrap(), expected);
    }

    /// Once every cutoff is met, a candidate of any other tier never
    /// reopens the decision.
    #[test]
    fn ceiling_blocks_different_tier_once_met(
        (ladder, cutoff) in quality_axis(),
        (order, lang_cutoff) in language_axis(),
        held_sel in any::<Index>(),
        lang_sel in any::<Index>(),
        cand_sel in any::<Index>(),
    ) {
        let engine = UpgradeEngine::new();
        let qp = quality_profile(&ladder, cutoff);
        let lp = language_profile(&order, lang_cutoff);

        let held_tier = ladder[cutoff + held_sel.index(ladder.len() - cutoff)];
        let held_language = order[lang_cutoff + lang_sel.index(order.len() - lang_cutoff)];
        let candidate_tier = ladder[cand_sel.index(ladder.len())];
        prop_assume!(candidate_tier != held_tier);

        let held = ReleaseDescriptor::new(ReleaseQuality::new(held_tier), held_language);
        let candidate = ReleaseQuality::new(candidate_tier);

        prop_assert!(!engine.is_worth_acquiring(&qp, &lp, &held, &candidate).unwrap());
    }

    /// Once every cutoff is met, a same-tier candidate ratchets exactly
    /// when its revision strictly dominates the held one.
    #[test]
    fn same_tier_ratchet_after_cutoff(
        (ladder, cutoff) in quality_axis(),
        (order, lang_cutoff) in language_axis(),
        held_sel in any::<Index>(),
        lang_sel in any::<Index>(),
    ) {
        let engine = UpgradeEngine::new();
        let qp = quality_profile(&ladder, cutoff);
        let lp = language_profile(&order, lang_cutoff);

        let tier = ladder[cutoff + held_sel.index(ladder.len() - cutoff)];
        let held_language = order[lang_cutoff + lang_sel.index(order.len() - lang_cutoff)];
        let held = ReleaseDescriptor::new(
            ReleaseQuality::new(tier).with_revision(Revision::new(1)),
            held_language,
        );

        let newer = ReleaseQuality::new(tier).with_revision(Revision::new(2));
        let same = ReleaseQuality::new(tier).with_revision(Revision::new(1));

        prop_assert!(engine.is_worth_acquiring(&qp, &lp, &held, &newer).unwrap());
        prop_assert!(!engine.is_worth_acquiring(&qp, &lp, &held, &same).unwrap());
    }

    /// Evaluations are pure: the same input always yields the same verdict.
    #[test]
    fn verdicts_are_deterministic(
        (ladder, cutoff) in quality_axis(),
        (order, lang_cutoff) in language_axis(),
        held_sel in any::<Index>(),
        lang_sel in any::<Index>(),
        cand_sel in any::<Index>(),
    ) {
        let engine = UpgradeEngine::new();
        let qp = quality_profile(&ladder, cutoff);
        let lp = language_profile(&order, lang_cutoff);

        let held = ReleaseDescriptor::new(
            ReleaseQuality::new(ladder[held_sel.index(ladder.len())]),
            order[lang_sel.index(order.len())],
        );
        let candidate = ReleaseQuality::new(ladder[cand_sel.index(ladder.len())]);

        let first = engine.is_worth_acquiring(&qp, &lp, &held, &candidate).unwrap();
        let second = engine.is_worth_acquiring(&qp, &lp, &held, &candidate).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The comparer is antisymmetric under its total order.
    #[test]
    fn comparer_is_antisymmetric(
        (ladder, cutoff) in quality_axis(),
        (order, lang_cutoff) in language_axis(),
        left_sel in (any::<Index>(), any::<Index>(), 1..=3u32, any::<bool>()),
        right_sel in (any::<Index>(), any::<Index>(), 1..=3u32, any::<bool>()),
    ) {
        let qp = quality_profile(&ladder, cutoff);
        let lp = language_profile(&order, lang_cutoff);
        let comparer = ReleaseComparer::new(&qp, &lp).unwrap();

        let build = |sel: &(Index, Index, u32, bool)| {
            let (tier, lang, version, proper) = sel;
            let mut revision = Revision::new(*version);
            if *proper {
                revision = revision.with_proper();
            }
            ReleaseDescriptor::new(
                ReleaseQuality::new(ladder[tier.index(ladder.len())]).with_revision(revision),
                order[lang.index(order.len())],
            )
        };
        let left = build(&left_sel);
        let right = build(&right_sel);

        let forward = comparer.compare(&left, &right).unwrap();
        let backward = comparer.compare(&right, &left).unwrap();
        prop_assert_eq!(forward, backward.reverse());
    }

    /// Whatever `select_best` returns compares at least equal to every
    /// acceptable candidate in the pool.
    #[test]
    fn select_best_returns_a_maximum(
        (ladder, cutoff) in quality_axis(),
        (order, lang_cutoff) in language_axis(),
        pool_sel in proptest::collection::vec(
            (any::<Index>(), any::<Index>(), 1..=3u32),
            1..6,
        ),
    ) {
        let qp = quality_profile(&ladder, cutoff);
        let lp = language_profile(&order, lang_cutoff);
        let comparer = ReleaseComparer::new(&qp, &lp).unwrap();

        let pool: Vec<ReleaseDescriptor> = pool_sel
            .iter()
            .map(|(tier, lang, version)| {
                ReleaseDescriptor::new(
                    ReleaseQuality::new(ladder[tier.index(ladder.len())])
                        .with_revision(Revision::new(*version)),
                    order[lang.index(order.len())],
                )
            })
            .collect();

        let best = comparer.select_best(&pool).unwrap().unwrap();
        for candidate in &pool {
            prop_assert_ne!(comparer.compare(best, candidate).unwrap(), Ordering::Less);
        }
    }

    /// A held tier missing from the profile aborts the evaluation instead
    /// of defaulting to any verdict.
    #[test]
    fn unknown_held_tier_fails_closed(
        ladder in subsequence(VideoQuality::ALL.to_vec(), 2..=6usize).prop_shuffle(),
        (order, lang_cutoff) in language_axis(),
        cutoff_sel in any::<Index>(),
        lang_sel in any::<Index>(),
    ) {
        let missing = VideoQuality::ALL
            .iter()
            .copied()
            .find(|tier| !ladder.contains(tier));
        prop_assume!(missing.is_some());

        let engine = UpgradeEngine::new();
        let qp = quality_profile(&ladder, cutoff_sel.index(ladder.len()));
        let lp = language_profile(&order, lang_cutoff);
        let held = ReleaseDescriptor::new(
            ReleaseQuality::new(missing.unwrap()),
            order[lang_sel.index(order.len())],
        );

        prop_assert!(engine.meets_policy(&qp, &lp, &held).is_err());
    }
}
