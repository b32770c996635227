//! Total ordering over candidate releases under one policy pair.
//!
//! The boolean gate in the engine answers "is this candidate in scope"; the
//! comparer answers "which of the passing candidates is best". Both use the
//! same axis priority so they can never disagree about which axis dominates.

use std::cmp::Ordering;

use super::{DecisionError, ReleaseDescriptor};
use crate::language::Language;
use crate::profiles::{LanguageProfile, QualityProfile, RankTable};
use crate::quality::VideoQuality;

/// Orders releases by quality rank, language rank, format score, revision.
///
/// Rank tables are resolved once at construction, so a malformed profile is
/// rejected before any candidate is looked at.
#[derive(Debug)]
pub struct ReleaseComparer<'a> {
    quality_profile: &'a QualityProfile,
    language_profile: &'a LanguageProfile,
    quality_ranks: RankTable<VideoQuality>,
    language_ranks: RankTable<Language>,
}

impl<'a> ReleaseComparer<'a> {
    /// Creates a comparer for one profile pair.
    ///
    /// # Errors
    ///
    /// `DecisionError::Profile` when either profile fails validation.
    pub fn new(
        quality_profile: &'a QualityProfile,
        language_profile: &'a LanguageProfile,
    ) -> Result<Self, DecisionError> {
        Ok(Self {
            quality_profile,
            language_profile,
            quality_ranks: quality_profile.rank_table()?,
            language_ranks: language_profile.rank_table()?,
        })
    }

    /// Orders two releases, greater meaning more desirable.
    ///
    /// # Errors
    ///
    /// `DecisionError::Profile` when a release's tier or language does not
    /// appear in the corresponding profile sequence.
    pub fn compare(
        &self,
        left: &ReleaseDescriptor,
        right: &ReleaseDescriptor,
    ) -> Result<Ordering, DecisionError> {
        let by_quality = self
            .quality_ranks
            .rank_of(left.quality.quality)?
            .cmp(&self.quality_ranks.rank_of(right.quality.quality)?);
        if by_quality != Ordering::Equal {
            return Ok(by_quality);
        }

        let by_language = self
            .language_ranks
            .rank_of(left.language)?
            .cmp(&self.language_ranks.rank_of(right.language)?);
        if by_language != Ordering::Equal {
            return Ok(by_language);
        }

        let scoring = &self.quality_profile.formats;
        let by_score = scoring
            .score(&left.formats)
            .cmp(&scoring.score(&right.formats));
        if by_score != Ordering::Equal {
            return Ok(by_score);
        }

        // Equal quality rank implies the same tier: sequences are
        // duplicate-free, so the revision comparator precondition holds.
        Ok(left.quality.compare_same_tier(&right.quality)?)
    }

    /// Picks the most desirable candidate the profiles accept.
    ///
    /// Candidates whose tier or language is absent from, or marked
    /// not-allowed in, the profiles are skipped, as are candidates whose
    /// format score falls below the profile's acceptance floor; they never
    /// win and never abort the selection. Returns `None` when nothing
    /// remains.
    ///
    /// # Errors
    ///
    /// `DecisionError::Profile` as for [`compare`](Self::compare).
    pub fn select_best<'r>(
        &self,
        candidates: &'r [ReleaseDescriptor],
    ) -> Result<Option<&'r ReleaseDescriptor>, DecisionError> {
        let mut best: Option<&ReleaseDescriptor> = None;

        for candidate in candidates {
            if !self.quality_profile.is_allowed(candidate.quality.quality)
                || !self.language_profile.is_allowed(candidate.language)
            {
                tracing::trace!(
                    quality = %candidate.quality,
                    language = %candidate.language,
                    "candidate rejected by allowed flags"
                );
                continue;
            }

            let scoring = &self.quality_profile.formats;
            if !scoring.meets_minimum(scoring.score(&candidate.formats)) {
                tracing::trace!(
                    quality = %candidate.quality,
                    "candidate rejected below minimum format score"
                );
                continue;
            }

            let better = match best {
                None => true,
                Some(current) => self.compare(candidate, current)? == Ordering::Greater,
            };
            if better {
                best = Some(candidate);
            }
        }

        Ok(best)
    }
}
