//! Rank tables: a profile's ordered preference sequence as a total order.

use std::fmt;

use super::ProfileError;

/// Total preference order derived from a profile's item sequence.
///
/// Position in the sequence is the rank: earlier entries rank lower (less
/// preferred). The profile's declared cutoff is resolved to a rank once at
/// construction, so every later lookup is a plain index comparison.
#[derive(Debug, Clone)]
pub struct RankTable<T> {
    order: Vec<T>,
    cutoff_rank: usize,
}

impl<T: Copy + Eq + fmt::Display> RankTable<T> {
    /// Builds a rank table, validating the profile invariants.
    ///
    /// Fails when the sequence is empty, contains duplicates, or does not
    /// contain the cutoff value.
    pub fn new(order: Vec<T>, cutoff: T) -> Result<Self, ProfileError> {
        if order.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }

        for (i, value) in order.iter().enumerate() {
            if order[i + 1..].contains(value) {
                return Err(ProfileError::DuplicateEntry {
                    value: value.to_string(),
                });
            }
        }

        let cutoff_rank = order.iter().position(|v| *v == cutoff).ok_or_else(|| {
            ProfileError::CutoffNotInProfile {
                cutoff: cutoff.to_string(),
            }
        })?;

        Ok(Self { order, cutoff_rank })
    }

    /// Returns the zero-based rank of a value.
    ///
    /// A value absent from the sequence is a configuration error, never a
    /// default rank.
    pub fn rank_of(&self, value: T) -> Result<usize, ProfileError> {
        self.order
            .iter()
            .position(|v| *v == value)
            .ok_or_else(|| ProfileError::NotInProfile {
                value: value.to_string(),
            })
    }

    /// Returns the rank of the profile's cutoff value.
    pub fn cutoff_rank(&self) -> usize {
        self.cutoff_rank
    }

    /// Whether a value ranks at or above the cutoff.
    pub fn cutoff_met_by(&self, value: T) -> Result<bool, ProfileError> {
        Ok(self.rank_of(value)? >= self.cutoff_rank)
    }

    /// Number of entries in the order.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the order is empty. Construction forbids this.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::VideoQuality;

    fn ladder() -> Vec<VideoQuality> {
        vec![
            VideoQuality::Sdtv,
            VideoQuality::Hdtv720p,
            VideoQuality::BluRay1080p,
        ]
    }

    #[test]
    fn test_rank_follows_sequence_order() {
        let table = RankTable::new(ladder(), VideoQuality::Hdtv720p).unwrap();

        assert_eq!(table.rank_of(VideoQuality::Sdtv).unwrap(), 0);
        assert_eq!(table.rank_of(VideoQuality::Hdtv720p).unwrap(), 1);
        assert_eq!(table.rank_of(VideoQuality::BluRay1080p).unwrap(), 2);
        assert_eq!(table.cutoff_rank(), 1);
    }

    #[test]
    fn test_cutoff_met_at_or_above_cutoff_rank() {
        let table = RankTable::new(ladder(), VideoQuality::Hdtv720p).unwrap();

        assert!(!table.cutoff_met_by(VideoQuality::Sdtv).unwrap());
        assert!(table.cutoff_met_by(VideoQuality::Hdtv720p).unwrap());
        assert!(table.cutoff_met_by(VideoQuality::BluRay1080p).unwrap());
    }

    #[test]
    fn test_unknown_value_is_an_error_not_a_default() {
        let table = RankTable::new(ladder(), VideoQuality::Sdtv).unwrap();

        let error = table.rank_of(VideoQuality::Remux).unwrap_err();
        assert!(matches!(error, ProfileError::NotInProfile { .. }));

        let error = table.cutoff_met_by(VideoQuality::Remux).unwrap_err();
        assert!(matches!(error, ProfileError::NotInProfile { .. }));
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let error = RankTable::new(Vec::<VideoQuality>::new(), VideoQuality::Sdtv).unwrap_err();
        assert!(matches!(error, ProfileError::EmptyProfile));
    }

    #[test]
    fn test_duplicate_entries_are_rejected() {
        let error = RankTable::new(
            vec![VideoQuality::Sdtv, VideoQuality::Sdtv],
            VideoQuality::Sdtv,
        )
        .unwrap_err();
        assert!(matches!(error, ProfileError::DuplicateEntry { .. }));
    }

    #[test]
    fn test_cutoff_must_appear_in_sequence() {
        let error = RankTable::new(ladder(), VideoQuality::Remux).unwrap_err();
        assert!(matches!(error, ProfileError::CutoffNotInProfile { .. }));
    }
}
