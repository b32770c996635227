//! Ready-made profile shapes used as defaults and test fixtures.

use super::{LanguageItem, LanguageProfile, QualityItem, QualityProfile};
use crate::language::Language;
use crate::quality::VideoQuality;

/// Full default tier ladder, worst to best, everything above Unknown allowed.
pub fn default_quality_items() -> Vec<QualityItem> {
    VideoQuality::ALL
        .iter()
        .map(|&quality| {
            if quality == VideoQuality::Unknown {
                QualityItem::not_allowed(quality)
            } else {
                QualityItem::allowed(quality)
            }
        })
        .collect()
}

/// Full default language list with English ranked highest.
pub fn default_language_items() -> Vec<LanguageItem> {
    let mut items: Vec<LanguageItem> = Language::ALL
        .iter()
        .filter(|&&language| language != Language::Unknown && language != Language::English)
        .map(|&language| LanguageItem::allowed(language))
        .collect();
    items.insert(0, LanguageItem::not_allowed(Language::Unknown));
    items.push(LanguageItem::allowed(Language::English));
    items
}

/// Profile satisfied by any standard-definition copy.
pub fn standard_definition() -> QualityProfile {
    QualityProfile::new("SD", default_quality_items(), VideoQuality::Dvd)
        .expect("default ladder is a valid profile")
}

/// Profile that keeps upgrading until a 1080p web or disc copy is held.
pub fn high_definition_1080p() -> QualityProfile {
    QualityProfile::new("HD-1080p", default_quality_items(), VideoQuality::WebDl1080p)
        .expect("default ladder is a valid profile")
}

/// Language profile satisfied by English audio.
pub fn english_only() -> LanguageProfile {
    LanguageProfile::new(
        "English",
        vec![LanguageItem::allowed(Language::English)],
        Language::English,
    )
    .expect("single-language profile is valid")
}

/// Language profile that upgrades toward English through the default list.
pub fn prefer_english() -> LanguageProfile {
    LanguageProfile::new("Prefer English", default_language_items(), Language::English)
        .expect("default language list is a valid profile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        standard_definition().validate().unwrap();
        high_definition_1080p().validate().unwrap();
        english_only().validate().unwrap();
        prefer_english().validate().unwrap();
    }

    #[test]
    fn test_default_ladder_ranks_bluray_above_sdtv() {
        let ranks = high_definition_1080p().rank_table().unwrap();
        assert!(
            ranks.rank_of(VideoQuality::BluRay1080p).unwrap()
                > ranks.rank_of(VideoQuality::Sdtv).unwrap()
        );
    }

    #[test]
    fn test_prefer_english_ranks_english_highest() {
        let profile = prefer_english();
        let ranks = profile.rank_table().unwrap();
        let english = ranks.rank_of(Language::English).unwrap();

        for item in &profile.items {
            assert!(ranks.rank_of(item.language).unwrap() <= english);
        }
        assert_eq!(ranks.cutoff_rank(), english);
    }

    #[test]
    fn test_unknown_is_ranked_but_not_allowed() {
        let profile = standard_definition();
        assert!(!profile.is_allowed(VideoQuality::Unknown));
        assert!(
            profile
                .rank_table()
                .unwrap()
                .rank_of(VideoQuality::Unknown)
                .is_ok()
        );
    }
}
