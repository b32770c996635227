//! Audio language enumeration.
//!
//! Like quality tiers, languages have fixed global identity while their rank
//! order is owned by each language profile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Audio language of a media release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Unknown,
    English,
    French,
    Spanish,
    German,
    Italian,
    Dutch,
    Portuguese,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Polish,
    Russian,
    Japanese,
    Korean,
    Arabic,
}

impl Language {
    /// Every known language, in no particular preference order.
    pub const ALL: [Language; 17] = [
        Language::Unknown,
        Language::English,
        Language::French,
        Language::Spanish,
        Language::German,
        Language::Italian,
        Language::Dutch,
        Language::Portuguese,
        Language::Swedish,
        Language::Norwegian,
        Language::Danish,
        Language::Finnish,
        Language::Polish,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
        Language::Arabic,
    ];

    /// Returns the English display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Unknown => "Unknown",
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Dutch => "Dutch",
            Language::Portuguese => "Portuguese",
            Language::Swedish => "Swedish",
            Language::Norwegian => "Norwegian",
            Language::Danish => "Danish",
            Language::Finnish => "Finnish",
            Language::Polish => "Polish",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Arabic => "Arabic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(Language::English.to_string(), "English");
        assert_eq!(Language::Arabic.to_string(), "Arabic");
    }

    #[test]
    fn test_all_table_has_no_duplicates() {
        for (i, a) in Language::ALL.iter().enumerate() {
            for b in &Language::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
