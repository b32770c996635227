//! Language profiles: per-user policy over audio languages.

use serde::{Deserialize, Serialize};

use super::{ProfileError, RankTable};
use crate::language::Language;

/// One entry in a profile's ordered language sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageItem {
    pub language: Language,
    pub allowed: bool,
}

impl LanguageItem {
    /// Creates an entry the profile will accept releases in.
    pub fn allowed(language: Language) -> Self {
        Self {
            language,
            allowed: true,
        }
    }

    /// Creates an entry the profile ranks but will not accept.
    pub fn not_allowed(language: Language) -> Self {
        Self {
            language,
            allowed: false,
        }
    }
}

/// A user's language policy, same shape as the quality axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub name: String,
    pub items: Vec<LanguageItem>,
    pub cutoff: Language,
    #[serde(default = "default_upgrades_allowed")]
    pub upgrades_allowed: bool,
}

fn default_upgrades_allowed() -> bool {
    true
}

impl LanguageProfile {
    /// Creates a validated profile with upgrades allowed.
    pub fn new(
        name: impl Into<String>,
        items: Vec<LanguageItem>,
        cutoff: Language,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            name: name.into(),
            items,
            cutoff,
            upgrades_allowed: true,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Sets whether any upgrade path is considered for this profile.
    pub fn with_upgrades_allowed(mut self, upgrades_allowed: bool) -> Self {
        self.upgrades_allowed = upgrades_allowed;
        self
    }

    /// Checks the profile invariants: non-empty, duplicate-free, cutoff present.
    pub fn validate(&self) -> Result<(), ProfileError> {
        self.rank_table().map(|_| ())
    }

    /// Builds the rank table for this profile's language sequence.
    pub fn rank_table(&self) -> Result<RankTable<Language>, ProfileError> {
        RankTable::new(
            self.items.iter().map(|item| item.language).collect(),
            self.cutoff,
        )
    }

    /// Whether the profile accepts releases in this language at all.
    pub fn is_allowed(&self, language: Language) -> bool {
        self.items
            .iter()
            .any(|item| item.language == language && item.allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order_is_user_defined_not_intrinsic() {
        // A user may rank French above Arabic even though the global table
        // declares them in another order.
        let profile = LanguageProfile::new(
            "French first",
            vec![
                LanguageItem::allowed(Language::Arabic),
                LanguageItem::allowed(Language::French),
            ],
            Language::French,
        )
        .unwrap();

        let ranks = profile.rank_table().unwrap();
        assert!(
            ranks.rank_of(Language::French).unwrap() > ranks.rank_of(Language::Arabic).unwrap()
        );
    }

    #[test]
    fn test_duplicate_language_is_rejected() {
        let error = LanguageProfile::new(
            "Broken",
            vec![
                LanguageItem::allowed(Language::English),
                LanguageItem::allowed(Language::English),
            ],
            Language::English,
        )
        .unwrap_err();

        assert!(matches!(error, ProfileError::DuplicateEntry { .. }));
    }
}
