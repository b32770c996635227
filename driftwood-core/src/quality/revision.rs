//! Revision markers for a release: version counter plus proper/repack flags.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Version and fix-up markers of a concrete release.
///
/// `version` starts at 1 and counts re-releases of the same tier. `proper`
/// and `repack` mark fix-up releases that supersede a plain release of the
/// same version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Revision {
    pub version: u32,
    pub proper: bool,
    pub repack: bool,
}

impl Revision {
    /// Creates a plain revision with the given version.
    pub fn new(version: u32) -> Self {
        Self {
            version,
            proper: false,
            repack: false,
        }
    }

    /// Marks this revision as a proper release.
    pub fn with_proper(mut self) -> Self {
        self.proper = true;
        self
    }

    /// Marks this revision as a repack.
    pub fn with_repack(mut self) -> Self {
        self.repack = true;
        self
    }

    /// Whether this revision carries a proper or repack marker.
    pub fn is_fixup(self) -> bool {
        self.proper || self.repack
    }

    /// Orders two revisions of the same quality tier.
    ///
    /// Higher version wins outright; at equal version a fix-up (proper or
    /// repack) beats a plain release. A proper and a repack of the same
    /// version are order-equal even though they are not the same value,
    /// which is why this is a method and not an `Ord` impl.
    pub fn compare(&self, other: &Revision) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| self.is_fixup().cmp(&other.is_fixup()))
    }

    /// Whether this revision strictly supersedes `other`.
    pub fn dominates(&self, other: &Revision) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version)?;
        if self.proper {
            write!(f, " proper")?;
        }
        if self.repack {
            write!(f, " repack")?;
        }
        Ok(())
    }
}
