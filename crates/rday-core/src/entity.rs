//! Entity attributes, fixed at generation time.

use std::fmt;

// ── Sex ───────────────────────────────────────────────────────────────────────

/// Sex attribute of one entity.  Drives routing (female stations) and the
/// grooming-station service override.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    #[inline]
    pub fn is_female(self) -> bool {
        self == Sex::Female
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EntityAttrs ───────────────────────────────────────────────────────────────

/// Immutable attribute pair assigned when an entity is created.
///
/// `usmaps` marks membership in the prep-school sub-population, which scales
/// service times (per-station fraction) and may take alternate routing under
/// [`PathMode::Modified`](crate::PathMode::Modified).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityAttrs {
    pub sex: Sex,
    pub usmaps: bool,
}

impl EntityAttrs {
    pub fn new(sex: Sex, usmaps: bool) -> Self {
        Self { sex, usmaps }
    }
}
