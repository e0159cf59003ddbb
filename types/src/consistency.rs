//! Joint validity of the two residue fields.

use serde::Deserialize;

use crate::field::DigitField;

/// Which fields' character validity gates the consistency flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsistencyPolicy {
    /// Both residues must be digit strings of equal length.
    #[default]
    Both,
    /// Only the zero residue's characters are checked; the one residue only has to match its length.
    LeftOnly,
}

impl ConsistencyPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::LeftOnly => "left-only",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "both" => Some(Self::Both),
            "left-only" | "left_only" | "left" => Some(Self::LeftOnly),
            _ => None,
        }
    }
}

/// Derives the consistency flag shown on the one-residue field.
#[must_use]
pub fn is_consistent(policy: ConsistencyPolicy, left: &DigitField, right: &DigitField) -> bool {
    let characters_ok = match policy {
        ConsistencyPolicy::Both => left.is_valid() && right.is_valid(),
        ConsistencyPolicy::LeftOnly => left.is_valid(),
    };
    characters_ok && left.len() == right.len()
}
