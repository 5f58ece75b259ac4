//! Card identifiers.
//!
//! A `CardKey` is an opaque string that resolves to a `PowerCard` through a
//! `CardLookup`. Canonical keys are built from a category tag and an index:
//!
//! - `unique{spirit}-{index}`: a spirit's starting card
//! - `minor-{index}`: a shared minor power
//! - `major-{index}`: a shared major power

use serde::{Deserialize, Serialize};

use crate::core::error::{StoreError, StoreResult};

/// Category encoded in the tag part of a card key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CardCategory {
    /// Starting card of the spirit with this index.
    Unique(usize),
    /// Shared minor power deck.
    Minor,
    /// Shared major power deck.
    Major,
    /// Any other tag.
    Other(String),
}

/// Opaque card identifier.
///
/// Equality is plain string equality; the same key may sit in several players'
/// zones, but at most once within one player's zones.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardKey(String);

impl CardKey {
    /// Wrap a raw identifier without validation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Key of a spirit's starting card.
    #[must_use]
    pub fn unique(spirit: usize, index: usize) -> Self {
        Self(format!("unique{spirit}-{index}"))
    }

    /// Key of a minor power.
    #[must_use]
    pub fn minor(index: usize) -> Self {
        Self(format!("minor-{index}"))
    }

    /// Key of a major power.
    #[must_use]
    pub fn major(index: usize) -> Self {
        Self(format!("major-{index}"))
    }

    /// Parse a key, accepting only the canonical forms.
    ///
    /// ```
    /// use spirit_tracker::cards::{CardCategory, CardKey};
    ///
    /// let key = CardKey::parse("unique3-1").unwrap();
    /// assert_eq!(key.category(), CardCategory::Unique(3));
    /// assert!(CardKey::parse("minor").is_err());
    /// ```
    pub fn parse(raw: &str) -> StoreResult<Self> {
        let key = Self::new(raw);
        let valid = match (key.category(), key.index()) {
            (CardCategory::Other(_), _) | (_, None) => false,
            _ => true,
        };
        if valid {
            Ok(key)
        } else {
            Err(StoreError::InvalidCardKey(raw.to_string()))
        }
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag before the first `-`.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Category derived from the tag.
    #[must_use]
    pub fn category(&self) -> CardCategory {
        match self.tag() {
            "minor" => CardCategory::Minor,
            "major" => CardCategory::Major,
            tag => tag
                .strip_prefix("unique")
                .and_then(|spirit| spirit.parse().ok())
                .map_or_else(|| CardCategory::Other(tag.to_string()), CardCategory::Unique),
        }
    }

    /// Index after the tag, if it is numeric.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        let (_, index) = self.0.split_once('-')?;
        index.parse().ok()
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CardKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl PartialEq<str> for CardKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
