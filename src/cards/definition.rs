//! Card definitions - static card data.
//!
//! `PowerCard` holds the immutable properties of a power card: its energy
//! cost, speed, and the elements it grants while in play. Where the card
//! currently sits is tracked separately by the player's `ZoneSet`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::element::{Element, ElementCounts};

/// Resolution speed of a power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speed {
    Fast,
    Slow,
}

/// Static power card definition.
///
/// ## Example
///
/// ```
/// use spirit_tracker::cards::{Element, PowerCard, Speed};
///
/// let boon = PowerCard::new("Boon of Vigor", 0, Speed::Fast)
///     .with_elements([Element::Sun, Element::Water, Element::Plant]);
///
/// assert_eq!(boon.element_counts()[Element::Water], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerCard {
    /// Card name (for display).
    pub name: String,

    /// Energy paid when the card is played.
    pub cost: u32,

    pub speed: Speed,

    /// Elements granted while the card is in play.
    /// Cards carry at most four elements, so this stays inline.
    #[serde(default)]
    pub elements: SmallVec<[Element; 4]>,

    #[serde(default)]
    pub description: String,
}

impl PowerCard {
    /// Create a card with no elements and an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u32, speed: Speed) -> Self {
        Self {
            name: name.into(),
            cost,
            speed,
            elements: SmallVec::new(),
            description: String::new(),
        }
    }

    /// Set the elements (builder pattern).
    #[must_use]
    pub fn with_elements(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.elements = elements.into_iter().collect();
        self
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Elements of this card as counters.
    #[must_use]
    pub fn element_counts(&self) -> ElementCounts {
        self.elements.iter().copied().collect()
    }

    #[must_use]
    pub fn is_fast(&self) -> bool {
        self.speed == Speed::Fast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let card = PowerCard::new("Raging Storm", 3, Speed::Slow)
            .with_elements([Element::Fire, Element::Air, Element::Water])
            .with_description("1 Damage to each Invader.");

        assert_eq!(card.cost, 3);
        assert!(!card.is_fast());
        assert_eq!(card.elements.len(), 3);
        assert_eq!(card.element_counts().total(), 3);
    }

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "name": "Lightning's Boon",
            "cost": 1,
            "speed": "Fast",
            "elements": ["Fire", "Air"],
            "description": "Target Spirit may use up to 2 Slow Powers as if they were Fast"
        }"#;

        let card: PowerCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Lightning's Boon");
        assert!(card.is_fast());
        assert_eq!(card.elements.as_slice(), &[Element::Fire, Element::Air]);
    }
}
