//! Elemental tags and per-element counters.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Elemental tag carried by power cards.
///
/// `Any` is the wildcard; it is counted like the other tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Sun,
    Moon,
    Fire,
    Air,
    Water,
    Earth,
    Plant,
    Animal,
    Any,
}

impl Element {
    /// Every tag, in display order.
    pub const ALL: [Element; 9] = [
        Element::Sun,
        Element::Moon,
        Element::Fire,
        Element::Air,
        Element::Water,
        Element::Earth,
        Element::Plant,
        Element::Animal,
        Element::Any,
    ];
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// One non-negative counter per element.
///
/// Serialized as a map with one named field per element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementCounts {
    #[serde(default)]
    pub any: u32,
    #[serde(default)]
    pub sun: u32,
    #[serde(default)]
    pub moon: u32,
    #[serde(default)]
    pub fire: u32,
    #[serde(default)]
    pub air: u32,
    #[serde(default)]
    pub water: u32,
    #[serde(default)]
    pub earth: u32,
    #[serde(default)]
    pub plant: u32,
    #[serde(default)]
    pub animal: u32,
}

impl ElementCounts {
    /// All counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, element: Element) -> &mut u32 {
        match element {
            Element::Any => &mut self.any,
            Element::Sun => &mut self.sun,
            Element::Moon => &mut self.moon,
            Element::Fire => &mut self.fire,
            Element::Air => &mut self.air,
            Element::Water => &mut self.water,
            Element::Earth => &mut self.earth,
            Element::Plant => &mut self.plant,
            Element::Animal => &mut self.animal,
        }
    }

    /// Add one to an element.
    pub fn increment(&mut self, element: Element) {
        *self.slot_mut(element) += 1;
    }

    /// Remove one from an element, stopping at zero.
    ///
    /// Returns false if the counter was already zero.
    pub fn decrement(&mut self, element: Element) -> bool {
        let slot = self.slot_mut(element);
        if *slot > 0 {
            *slot -= 1;
            true
        } else {
            false
        }
    }

    /// Add every counter of `other` into `self`.
    pub fn add(&mut self, other: &ElementCounts) {
        for element in Element::ALL {
            *self.slot_mut(element) += other[element];
        }
    }

    /// Check that every counter reaches the matching threshold.
    #[must_use]
    pub fn meets(&self, threshold: &ElementCounts) -> bool {
        Element::ALL.iter().all(|&e| self[e] >= threshold[e])
    }

    /// Sum over all elements.
    #[must_use]
    pub fn total(&self) -> u32 {
        Element::ALL.iter().map(|&e| self[e]).sum()
    }

    /// Iterate over (element, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::ALL.into_iter().map(move |e| (e, self[e]))
    }
}

impl Index<Element> for ElementCounts {
    type Output = u32;

    fn index(&self, element: Element) -> &u32 {
        match element {
            Element::Any => &self.any,
            Element::Sun => &self.sun,
            Element::Moon => &self.moon,
            Element::Fire => &self.fire,
            Element::Air => &self.air,
            Element::Water => &self.water,
            Element::Earth => &self.earth,
            Element::Plant => &self.plant,
            Element::Animal => &self.animal,
        }
    }
}

impl FromIterator<Element> for ElementCounts {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut counts = Self::new();
        for element in iter {
            counts.increment(element);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_decrement() {
        let mut counts = ElementCounts::new();
        counts.increment(Element::Fire);
        counts.increment(Element::Fire);

        assert_eq!(counts[Element::Fire], 2);
        assert!(counts.decrement(Element::Fire));
        assert_eq!(counts[Element::Fire], 1);
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut counts = ElementCounts::new();

        assert!(!counts.decrement(Element::Moon));
        assert_eq!(counts[Element::Moon], 0);
    }

    #[test]
    fn test_add_and_meets() {
        let mut counts: ElementCounts = [Element::Sun, Element::Water].into_iter().collect();
        let permanent: ElementCounts = [Element::Sun].into_iter().collect();
        counts.add(&permanent);

        let threshold: ElementCounts = [Element::Sun, Element::Sun].into_iter().collect();
        assert!(counts.meets(&threshold));
        assert!(!counts.meets(&[Element::Plant].into_iter().collect()));
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_serialized_field_names() {
        let counts: ElementCounts = [Element::Any].into_iter().collect();
        let json = serde_json::to_value(counts).unwrap();

        assert_eq!(json["Any"], 1);
        assert_eq!(json["Animal"], 0);

        let partial: ElementCounts = serde_json::from_str(r#"{"Earth": 2}"#).unwrap();
        assert_eq!(partial[Element::Earth], 2);
    }
}
