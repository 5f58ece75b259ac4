//! Ordered card sequence helpers.
//!
//! Every zone is a `Vec<CardKey>` whose order is the player's manual
//! arrangement. These helpers are the only way zones are edited.

use serde::{Deserialize, Serialize};

use crate::cards::CardKey;

/// Where to drop a card relative to another card of the destination zone.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionHint {
    /// Card the moved card is placed next to.
    pub relative_id: CardKey,
    /// Place before `relative_id` instead of after it.
    pub insert_before: bool,
}

impl PositionHint {
    #[must_use]
    pub fn before(relative_id: impl Into<CardKey>) -> Self {
        Self {
            relative_id: relative_id.into(),
            insert_before: true,
        }
    }

    #[must_use]
    pub fn after(relative_id: impl Into<CardKey>) -> Self {
        Self {
            relative_id: relative_id.into(),
            insert_before: false,
        }
    }
}

/// Remove the first occurrence of `card`.
///
/// Returns false (and leaves the sequence untouched) if it is absent.
pub fn remove_card(seq: &mut Vec<CardKey>, card: &CardKey) -> bool {
    match seq.iter().position(|c| c == card) {
        Some(pos) => {
            seq.remove(pos);
            true
        }
        None => false,
    }
}

/// Insert `card` directly before `reference`, or append if it is absent.
pub fn insert_before(seq: &mut Vec<CardKey>, card: CardKey, reference: &CardKey) {
    match seq.iter().position(|c| c == reference) {
        Some(pos) => seq.insert(pos, card),
        None => seq.push(card),
    }
}

/// Insert `card` directly after `reference`, or append if it is absent.
pub fn insert_after(seq: &mut Vec<CardKey>, card: CardKey, reference: &CardKey) {
    match seq.iter().position(|c| c == reference) {
        Some(pos) => seq.insert(pos + 1, card),
        None => seq.push(card),
    }
}

/// Move a card already in `seq` next to the hint's reference card.
///
/// Returns false if `card` is not in the sequence. A missing reference (or
/// one equal to `card`) leaves the card at the end.
///
/// ```
/// use spirit_tracker::cards::CardKey;
/// use spirit_tracker::zones::{change_position, PositionHint};
///
/// let mut hand: Vec<CardKey> = ["a", "b", "c"].into_iter().map(CardKey::from).collect();
/// change_position(&mut hand, &CardKey::from("c"), &PositionHint::before("a"));
/// assert_eq!(hand, ["c", "a", "b"]);
/// ```
pub fn change_position(seq: &mut Vec<CardKey>, card: &CardKey, hint: &PositionHint) -> bool {
    if !remove_card(seq, card) {
        return false;
    }
    if hint.insert_before {
        insert_before(seq, card.clone(), &hint.relative_id);
    } else {
        insert_after(seq, card.clone(), &hint.relative_id);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> Vec<CardKey> {
        raw.iter().copied().map(CardKey::from).collect()
    }

    #[test]
    fn test_remove_card() {
        let mut seq = keys(&["a", "b", "a"]);

        assert!(remove_card(&mut seq, &"a".into()));
        assert_eq!(seq, keys(&["b", "a"]));

        assert!(!remove_card(&mut seq, &"z".into()));
        assert_eq!(seq, keys(&["b", "a"]));
    }

    #[test]
    fn test_insert_before_and_after() {
        let mut seq = keys(&["a", "b"]);

        insert_before(&mut seq, "x".into(), &"b".into());
        assert_eq!(seq, keys(&["a", "x", "b"]));

        insert_after(&mut seq, "y".into(), &"b".into());
        assert_eq!(seq, keys(&["a", "x", "b", "y"]));

        insert_after(&mut seq, "z".into(), &"a".into());
        assert_eq!(seq, keys(&["a", "z", "x", "b", "y"]));
    }

    #[test]
    fn test_missing_reference_appends() {
        let mut seq = keys(&["a"]);

        insert_before(&mut seq, "x".into(), &"missing".into());
        insert_after(&mut seq, "y".into(), &"missing".into());
        assert_eq!(seq, keys(&["a", "x", "y"]));
    }

    #[test]
    fn test_change_position() {
        let mut seq = keys(&["a", "b", "c", "d"]);

        assert!(change_position(&mut seq, &"a".into(), &PositionHint::after("c")));
        assert_eq!(seq, keys(&["b", "c", "a", "d"]));

        assert!(change_position(&mut seq, &"d".into(), &PositionHint::before("b")));
        assert_eq!(seq, keys(&["d", "b", "c", "a"]));
    }

    #[test]
    fn test_change_position_self_reference_appends() {
        let mut seq = keys(&["a", "b"]);

        assert!(change_position(&mut seq, &"a".into(), &PositionHint::before("a")));
        assert_eq!(seq, keys(&["b", "a"]));
    }

    #[test]
    fn test_change_position_missing_card() {
        let mut seq = keys(&["a", "b"]);

        assert!(!change_position(&mut seq, &"z".into(), &PositionHint::before("a")));
        assert_eq!(seq, keys(&["a", "b"]));
    }
}
