//! Presence disk track.
//!
//! A spirit panel has two rows of slots covered by disks. Taking a disk off a
//! slot claims it: a numeric slot then adds its value to the row's total
//! (income for the energy row, card plays for the card-play row). Putting the
//! disk back revokes the claim.
//!
//! The template row never changes. In the live row a claimed slot is
//! `DiskCell::Empty`; an unclaimed slot holds a copy of its template value.

use serde::{Deserialize, Serialize};

use crate::core::config::{PanelCell, PanelTemplate};
use crate::core::error::{StoreError, StoreResult};

/// Row of the disk track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiskRow {
    /// Modifies income.
    Energy,
    /// Modifies card plays per turn.
    CardPlay,
}

impl DiskRow {
    /// Row from its numeric index (0 = energy, 1 = card play).
    #[must_use]
    pub fn from_index(row: usize) -> Option<Self> {
        match row {
            0 => Some(DiskRow::Energy),
            1 => Some(DiskRow::CardPlay),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            DiskRow::Energy => 0,
            DiskRow::CardPlay => 1,
        }
    }
}

/// Content of one slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiskCell {
    /// Disk taken off: the slot is claimed.
    Empty,
    /// Numeric modifier.
    Numeric(i32),
    /// Slot whose effect is printed on the board; no ledger effect.
    Placeholder(String),
}

impl DiskCell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, DiskCell::Empty)
    }

    /// Ledger effect of this slot once claimed. Zero and placeholders have none.
    #[must_use]
    pub fn effect(&self) -> Option<i32> {
        match self {
            DiskCell::Numeric(v) if *v != 0 => Some(*v),
            _ => None,
        }
    }
}

impl From<&PanelCell> for DiskCell {
    fn from(cell: &PanelCell) -> Self {
        match cell {
            PanelCell::Value(v) => DiskCell::Numeric(*v),
            PanelCell::Label(label) => DiskCell::Placeholder(label.clone()),
        }
    }
}

/// Outcome of clicking a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiskToggle {
    pub row: DiskRow,
    pub position: usize,
    /// True if the click claimed the slot, false if it revoked the claim.
    pub claimed: bool,
    /// Numeric value of the slot, if it has a ledger effect.
    pub effect: Option<i32>,
}

impl DiskToggle {
    /// Signed change to the row total caused by this click.
    #[must_use]
    pub fn delta(&self) -> i32 {
        match (self.effect, self.claimed) {
            (Some(v), true) => v,
            (Some(v), false) => -v,
            (None, _) => 0,
        }
    }
}

/// Both rows of a spirit's disk track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskTrack {
    current: [Vec<DiskCell>; 2],
    original: [Vec<DiskCell>; 2],
    /// Printed base value of each row, before any slot is claimed.
    base: [i32; 2],
}

impl DiskTrack {
    /// Fresh track with every slot covered.
    #[must_use]
    pub fn from_template(template: &PanelTemplate) -> Self {
        let energy: Vec<DiskCell> = template.energy.iter().map(DiskCell::from).collect();
        let card_play: Vec<DiskCell> = template.card_play.iter().map(DiskCell::from).collect();
        Self {
            current: [energy.clone(), card_play.clone()],
            original: [energy, card_play],
            base: [template.base_energy, template.base_card_play],
        }
    }

    /// Base value of a row (base energy or base card plays).
    #[must_use]
    pub fn base(&self, row: DiskRow) -> i32 {
        self.base[row.index()]
    }

    /// Live row.
    #[must_use]
    pub fn row(&self, row: DiskRow) -> &[DiskCell] {
        &self.current[row.index()]
    }

    /// Template row.
    #[must_use]
    pub fn original_row(&self, row: DiskRow) -> &[DiskCell] {
        &self.original[row.index()]
    }

    #[must_use]
    pub fn is_claimed(&self, row: DiskRow, position: usize) -> bool {
        self.current[row.index()]
            .get(position)
            .is_some_and(DiskCell::is_empty)
    }

    /// Claim an unclaimed slot, or revoke a claimed one.
    pub fn click(&mut self, row: DiskRow, position: usize) -> StoreResult<DiskToggle> {
        let out_of_range = StoreError::DiskCellOutOfRange {
            row: row.index(),
            position,
        };
        let (Some(original), Some(cell)) = (
            self.original[row.index()].get(position),
            self.current[row.index()].get_mut(position),
        ) else {
            return Err(out_of_range);
        };

        let claimed = !cell.is_empty();
        *cell = if claimed {
            DiskCell::Empty
        } else {
            original.clone()
        };

        Ok(DiskToggle {
            row,
            position,
            claimed,
            effect: original.effect(),
        })
    }

    /// Sum of the effects of every claimed slot in a row.
    #[must_use]
    pub fn claimed_total(&self, row: DiskRow) -> i32 {
        self.current[row.index()]
            .iter()
            .zip(&self.original[row.index()])
            .filter(|(cell, _)| cell.is_empty())
            .filter_map(|(_, original)| original.effect())
            .sum()
    }

    /// Check that both live rows match their template row slot for slot:
    /// same length, and every slot either claimed or holding its printed
    /// value.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.current.iter().zip(&self.original).all(|(current, original)| {
            current.len() == original.len()
                && current
                    .iter()
                    .zip(original)
                    .all(|(cell, printed)| cell.is_empty() || cell == printed)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> DiskTrack {
        DiskTrack::from_template(
            &PanelTemplate::new(1, 1)
                .with_energy_row([2.into(), "Sun".into(), 0.into(), 4.into()])
                .with_card_play_row([1.into(), "reclaim".into()]),
        )
    }

    #[test]
    fn test_from_template_all_covered() {
        let track = track();

        assert_eq!(track.row(DiskRow::Energy), track.original_row(DiskRow::Energy));
        assert_eq!(track.row(DiskRow::Energy)[1], DiskCell::Placeholder("Sun".to_string()));
        assert!(!track.is_claimed(DiskRow::Energy, 0));
        assert_eq!(track.claimed_total(DiskRow::Energy), 0);
    }

    #[test]
    fn test_click_claims_then_revokes() {
        let mut track = track();

        let first = track.click(DiskRow::Energy, 3).unwrap();
        assert!(first.claimed);
        assert_eq!(first.delta(), 4);
        assert!(track.is_claimed(DiskRow::Energy, 3));
        assert_eq!(track.row(DiskRow::Energy)[3], DiskCell::Empty);

        let second = track.click(DiskRow::Energy, 3).unwrap();
        assert!(!second.claimed);
        assert_eq!(second.delta(), -4);
        assert_eq!(track.row(DiskRow::Energy)[3], DiskCell::Numeric(4));
    }

    #[test]
    fn test_placeholder_and_zero_have_no_effect() {
        let mut track = track();

        assert_eq!(track.click(DiskRow::Energy, 1).unwrap().delta(), 0);
        assert_eq!(track.click(DiskRow::Energy, 2).unwrap().delta(), 0);
        assert!(track.is_claimed(DiskRow::Energy, 1));
        assert_eq!(track.claimed_total(DiskRow::Energy), 0);
    }

    #[test]
    fn test_claimed_total_per_row() {
        let mut track = track();
        track.click(DiskRow::Energy, 0).unwrap();
        track.click(DiskRow::Energy, 3).unwrap();
        track.click(DiskRow::CardPlay, 0).unwrap();

        assert_eq!(track.claimed_total(DiskRow::Energy), 6);
        assert_eq!(track.claimed_total(DiskRow::CardPlay), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut track = track();
        let before = track.clone();

        let err = track.click(DiskRow::CardPlay, 2).unwrap_err();
        assert!(matches!(
            err,
            StoreError::DiskCellOutOfRange { row: 1, position: 2 }
        ));
        assert_eq!(track, before);
    }

    #[test]
    fn test_base_values() {
        let track = track();
        assert_eq!(track.base(DiskRow::Energy), 1);
        assert_eq!(track.base(DiskRow::CardPlay), 1);
    }

    #[test]
    fn test_short_live_row_is_out_of_range() {
        let mut track = track();
        track.current[0].pop();

        assert!(!track.is_well_formed());
        assert!(matches!(
            track.click(DiskRow::Energy, 3),
            Err(StoreError::DiskCellOutOfRange { row: 0, position: 3 })
        ));
    }

    #[test]
    fn test_well_formed() {
        let mut track = track();
        assert!(track.is_well_formed());

        track.click(DiskRow::Energy, 0).unwrap();
        assert!(track.is_well_formed());

        track.current[1][1] = DiskCell::Numeric(7);
        assert!(!track.is_well_formed());
    }

    #[test]
    fn test_row_index() {
        assert_eq!(DiskRow::from_index(0), Some(DiskRow::Energy));
        assert_eq!(DiskRow::from_index(1), Some(DiskRow::CardPlay));
        assert_eq!(DiskRow::from_index(2), None);
        assert_eq!(DiskRow::CardPlay.index(), 1);
    }
}
