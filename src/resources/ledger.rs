//! Per-player resource ledger.
//!
//! Tracks energy, the energy gained since the last cleanup, permanent
//! element bonuses, and (for spirits with a panel) the disk track with the
//! income and card-play totals it drives.

use serde::{Deserialize, Serialize};

use super::disk::{DiskRow, DiskToggle, DiskTrack};
use crate::cards::{Element, ElementCounts};
use crate::core::config::PanelTemplate;
use crate::core::error::{StoreError, StoreResult};

/// Resource panel state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourcePanel {
    /// Spirit without a printed panel: no income, no disks.
    NoPanel,
    WithPanel {
        track: DiskTrack,
        /// Base energy plus claimed energy-row slots.
        income: i32,
        /// Base card plays plus claimed card-play-row slots.
        total_card_play: i32,
    },
}

impl ResourcePanel {
    #[must_use]
    pub fn from_template(template: Option<&PanelTemplate>) -> Self {
        match template {
            None => ResourcePanel::NoPanel,
            Some(template) => ResourcePanel::WithPanel {
                track: DiskTrack::from_template(template),
                income: template.base_energy,
                total_card_play: template.base_card_play,
            },
        }
    }

    #[must_use]
    pub fn track(&self) -> Option<&DiskTrack> {
        match self {
            ResourcePanel::NoPanel => None,
            ResourcePanel::WithPanel { track, .. } => Some(track),
        }
    }
}

/// Energy and element bookkeeping for one player.
///
/// Energy never goes negative: spending more than is available is refused,
/// and `energy_this_turn` floors at zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    energy: u32,
    energy_this_turn: u32,
    permanent_elements: ElementCounts,
    panel: ResourcePanel,
    has_take_income: bool,
}

impl Default for ResourceLedger {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ResourceLedger {
    /// Fresh ledger with zero energy.
    #[must_use]
    pub fn new(template: Option<&PanelTemplate>) -> Self {
        Self {
            energy: 0,
            energy_this_turn: 0,
            permanent_elements: ElementCounts::new(),
            panel: ResourcePanel::from_template(template),
            has_take_income: false,
        }
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    #[must_use]
    pub fn energy_this_turn(&self) -> u32 {
        self.energy_this_turn
    }

    #[must_use]
    pub fn permanent_elements(&self) -> &ElementCounts {
        &self.permanent_elements
    }

    #[must_use]
    pub fn panel(&self) -> &ResourcePanel {
        &self.panel
    }

    #[must_use]
    pub fn has_take_income(&self) -> bool {
        self.has_take_income
    }

    /// Current income; zero without a panel.
    #[must_use]
    pub fn income(&self) -> i32 {
        match self.panel {
            ResourcePanel::NoPanel => 0,
            ResourcePanel::WithPanel { income, .. } => income,
        }
    }

    /// Card plays per turn; zero without a panel.
    #[must_use]
    pub fn total_card_play(&self) -> i32 {
        match self.panel {
            ResourcePanel::NoPanel => 0,
            ResourcePanel::WithPanel { total_card_play, .. } => total_card_play,
        }
    }

    /// Gain one energy this turn.
    pub fn add_energy(&mut self) {
        self.energy += 1;
        self.energy_this_turn += 1;
        log::debug!("energy +1 -> {}", self.energy);
    }

    /// Lose one energy, if there is any.
    ///
    /// The turn gain drops with it unless it is already zero (energy carried
    /// over from earlier turns). Returns false if energy was already zero.
    pub fn reduce_energy(&mut self) -> bool {
        if self.energy == 0 {
            return false;
        }
        self.energy -= 1;
        self.energy_this_turn = self.energy_this_turn.saturating_sub(1);
        log::debug!("energy -1 -> {}", self.energy);
        true
    }

    /// Pay `cost` energy. Refuses (returns false) rather than going negative.
    pub fn spend(&mut self, cost: u32) -> bool {
        match self.energy.checked_sub(cost) {
            Some(left) => {
                self.energy = left;
                true
            }
            None => false,
        }
    }

    /// Give back energy paid for a card.
    pub fn refund(&mut self, cost: u32) {
        self.energy += cost;
    }

    pub fn increase_element(&mut self, element: Element) {
        self.permanent_elements.increment(element);
    }

    /// Returns false if the counter was already zero.
    pub fn decrease_element(&mut self, element: Element) -> bool {
        self.permanent_elements.decrement(element)
    }

    /// Claim or unclaim a disk slot and apply its effect to the row total.
    pub fn disk_click(&mut self, row: DiskRow, position: usize) -> StoreResult<DiskToggle> {
        let ResourcePanel::WithPanel {
            track,
            income,
            total_card_play,
        } = &mut self.panel
        else {
            return Err(StoreError::NoResourcePanel);
        };

        let toggle = track.click(row, position)?;
        match row {
            DiskRow::Energy => *income += toggle.delta(),
            DiskRow::CardPlay => *total_card_play += toggle.delta(),
        }
        log::debug!(
            "disk {:?}[{}] {} (delta {})",
            row,
            position,
            if toggle.claimed { "claimed" } else { "returned" },
            toggle.delta()
        );
        Ok(toggle)
    }

    /// Collect income into energy and mark it collected.
    ///
    /// Does not check `has_take_income`: calling it twice collects twice.
    /// Returns the energy gained.
    pub fn take_income(&mut self) -> u32 {
        let gained = u32::try_from(self.income()).unwrap_or(0);
        self.has_take_income = true;
        self.energy += gained;
        self.energy_this_turn += gained;
        log::debug!("took income {gained} -> energy {}", self.energy);
        gained
    }

    /// Check that the disk track is well formed and the income and card-play
    /// totals equal the base values plus the claimed slots.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match &self.panel {
            ResourcePanel::NoPanel => true,
            ResourcePanel::WithPanel {
                track,
                income,
                total_card_play,
            } => {
                track.is_well_formed()
                    && *income == track.base(DiskRow::Energy) + track.claimed_total(DiskRow::Energy)
                    && *total_card_play
                        == track.base(DiskRow::CardPlay) + track.claimed_total(DiskRow::CardPlay)
            }
        }
    }

    /// Reset the per-turn counters.
    pub fn end_turn(&mut self) {
        self.energy_this_turn = 0;
        self.has_take_income = false;
    }
}
