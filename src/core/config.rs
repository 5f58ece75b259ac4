//! Static game data.
//!
//! Sessions are configured at startup with a `GameData` table:
//! - `SpiritDefinition`: a spirit's starting cards and optional resource panel
//! - `PanelTemplate`: base income/card-play values and the two disk rows
//! - minor and major power lists
//!
//! Tables can be built in code with the builder methods or loaded from JSON.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::error::StoreResult;
use crate::cards::PowerCard;

/// One slot of a panel row as written in the data tables.
///
/// Numbers are income/card-play modifiers; strings label slots whose effect
/// is printed on the board instead (e.g. an element or "reclaim one").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PanelCell {
    Value(i32),
    Label(String),
}

impl From<i32> for PanelCell {
    fn from(value: i32) -> Self {
        PanelCell::Value(value)
    }
}

impl From<&str> for PanelCell {
    fn from(label: &str) -> Self {
        PanelCell::Label(label.to_string())
    }
}

/// Resource panel printed on a spirit board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PanelTemplate {
    /// Income before any disk is taken off the energy row.
    pub base_energy: i32,

    /// Energy row, left to right.
    pub energy: Vec<PanelCell>,

    /// Card plays before any disk is taken off the card-play row.
    pub base_card_play: i32,

    /// Card-play row, left to right.
    pub card_play: Vec<PanelCell>,
}

impl PanelTemplate {
    /// Create a panel with empty rows.
    #[must_use]
    pub fn new(base_energy: i32, base_card_play: i32) -> Self {
        Self {
            base_energy,
            base_card_play,
            ..Self::default()
        }
    }

    /// Set the energy row (builder pattern).
    #[must_use]
    pub fn with_energy_row(mut self, cells: impl IntoIterator<Item = PanelCell>) -> Self {
        self.energy = cells.into_iter().collect();
        self
    }

    /// Set the card-play row (builder pattern).
    #[must_use]
    pub fn with_card_play_row(mut self, cells: impl IntoIterator<Item = PanelCell>) -> Self {
        self.card_play = cells.into_iter().collect();
        self
    }
}

/// A playable spirit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritDefinition {
    pub name: String,

    /// Starting hand, in order. Card `i` gets the key `unique{spirit}-{i}`.
    pub cards: Vec<PowerCard>,

    /// Spirits without a panel start with zero income and no disks.
    #[serde(default)]
    pub panel: Option<PanelTemplate>,
}

impl SpiritDefinition {
    /// Create a spirit with no cards and no panel.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
            panel: None,
        }
    }

    /// Add a starting card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: PowerCard) -> Self {
        self.cards.push(card);
        self
    }

    /// Attach a resource panel (builder pattern).
    #[must_use]
    pub fn with_panel(mut self, panel: PanelTemplate) -> Self {
        self.panel = Some(panel);
        self
    }
}

/// Complete static data for a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default)]
    pub spirits: Vec<SpiritDefinition>,

    #[serde(default)]
    pub minor: Vec<PowerCard>,

    #[serde(default)]
    pub major: Vec<PowerCard>,
}

impl GameData {
    /// Create empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tables from a JSON document.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tables from a JSON reader (e.g. a file).
    pub fn from_reader(reader: impl Read) -> StoreResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Add a spirit (builder pattern).
    #[must_use]
    pub fn with_spirit(mut self, spirit: SpiritDefinition) -> Self {
        self.spirits.push(spirit);
        self
    }

    /// Add a minor power (builder pattern).
    #[must_use]
    pub fn with_minor(mut self, card: PowerCard) -> Self {
        self.minor.push(card);
        self
    }

    /// Add a major power (builder pattern).
    #[must_use]
    pub fn with_major(mut self, card: PowerCard) -> Self {
        self.major.push(card);
        self
    }

    /// Get a spirit by index.
    #[must_use]
    pub fn spirit(&self, index: usize) -> Option<&SpiritDefinition> {
        self.spirits.get(index)
    }
}
