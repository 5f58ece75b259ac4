//! Error types.
//!
//! Zone moves on identifiers that are not where the caller expected are not
//! errors: they degrade to no-ops and report `false`. `StoreError` covers the
//! rest: the energy guard on playing a card, caller bugs (unknown players,
//! cards, disk cells), and snapshot/data decoding failures.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardKey;

/// Errors raised by the card store and its collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} has not joined the session")]
    UnknownPlayer(PlayerId),

    #[error("every seat is taken ({0} players)")]
    TooManyPlayers(usize),

    #[error("no spirit with index {0}")]
    UnknownSpirit(usize),

    #[error("card {0} is not in the card lookup")]
    UnknownCard(CardKey),

    #[error("invalid card key {0:?}")]
    InvalidCardKey(String),

    #[error("not enough energy to play {card}: costs {cost}, have {available}")]
    InsufficientEnergy {
        card: CardKey,
        cost: u32,
        available: u32,
    },

    #[error("spirit has no resource panel")]
    NoResourcePanel,

    #[error("no disk cell at row {row}, position {position}")]
    DiskCellOutOfRange { row: usize, position: usize },

    #[error("snapshot of {0} has a card in two zones or a used card out of play")]
    CorruptSnapshot(PlayerId),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Binary(#[from] bincode::Error),
}

/// Result alias used across the crate.
pub type StoreResult<T> = Result<T, StoreError>;
