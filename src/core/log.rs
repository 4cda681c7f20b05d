//! Structured game log.
//!
//! Every ledger, board, and track mutation appends an entry so the
//! session layer can render history and audits can replay deltas.
//! Logging is a side effect, not a correctness requirement: appending
//! never fails and sink failures outside this crate never propagate in.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::resources::Resource;
use crate::board::{SpaceId, TileType};
use crate::cards::CardName;

/// One structured log entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEntry {
    /// A stock counter changed.
    StockChange {
        player: PlayerId,
        resource: Resource,
        delta: i64,
        source: Option<CardName>,
    },

    /// A production counter changed.
    ProductionChange {
        player: PlayerId,
        resource: Resource,
        delta: i64,
        source: Option<CardName>,
    },

    /// A tile was placed on the board.
    TilePlaced {
        player: PlayerId,
        space: SpaceId,
        tile_type: TileType,
    },

    /// A global parameter track was raised (or explicitly lowered).
    ParameterChange {
        track: String,
        previous: i64,
        current: i64,
    },

    /// A card entered a player's tableau.
    CardPlayed { player: PlayerId, card: CardName },

    /// A one-shot card action was used.
    ActionActivated { player: PlayerId, card: CardName },
}
