//! Play requirements.
//!
//! A closed tagged union of requirement kinds, each carrying its own
//! parameters, evaluated against a player+game snapshot without
//! mutation. Composites (`All`, `Any`) are themselves requirements, so
//! callers compose recursively with no special-casing.
//!
//! Global-parameter variants always read the current track value at
//! evaluation time, never a cached one: the track can change between a
//! card entering a hand and being played.

use serde::{Deserialize, Serialize};

use crate::board::TileType;
use crate::core::{Game, GameError, PlayerId, Resource, Tag};

/// A requirement gating whether a card may be played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    /// A global parameter track is at least `level`.
    GlobalParameterAtLeast { track: String, level: i64 },

    /// A global parameter track is at most `level`.
    GlobalParameterAtMost { track: String, level: i64 },

    /// At least `count` tiles of `tile_type` are on the board,
    /// regardless of owner.
    TileCountAtLeast { tile_type: TileType, count: usize },

    /// The player has at least `count` instances of `tag`.
    TagCountAtLeast { tag: Tag, count: u32 },

    /// The player's production rate of `resource` is at least `amount`.
    ProductionAtLeast { resource: Resource, amount: i64 },

    /// All children hold (AND). An empty list always holds.
    All(Vec<Requirement>),

    /// At least one child holds (explicit alternative group).
    Any(Vec<Requirement>),
}

impl Requirement {
    /// The always-satisfied requirement.
    #[must_use]
    pub fn none() -> Self {
        Requirement::All(Vec::new())
    }

    /// Shorthand for an ocean-tile count requirement.
    #[must_use]
    pub fn oceans(count: usize) -> Self {
        Requirement::TileCountAtLeast {
            tile_type: TileType::Ocean,
            count,
        }
    }

    /// Shorthand for a tag count requirement.
    #[must_use]
    pub fn tags(tag: Tag, count: u32) -> Self {
        Requirement::TagCountAtLeast { tag, count }
    }

    /// Shorthand for a track minimum requirement.
    #[must_use]
    pub fn parameter(track: impl Into<String>, level: i64) -> Self {
        Requirement::GlobalParameterAtLeast {
            track: track.into(),
            level,
        }
    }

    /// Evaluate against the current game state. Pure: no mutation.
    pub fn satisfied(&self, game: &Game, player: PlayerId) -> Result<bool, GameError> {
        match self {
            Requirement::GlobalParameterAtLeast { track, level } => {
                Ok(game.params.value_of(track)? >= *level)
            }
            Requirement::GlobalParameterAtMost { track, level } => {
                Ok(game.params.value_of(track)? <= *level)
            }
            Requirement::TileCountAtLeast { tile_type, count } => {
                Ok(game.board.tile_count(*tile_type) >= *count)
            }
            Requirement::TagCountAtLeast { tag, count } => {
                Ok(game.player(player).tag_count(*tag) >= *count)
            }
            Requirement::ProductionAtLeast { resource, amount } => {
                Ok(game.player(player).ledger().production_of(*resource) >= *amount)
            }
            Requirement::All(children) => {
                for child in children {
                    if !child.satisfied(game, player)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Requirement::Any(children) => {
                for child in children {
                    if child.satisfied(game, player)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    /// The value the requirement compares against, for UI/explanatory
    /// purposes ("you have 3 of 4 oceans"). Composites report the
    /// number of satisfied children.
    pub fn current_value(&self, game: &Game, player: PlayerId) -> Result<i64, GameError> {
        match self {
            Requirement::GlobalParameterAtLeast { track, .. }
            | Requirement::GlobalParameterAtMost { track, .. } => game.params.value_of(track),
            Requirement::TileCountAtLeast { tile_type, .. } => {
                Ok(game.board.tile_count(*tile_type) as i64)
            }
            Requirement::TagCountAtLeast { tag, .. } => {
                Ok(i64::from(game.player(player).tag_count(*tag)))
            }
            Requirement::ProductionAtLeast { resource, .. } => {
                Ok(game.player(player).ledger().production_of(*resource))
            }
            Requirement::All(children) | Requirement::Any(children) => {
                let mut satisfied = 0;
                for child in children {
                    if child.satisfied(game, player)? {
                        satisfied += 1;
                    }
                }
                Ok(satisfied)
            }
        }
    }
}
