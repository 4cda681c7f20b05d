//! The board and its adjacency relation.
//!
//! A fixed topology of spaces built once at setup. The board is the
//! sole owner of tile occupancy: placement goes through
//! [`Board::place_tile`], which validates before mutating, and
//! adjacency queries are O(1) against precomputed, symmetric neighbor
//! lists. Placement eligibility for cards ("adjacent to an ocean") is
//! expressed by filtering [`Board::available_spaces_on_land`] with
//! neighbor predicates, evaluated freshly against current board state.

mod space;

pub use space::{
    AdjacencyBonus, PlacedTile, Space, SpaceDefinition, SpaceId, SpaceKind, TileType,
};

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

/// The spatial board: spaces indexed by [`SpaceId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    /// Build a board from space definitions.
    ///
    /// The adjacency relation is symmetrized: if the definitions list
    /// `b` as a neighbor of `a`, `a` becomes a neighbor of `b` as well.
    /// Space IDs must be dense (0..n) and match their position.
    #[must_use]
    pub fn new(defs: Vec<SpaceDefinition>) -> Self {
        let mut spaces: Vec<Space> = defs
            .iter()
            .enumerate()
            .map(|(i, def)| {
                assert_eq!(
                    def.id.index(),
                    i,
                    "Space IDs must be dense and in order"
                );
                Space::new(def.id, def.kind)
            })
            .collect();

        for def in &defs {
            for &neighbor in &def.neighbors {
                assert!(
                    neighbor.index() < spaces.len(),
                    "Neighbor {neighbor} out of range"
                );
                spaces[def.id.index()].add_neighbor(neighbor);
                spaces[neighbor.index()].add_neighbor(def.id);
            }
        }

        Self { spaces }
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Check if the board has no spaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// All spaces in ID order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Look up a space.
    ///
    /// An unknown ID is an [`GameError::InternalInconsistency`]: space
    /// IDs come from the board itself, so a dangling one means
    /// corrupted card or input data.
    pub fn space(&self, id: SpaceId) -> Result<&Space, GameError> {
        self.spaces
            .get(id.index())
            .ok_or_else(|| GameError::InternalInconsistency(format!("unknown space {id}")))
    }

    /// Precomputed neighbors of a space.
    pub fn adjacent_spaces(&self, id: SpaceId) -> Result<&[SpaceId], GameError> {
        Ok(self.space(id)?.neighbors())
    }

    /// Empty land spaces, in ID order.
    #[must_use]
    pub fn available_spaces_on_land(&self) -> Vec<SpaceId> {
        self.spaces
            .iter()
            .filter(|s| s.kind() == SpaceKind::Land && s.is_empty())
            .map(Space::id)
            .collect()
    }

    /// Empty ocean spaces, in ID order.
    #[must_use]
    pub fn available_ocean_spaces(&self) -> Vec<SpaceId> {
        self.spaces
            .iter()
            .filter(|s| s.kind() == SpaceKind::Ocean && s.is_empty())
            .map(Space::id)
            .collect()
    }

    /// Count placed tiles of a type across the whole board.
    #[must_use]
    pub fn tile_count(&self, tile_type: TileType) -> usize {
        self.spaces.iter().filter(|s| s.has_tile(tile_type)).count()
    }

    /// Check whether any neighbor of `id` holds a tile of `tile_type`.
    pub fn is_adjacent_to(&self, id: SpaceId, tile_type: TileType) -> Result<bool, GameError> {
        for &neighbor in self.space(id)?.neighbors() {
            if self.space(neighbor)?.has_tile(tile_type) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Place a tile on a space, attaching an optional adjacency bonus.
    ///
    /// All validation happens before any mutation: an occupied space or
    /// a surface mismatch fails with [`GameError::InvalidPlacement`]
    /// and leaves the board unchanged.
    pub fn place_tile(
        &mut self,
        player: PlayerId,
        id: SpaceId,
        tile_type: TileType,
        bonus: Option<AdjacencyBonus>,
    ) -> Result<(), GameError> {
        let space = self.space(id)?;

        if !space.is_empty() {
            return Err(GameError::InvalidPlacement {
                space: id,
                reason: "space is already occupied".to_string(),
            });
        }

        let wants_ocean = tile_type == TileType::Ocean;
        let is_ocean_space = space.kind() == SpaceKind::Ocean;
        if wants_ocean != is_ocean_space {
            return Err(GameError::InvalidPlacement {
                space: id,
                reason: format!(
                    "{tile_type:?} tile cannot go on a {:?} space",
                    space.kind()
                ),
            });
        }

        self.spaces[id.index()].set_tile(
            PlacedTile {
                tile_type,
                owner: Some(player),
            },
            bonus,
        );
        Ok(())
    }
}
