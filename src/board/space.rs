//! Board spaces and tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, Resource};

/// Identifier of a board space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub u32);

impl SpaceId {
    /// Create a new space ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}

/// Surface type of a space. Ocean tiles go on ocean spaces, everything
/// else on land.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    Land,
    Ocean,
}

/// Kind of tile occupying a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Ocean,
    Greenery,
    City,
    /// Card-specific tiles (dams, mines, preserves, ...).
    Special,
}

/// A tile placed on a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub tile_type: TileType,
    /// Placing player. `None` for neutral setup tiles.
    pub owner: Option<PlayerId>,
}

/// Bonus payload attached to a space when a tile is placed there.
///
/// Paid out to players who later place a tile on an adjacent space.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyBonus {
    pub stock: Vec<(Resource, i64)>,
}

/// Declarative space description used to build a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceDefinition {
    pub id: SpaceId,
    pub kind: SpaceKind,
    pub neighbors: Vec<SpaceId>,
}

impl SpaceDefinition {
    /// A land space with the given raw neighbor ids.
    #[must_use]
    pub fn land(id: u32, neighbors: &[u32]) -> Self {
        Self {
            id: SpaceId::new(id),
            kind: SpaceKind::Land,
            neighbors: neighbors.iter().copied().map(SpaceId::new).collect(),
        }
    }

    /// An ocean space with the given raw neighbor ids.
    #[must_use]
    pub fn ocean(id: u32, neighbors: &[u32]) -> Self {
        Self {
            id: SpaceId::new(id),
            kind: SpaceKind::Ocean,
            neighbors: neighbors.iter().copied().map(SpaceId::new).collect(),
        }
    }
}

/// One space of the board.
///
/// Holds at most one tile; the neighbor list is precomputed, symmetric,
/// and static for the game's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    id: SpaceId,
    kind: SpaceKind,
    tile: Option<PlacedTile>,
    adjacency_bonus: Option<AdjacencyBonus>,
    neighbors: SmallVec<[SpaceId; 6]>,
}

impl Space {
    pub(crate) fn new(id: SpaceId, kind: SpaceKind) -> Self {
        Self {
            id,
            kind,
            tile: None,
            adjacency_bonus: None,
            neighbors: SmallVec::new(),
        }
    }

    /// This space's ID.
    #[must_use]
    pub fn id(&self) -> SpaceId {
        self.id
    }

    /// Surface type.
    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    /// The tile occupying this space, if any.
    #[must_use]
    pub fn tile(&self) -> Option<&PlacedTile> {
        self.tile.as_ref()
    }

    /// Check if no tile occupies this space.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// Check if a tile of the given type occupies this space.
    #[must_use]
    pub fn has_tile(&self, tile_type: TileType) -> bool {
        self.tile.map(|t| t.tile_type) == Some(tile_type)
    }

    /// Bonus attached at placement time, if any.
    #[must_use]
    pub fn adjacency_bonus(&self) -> Option<&AdjacencyBonus> {
        self.adjacency_bonus.as_ref()
    }

    /// Precomputed neighbor list.
    #[must_use]
    pub fn neighbors(&self) -> &[SpaceId] {
        &self.neighbors
    }

    pub(crate) fn add_neighbor(&mut self, neighbor: SpaceId) {
        if neighbor != self.id && !self.neighbors.contains(&neighbor) {
            self.neighbors.push(neighbor);
        }
    }

    pub(crate) fn set_tile(&mut self, tile: PlacedTile, bonus: Option<AdjacencyBonus>) {
        self.tile = Some(tile);
        self.adjacency_bonus = bonus;
    }
}
