//! Card definitions and declarative behavior.
//!
//! A `CardDefinition` is immutable: identity, cost, tags, a
//! requirement, a declarative [`Behavior`], and victory points. The
//! behavior vocabulary is intentionally small and closed - ledger
//! deltas, track raises, a tile-placement template - with bespoke
//! imperative logic living behind the trait in
//! [`crate::cards::behavior`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{AdjacencyBonus, Board, SpaceId, TileType};
use crate::core::{Resource, Tag};
use crate::requirements::Requirement;

/// Card identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardName(String);

impl CardName {
    /// Create a card name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Spatial restriction on where a tile template may be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementConstraint {
    /// Any available space of the right surface type.
    Any,
    /// Only spaces with at least one neighbor holding this tile type.
    AdjacentTo(TileType),
    /// Only spaces with no neighbor holding this tile type.
    NotAdjacentTo(TileType),
}

/// A tile-placement template in a card's behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBehavior {
    pub tile_type: TileType,
    pub constraint: PlacementConstraint,
    /// Bonus attached to the space at placement time.
    pub adjacency_bonus: Option<AdjacencyBonus>,
}

impl TileBehavior {
    /// Spaces this tile may currently be placed on.
    ///
    /// Evaluated freshly against the board at play time; the result is
    /// the option set offered to the player. An empty result makes the
    /// card unplayable - no dead-end choice is ever offered.
    #[must_use]
    pub fn eligible_spaces(&self, board: &Board) -> Vec<SpaceId> {
        let candidates = if self.tile_type == TileType::Ocean {
            board.available_ocean_spaces()
        } else {
            board.available_spaces_on_land()
        };

        candidates
            .into_iter()
            .filter(|&space| match self.constraint {
                PlacementConstraint::Any => true,
                PlacementConstraint::AdjacentTo(tile_type) => {
                    board.is_adjacent_to(space, tile_type).unwrap_or(false)
                }
                PlacementConstraint::NotAdjacentTo(tile_type) => {
                    !board.is_adjacent_to(space, tile_type).unwrap_or(true)
                }
            })
            .collect()
    }
}

/// A triggered ability: "whenever any player plays a card with `tag`,
/// the owner gains `amount` of `resource`", fired once per matching tag
/// instance of the played card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTrigger {
    pub tag: Tag,
    pub resource: Resource,
    pub amount: i64,
}

/// Declarative card behavior: applied by the driver in program order
/// before any bespoke action runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behavior {
    /// Production-rate deltas, applied in order.
    pub production: Vec<(Resource, i64)>,

    /// Stock deltas, applied in order.
    pub stock: Vec<(Resource, i64)>,

    /// Global parameter raises: `(track, steps)`.
    pub global: Vec<(String, u32)>,

    /// Tile-placement template; resolves through the interactive input
    /// protocol.
    pub tile: Option<TileBehavior>,
}

impl Behavior {
    /// An empty behavior.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a production delta (builder pattern).
    #[must_use]
    pub fn with_production(mut self, resource: Resource, delta: i64) -> Self {
        self.production.push((resource, delta));
        self
    }

    /// Add a stock delta (builder pattern).
    #[must_use]
    pub fn with_stock(mut self, resource: Resource, delta: i64) -> Self {
        self.stock.push((resource, delta));
        self
    }

    /// Add a track raise (builder pattern).
    #[must_use]
    pub fn with_global(mut self, track: impl Into<String>, steps: u32) -> Self {
        self.global.push((track.into(), steps));
        self
    }

    /// Set the tile template (builder pattern).
    #[must_use]
    pub fn with_tile(mut self, tile: TileBehavior) -> Self {
        self.tile = Some(tile);
        self
    }
}

/// Immutable card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub name: CardName,
    pub cost: i64,
    pub tags: SmallVec<[Tag; 4]>,
    pub requirement: Requirement,
    pub behavior: Behavior,
    pub victory_points: i64,
}

impl CardDefinition {
    /// Create a definition with no tags, requirement, or behavior.
    #[must_use]
    pub fn new(name: impl Into<CardName>, cost: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            tags: SmallVec::new(),
            requirement: Requirement::none(),
            behavior: Behavior::new(),
            victory_points: 0,
        }
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Set the requirement (builder pattern).
    #[must_use]
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Set the behavior (builder pattern).
    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Set victory points (builder pattern).
    #[must_use]
    pub fn with_victory_points(mut self, points: i64) -> Self {
        self.victory_points = points;
        self
    }
}
