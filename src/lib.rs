//! # terracore
//!
//! Rules-resolution core for a terraforming card-driven strategy game.
//!
//! Players play cards that mutate shared and per-player state (resource
//! stocks, production rates, planetary tiles, global parameter tracks)
//! subject to declarative requirements. The crate provides the general
//! mechanism by which an open-ended catalogue of heterogeneous card
//! behaviors is expressed, validated, and executed against shared
//! mutable state, including effects that pause mid-resolution to ask a
//! player a question and resume exactly where they left off.
//!
//! ## Architecture
//!
//! - **Single-writer state**: resource counters are mutated only
//!   through the [`Game`] ledger operations, tile occupancy only
//!   through the [`Board`], track values only through
//!   [`GlobalParameters`]. Every mutation appends a structured
//!   [`LogEntry`] for auditing.
//!
//! - **Closed data model, open extension point**: requirements and
//!   declarative behaviors are closed tagged unions; bespoke card
//!   logic plugs in through the [`CardBehavior`] and [`OneShotAction`]
//!   traits. New cards are new data plus optional bespoke logic, never
//!   new type-hierarchy depth.
//!
//! - **Continuations by value**: an effect that needs a player
//!   decision returns [`NextStep::AwaitingInput`] carrying a
//!   [`PlayerInput`] node. The [`ResolutionDriver`] holds the node and
//!   is re-entered with the answer; no thread ever blocks waiting for
//!   a player.
//!
//! ## Modules
//!
//! - `core`: Player/resource vocabulary, ledger, game aggregate, errors, log
//! - `params`: Global parameter tracks with clamped raises
//! - `board`: Spaces, tiles, and precomputed adjacency
//! - `requirements`: Polymorphic play-requirement predicates
//! - `cards`: Card definitions, declarative behavior, catalogue
//! - `inputs`: Interactive-input continuation protocol
//! - `driver`: Resolution orchestration and triggered abilities

pub mod core;
pub mod params;
pub mod board;
pub mod requirements;
pub mod cards;
pub mod inputs;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Player, TableauCard,
    Resource, Tag,
    Ledger,
    Game, LogEntry, GameError,
};

pub use crate::params::{GlobalParameters, Track, RaiseOutcome};

pub use crate::board::{
    Board, Space, SpaceDefinition, SpaceId, SpaceKind,
    TileType, PlacedTile, AdjacencyBonus,
};

pub use crate::requirements::Requirement;

pub use crate::cards::{
    Card, CardBehavior, OneShotAction, CardDefinition, CardName,
    Behavior, TileBehavior, PlacementConstraint, TagTrigger,
    Catalogue,
};

pub use crate::inputs::{Answer, InputOptions, NextStep, PlayerInput};

pub use crate::driver::{ResolutionDriver, ResolutionStatus};
