//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Player
//!
//! Owns the per-player [`Ledger`], accumulated tag counts, the tableau
//! of played cards, and victory points. Counters are mutated only
//! through [`crate::core::Game`] ledger operations; no card or effect
//! reaches into them directly.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::ledger::Ledger;
use super::resources::Tag;
use crate::cards::CardName;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player, indexed by
/// [`PlayerId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create with a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; player_count],
        }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty (zero players).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over `(PlayerId, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId::new(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }
}

/// A card slot in a player's tableau.
///
/// Carries the only per-instance mutable state a card owns: the
/// `disabled` flag of a one-shot action, which transitions false→true
/// exactly once and never resets. Each game slot owns its own flag;
/// concurrent games never share it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauCard {
    pub name: CardName,
    pub tags: SmallVec<[Tag; 4]>,
    pub disabled: bool,
}

/// Per-player state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    ledger: Ledger,
    tags: FxHashMap<Tag, u32>,
    tableau: Vec<TableauCard>,
    victory_points: i64,
}

impl Player {
    /// Create a new player with empty state.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            ledger: Ledger::new(),
            tags: FxHashMap::default(),
            tableau: Vec::new(),
            victory_points: 0,
        }
    }

    /// This player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Read-only view of the resource ledger.
    ///
    /// Mutation goes through [`crate::core::Game::add_stock`] and
    /// [`crate::core::Game::add_production`] so every change is logged.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Count of a tag across all played cards.
    #[must_use]
    pub fn tag_count(&self, tag: Tag) -> u32 {
        self.tags.get(&tag).copied().unwrap_or(0)
    }

    /// Cards this player has played, in play order.
    #[must_use]
    pub fn tableau(&self) -> &[TableauCard] {
        &self.tableau
    }

    /// Check if a card is in this player's tableau.
    #[must_use]
    pub fn has_played(&self, name: &CardName) -> bool {
        self.tableau.iter().any(|c| &c.name == name)
    }

    /// Look up a tableau slot by card name.
    #[must_use]
    pub fn tableau_card(&self, name: &CardName) -> Option<&TableauCard> {
        self.tableau.iter().find(|c| &c.name == name)
    }

    pub(crate) fn tableau_card_mut(&mut self, name: &CardName) -> Option<&mut TableauCard> {
        self.tableau.iter_mut().find(|c| &c.name == name)
    }

    /// Add a played card to the tableau and accumulate its tags.
    pub(crate) fn add_to_tableau(&mut self, name: CardName, tags: SmallVec<[Tag; 4]>) {
        for &tag in &tags {
            *self.tags.entry(tag).or_insert(0) += 1;
        }
        self.tableau.push(TableauCard {
            name,
            tags,
            disabled: false,
        });
    }

    /// Victory points accumulated from played cards.
    #[must_use]
    pub fn victory_points(&self) -> i64 {
        self.victory_points
    }

    pub(crate) fn add_victory_points(&mut self, points: i64) {
        self.victory_points += points;
    }
}
