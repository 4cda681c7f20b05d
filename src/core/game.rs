//! The game aggregate.
//!
//! `Game` owns the board, the global parameter tracker, the ordered
//! player list, and the log. It is shared by reference among all cards
//! and effects during resolution; exactly one resolution is in flight
//! at a time (enforced by the driver).
//!
//! All counter mutation funnels through the logged wrappers here:
//! [`Game::add_stock`], [`Game::add_production`], [`Game::place_tile`],
//! and [`Game::raise_parameter`].

use tracing::debug;

use super::error::GameError;
use super::log::LogEntry;
use super::player::{Player, PlayerId, PlayerMap};
use super::resources::Resource;
use crate::board::{AdjacencyBonus, Board, SpaceId, TileType};
use crate::cards::CardName;
use crate::params::{GlobalParameters, RaiseOutcome};

/// Shared game state for one session.
#[derive(Clone, Debug)]
pub struct Game {
    /// The spatial board. Sole owner of tile occupancy.
    pub board: Board,

    /// Global parameter tracks. Sole owner of track values.
    pub params: GlobalParameters,

    players: PlayerMap<Player>,
    log: Vec<LogEntry>,
}

impl Game {
    /// Create a new game.
    #[must_use]
    pub fn new(player_count: usize, board: Board, params: GlobalParameters) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            board,
            params,
            players: PlayerMap::new(player_count, Player::new),
            log: Vec::new(),
        }
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    /// A player's state, read-only.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The structured log, oldest entry first.
    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub(crate) fn push_log(&mut self, entry: LogEntry) {
        self.log.push(entry);
    }

    // === Ledger mutation ===

    /// Add a (possibly negative) delta to a player's stock.
    ///
    /// Returns the new value and logs the change.
    pub fn add_stock(
        &mut self,
        player: PlayerId,
        resource: Resource,
        delta: i64,
        source: Option<&CardName>,
    ) -> i64 {
        let value = self.players[player].ledger_mut().add_stock(resource, delta);
        debug!(%player, %resource, delta, value, "stock change");
        self.log.push(LogEntry::StockChange {
            player,
            resource,
            delta,
            source: source.cloned(),
        });
        value
    }

    /// Add a (possibly negative) delta to a player's production rate.
    ///
    /// Returns the new value and logs the change. Production may go
    /// negative; floors are a caller concern.
    pub fn add_production(
        &mut self,
        player: PlayerId,
        resource: Resource,
        delta: i64,
        source: Option<&CardName>,
    ) -> i64 {
        let value = self.players[player]
            .ledger_mut()
            .add_production(resource, delta);
        debug!(%player, %resource, delta, value, "production change");
        self.log.push(LogEntry::ProductionChange {
            player,
            resource,
            delta,
            source: source.cloned(),
        });
        value
    }

    // === Board mutation ===

    /// Place a tile for a player, attaching an optional adjacency bonus
    /// to the space.
    ///
    /// Fails with [`GameError::InvalidPlacement`] on an occupied or
    /// surface-mismatched space, leaving the board unchanged. On
    /// success, adjacency bonuses already attached to neighboring
    /// spaces pay out to the placing player.
    pub fn place_tile(
        &mut self,
        player: PlayerId,
        space: SpaceId,
        tile_type: TileType,
        bonus: Option<AdjacencyBonus>,
    ) -> Result<(), GameError> {
        self.board.place_tile(player, space, tile_type, bonus)?;
        debug!(%player, %space, ?tile_type, "tile placed");
        self.log.push(LogEntry::TilePlaced {
            player,
            space,
            tile_type,
        });

        // Neighbor bonuses are read against the board as it stands at
        // placement time, never cached.
        let mut payouts = Vec::new();
        for &neighbor in self.board.adjacent_spaces(space)? {
            if let Some(bonus) = self.board.space(neighbor)?.adjacency_bonus() {
                payouts.extend(bonus.stock.iter().copied());
            }
        }
        for (resource, amount) in payouts {
            self.add_stock(player, resource, amount, None);
        }
        Ok(())
    }

    // === Track mutation ===

    /// Raise a global parameter track, clamped at its maximum.
    ///
    /// Overshoot is not an error; callers granting "first to raise"
    /// bonuses must inspect the returned [`RaiseOutcome`] rather than
    /// assume the requested delta was fully applied.
    pub fn raise_parameter(&mut self, track: &str, steps: u32) -> Result<RaiseOutcome, GameError> {
        let outcome = self.params.raise(track, steps)?;
        debug!(track, outcome.previous, outcome.current, "parameter raised");
        self.log.push(LogEntry::ParameterChange {
            track: track.to_string(),
            previous: outcome.previous,
            current: outcome.current,
        });
        Ok(outcome)
    }

    /// Explicitly lower a track, clamped at its minimum.
    ///
    /// Tracks normally only move toward their maximum; this is the
    /// card-explicit exception.
    pub fn lower_parameter(&mut self, track: &str, steps: u32) -> Result<RaiseOutcome, GameError> {
        let outcome = self.params.lower(track, steps)?;
        debug!(track, outcome.previous, outcome.current, "parameter lowered");
        self.log.push(LogEntry::ParameterChange {
            track: track.to_string(),
            previous: outcome.previous,
            current: outcome.current,
        });
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SpaceDefinition;
    use crate::params::Track;

    fn test_game() -> Game {
        let board = Board::new(vec![
            SpaceDefinition::land(0, &[1, 2]),
            SpaceDefinition::ocean(1, &[0, 2]),
            SpaceDefinition::land(2, &[0, 1]),
        ]);
        let params =
            GlobalParameters::new().with_track("habitat-rate", Track::new(0, 8, 1));
        Game::new(2, board, params)
    }

    #[test]
    fn test_add_stock_logs() {
        let mut game = test_game();
        let p0 = PlayerId::new(0);

        let value = game.add_stock(p0, Resource::Steel, 3, None);
        assert_eq!(value, 3);
        assert_eq!(game.player(p0).ledger().stock_of(Resource::Steel), 3);
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn test_add_production_isolated_per_player() {
        let mut game = test_game();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        game.add_production(p0, Resource::Energy, 2, None);

        assert_eq!(game.player(p0).ledger().production_of(Resource::Energy), 2);
        assert_eq!(game.player(p1).ledger().production_of(Resource::Energy), 0);
    }

    #[test]
    fn test_place_tile_logs() {
        let mut game = test_game();
        let p0 = PlayerId::new(0);

        game.place_tile(p0, SpaceId::new(0), TileType::Greenery, None)
            .unwrap();

        assert!(game
            .log()
            .iter()
            .any(|e| matches!(e, LogEntry::TilePlaced { .. })));
    }

    #[test]
    fn test_adjacency_bonus_pays_out() {
        let mut game = test_game();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        // P0 places a tile carrying a bonus; P1 later places next to it.
        game.place_tile(
            p0,
            SpaceId::new(0),
            TileType::Special,
            Some(AdjacencyBonus {
                stock: vec![(Resource::Heat, 2)],
            }),
        )
        .unwrap();

        game.place_tile(p1, SpaceId::new(2), TileType::Greenery, None)
            .unwrap();

        assert_eq!(game.player(p1).ledger().stock_of(Resource::Heat), 2);
        assert_eq!(game.player(p0).ledger().stock_of(Resource::Heat), 0);
    }

    #[test]
    fn test_raise_parameter_logs() {
        let mut game = test_game();

        let outcome = game.raise_parameter("habitat-rate", 2).unwrap();
        assert_eq!(outcome.previous, 0);
        assert_eq!(outcome.current, 2);
        assert!(game
            .log()
            .iter()
            .any(|e| matches!(e, LogEntry::ParameterChange { .. })));
    }

    #[test]
    fn test_unknown_track_is_inconsistency() {
        let mut game = test_game();
        let err = game.raise_parameter("nonexistent", 1).unwrap_err();
        assert!(matches!(err, GameError::InternalInconsistency(_)));
    }
}
