//! Resolution driver.
//!
//! Orchestrates a card play: check requirements, apply the declarative
//! behavior through the ledger/board/tracker, fire triggered abilities,
//! run any bespoke action, and surface a pending interactive input to
//! the caller (the turn/session layer) or report completion.
//!
//! Resolution is strictly single-threaded and sequential per game: at
//! most one interactive input chain is outstanding at a time, and no
//! two players' decisions interleave within one card's resolution.
//! Card effects may assume the world is unchanged between the moment a
//! choice is offered and the moment it is answered.

use tracing::debug;

use crate::cards::{Card, CardName, TagTrigger};
use crate::core::{Game, GameError, LogEntry, PlayerId};
use crate::inputs::{Answer, InputOptions, NextStep, PlayerInput};

/// Outcome of a resolution step, as seen by the caller.
///
/// `AwaitingInput` is a snapshot of the pending node - prompt and
/// option set only. The resolution function stays inside the driver
/// until [`ResolutionDriver::submit_answer`] is called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// The card's effect is fully applied.
    Complete,

    /// A player decision is pending.
    AwaitingInput {
        player: PlayerId,
        prompt: String,
        options: InputOptions,
    },
}

/// A triggered ability registered by a played card.
#[derive(Clone, Debug)]
struct RegisteredTrigger {
    owner: PlayerId,
    source: CardName,
    trigger: TagTrigger,
}

/// A pending input owned by the driver until answered.
#[derive(Debug)]
struct PendingInput {
    player: PlayerId,
    input: PlayerInput,
}

/// Per-game resolution orchestrator.
#[derive(Debug, Default)]
pub struct ResolutionDriver {
    triggers: Vec<RegisteredTrigger>,
    pending: Option<PendingInput>,
}

impl ResolutionDriver {
    /// Create a driver with no registered triggers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an input chain is outstanding.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The player whose decision is pending, if any.
    #[must_use]
    pub fn pending_player(&self) -> Option<PlayerId> {
        self.pending.as_ref().map(|p| p.player)
    }

    /// Discard an unanswered input node.
    ///
    /// Safe at any time: resolution functions validate before mutating,
    /// so an unanswered node has applied nothing. Returns whether a
    /// node was discarded.
    pub fn abandon_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Check whether a card may be played: requirement evaluation AND
    /// tile eligibility (a tile template with zero eligible spaces is a
    /// dead-end choice, never offered) AND bespoke eligibility.
    pub fn can_play(
        &self,
        game: &Game,
        card: &Card,
        player: PlayerId,
    ) -> Result<bool, GameError> {
        let definition = card.definition();

        if !definition.requirement.satisfied(game, player)? {
            return Ok(false);
        }

        if let Some(tile) = &definition.behavior.tile {
            if tile.eligible_spaces(&game.board).is_empty() {
                return Ok(false);
            }
        }

        if let Some(bespoke) = card.bespoke() {
            if !bespoke.bespoke_can_play(game, player)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Check whether a one-shot action may be activated: the card is in
    /// the player's tableau and its instance is not disabled.
    pub fn can_activate(&self, game: &Game, card: &Card, player: PlayerId) -> bool {
        card.has_action()
            && game
                .player(player)
                .tableau_card(card.name())
                .is_some_and(|slot| !slot.disabled)
    }

    /// Play a card for a player.
    ///
    /// Applies the declarative behavior in program order (production,
    /// stock, track raises), moves the card into the tableau, fires
    /// previously registered triggered abilities over the card's full
    /// tag list, registers the card's own trigger, then resolves the
    /// interactive tail (tile template or bespoke action).
    pub fn play(
        &mut self,
        game: &mut Game,
        card: &Card,
        player: PlayerId,
    ) -> Result<ResolutionStatus, GameError> {
        self.ensure_no_pending()?;

        if !self.can_play(game, card, player)? {
            return Err(GameError::RequirementNotMet(format!(
                "{} cannot be played",
                card.name()
            )));
        }

        let definition = card.definition();
        let name = definition.name.clone();
        debug!(%player, card = %name, "playing card");

        for &(resource, delta) in &definition.behavior.production {
            game.add_production(player, resource, delta, Some(&name));
        }
        for &(resource, delta) in &definition.behavior.stock {
            game.add_stock(player, resource, delta, Some(&name));
        }
        for (track, steps) in &definition.behavior.global {
            game.raise_parameter(track, *steps)?;
        }

        game.player_mut(player)
            .add_to_tableau(name.clone(), definition.tags.clone());
        game.player_mut(player)
            .add_victory_points(definition.victory_points);
        game.push_log(LogEntry::CardPlayed {
            player,
            card: name.clone(),
        });

        // Subscribers registered before this play fire now, over the
        // full tag list, once per matching tag instance; the card's own
        // trigger only listens to later plays.
        self.fire_triggers(game, card);
        if let Some(&trigger) = card.trigger() {
            self.triggers.push(RegisteredTrigger {
                owner: player,
                source: name.clone(),
                trigger,
            });
        }

        let step = if let Some(tile) = &definition.behavior.tile {
            Self::offer_tile_placement(game, player, &name, tile)
        } else if let Some(bespoke) = card.bespoke() {
            bespoke.bespoke_play(game, player)?
        } else {
            NextStep::Complete
        };

        Ok(self.accept(player, step))
    }

    /// Activate a card's one-shot action.
    ///
    /// The instance's `disabled` flag flips false→true exactly once,
    /// before the action runs; a second activation is rejected with
    /// [`GameError::RequirementNotMet`] and mutates nothing.
    pub fn activate(
        &mut self,
        game: &mut Game,
        card: &Card,
        player: PlayerId,
    ) -> Result<ResolutionStatus, GameError> {
        self.ensure_no_pending()?;

        let Some(action) = card.action() else {
            return Err(GameError::InternalInconsistency(format!(
                "{} has no one-shot action",
                card.name()
            )));
        };

        let Some(slot) = game.player_mut(player).tableau_card_mut(card.name()) else {
            return Err(GameError::RequirementNotMet(format!(
                "{} is not in the tableau",
                card.name()
            )));
        };
        if slot.disabled {
            return Err(GameError::RequirementNotMet(format!(
                "{} was already used",
                card.name()
            )));
        }
        slot.disabled = true;

        debug!(%player, card = %card.name(), "activating one-shot action");
        game.push_log(LogEntry::ActionActivated {
            player,
            card: card.name().clone(),
        });

        let step = action.action(game, player)?;
        Ok(self.accept(player, step))
    }

    /// Re-enter a paused resolution with the player's answer.
    ///
    /// The answer is validated against the pending option set before
    /// the resolution function runs: an out-of-set answer returns
    /// [`GameError::InvalidChoice`], mutates nothing, and keeps the
    /// node in place for a re-prompt. A valid answer consumes the node
    /// exactly once.
    pub fn submit_answer(
        &mut self,
        game: &mut Game,
        answer: &Answer,
    ) -> Result<ResolutionStatus, GameError> {
        let Some(pending) = self.pending.take() else {
            return Err(GameError::InternalInconsistency(
                "no input is pending".to_string(),
            ));
        };

        if !pending.input.options.contains(answer) {
            let err = GameError::InvalidChoice(format!(
                "answer {answer:?} is not among the offered options"
            ));
            self.pending = Some(pending);
            return Err(err);
        }

        let player = pending.player;
        debug!(%player, ?answer, "resolving pending input");
        let step = pending.input.resolve(game, answer)?;
        Ok(self.accept(player, step))
    }

    /// Number of registered triggered abilities.
    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    fn ensure_no_pending(&self) -> Result<(), GameError> {
        if self.pending.is_some() {
            return Err(GameError::InternalInconsistency(
                "a resolution is already awaiting input".to_string(),
            ));
        }
        Ok(())
    }

    /// Fire registered triggers for a played card, in registration
    /// order, once per matching tag instance.
    fn fire_triggers(&self, game: &mut Game, played: &Card) {
        for registered in &self.triggers {
            for &tag in &played.definition().tags {
                if tag == registered.trigger.tag {
                    game.add_stock(
                        registered.owner,
                        registered.trigger.resource,
                        registered.trigger.amount,
                        Some(&registered.source),
                    );
                }
            }
        }
    }

    /// Build the tile-placement input for a card's tile template.
    fn offer_tile_placement(
        game: &Game,
        player: PlayerId,
        card: &CardName,
        tile: &crate::cards::TileBehavior,
    ) -> NextStep {
        // can_play guaranteed this set is non-empty.
        let eligible = tile.eligible_spaces(&game.board);
        let tile_type = tile.tile_type;
        let bonus = tile.adjacency_bonus.clone();

        NextStep::AwaitingInput(PlayerInput::select_space(
            format!("Select space for {card}"),
            eligible,
            move |game, space| {
                game.place_tile(player, space, tile_type, bonus)?;
                Ok(NextStep::Complete)
            },
        ))
    }

    fn accept(&mut self, player: PlayerId, step: NextStep) -> ResolutionStatus {
        match step {
            NextStep::Complete => ResolutionStatus::Complete,
            NextStep::AwaitingInput(input) => {
                let status = ResolutionStatus::AwaitingInput {
                    player,
                    prompt: input.prompt.clone(),
                    options: input.options.clone(),
                };
                self.pending = Some(PendingInput { player, input });
                status
            }
        }
    }
}
