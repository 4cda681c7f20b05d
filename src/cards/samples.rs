//! Representative cards.
//!
//! The catalogue of an actual game is open-ended; these instances show
//! the three shapes a card takes: a declarative card with a constrained
//! tile template, a card with a bespoke interactive effect, and a
//! CEO-style card combining a triggered ability with a one-shot action.

use crate::board::TileType;
use crate::core::{Game, GameError, PlayerId, Resource, Tag};
use crate::inputs::{NextStep, PlayerInput};
use crate::requirements::Requirement;

use super::behavior::{Card, CardBehavior, OneShotAction};
use super::definition::{
    Behavior, CardDefinition, CardName, PlacementConstraint, TagTrigger, TileBehavior,
};

/// The colony rate tracks consulted by [`colony_director`].
pub const HABITAT_RATE: &str = "habitat-rate";
pub const MINING_RATE: &str = "mining-rate";
pub const LOGISTICS_RATE: &str = "logistics-rate";

/// Requires 4 ocean tiles. Raises energy production 2 steps and places
/// a special tile adjacent to an ocean.
#[must_use]
pub fn great_dam() -> Card {
    Card::automated(
        CardDefinition::new("Great Dam", 15)
            .with_tag(Tag::Power)
            .with_tag(Tag::Building)
            .with_requirement(Requirement::oceans(4))
            .with_behavior(
                Behavior::new()
                    .with_production(Resource::Energy, 2)
                    .with_tile(TileBehavior {
                        tile_type: TileType::Special,
                        constraint: PlacementConstraint::AdjacentTo(TileType::Ocean),
                        adjacency_bonus: None,
                    }),
            )
            .with_victory_points(1),
    )
}

struct SellEnergy;

impl CardBehavior for SellEnergy {
    fn bespoke_play(&self, game: &mut Game, player: PlayerId) -> Result<NextStep, GameError> {
        let max = game.player(player).ledger().stock_of(Resource::Energy).max(0);
        let source = CardName::new("Energy Market");

        Ok(NextStep::AwaitingInput(PlayerInput::select_amount(
            "Select amount of energy to sell",
            0,
            max,
            move |game, amount| {
                if amount > 0 {
                    game.add_stock(player, Resource::Energy, -amount, Some(&source));
                    game.add_stock(player, Resource::MegaCredits, amount, Some(&source));
                }
                Ok(NextStep::Complete)
            },
        )))
    }
}

/// Sell any amount of banked energy for megacredits, 1:1.
#[must_use]
pub fn energy_market() -> Card {
    Card::automated(
        CardDefinition::new("Energy Market", 3)
            .with_tag(Tag::Power)
            .with_tag(Tag::Earth),
    )
    .with_bespoke(SellEnergy)
}

struct LowestRateBonus;

impl OneShotAction for LowestRateBonus {
    fn action(&self, game: &mut Game, player: PlayerId) -> Result<NextStep, GameError> {
        let lowest = game
            .params
            .lowest_of(&[HABITAT_RATE, MINING_RATE, LOGISTICS_RATE])?;

        // A lowest rate of zero grants nothing.
        if lowest > 0 {
            let source = CardName::new("Colony Director");
            game.add_production(player, Resource::MegaCredits, lowest, Some(&source));
        }
        Ok(NextStep::Complete)
    }
}

/// Gain 1 megacredit whenever any player plays a Moon tag. Once per
/// game, raise megacredit production by the lowest of the three colony
/// rate tracks.
#[must_use]
pub fn colony_director() -> Card {
    Card::automated(CardDefinition::new("Colony Director", 0).with_tag(Tag::Moon))
        .with_trigger(TagTrigger {
            tag: Tag::Moon,
            resource: Resource::MegaCredits,
            amount: 1,
        })
        .with_action(LowestRateBonus)
}
