//! Interactive input protocol.
//!
//! Many card effects cannot complete synchronously: they need a player
//! to choose a space, an amount, or a card. Instead of blocking a
//! thread, an effect returns [`NextStep::AwaitingInput`] carrying a
//! [`PlayerInput`] node: a prompt, a constrained option set, and a
//! resolution function consumed exactly once with a validated answer.
//! The resolution function may itself return another node, composing
//! decision trees of arbitrary depth.
//!
//! Contract for every resolution function: perform all validation
//! before any mutation, so an unanswered or discarded node never leaves
//! partial state behind.

use serde::{Deserialize, Serialize};

use crate::board::SpaceId;
use crate::cards::CardName;
use crate::core::{Game, GameError};

/// A player's answer to a pending input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Space(SpaceId),
    Amount(i64),
    Card(CardName),
}

/// The constrained option set offered to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputOptions {
    /// Choose one of these spaces.
    Spaces(Vec<SpaceId>),
    /// Choose an amount in `min..=max`.
    Amount { min: i64, max: i64 },
    /// Choose one of these cards.
    Cards(Vec<CardName>),
}

impl InputOptions {
    /// Membership test: is this answer one of the offered options?
    #[must_use]
    pub fn contains(&self, answer: &Answer) -> bool {
        match (self, answer) {
            (InputOptions::Spaces(spaces), Answer::Space(space)) => spaces.contains(space),
            (InputOptions::Amount { min, max }, Answer::Amount(amount)) => {
                (*min..=*max).contains(amount)
            }
            (InputOptions::Cards(cards), Answer::Card(card)) => cards.contains(card),
            _ => false,
        }
    }

    /// Check if the option set offers no choice at all.
    ///
    /// A dead-end set must never be offered to a player; callers gate
    /// on this in their eligibility checks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            InputOptions::Spaces(spaces) => spaces.is_empty(),
            InputOptions::Amount { min, max } => min > max,
            InputOptions::Cards(cards) => cards.is_empty(),
        }
    }
}

type ResolveFn = Box<dyn FnOnce(&mut Game, &Answer) -> Result<NextStep, GameError>>;

/// A pending choice: prompt, option set, and resolution function.
///
/// Created by a card effect, owned by the resolution driver until
/// answered, discarded after exactly one resolution.
pub struct PlayerInput {
    pub prompt: String,
    pub options: InputOptions,
    resolve: ResolveFn,
}

impl PlayerInput {
    /// Create an input node from raw parts.
    ///
    /// The driver validates answer membership before calling `resolve`;
    /// implementations may assume the answer is in the option set.
    pub fn new(
        prompt: impl Into<String>,
        options: InputOptions,
        resolve: impl FnOnce(&mut Game, &Answer) -> Result<NextStep, GameError> + 'static,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            resolve: Box::new(resolve),
        }
    }

    /// A space selection among the given candidates.
    pub fn select_space(
        prompt: impl Into<String>,
        spaces: Vec<SpaceId>,
        resolve: impl FnOnce(&mut Game, SpaceId) -> Result<NextStep, GameError> + 'static,
    ) -> Self {
        Self::new(
            prompt,
            InputOptions::Spaces(spaces),
            move |game, answer| match answer {
                Answer::Space(space) => resolve(game, *space),
                _ => Err(GameError::InvalidChoice(
                    "expected a space answer".to_string(),
                )),
            },
        )
    }

    /// An amount selection in `min..=max`.
    pub fn select_amount(
        prompt: impl Into<String>,
        min: i64,
        max: i64,
        resolve: impl FnOnce(&mut Game, i64) -> Result<NextStep, GameError> + 'static,
    ) -> Self {
        Self::new(
            prompt,
            InputOptions::Amount { min, max },
            move |game, answer| match answer {
                Answer::Amount(amount) => resolve(game, *amount),
                _ => Err(GameError::InvalidChoice(
                    "expected an amount answer".to_string(),
                )),
            },
        )
    }

    /// A card selection among the given candidates.
    pub fn select_card(
        prompt: impl Into<String>,
        cards: Vec<CardName>,
        resolve: impl FnOnce(&mut Game, CardName) -> Result<NextStep, GameError> + 'static,
    ) -> Self {
        Self::new(
            prompt,
            InputOptions::Cards(cards),
            move |game, answer| match answer {
                Answer::Card(card) => resolve(game, card.clone()),
                _ => Err(GameError::InvalidChoice(
                    "expected a card answer".to_string(),
                )),
            },
        )
    }

    /// Consume the node with a validated answer.
    pub(crate) fn resolve(
        self,
        game: &mut Game,
        answer: &Answer,
    ) -> Result<NextStep, GameError> {
        debug_assert!(self.options.contains(answer), "answer validated by driver");
        (self.resolve)(game, answer)
    }
}

impl std::fmt::Debug for PlayerInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerInput")
            .field("prompt", &self.prompt)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// What an effect yields: done, or a pending player decision.
///
/// An explicit sum type returned by value, not a suspended call stack;
/// the resolution function is re-entered with an answer rather than
/// resumed as a coroutine.
#[derive(Debug)]
pub enum NextStep {
    /// No further input needed.
    Complete,
    /// A decision is pending; the driver holds the node.
    AwaitingInput(PlayerInput),
}

impl NextStep {
    /// Check if resolution finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, NextStep::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_options_membership() {
        let options = InputOptions::Spaces(vec![SpaceId::new(1), SpaceId::new(4)]);

        assert!(options.contains(&Answer::Space(SpaceId::new(4))));
        assert!(!options.contains(&Answer::Space(SpaceId::new(2))));
        assert!(!options.contains(&Answer::Amount(4)));
        assert!(!options.is_empty());
    }

    #[test]
    fn test_amount_options_membership() {
        let options = InputOptions::Amount { min: 0, max: 3 };

        assert!(options.contains(&Answer::Amount(0)));
        assert!(options.contains(&Answer::Amount(3)));
        assert!(!options.contains(&Answer::Amount(4)));
        assert!(!options.contains(&Answer::Amount(-1)));
    }

    #[test]
    fn test_card_options_membership() {
        let options = InputOptions::Cards(vec![CardName::new("Great Dam")]);

        assert!(options.contains(&Answer::Card(CardName::new("Great Dam"))));
        assert!(!options.contains(&Answer::Card(CardName::new("Mine"))));
    }

    #[test]
    fn test_empty_option_sets() {
        assert!(InputOptions::Spaces(Vec::new()).is_empty());
        assert!(InputOptions::Amount { min: 1, max: 0 }.is_empty());
        assert!(!InputOptions::Amount { min: 0, max: 0 }.is_empty());
    }

    #[test]
    fn test_options_serialization() {
        let options = InputOptions::Amount { min: 0, max: 5 };
        let json = serde_json::to_string(&options).unwrap();
        let back: InputOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}
