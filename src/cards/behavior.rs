//! The bespoke-logic extension point.
//!
//! Most cards are pure data: a [`CardDefinition`] the driver applies
//! mechanically. Cards whose effects cannot be expressed declaratively
//! implement [`CardBehavior`] (extra eligibility checks and play logic,
//! possibly yielding an interactive input) or [`OneShotAction`] (an
//! ability usable once per game per card instance). A [`Card`] couples
//! the definition with those optional pieces and an optional triggered
//! ability.

use crate::core::{Game, GameError, PlayerId};
use crate::inputs::NextStep;

use super::definition::{CardDefinition, CardName, TagTrigger};

/// Bespoke card logic beyond the declarative behavior.
///
/// Implementations must perform all validation before any mutation so
/// a discarded resolution never leaves partial state.
pub trait CardBehavior: Send + Sync {
    /// Extra eligibility beyond the declarative requirement.
    fn bespoke_can_play(&self, _game: &Game, _player: PlayerId) -> Result<bool, GameError> {
        Ok(true)
    }

    /// Extra play logic, run after the declarative behavior is applied.
    /// May yield an interactive input.
    fn bespoke_play(&self, _game: &mut Game, _player: PlayerId) -> Result<NextStep, GameError> {
        Ok(NextStep::Complete)
    }
}

/// A CEO-style action usable at most once per game per card instance.
///
/// The driver flips the instance's `disabled` flag before invoking
/// this, so the action itself never needs to guard re-entry.
pub trait OneShotAction: Send + Sync {
    fn action(&self, game: &mut Game, player: PlayerId) -> Result<NextStep, GameError>;
}

/// A complete card: definition plus optional bespoke pieces.
pub struct Card {
    definition: CardDefinition,
    trigger: Option<TagTrigger>,
    bespoke: Option<Box<dyn CardBehavior>>,
    action: Option<Box<dyn OneShotAction>>,
}

impl Card {
    /// A fully declarative card.
    #[must_use]
    pub fn automated(definition: CardDefinition) -> Self {
        Self {
            definition,
            trigger: None,
            bespoke: None,
            action: None,
        }
    }

    /// Attach a triggered ability (builder pattern).
    #[must_use]
    pub fn with_trigger(mut self, trigger: TagTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Attach bespoke play logic (builder pattern).
    #[must_use]
    pub fn with_bespoke(mut self, bespoke: impl CardBehavior + 'static) -> Self {
        self.bespoke = Some(Box::new(bespoke));
        self
    }

    /// Attach a one-shot action (builder pattern).
    #[must_use]
    pub fn with_action(mut self, action: impl OneShotAction + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// The immutable definition.
    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    /// The card's name.
    #[must_use]
    pub fn name(&self) -> &CardName {
        &self.definition.name
    }

    /// The triggered ability, if any.
    #[must_use]
    pub fn trigger(&self) -> Option<&TagTrigger> {
        self.trigger.as_ref()
    }

    /// The bespoke logic, if any.
    #[must_use]
    pub fn bespoke(&self) -> Option<&dyn CardBehavior> {
        self.bespoke.as_deref()
    }

    /// The one-shot action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&dyn OneShotAction> {
        self.action.as_deref()
    }

    /// Check if this card carries a one-shot action.
    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("definition", &self.definition)
            .field("trigger", &self.trigger)
            .field("bespoke", &self.bespoke.is_some())
            .field("action", &self.action.is_some())
            .finish()
    }
}
