//! Card catalogue.
//!
//! Name-keyed registry of cards, constructed once at catalogue-load
//! time and shared across games as templates. All per-instance mutable
//! state (the one-shot `disabled` flag) lives in each game's tableau,
//! never here, so concurrent games cannot interfere.

use rustc_hash::FxHashMap;

use super::behavior::Card;
use super::definition::CardName;

/// Registry of card templates.
#[derive(Debug, Default)]
pub struct Catalogue {
    cards: FxHashMap<CardName, Card>,
}

impl Catalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card, returning the previous card of the same name
    /// if one was replaced.
    pub fn register(&mut self, card: Card) -> Option<Card> {
        self.cards.insert(card.name().clone(), card)
    }

    /// Look up a card by name.
    #[must_use]
    pub fn get(&self, name: &CardName) -> Option<&Card> {
        self.cards.get(name)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over registered cards in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    #[test]
    fn test_register_and_get() {
        let mut catalogue = Catalogue::new();
        assert!(catalogue.is_empty());

        catalogue.register(Card::automated(CardDefinition::new("Mine", 4)));

        assert_eq!(catalogue.len(), 1);
        assert!(catalogue.get(&CardName::new("Mine")).is_some());
        assert!(catalogue.get(&CardName::new("Dome")).is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut catalogue = Catalogue::new();

        catalogue.register(Card::automated(CardDefinition::new("Mine", 4)));
        let previous = catalogue.register(Card::automated(CardDefinition::new("Mine", 6)));

        assert!(previous.is_some());
        assert_eq!(catalogue.len(), 1);
        assert_eq!(
            catalogue.get(&CardName::new("Mine")).unwrap().definition().cost,
            6
        );
    }
}
