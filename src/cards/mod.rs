//! Card model: immutable definitions, declarative behavior, the
//! bespoke-logic extension point, and the catalogue.

pub mod behavior;
pub mod catalogue;
pub mod definition;
pub mod samples;

pub use behavior::{Card, CardBehavior, OneShotAction};
pub use catalogue::Catalogue;
pub use definition::{
    Behavior, CardDefinition, CardName, PlacementConstraint, TagTrigger, TileBehavior,
};
