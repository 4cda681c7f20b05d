//! Core state: player identity, resource vocabulary, the ledger,
//! the game aggregate, errors, and the structured log.

pub mod error;
pub mod game;
pub mod ledger;
pub mod log;
pub mod player;
pub mod resources;

pub use error::GameError;
pub use game::Game;
pub use ledger::Ledger;
pub use log::LogEntry;
pub use player::{Player, PlayerId, PlayerMap, TableauCard};
pub use resources::{Resource, Tag};
