//! Error kinds surfaced by the resolution core.
//!
//! All variants are surfaced synchronously from the call that detects
//! them; none are silently swallowed. The turn/session layer translates
//! them into player-facing messages.

use thiserror::Error;

use crate::board::SpaceId;

/// Errors raised during card resolution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A play precondition failed. Recoverable: surfaced to the caller
    /// as "cannot play".
    #[error("requirement not met: {0}")]
    RequirementNotMet(String),

    /// A tile placement targeted an occupied or ineligible space.
    /// Recoverable: retry with a fresh, filtered option set.
    #[error("invalid placement on {space}: {reason}")]
    InvalidPlacement { space: SpaceId, reason: String },

    /// An answer was not a member of the offered options. Recoverable:
    /// no mutation occurred, the caller must re-prompt.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// A referenced track, space, or resolution state does not exist.
    /// Fatal to the current resolution; other players' state is intact.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}
