//! Error types for the registry layer.

use rondo_types::Address;

/// Errors that can occur during registration operations.
///
/// Caller-fault, non-retriable: each one aborts the enclosing operation
/// with nothing partially applied.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The authority has no configured tournament.
    #[error("authority {0} has no tournament")]
    TournamentNotFound(Address),

    /// The player never joined anything — no registry record exists.
    #[error("player {0} is not registered")]
    PlayerNotRegistered(Address),

    /// The player is registered but holds no token for this tournament
    /// (never joined it, or the token was already claimed by a round).
    #[error("player {player} holds no token for tournament {tournament}")]
    PlayerMissingToken {
        player: Address,
        tournament: Address,
    },
}
