//! Error types for the orchestration layer.

use rondo_registry::RegistryError;
use rondo_types::Address;

/// Errors that can occur while orchestrating a round.
///
/// Like the lower layers, these are all caller-fault abort conditions;
/// there is no transient/retriable class here.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrchestratorError {
    /// A registry or directory contract violation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The player has no match this round and the caller required one.
    #[error("player {0} is not matched this round")]
    PlayerUnmatched(Address),

    /// The same player appeared twice in one round's assignment.
    #[error("player {0} already mapped to a match this round")]
    MappingAlreadyExists(Address),

    /// A lookup required a mapping entry that does not exist.
    #[error("no match mapping for player {0}")]
    MappingMissing(Address),

    /// The match-distribution collaborator broke its parallel-list
    /// contract (one match address per input token).
    #[error("expected {expected} match assignments, collaborator returned {got}")]
    AssignmentMismatch { expected: usize, got: usize },
}
