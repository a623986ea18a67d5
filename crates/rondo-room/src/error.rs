//! Error types for the room layer.

use rondo_types::Address;

/// Errors that can occur during room operations.
///
/// All of these are caller-fault contract violations: the enclosing
/// operation aborts and nothing is partially applied.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoomError {
    /// No room exists at this address (never created, or already closed).
    #[error("no room at {0}")]
    RoomMissing(Address),

    /// The caller is not the room's recorded owner.
    #[error("{caller} does not own room {room}")]
    NotRoomOwner { room: Address, caller: Address },

    /// No token in the room's membership is owned by this player.
    #[error("player {0} is not in the room")]
    UnknownPlayer(Address),

    /// The operation requires a limited room, but this one is unlimited.
    #[error("room {0} does not track membership")]
    NotLimitedRoom(Address),
}
