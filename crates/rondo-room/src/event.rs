//! Room lifecycle events.

use rondo_types::Address;
use serde::{Deserialize, Serialize};

/// A lifecycle event emitted by a room.
///
/// The emitter is registered when the room is created and fires exactly
/// once, on closure. Events outlive the room they describe — they stay
/// in the ledger's log after the room's storage is destroyed, until a
/// consumer drains them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomEvent {
    /// The room was closed by its owner and its storage destroyed.
    Closed { room: Address, owner: Address },
}
