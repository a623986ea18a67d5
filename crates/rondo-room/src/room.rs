//! The room record: membership, ownership, and the admit capability.

use std::marker::PhantomData;

use rondo_types::{Address, GameKind, PlayerToken};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

/// Whether a room tracks its membership.
///
/// A limited room owns the authoritative list of entry tokens assigned
/// to its match, in insertion order. An unlimited room does no capacity
/// tracking at all — membership queries answer "unsupported", and
/// admissions are silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Membership {
    /// No membership tracking.
    Unlimited,
    /// Tracked membership, in insertion order.
    Limited(Vec<PlayerToken>),
}

impl Membership {
    /// Returns the tracked list, or `None` for unlimited rooms.
    pub fn tokens(&self) -> Option<&[PlayerToken]> {
        match self {
            Membership::Unlimited => None,
            Membership::Limited(tokens) => Some(tokens),
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One match's container of player entry tokens.
///
/// Owned by exactly one authority address for its entire life. The type
/// parameter tags the room with its game kind so records of different
/// games never mix in one ledger.
pub struct Room<G: GameKind> {
    pub(crate) owner: Address,
    pub(crate) members: Membership,
    pub(crate) _game: PhantomData<G>,
}

impl<G: GameKind> Room<G> {
    pub(crate) fn new(owner: Address, limited: bool) -> Self {
        let members = if limited {
            Membership::Limited(Vec::new())
        } else {
            Membership::Unlimited
        };
        Room {
            owner,
            members,
            _game: PhantomData,
        }
    }

    /// The authority that owns this room.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The room's membership.
    pub fn members(&self) -> &Membership {
        &self.members
    }
}

// ---------------------------------------------------------------------------
// AdmitKey
// ---------------------------------------------------------------------------

/// Capability to admit players into one specific room.
///
/// Admission is privileged: only the round orchestration side may add
/// players, never arbitrary holders of the room's address. Instead of a
/// friend-style access list, [`RoomLedger::create`] returns this handle
/// to its caller, who passes it along to whoever distributes players.
/// It cannot be constructed or cloned outside this crate, so holding one
/// IS the authorization.
///
/// [`RoomLedger::create`]: crate::RoomLedger::create
#[derive(Debug)]
pub struct AdmitKey<G: GameKind> {
    pub(crate) room: Address,
    pub(crate) _game: PhantomData<G>,
}

impl<G: GameKind> AdmitKey<G> {
    /// The room this key admits into.
    pub fn room(&self) -> Address {
        self.room
    }
}
