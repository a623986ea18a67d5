//! The room ledger: storage service for every room of one game kind.

use std::collections::HashMap;
use std::marker::PhantomData;

use rondo_types::{Address, GameKind, PlayerToken};

use crate::room::{AdmitKey, Membership, Room};
use crate::{RoomError, RoomEvent};

/// Owns every room of one game kind, keyed by room address.
///
/// This is the explicit key-value store behind the room operations:
/// address → room record, mutated only through the methods here. The
/// host model's "one operation at a time per address" exclusivity rule
/// maps onto `&mut self` — whoever holds the ledger holds the access
/// handle for every room in it.
///
/// Closed rooms are removed permanently; their addresses are never
/// reused and every later operation on them fails
/// [`RoomError::RoomMissing`].
pub struct RoomLedger<G: GameKind> {
    rooms: HashMap<Address, Room<G>>,

    /// Lifecycle events not yet drained by a consumer. Each room's
    /// emitter fires at most once (on closure), so one closure appears
    /// here exactly once.
    events: Vec<RoomEvent>,
}

impl<G: GameKind> RoomLedger<G> {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Creates a room under a fresh address owned by `owner`.
    ///
    /// `limited` chooses between a capacity-tracked membership list and
    /// an untracked room. Returns the new address together with the
    /// [`AdmitKey`] capability for admitting players — the only handle
    /// that [`add_players`](Self::add_players) accepts.
    pub fn create(&mut self, owner: Address, limited: bool) -> (Address, AdmitKey<G>) {
        let room = Address::fresh();
        self.rooms.insert(room, Room::new(owner, limited));
        tracing::info!(game = G::NAME, %room, %owner, limited, "room created");
        (
            room,
            AdmitKey {
                room,
                _game: PhantomData,
            },
        )
    }

    /// Returns the room's membership list, `None` if it is unlimited.
    pub fn players(&self, room: Address) -> Result<Option<&[PlayerToken]>, RoomError> {
        Ok(self.get(room)?.members.tokens())
    }

    /// Returns the membership list of a room the caller has already
    /// established to be limited.
    pub fn limited_players(&self, room: Address) -> Result<&[PlayerToken], RoomError> {
        self.players(room)?.ok_or(RoomError::NotLimitedRoom(room))
    }

    /// Scans the membership for a token owned by `player`.
    ///
    /// Scan order is insertion order, first match wins; token ownership
    /// is unique per room in practice, so the result is deterministic.
    /// Returns the token's position and address.
    pub fn find_player(
        &self,
        room: Address,
        player: Address,
    ) -> Result<(usize, Address), RoomError> {
        self.limited_players(room)?
            .iter()
            .enumerate()
            .find(|(_, token)| token.owner == player)
            .map(|(index, token)| (index, token.address))
            .ok_or(RoomError::UnknownPlayer(player))
    }

    /// Admits a batch of entry tokens into the room the key belongs to.
    ///
    /// Append-only; each supplied token ends up present exactly once, in
    /// input order. On an unlimited room this is a silent no-op — the
    /// room does not track membership.
    pub fn add_players(
        &mut self,
        key: &AdmitKey<G>,
        batch: Vec<PlayerToken>,
    ) -> Result<(), RoomError> {
        let room = key.room;
        match &mut self.get_mut(room)?.members {
            Membership::Unlimited => {
                tracing::warn!(game = G::NAME, %room, "admit ignored: unlimited room");
            }
            Membership::Limited(tokens) => {
                let admitted = batch.len();
                tokens.extend(batch);
                tracing::info!(
                    game = G::NAME,
                    %room,
                    admitted,
                    total = tokens.len(),
                    "players admitted"
                );
            }
        }
        Ok(())
    }

    /// Returns the authority that owns the room.
    ///
    /// Used to recover which tournament a room belongs to.
    pub fn owning_authority(&self, room: Address) -> Result<Address, RoomError> {
        Ok(self.get(room)?.owner)
    }

    /// Closes the room, firing its one-shot lifecycle event and
    /// permanently destroying its storage.
    ///
    /// Only the recorded owner may close. After this returns, `room` is
    /// invalid for every other operation on this ledger.
    pub fn close(&mut self, owner: Address, room: Address) -> Result<(), RoomError> {
        let record = self.get(room)?;
        if record.owner != owner {
            return Err(RoomError::NotRoomOwner {
                room,
                caller: owner,
            });
        }

        self.rooms.remove(&room);
        self.events.push(RoomEvent::Closed { room, owner });
        tracing::info!(game = G::NAME, %room, %owner, "room closed");
        Ok(())
    }

    /// Drains all emitted lifecycle events, oldest first.
    pub fn drain_events(&mut self) -> Vec<RoomEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns `true` if a room exists at this address.
    pub fn contains(&self, room: Address) -> bool {
        self.rooms.contains_key(&room)
    }

    /// Number of live rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no rooms are live.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn get(&self, room: Address) -> Result<&Room<G>, RoomError> {
        self.rooms.get(&room).ok_or(RoomError::RoomMissing(room))
    }

    fn get_mut(&mut self, room: Address) -> Result<&mut Room<G>, RoomError> {
        self.rooms
            .get_mut(&room)
            .ok_or(RoomError::RoomMissing(room))
    }
}

impl<G: GameKind> Default for RoomLedger<G> {
    fn default() -> Self {
        Self::new()
    }
}
