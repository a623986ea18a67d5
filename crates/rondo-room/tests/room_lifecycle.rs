//! Integration tests for the room lifecycle and membership contract.

use rondo_room::{RoomError, RoomEvent, RoomLedger};
use rondo_types::{Address, PlayerToken, RockPaperScissors};

// =========================================================================
// Helpers
// =========================================================================

fn addr(n: u64) -> Address {
    Address::from_low(n)
}

fn token(player: u64) -> PlayerToken {
    PlayerToken {
        address: Address::from_low(1000 + player),
        owner: addr(player),
        tournament: addr(900),
        display_name: format!("player-{player}"),
    }
}

fn ledger() -> RoomLedger<RockPaperScissors> {
    RoomLedger::new()
}

// =========================================================================
// create / players
// =========================================================================

#[test]
fn test_create_returns_unique_addresses() {
    let mut rooms = ledger();
    let (r1, k1) = rooms.create(addr(1), true);
    let (r2, k2) = rooms.create(addr(1), true);
    assert_ne!(r1, r2);
    assert_eq!(rooms.len(), 2);
    // Each admit key targets the room it was created with.
    assert_eq!(k1.room(), r1);
    assert_eq!(k2.room(), r2);
}

#[test]
fn test_create_limited_room_starts_with_empty_membership() {
    let mut rooms = ledger();
    let (room, _) = rooms.create(addr(1), true);
    assert_eq!(rooms.players(room).unwrap(), Some(&[][..]));
}

#[test]
fn test_players_on_unlimited_room_returns_none() {
    let mut rooms = ledger();
    let (room, _) = rooms.create(addr(1), false);
    assert_eq!(rooms.players(room).unwrap(), None);
}

#[test]
fn test_players_on_unknown_address_fails() {
    let rooms = ledger();
    let result = rooms.players(addr(404));
    assert_eq!(result, Err(RoomError::RoomMissing(addr(404))));
}

#[test]
fn test_limited_players_on_unlimited_room_fails() {
    let mut rooms = ledger();
    let (room, _) = rooms.create(addr(1), false);
    assert_eq!(
        rooms.limited_players(room),
        Err(RoomError::NotLimitedRoom(room))
    );
}

// =========================================================================
// add_players
// =========================================================================

#[test]
fn test_add_players_appends_every_token_exactly_once() {
    let mut rooms = ledger();
    let (room, key) = rooms.create(addr(1), true);

    rooms.add_players(&key, vec![token(1), token(2)]).unwrap();
    rooms.add_players(&key, vec![token(3)]).unwrap();

    let members = rooms.limited_players(room).unwrap();
    assert_eq!(members.len(), 3);
    for player in 1..=3 {
        let present = members
            .iter()
            .filter(|t| t.owner == addr(player))
            .count();
        assert_eq!(present, 1, "token for player {player} present once");
    }
}

#[test]
fn test_add_players_grows_membership_by_batch_size() {
    let mut rooms = ledger();
    let (room, key) = rooms.create(addr(1), true);

    rooms.add_players(&key, vec![token(1)]).unwrap();
    assert_eq!(rooms.limited_players(room).unwrap().len(), 1);

    let batch: Vec<_> = (2..=5).map(token).collect();
    rooms.add_players(&key, batch).unwrap();
    assert_eq!(rooms.limited_players(room).unwrap().len(), 5);
}

#[test]
fn test_add_players_on_unlimited_room_is_a_no_op() {
    let mut rooms = ledger();
    let (room, key) = rooms.create(addr(1), false);

    rooms.add_players(&key, vec![token(1), token(2)]).unwrap();

    // Membership queries still answer "unsupported".
    assert_eq!(rooms.players(room).unwrap(), None);
}

#[test]
fn test_add_players_empty_batch_changes_nothing() {
    let mut rooms = ledger();
    let (room, key) = rooms.create(addr(1), true);
    rooms.add_players(&key, vec![]).unwrap();
    assert!(rooms.limited_players(room).unwrap().is_empty());
}

// =========================================================================
// find_player
// =========================================================================

#[test]
fn test_find_player_returns_index_and_token_address() {
    let mut rooms = ledger();
    let (room, key) = rooms.create(addr(1), true);
    rooms
        .add_players(&key, vec![token(1), token(2), token(3)])
        .unwrap();

    let (index, token_addr) = rooms.find_player(room, addr(2)).unwrap();
    assert_eq!(index, 1);
    assert_eq!(token_addr, Address::from_low(1002));
}

#[test]
fn test_find_player_fails_for_every_non_member() {
    let mut rooms = ledger();
    let (room, key) = rooms.create(addr(1), true);
    rooms.add_players(&key, vec![token(1), token(2)]).unwrap();

    for outsider in [3, 4, 99] {
        assert_eq!(
            rooms.find_player(room, addr(outsider)),
            Err(RoomError::UnknownPlayer(addr(outsider)))
        );
    }
}

#[test]
fn test_find_player_on_unlimited_room_fails() {
    let mut rooms = ledger();
    let (room, _) = rooms.create(addr(1), false);
    assert_eq!(
        rooms.find_player(room, addr(1)),
        Err(RoomError::NotLimitedRoom(room))
    );
}

// =========================================================================
// owning_authority / close
// =========================================================================

#[test]
fn test_owning_authority_returns_creator() {
    let mut rooms = ledger();
    let (room, _) = rooms.create(addr(7), true);
    assert_eq!(rooms.owning_authority(room).unwrap(), addr(7));
}

#[test]
fn test_close_by_owner_succeeds() {
    let mut rooms = ledger();
    let (room, _) = rooms.create(addr(1), true);

    rooms.close(addr(1), room).unwrap();

    assert!(!rooms.contains(room));
    assert!(rooms.is_empty());
}

#[test]
fn test_close_by_non_owner_fails_and_room_survives() {
    let mut rooms = ledger();
    let (room, _) = rooms.create(addr(1), true);

    let result = rooms.close(addr(2), room);

    assert_eq!(
        result,
        Err(RoomError::NotRoomOwner {
            room,
            caller: addr(2)
        })
    );
    assert!(rooms.contains(room));
}

#[test]
fn test_closed_room_rejects_all_further_operations() {
    let mut rooms = ledger();
    let (room, key) = rooms.create(addr(1), true);
    rooms.close(addr(1), room).unwrap();

    assert_eq!(rooms.players(room), Err(RoomError::RoomMissing(room)));
    assert_eq!(rooms.owning_authority(room), Err(RoomError::RoomMissing(room)));
    assert_eq!(
        rooms.find_player(room, addr(1)),
        Err(RoomError::RoomMissing(room))
    );
    assert_eq!(
        rooms.add_players(&key, vec![token(1)]),
        Err(RoomError::RoomMissing(room))
    );
    assert_eq!(rooms.close(addr(1), room), Err(RoomError::RoomMissing(room)));
}

// =========================================================================
// Events
// =========================================================================

#[test]
fn test_close_emits_the_lifecycle_event_once() {
    let mut rooms = ledger();
    let (room, _) = rooms.create(addr(1), true);

    assert!(rooms.drain_events().is_empty(), "no event before close");

    rooms.close(addr(1), room).unwrap();

    let events = rooms.drain_events();
    assert_eq!(
        events,
        vec![RoomEvent::Closed {
            room,
            owner: addr(1)
        }]
    );
    assert!(rooms.drain_events().is_empty(), "event fires exactly once");
}

#[test]
fn test_failed_close_emits_nothing() {
    let mut rooms = ledger();
    let (room, _) = rooms.create(addr(1), true);

    let _ = rooms.close(addr(2), room);

    assert!(rooms.drain_events().is_empty());
}

#[test]
fn test_events_from_several_rooms_arrive_oldest_first() {
    let mut rooms = ledger();
    let (r1, _) = rooms.create(addr(1), true);
    let (r2, _) = rooms.create(addr(1), false);

    rooms.close(addr(1), r2).unwrap();
    rooms.close(addr(1), r1).unwrap();

    let events = rooms.drain_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], RoomEvent::Closed { room, .. } if room == r2));
    assert!(matches!(events[1], RoomEvent::Closed { room, .. } if room == r1));
}
