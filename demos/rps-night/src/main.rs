//! One tournament night of rock-paper-scissors, end to end.
//!
//! Wires an in-memory collaborator stack (token mint, room-backed
//! matchmaker, move board) into the orchestrator and runs two rounds:
//! configure → join → start → assign → commit moves → reveal and score
//! → close rooms.
//!
//! Run with `RUST_LOG=info cargo run -p rps-night` to watch the
//! lifecycle logs.

use std::collections::HashMap;

use rand::Rng;
use rondo::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// In-memory collaborators
// ---------------------------------------------------------------------------

/// The "house": mints entry tokens, opens a room per pair of players,
/// and keeps the committed moves.
struct Tabletop {
    rooms: RoomLedger<RockPaperScissors>,
    keys: HashMap<Address, AdmitKey<RockPaperScissors>>,
    commitments: HashMap<(Address, Address), MoveCommitment>,
}

impl Tabletop {
    fn new() -> Self {
        Self {
            rooms: RoomLedger::new(),
            keys: HashMap::new(),
            commitments: HashMap::new(),
        }
    }
}

impl EntryIssuer for Tabletop {
    fn issue_entry_token(
        &mut self,
        player: Address,
        tournament: Address,
        display_name: &str,
    ) -> PlayerToken {
        PlayerToken {
            address: Address::fresh(),
            owner: player,
            tournament,
            display_name: display_name.to_owned(),
        }
    }
}

impl Matchmaker for Tabletop {
    fn create_match_instances(
        &mut self,
        _authority: Address,
        tournament: Address,
    ) -> Vec<Address> {
        tracing::info!(%tournament, "next round's tables are open");
        Vec::new()
    }

    fn distribute_players(
        &mut self,
        authority: Address,
        _tournament: Address,
        tokens: Vec<PlayerToken>,
    ) -> Vec<Address> {
        let mut assigned = Vec::with_capacity(tokens.len());
        for pair in tokens.chunks(2) {
            let (room, key) = self.rooms.create(authority, true);
            self.rooms
                .add_players(&key, pair.to_vec())
                .expect("room just created");
            self.keys.insert(key.room(), key);
            assigned.extend(std::iter::repeat_n(room, pair.len()));
        }
        assigned
    }
}

impl MoveBoard for Tabletop {
    fn commit_move(&mut self, player: Address, game: Address, commitment: MoveCommitment) {
        tracing::debug!(%player, %game, digest = commitment.digest(), "commitment recorded");
        self.commitments.insert((game, player), commitment);
    }
}

// ---------------------------------------------------------------------------
// The night itself
// ---------------------------------------------------------------------------

fn random_move(rng: &mut impl Rng) -> Move {
    match rng.random_range(0..3) {
        0 => Move::Rock,
        1 => Move::Paper,
        _ => Move::Scissors,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = rand::rng();
    let mut house = Tabletop::new();
    let mut orch = RoundOrchestrator::new();

    let authority = Address::fresh();
    let tournament = Address::fresh();
    orch.configure_tournament(authority, tournament);

    let players: Vec<Address> = (0..6).map(|_| Address::fresh()).collect();

    for round in 1..=2 {
        tracing::info!(round, "round begins");

        // Everyone (re-)joins; join is idempotent per tournament.
        for &player in &players {
            orch.join(&mut house, player, authority)
                .expect("tournament is configured");
        }

        orch.start_round(&mut house, authority, authority)
            .expect("tournament is configured");
        orch.assign_players(&mut house, authority, authority, &players)
            .expect("every player holds a token");

        // Each player commits a random move under a random salt,
        // remembering both for the reveal.
        let mut plays = Vec::with_capacity(players.len());
        for &player in &players {
            let mv = random_move(&mut rng);
            let salt: u64 = rng.random();
            orch.submit_move(&mut house, player, authority, mv, salt, false)
                .expect("every player is matched");
            plays.push((player, mv, salt));
        }

        tracing::info!(
            round,
            tables = house.rooms.len(),
            commitments = house.commitments.len(),
            "round in play"
        );

        // Reveal: the house checks each move against its commitment,
        // then scores the tables.
        let index = orch.index(authority).expect("round is in play");
        let mut tables: HashMap<Address, Vec<(Address, Move)>> = HashMap::new();
        for (player, mv, salt) in plays {
            let room = index.require(player).expect("every player is matched");
            let commitment = house.commitments[&(room, player)];
            if commitment.verifies(player, mv, salt) {
                tables.entry(room).or_default().push((player, mv));
            } else {
                tracing::warn!(%player, "reveal does not match the commitment");
            }
        }
        for (room, reveals) in &tables {
            if let [(a, ma), (b, mb)] = reveals[..] {
                if ma.beats(mb) {
                    tracing::info!(table = %room, winner = %a, "table decided");
                } else if mb.beats(ma) {
                    tracing::info!(table = %room, winner = %b, "table decided");
                } else {
                    tracing::info!(table = %room, "table drawn");
                }
            }
        }

        // Tear the round down: the authority closes every table.
        for &room in tables.keys() {
            if house.rooms.contains(room) {
                house.rooms.close(authority, room).expect("owner closes own room");
            }
        }
        for event in house.rooms.drain_events() {
            tracing::info!(?event, "lifecycle event");
        }
        house.commitments.clear();
    }

    tracing::info!("night over, all tables closed");
}
