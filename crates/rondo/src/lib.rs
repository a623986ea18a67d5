//! # Rondo
//!
//! On-chain-style matchmaking and round-lifecycle core for multiplayer
//! tournament games.
//!
//! The hard part lives in three cooperating state machines:
//!
//! - [`RoomLedger`](rondo_room::RoomLedger) — per-match player
//!   containers with single-owner lifecycle (crate `rondo-room`)
//! - [`PlayerRegistry`](rondo_registry::PlayerRegistry) — entry tokens
//!   held between join and assignment (crate `rondo-registry`)
//! - [`RoundOrchestrator`] — drives a round end to end: start, bulk
//!   assignment, move submission (this crate, together with the
//!   per-round [`MatchIndex`])
//!
//! Game rules, token minting, and tournament creation are external;
//! they plug in through the [`Matchmaker`], [`MoveBoard`], and
//! [`EntryIssuer`](rondo_registry::EntryIssuer) traits.
//!
//! Every operation is synchronous and runs to completion: validation
//! happens before any write, so a failed call leaves no partial state.

mod collab;
mod error;
mod index;
mod orchestrator;

pub use collab::{Matchmaker, MoveBoard};
pub use error::OrchestratorError;
pub use index::MatchIndex;
pub use orchestrator::RoundOrchestrator;

/// One-stop imports for applications building on Rondo.
pub mod prelude {
    pub use crate::{
        Matchmaker, MatchIndex, MoveBoard, OrchestratorError, RoundOrchestrator,
    };
    pub use rondo_registry::{
        EntryIssuer, PlayerRegistry, RegistryError, TournamentDirectory,
    };
    pub use rondo_room::{AdmitKey, Membership, RoomError, RoomEvent, RoomLedger};
    pub use rondo_types::{
        Address, GameKind, Move, MoveCommitment, PlayerToken, RockPaperScissors,
    };
}
