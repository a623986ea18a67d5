//! Seams to the external match-creation and game-play collaborators.
//!
//! The orchestrator never builds matches or resolves play itself. It
//! drives these two traits, implemented by the surrounding game system
//! in production and by in-memory fakes in tests and demos.

use rondo_types::{Address, MoveCommitment, PlayerToken};

/// Creates match instances and distributes players into them.
pub trait Matchmaker {
    /// Advances the tournament to its next round, creating the round's
    /// match set. Returns the new match addresses.
    fn create_match_instances(
        &mut self,
        authority: Address,
        tournament: Address,
    ) -> Vec<Address>;

    /// Assigns the claimed entry tokens to matches.
    ///
    /// Contract: the returned list is parallel to `tokens` — element
    /// `i` is the match that token `i`'s player was assigned to. The
    /// orchestrator rejects any other shape before touching the index.
    fn distribute_players(
        &mut self,
        authority: Address,
        tournament: Address,
        tokens: Vec<PlayerToken>,
    ) -> Vec<Address>;
}

/// Records hashed moves for later reveal.
pub trait MoveBoard {
    /// Commits `player`'s blinded move in `game`.
    fn commit_move(&mut self, player: Address, game: Address, commitment: MoveCommitment);
}
