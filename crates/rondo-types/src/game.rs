//! Game-kind tags and the commit side of commit/reveal play.

use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::Address;

/// Marker trait tagging rooms and ledgers by game type.
///
/// The system can run several game types at once; the tag keeps a room
/// ledger for one game from accepting handles that belong to another.
/// Implementors are zero-sized markers, never instantiated state.
pub trait GameKind: Send + Sync + 'static {
    /// Human-readable name, used in logs.
    const NAME: &'static str;
}

/// The built-in game kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RockPaperScissors;

impl GameKind for RockPaperScissors {
    const NAME: &'static str = "rock-paper-scissors";
}

/// One of the three throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Returns `true` if `self` wins against `other`.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }
}

/// A blinded move: deterministic digest of (player, move, salt).
///
/// The salt keeps the digest from being a three-way lookup table; the
/// reveal collaborator recomputes it to verify the reveal. This is an
/// application-level commitment, not a cryptographic fairness proof —
/// that layer is out of scope here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveCommitment(u64);

impl MoveCommitment {
    /// Commits `player`'s move under `salt`.
    pub fn new(player: Address, mv: Move, salt: u64) -> Self {
        let mut hasher = DefaultHasher::new();
        player.as_bytes().hash(&mut hasher);
        mv.hash(&mut hasher);
        salt.hash(&mut hasher);
        MoveCommitment(hasher.finish())
    }

    /// The raw digest.
    pub fn digest(self) -> u64 {
        self.0
    }

    /// Checks a reveal against this commitment.
    pub fn verifies(self, player: Address, mv: Move, salt: u64) -> bool {
        Self::new(player, mv, salt) == self
    }
}
