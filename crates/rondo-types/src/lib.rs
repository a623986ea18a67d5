//! Shared types for the Rondo tournament core.
//!
//! Everything that crosses a component boundary lives here:
//!
//! - [`Address`] — opaque account/object identity
//! - [`PlayerToken`] — a player's tournament entry credential
//! - [`GameKind`] — marker trait tagging rooms by game type
//! - [`Move`], [`MoveCommitment`] — the commit side of commit/reveal play
//!
//! This crate has no behavior of its own beyond identity and formatting;
//! the state machines that consume these types live in `rondo-room`,
//! `rondo-registry`, and `rondo`.

mod address;
mod game;
mod token;

pub use address::Address;
pub use game::{GameKind, Move, MoveCommitment, RockPaperScissors};
pub use token::PlayerToken;
