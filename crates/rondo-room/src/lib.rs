//! Room lifecycle management for Rondo.
//!
//! A room is the per-match container of player entry tokens. It is owned
//! by exactly one authority for its whole life, mutated only through the
//! operations here, and permanently destroyed on close — a closed room's
//! address is never valid again.
//!
//! # Key types
//!
//! - [`RoomLedger`] — storage service owning every room of one game kind
//! - [`Membership`] — limited (tracked list) vs. unlimited room
//! - [`AdmitKey`] — capability handle gating `add_players`
//! - [`RoomEvent`] — one-shot lifecycle events (closure)

mod error;
mod event;
mod ledger;
mod room;

pub use error::RoomError;
pub use event::RoomEvent;
pub use ledger::RoomLedger;
pub use room::{AdmitKey, Membership, Room};
