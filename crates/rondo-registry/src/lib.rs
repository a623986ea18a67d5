//! Player registration for Rondo tournaments.
//!
//! Two records live here:
//!
//! - [`TournamentDirectory`] — which tournament each authority runs
//!   (at most one active tournament per authority).
//! - [`PlayerRegistry`] — each player's entry tokens, one per
//!   tournament, held from join time until a round claims them.
//!
//! Token minting itself is external; the registry talks to it through
//! the [`EntryIssuer`] trait.

mod directory;
mod error;
mod issuer;
mod registry;

pub use directory::TournamentDirectory;
pub use error::RegistryError;
pub use issuer::EntryIssuer;
pub use registry::PlayerRegistry;
