//! Seam to the external token-issuance collaborator.

use rondo_types::{Address, PlayerToken};

/// Mints tournament entry tokens.
///
/// The registry never fabricates credentials itself — it requests them
/// here during [`PlayerRegistry::join`] and stores whatever comes back.
/// Production wires this to the real token/NFT issuer; tests and demos
/// use a trivial in-memory mint.
///
/// [`PlayerRegistry::join`]: crate::PlayerRegistry::join
pub trait EntryIssuer {
    /// Mints (or returns) `player`'s credential for `tournament`.
    fn issue_entry_token(
        &mut self,
        player: Address,
        tournament: Address,
        display_name: &str,
    ) -> PlayerToken;
}
