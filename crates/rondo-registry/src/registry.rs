//! The player registry: entry tokens held between join and assignment.

use std::collections::HashMap;

use rondo_types::{Address, PlayerToken};

use crate::{EntryIssuer, RegistryError, TournamentDirectory};

/// Tracks every player's tournament entry tokens.
///
/// A player's record maps tournament address → entry token, created
/// lazily on their first join. The invariant is one token per
/// (player, tournament) pair: re-joining upserts the stored token,
/// never duplicates it. Tokens leave the registry when a round claims
/// them — ownership transfers to the match at that point.
pub struct PlayerRegistry {
    entries: HashMap<Address, HashMap<Address, PlayerToken>>,
}

impl PlayerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Joins `player` into the authority's active tournament.
    ///
    /// Derives the player's display name from their address, requests an
    /// entry token from the issuer, and upserts it into the player's
    /// record. Idempotent per tournament.
    ///
    /// # Errors
    /// [`RegistryError::TournamentNotFound`] if the authority has no
    /// configured tournament.
    pub fn join(
        &mut self,
        issuer: &mut impl EntryIssuer,
        directory: &TournamentDirectory,
        player: Address,
        authority: Address,
    ) -> Result<(), RegistryError> {
        let tournament = directory.require(authority)?;
        let display_name = player.display_name();
        let token = issuer.issue_entry_token(player, tournament, &display_name);

        self.entries
            .entry(player)
            .or_default()
            .insert(tournament, token);

        tracing::info!(%player, %tournament, name = %display_name, "player joined");
        Ok(())
    }

    /// Removes and returns the player's token for `tournament`.
    ///
    /// Called by the orchestrator when moving the player into a round.
    ///
    /// # Errors
    /// - [`RegistryError::PlayerNotRegistered`] — no record at all
    /// - [`RegistryError::PlayerMissingToken`] — record exists, but no
    ///   token for this tournament
    pub fn claim(
        &mut self,
        player: Address,
        tournament: Address,
    ) -> Result<PlayerToken, RegistryError> {
        self.entries
            .get_mut(&player)
            .ok_or(RegistryError::PlayerNotRegistered(player))?
            .remove(&tournament)
            .ok_or(RegistryError::PlayerMissingToken { player, tournament })
    }

    /// Puts a token back under its owner's record, undoing a claim.
    ///
    /// Used when a round aborts after its tokens were already claimed:
    /// the batch's tokens return so the players stay assignable.
    pub fn deposit(&mut self, token: PlayerToken) {
        self.entries
            .entry(token.owner)
            .or_default()
            .insert(token.tournament, token);
    }

    /// Returns `true` if the player has ever joined a tournament.
    pub fn is_registered(&self, player: Address) -> bool {
        self.entries.contains_key(&player)
    }

    /// Returns `true` if the player currently holds a token for
    /// `tournament`.
    pub fn has_token(&self, player: Address, tournament: Address) -> bool {
        self.token(player, tournament).is_some()
    }

    /// The player's current token for `tournament`, if any.
    pub fn token(&self, player: Address, tournament: Address) -> Option<&PlayerToken> {
        self.entries.get(&player)?.get(&tournament)
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
