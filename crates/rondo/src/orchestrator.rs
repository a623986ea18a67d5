//! The round orchestrator: drives one round transition end to end.

use std::collections::{HashMap, HashSet};

use rondo_registry::{EntryIssuer, PlayerRegistry, TournamentDirectory};
use rondo_types::{Address, Move, MoveCommitment};

use crate::{MatchIndex, Matchmaker, MoveBoard, OrchestratorError};

/// Sequences round transitions for every tournament authority.
///
/// Owns the tournament directory, the player registry, and one
/// [`MatchIndex`] per authority. Each public method is one atomic
/// operation in the host model: it validates everything it needs before
/// its first write, so a failure leaves all three records untouched.
///
/// Per authority the implicit lifecycle is
/// `Idle → RoundStarting → PlayersAssigning → RoundActive → Idle`,
/// expressed through the presence of per-round resources (the index
/// contents) rather than a status field.
pub struct RoundOrchestrator {
    directory: TournamentDirectory,
    registry: PlayerRegistry,
    indexes: HashMap<Address, MatchIndex>,
}

impl RoundOrchestrator {
    /// Creates an orchestrator with no tournaments, players, or rounds.
    pub fn new() -> Self {
        Self {
            directory: TournamentDirectory::new(),
            registry: PlayerRegistry::new(),
            indexes: HashMap::new(),
        }
    }

    /// Records the authority's active tournament.
    pub fn configure_tournament(&mut self, authority: Address, tournament: Address) {
        self.directory.configure(authority, tournament);
    }

    /// Joins a player into the authority's tournament.
    ///
    /// # Errors
    /// [`RegistryError::TournamentNotFound`] if the authority has no
    /// configured tournament.
    ///
    /// [`RegistryError::TournamentNotFound`]: rondo_registry::RegistryError::TournamentNotFound
    pub fn join(
        &mut self,
        issuer: &mut impl EntryIssuer,
        player: Address,
        authority: Address,
    ) -> Result<(), OrchestratorError> {
        self.registry
            .join(issuer, &self.directory, player, authority)?;
        Ok(())
    }

    /// Starts the next round: asks the matchmaker to create the round's
    /// match set. Returns the new match addresses.
    pub fn start_round(
        &mut self,
        matchmaker: &mut impl Matchmaker,
        fee_payer: Address,
        authority: Address,
    ) -> Result<Vec<Address>, OrchestratorError> {
        let tournament = self.directory.require(authority)?;
        let matches = matchmaker.create_match_instances(authority, tournament);
        tracing::info!(
            %authority,
            %tournament,
            %fee_payer,
            matches = matches.len(),
            "round started"
        );
        Ok(matches)
    }

    /// Bulk-assigns waiting players into this round's matches.
    ///
    /// Two-phase, all-or-nothing. Phase one validates the whole batch —
    /// every address must be a registered player holding a token for the
    /// authority's tournament, with no duplicates — touching nothing.
    /// Phase two claims every token, hands them to the matchmaker, and
    /// rebuilds the authority's index from the parallel (player, match)
    /// pairs, superseding the previous round's assignments.
    ///
    /// # Errors
    /// - [`RegistryError`] variants when a player fails validation —
    ///   the whole batch aborts, no token is claimed, no index entry
    ///   written
    /// - [`OrchestratorError::MappingAlreadyExists`] on a duplicate
    ///   address in the batch
    /// - [`OrchestratorError::AssignmentMismatch`] if the matchmaker
    ///   breaks its parallel-list contract — the claimed tokens are
    ///   deposited back first, so the players stay assignable
    ///
    /// [`RegistryError`]: rondo_registry::RegistryError
    pub fn assign_players(
        &mut self,
        matchmaker: &mut impl Matchmaker,
        fee_payer: Address,
        authority: Address,
        players: &[Address],
    ) -> Result<(), OrchestratorError> {
        let tournament = self.directory.require(authority)?;

        // Phase one: validate everything, write nothing.
        let mut seen = HashSet::with_capacity(players.len());
        for &player in players {
            if !seen.insert(player) {
                return Err(OrchestratorError::MappingAlreadyExists(player));
            }
            // Probe the registry so the right error names the failing
            // player before any token moves.
            if !self.registry.is_registered(player) {
                return Err(rondo_registry::RegistryError::PlayerNotRegistered(player).into());
            }
            if !self.registry.has_token(player, tournament) {
                return Err(rondo_registry::RegistryError::PlayerMissingToken {
                    player,
                    tournament,
                }
                .into());
            }
        }

        // Phase two: claim every token. Cannot fail after validation.
        let mut tokens = Vec::with_capacity(players.len());
        for &player in players {
            tokens.push(self.registry.claim(player, tournament)?);
        }

        let games = matchmaker.distribute_players(authority, tournament, tokens.clone());
        if games.len() != players.len() {
            // Collaborator fault: return every claimed token so the
            // failed batch strands nobody.
            tracing::warn!(
                %authority,
                expected = players.len(),
                got = games.len(),
                "matchmaker returned a mismatched assignment list"
            );
            for token in tokens {
                self.registry.deposit(token);
            }
            return Err(OrchestratorError::AssignmentMismatch {
                expected: players.len(),
                got: games.len(),
            });
        }

        self.indexes
            .entry(authority)
            .or_default()
            .rebuild(players.iter().copied().zip(games))?;

        tracing::info!(
            %authority,
            %tournament,
            %fee_payer,
            assigned = players.len(),
            "players assigned to matches"
        );
        Ok(())
    }

    /// Submits a player's blinded move for their current match.
    ///
    /// Builds the commitment from the caller-supplied move and salt and
    /// records it with the game-move collaborator. Returns `true` if a
    /// move was committed, `false` if the player is unmatched and
    /// `allow_unmatched` permits that.
    ///
    /// # Errors
    /// [`OrchestratorError::PlayerUnmatched`] if the player has no match
    /// this round and `allow_unmatched` is `false`.
    pub fn submit_move(
        &self,
        board: &mut impl MoveBoard,
        player: Address,
        authority: Address,
        mv: Move,
        salt: u64,
        allow_unmatched: bool,
    ) -> Result<bool, OrchestratorError> {
        let assigned = self
            .indexes
            .get(&authority)
            .and_then(|index| index.lookup(player));

        let Some(game) = assigned else {
            if allow_unmatched {
                return Ok(false);
            }
            return Err(OrchestratorError::PlayerUnmatched(player));
        };

        board.commit_move(player, game, MoveCommitment::new(player, mv, salt));
        tracing::info!(%player, %game, "move committed");
        Ok(true)
    }

    /// The match a player is assigned to this round, if any.
    pub fn assigned_match(&self, authority: Address, player: Address) -> Option<Address> {
        self.indexes.get(&authority)?.lookup(player)
    }

    /// The authority's current-round index, if any round has assigned
    /// players yet.
    pub fn index(&self, authority: Address) -> Option<&MatchIndex> {
        self.indexes.get(&authority)
    }

    /// Read access to the player registry.
    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    /// Read access to the tournament directory.
    pub fn directory(&self) -> &TournamentDirectory {
        &self.directory
    }
}

impl Default for RoundOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
