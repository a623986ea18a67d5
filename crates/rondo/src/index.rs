//! The player-to-match index: current-round assignment lookup.

use std::collections::HashMap;

use rondo_types::Address;

use crate::OrchestratorError;

/// One authority's lookup table from player to their assigned match.
///
/// Rebuilt every round: a rebuild replaces the previous round's contents
/// wholesale, so stale entries never leak into the next round. A player
/// appears at most once — double assignment is rejected before anything
/// is written.
pub struct MatchIndex {
    assignments: HashMap<Address, Address>,
}

impl MatchIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            assignments: HashMap::new(),
        }
    }

    /// Installs this round's (player, match) assignments, superseding
    /// the previous round entirely.
    ///
    /// The batch is staged first; a duplicate player fails
    /// [`OrchestratorError::MappingAlreadyExists`] with the old contents
    /// untouched.
    pub fn rebuild(
        &mut self,
        entries: impl IntoIterator<Item = (Address, Address)>,
    ) -> Result<(), OrchestratorError> {
        let mut next = HashMap::new();
        for (player, game) in entries {
            if next.insert(player, game).is_some() {
                return Err(OrchestratorError::MappingAlreadyExists(player));
            }
        }
        self.assignments = next;
        Ok(())
    }

    /// The player's match this round, or `None` if unmatched.
    pub fn lookup(&self, player: Address) -> Option<Address> {
        self.assignments.get(&player).copied()
    }

    /// As [`lookup`](Self::lookup), but an unmatched player is a caller
    /// fault.
    pub fn require(&self, player: Address) -> Result<Address, OrchestratorError> {
        self.lookup(player)
            .ok_or(OrchestratorError::MappingMissing(player))
    }

    /// Number of players matched this round.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` if nobody is matched this round.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl Default for MatchIndex {
    fn default() -> Self {
        Self::new()
    }
}
