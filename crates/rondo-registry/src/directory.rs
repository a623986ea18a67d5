//! The tournament directory: authority → tournament.

use std::collections::HashMap;

use rondo_types::Address;

use crate::RegistryError;

/// Maps each tournament authority to the tournament it currently runs.
///
/// An authority has at most one active tournament at a time; configuring
/// a new one supersedes the old entry. Creation of the tournament object
/// itself is external — this directory only records where it lives.
pub struct TournamentDirectory {
    tournaments: HashMap<Address, Address>,
}

impl TournamentDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            tournaments: HashMap::new(),
        }
    }

    /// Records `tournament` as the authority's active tournament,
    /// superseding any previous entry.
    pub fn configure(&mut self, authority: Address, tournament: Address) {
        let previous = self.tournaments.insert(authority, tournament);
        tracing::info!(
            %authority,
            %tournament,
            superseded = previous.is_some(),
            "tournament configured"
        );
    }

    /// The authority's active tournament, if any.
    pub fn tournament_of(&self, authority: Address) -> Option<Address> {
        self.tournaments.get(&authority).copied()
    }

    /// As [`tournament_of`](Self::tournament_of), but an unconfigured
    /// authority is a caller fault.
    pub fn require(&self, authority: Address) -> Result<Address, RegistryError> {
        self.tournament_of(authority)
            .ok_or(RegistryError::TournamentNotFound(authority))
    }
}

impl Default for TournamentDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u64) -> Address {
        Address::from_low(n)
    }

    #[test]
    fn test_configure_records_the_tournament() {
        let mut dir = TournamentDirectory::new();
        dir.configure(addr(1), addr(10));
        assert_eq!(dir.tournament_of(addr(1)), Some(addr(10)));
    }

    #[test]
    fn test_configure_supersedes_previous_entry() {
        let mut dir = TournamentDirectory::new();
        dir.configure(addr(1), addr(10));
        dir.configure(addr(1), addr(20));
        assert_eq!(dir.tournament_of(addr(1)), Some(addr(20)));
    }

    #[test]
    fn test_require_unconfigured_authority_fails() {
        let dir = TournamentDirectory::new();
        assert_eq!(
            dir.require(addr(1)),
            Err(RegistryError::TournamentNotFound(addr(1)))
        );
    }
}
