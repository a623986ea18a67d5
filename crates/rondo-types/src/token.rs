//! Tournament entry credentials.

use serde::{Deserialize, Serialize};

use crate::Address;

/// A player's entry credential for one tournament.
///
/// Minted by the external token-issuance collaborator when a player
/// joins; held by the player's registry record until a round claims it;
/// referenced (by value) from the room that match lives in afterwards.
/// The core treats it as opaque — it never invents or alters one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerToken {
    /// The token object's own address.
    pub address: Address,

    /// The player this credential belongs to.
    pub owner: Address,

    /// The tournament it grants entry to.
    pub tournament: Address,

    /// Display name chosen at join time.
    pub display_name: String,
}
