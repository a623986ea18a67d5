//! Account and object addresses.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A 32-byte address identifying an account or an addressable object
/// (a player, a tournament authority, a room, a match instance, a token).
///
/// Addresses are opaque: the core never inspects the bytes, it only
/// compares them and uses them as map keys. `#[serde(transparent)]`
/// serializes an address as its raw byte array rather than a wrapper
/// object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero address. Never allocated by [`Address::fresh`].
    pub const ZERO: Address = Address([0; 32]);

    /// Wraps raw bytes as an address.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Address(bytes)
    }

    /// Allocates a fresh, independently addressable location.
    ///
    /// 256 bits of randomness — collisions are not a practical concern,
    /// so fresh addresses are unique for the life of the process.
    pub fn fresh() -> Self {
        let mut rng = rand::rng();
        Address(rng.random())
    }

    /// Builds an address from a small integer, placed in the low bytes.
    ///
    /// Deterministic, mainly for tests and demos where readable
    /// addresses matter more than uniqueness.
    pub fn from_low(n: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&n.to_be_bytes());
        Address(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives a short display name from the address: the first 15
    /// characters of its string form (`0x` plus 13 hex digits).
    ///
    /// Used as the default player name when joining a tournament.
    pub fn display_name(&self) -> String {
        self.to_string().chars().take(15).collect()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
