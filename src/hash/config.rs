//! Hash family identifiers shared by tree parameters, proofs and receipts.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Supported 256-bit hash families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFamily {
    /// Keccak-256 as used by the EVM, suitable for on-chain root checks.
    #[default]
    Keccak256,
    /// BLAKE2s with a 256-bit output.
    Blake2s,
    /// BLAKE3 with the default 256-bit output.
    Blake3,
}

impl HashFamily {
    /// Every family in code order.
    pub const ALL: [HashFamily; 3] = [HashFamily::Keccak256, HashFamily::Blake2s, HashFamily::Blake3];

    /// Single byte identifier used in the canonical proof encoding.
    pub const fn code(self) -> u8 {
        match self {
            HashFamily::Keccak256 => 1,
            HashFamily::Blake2s => 2,
            HashFamily::Blake3 => 3,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(HashFamily::Keccak256),
            2 => Some(HashFamily::Blake2s),
            3 => Some(HashFamily::Blake3),
            _ => None,
        }
    }

    /// Stable textual identifier.
    pub const fn id(self) -> &'static str {
        match self {
            HashFamily::Keccak256 => "keccak256",
            HashFamily::Blake2s => "blake2s",
            HashFamily::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
