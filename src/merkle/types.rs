use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::serialization::parse_hex;

/// Size in bytes of every digest produced by the supported hash families.
pub const DIGEST_SIZE: usize = 32;

/// 256-bit digest stored in tree layers and inclusion proofs.
///
/// The derived ordering compares the raw bytes lexicographically, which is the
/// ordering applied to sibling pairs before they are combined.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Creates a digest from raw bytes.
    pub const fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copies a digest out of a slice, returning `None` when the width is wrong.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; DIGEST_SIZE] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Returns a reference to the underlying bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consumes the digest and returns the bytes.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Mutable view into the digest bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; DIGEST_SIZE] {
        &mut self.0
    }

    /// Lowercase hexadecimal encoding with a `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl FromStr for Digest {
    type Err = MerkleError;

    /// Parses 64 hex characters, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
            .as_deref()
            .and_then(Digest::from_slice)
            .ok_or(MerkleError::Serialization(SerKind::Digest))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Canonical serialisation error domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerKind {
    Proof,
    Digest,
    Observation,
}

impl fmt::Display for SerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerKind::Proof => write!(f, "proof"),
            SerKind::Digest => write!(f, "digest"),
            SerKind::Observation => write!(f, "observation"),
        }
    }
}

/// Errors emitted by the Merkle layer.
///
/// Proof verification never produces one of these; a proof that does not
/// check out is reported as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    InvalidInput { reason: &'static str },
    IndexOutOfRange { index: usize, leaf_count: usize },
    IncompatibleParams { reason: &'static str },
    ProofVersionMismatch { expected: u16, got: u16 },
    Serialization(SerKind),
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::InvalidInput { reason } => write!(f, "invalid input: {}", reason),
            MerkleError::IndexOutOfRange { index, leaf_count } => write!(
                f,
                "index {} out of range (tree has {} leaves)",
                index, leaf_count
            ),
            MerkleError::IncompatibleParams { reason } => {
                write!(f, "incompatible parameters: {}", reason)
            }
            MerkleError::ProofVersionMismatch { expected, got } => write!(
                f,
                "proof version mismatch: expected {}, got {}",
                expected, got
            ),
            MerkleError::Serialization(kind) => write!(f, "serialisation error in {}", kind),
        }
    }
}

impl std::error::Error for MerkleError {}

/// Number of fold steps between `leaf_count` leaves and the root, which is
/// also the length of every inclusion proof: `ceil(log2(leaf_count))`.
pub fn tree_depth(leaf_count: usize) -> usize {
    if leaf_count <= 1 {
        0
    } else {
        leaf_count.next_power_of_two().trailing_zeros() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_matches_ceil_log2() {
        let expected = [(1, 0), (2, 1), (3, 2), (4, 2), (5, 3), (8, 3), (9, 4), (1000, 10)];
        for (leaves, depth) in expected {
            assert_eq!(tree_depth(leaves), depth, "leaf count {leaves}");
        }
    }

    #[test]
    fn digest_hex_parses_with_and_without_prefix() {
        let digest = Digest::new([0xab; DIGEST_SIZE]);
        let text = digest.to_hex();
        assert!(text.starts_with("0xabab"));
        assert_eq!(text.parse::<Digest>().unwrap(), digest);
        assert_eq!(text[2..].parse::<Digest>().unwrap(), digest);
    }

    #[test]
    fn digest_rejects_wrong_width() {
        let err = "0xabcd".parse::<Digest>().unwrap_err();
        assert_eq!(err, MerkleError::Serialization(SerKind::Digest));
        assert!(Digest::from_slice(&[0u8; 31]).is_none());
    }

    #[test]
    fn ordering_is_bytewise() {
        let mut low = [0u8; DIGEST_SIZE];
        let mut high = [0u8; DIGEST_SIZE];
        low[0] = 0x01;
        low[31] = 0xff;
        high[0] = 0x02;
        assert!(Digest::new(low) < Digest::new(high));
    }
}
