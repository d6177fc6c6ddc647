use sha3::{Digest as _, Keccak256};

use crate::merkle::{Digest, MerkleHasher};

use super::HashFamily;

/// Keccak-256 Merkle hasher.
///
/// Leaves are `keccak256(leaf)` and parents `keccak256(min || max)`, which is
/// the sorted-pair layout understood by common EVM proof verifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    fn hash_chunks(chunks: &[&[u8]]) -> Digest {
        let mut hasher = Keccak256::new();
        for chunk in chunks {
            hasher.update(chunk);
        }
        Digest::new(hasher.finalize().into())
    }

    fn hash_family() -> HashFamily {
        HashFamily::Keccak256
    }
}
