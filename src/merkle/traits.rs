use crate::hash::HashFamily;

use super::types::Digest;

/// Hash abstraction used by the Merkle commitment layer.
///
/// Implementors only provide the raw digest over a sequence of byte chunks.
/// Leaf hashing and pair combination are fixed by the provided methods so
/// every backend shares the same tree layout.
pub trait MerkleHasher {
    /// Hashes the concatenation of `chunks`.
    fn hash_chunks(chunks: &[&[u8]]) -> Digest;

    fn hash_family() -> HashFamily;

    /// Digest stored in layer 0 for a raw leaf.
    fn hash_leaf(leaf: &[u8]) -> Digest {
        Self::hash_chunks(&[leaf])
    }

    /// Parent digest of two siblings.
    ///
    /// The smaller digest (bytewise) is absorbed first, so the result does not
    /// depend on which side of the parent each sibling sits.
    fn hash_pair(a: &Digest, b: &Digest) -> Digest {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self::hash_chunks(&[low.as_bytes(), high.as_bytes()])
    }
}
