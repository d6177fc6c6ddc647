use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::hash::HashFamily;

use super::traits::MerkleHasher;
use super::types::{tree_depth, Digest};

/// Version tag written in front of encoded proofs.
pub const PROOF_VERSION: u16 = 1;

/// Inclusion proof for a single leaf together with the tree shape it was
/// opened from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerkleProof {
    pub hash: HashFamily,
    pub leaf_index: u32,
    pub leaf_count: u32,
    pub siblings: Vec<Digest>,
}

impl MerkleProof {
    pub fn new(hash: HashFamily, leaf_index: u32, leaf_count: u32, siblings: Vec<Digest>) -> Self {
        Self {
            hash,
            leaf_index,
            leaf_count,
            siblings,
        }
    }

    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    /// Checks the proof against `root` for an already hashed leaf.
    ///
    /// On top of [`verify_proof`] this rejects proofs opened under another
    /// hash family, an index outside the recorded leaf count, or a sibling
    /// list whose length disagrees with the recorded tree depth.
    pub fn verify<H: MerkleHasher>(&self, root: &Digest, leaf_hash: &Digest) -> bool {
        if self.hash != H::hash_family() {
            trace!(expected = %H::hash_family(), got = %self.hash, "proof hash family mismatch");
            return false;
        }
        if self.leaf_index >= self.leaf_count
            || self.siblings.len() != tree_depth(self.leaf_count as usize)
        {
            trace!(
                leaf_index = self.leaf_index,
                leaf_count = self.leaf_count,
                siblings = self.siblings.len(),
                "proof shape mismatch"
            );
            return false;
        }
        verify_proof::<H>(&self.siblings, root, leaf_hash, self.leaf_index as usize)
    }
}

/// Folds `leaf_hash` with every sibling in `proof` and returns the resulting
/// root.
///
/// Returns `None` when `index` addresses a leaf beyond the `2^len` positions
/// the path can reach.
pub fn compute_root_from_path<H: MerkleHasher>(
    leaf_hash: &Digest,
    index: usize,
    proof: &[Digest],
) -> Option<Digest> {
    let mut current = *leaf_hash;
    let mut position = index;
    for sibling in proof {
        current = H::hash_pair(&current, sibling);
        position >>= 1;
    }
    if position != 0 {
        return None;
    }
    Some(current)
}

/// Verifies an inclusion proof produced by
/// [`MerkleTree::proof`](super::MerkleTree::proof).
///
/// `leaf_hash` is the hashed leaf, not the raw leaf bytes. The function never
/// fails; any mismatch yields `false`.
pub fn verify_proof<H: MerkleHasher>(
    proof: &[Digest],
    root: &Digest,
    leaf_hash: &Digest,
    index: usize,
) -> bool {
    match compute_root_from_path::<H>(leaf_hash, index, proof) {
        Some(computed) if computed == *root => true,
        Some(computed) => {
            trace!(%computed, expected = %root, index, "merkle root mismatch");
            false
        }
        None => {
            trace!(index, depth = proof.len(), "index does not fit proof depth");
            false
        }
    }
}

/// Byte-level variant of [`verify_proof`] for callers holding raw digests.
///
/// Any input whose width is not exactly one digest verifies to `false`.
pub fn verify_proof_bytes<H, P>(proof: &[P], root: &[u8], leaf_hash: &[u8], index: usize) -> bool
where
    H: MerkleHasher,
    P: AsRef<[u8]>,
{
    let (Some(root), Some(leaf_hash)) = (Digest::from_slice(root), Digest::from_slice(leaf_hash))
    else {
        return false;
    };
    let siblings: Option<Vec<Digest>> = proof
        .iter()
        .map(|sibling| Digest::from_slice(sibling.as_ref()))
        .collect();
    match siblings {
        Some(siblings) => verify_proof::<H>(&siblings, &root, &leaf_hash, index),
        None => false,
    }
}
