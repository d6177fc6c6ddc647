use core::fmt;
use core::marker::PhantomData;

use tracing::debug;

use crate::config::TreeParams;
use crate::hash::Keccak256Hasher;

use super::proof::MerkleProof;
use super::traits::MerkleHasher;
use super::types::{tree_depth, Digest, MerkleError};

/// Binary Merkle tree retaining every layer for subsequent openings.
///
/// Layer 0 holds the hashed leaves and each following layer halves the
/// previous one (rounding up). An unpaired last node is combined with
/// itself. The tree is immutable once built.
pub struct MerkleTree<H: MerkleHasher = Keccak256Hasher> {
    levels: Vec<Vec<Digest>>,
    root: Digest,
    marker: PhantomData<H>,
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Builds a tree over `leaves` in the given order.
    ///
    /// Fails with [`MerkleError::InvalidInput`] when no leaves are supplied.
    pub fn build<I, B>(leaves: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]> + Sync,
    {
        let leaves: Vec<B> = leaves.into_iter().collect();
        if leaves.is_empty() {
            return Err(MerkleError::InvalidInput {
                reason: "no leaves supplied",
            });
        }
        Ok(Self::from_leaf_hashes_unchecked(hash_leaves::<H, B>(&leaves)))
    }

    /// Builds a tree after checking `leaves` against `params`.
    pub fn build_with<I, B>(params: &TreeParams, leaves: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]> + Sync,
    {
        if H::hash_family() != params.hash() {
            return Err(MerkleError::IncompatibleParams {
                reason: "hash family mismatch",
            });
        }
        let leaves: Vec<B> = leaves.into_iter().collect();
        if leaves.len() > params.max_leaves() as usize {
            return Err(MerkleError::InvalidInput {
                reason: "leaf count exceeds configured maximum",
            });
        }
        Self::build(leaves)
    }

    /// Builds a tree from leaves that were already hashed with
    /// [`MerkleHasher::hash_leaf`].
    pub fn from_leaf_hashes(hashed: Vec<Digest>) -> Result<Self, MerkleError> {
        if hashed.is_empty() {
            return Err(MerkleError::InvalidInput {
                reason: "no leaves supplied",
            });
        }
        Ok(Self::from_leaf_hashes_unchecked(hashed))
    }

    fn from_leaf_hashes_unchecked(hashed: Vec<Digest>) -> Self {
        let leaf_count = hashed.len();
        let mut levels = Vec::with_capacity(tree_depth(leaf_count) + 1);
        levels.push(hashed);

        while let Some(current) = levels.last().filter(|level| level.len() > 1) {
            let next = fold_level::<H>(current);
            levels.push(next);
        }

        // The loop only stops on a single-node layer.
        let root = levels[levels.len() - 1][0];
        debug!(
            leaf_count,
            depth = levels.len() - 1,
            hash = %H::hash_family(),
            root = %root,
            "built merkle tree"
        );

        Self {
            levels,
            root,
            marker: PhantomData,
        }
    }

    /// Root digest committing to the ordered leaf set.
    pub fn root(&self) -> Digest {
        self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of layers below the root, i.e. the length of every proof.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// All layers, leaf hashes first and the root layer last.
    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    /// Hashed leaf stored at `index`.
    pub fn leaf_hash(&self, index: usize) -> Option<Digest> {
        self.levels[0].get(index).copied()
    }

    /// Sibling digests for the leaf at `index`, leaf layer first.
    ///
    /// A node that was paired with itself contributes its own digest, so the
    /// proof always carries one entry per layer below the root.
    pub fn proof(&self, index: usize) -> Result<Vec<Digest>, MerkleError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut path = Vec::with_capacity(self.depth());
        let mut position = index;
        for level in &self.levels[..self.depth()] {
            let sibling = level.get(position ^ 1).unwrap_or(&level[position]);
            path.push(*sibling);
            position >>= 1;
        }
        Ok(path)
    }

    /// Opens the leaf at `index` into a self-describing [`MerkleProof`].
    pub fn open(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        let siblings = self.proof(index)?;
        Ok(MerkleProof::new(
            H::hash_family(),
            index as u32,
            self.leaf_count() as u32,
            siblings,
        ))
    }
}

impl<H: MerkleHasher> Clone for MerkleTree<H> {
    fn clone(&self) -> Self {
        Self {
            levels: self.levels.clone(),
            root: self.root,
            marker: PhantomData,
        }
    }
}

impl<H: MerkleHasher> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("hash", &H::hash_family())
            .field("leaf_count", &self.leaf_count())
            .field("depth", &self.depth())
            .field("root", &self.root)
            .finish()
    }
}

fn hash_leaves<H: MerkleHasher, B: AsRef<[u8]> + Sync>(leaves: &[B]) -> Vec<Digest> {
    #[cfg(feature = "parallel")]
    {
        if crate::utils::parallel::use_parallel(leaves.len()) {
            use rayon::prelude::*;
            let chunk = crate::utils::preferred_chunk_size(leaves.len());
            return leaves
                .par_iter()
                .with_min_len(chunk)
                .map(|leaf| H::hash_leaf(leaf.as_ref()))
                .collect();
        }
    }
    leaves.iter().map(|leaf| H::hash_leaf(leaf.as_ref())).collect()
}

fn fold_level<H: MerkleHasher>(current: &[Digest]) -> Vec<Digest> {
    let combine = |pair: &[Digest]| {
        let left = &pair[0];
        let right = pair.get(1).unwrap_or(left);
        H::hash_pair(left, right)
    };

    #[cfg(feature = "parallel")]
    {
        if crate::utils::parallel::use_parallel(current.len()) {
            use rayon::prelude::*;
            let chunk = crate::utils::preferred_chunk_size(current.len().div_ceil(2));
            return current
                .par_chunks(2)
                .with_min_len(chunk)
                .map(combine)
                .collect();
        }
    }
    current.chunks(2).map(combine).collect()
}
