//! Merkle commitments and inclusion receipts for oracle aggregation rounds.
//!
//! A round's observations are committed with a binary Merkle tree whose root
//! is published; every consumer receives a receipt with an inclusion proof
//! that can be checked against that root without seeing the other
//! observations.
//!
//! The crate is split into:
//!
//! * [`merkle`] – tree construction, proofs, verification and the canonical
//!   proof encoding.
//! * [`hash`] – the 256-bit hash backends plugged into the tree.
//! * [`receipt`] – observations, round commitments and receipts.
//! * [`config`] – validated tree parameters.
//!
//! The free functions below use the default Keccak-256 backend.

#![forbid(unsafe_code)]

pub mod config;
pub mod hash;
pub mod merkle;
pub mod receipt;
pub mod utils;

pub use config::{ParamsError, TreeParams, TreeParamsBuilder};
pub use hash::{Blake2sHasher, Blake3Hasher, HashFamily, Keccak256Hasher};
pub use merkle::{Digest, MerkleError, MerkleHasher, MerkleProof, MerkleTree};
pub use receipt::{Observation, Receipt, RoundCommitment};

/// Result type used throughout the library.
pub type MerkleResult<T> = core::result::Result<T, MerkleError>;

/// Builds a Keccak-256 tree over `leaves`.
///
/// Fails with [`MerkleError::InvalidInput`] when `leaves` is empty.
pub fn build_tree<I, B>(leaves: I) -> MerkleResult<MerkleTree>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]> + Sync,
{
    MerkleTree::build(leaves)
}

/// Keccak-256 leaf hash, the value expected as `leaf_hash` by
/// [`verify_proof`].
pub fn hash_leaf(leaf: &[u8]) -> Digest {
    Keccak256Hasher::hash_leaf(leaf)
}

/// Verifies a proof produced by [`MerkleTree::proof`] on a Keccak-256 tree.
pub fn verify_proof(proof: &[Digest], root: &Digest, leaf_hash: &Digest, index: usize) -> bool {
    merkle::verify_proof::<Keccak256Hasher>(proof, root, leaf_hash, index)
}
