//! Hash backends for the Merkle commitment layer.
//!
//! Every backend emits 256-bit digests and plugs into the tree through
//! [`MerkleHasher`](crate::merkle::MerkleHasher):
//!
//! * [`Keccak256Hasher`] – the default, matching EVM-side sorted-pair
//!   verifiers so published roots can be checked on-chain.
//! * [`Blake2sHasher`] – BLAKE2s-256.
//! * [`Blake3Hasher`] – BLAKE3 with its default output length.
//!
//! [`HashFamily`] names the backend in parameters and in encoded proofs so a
//! verifier can refuse material produced under a different hash.

mod blake;
pub mod config;
mod keccak;

pub use blake::{Blake2sHasher, Blake3Hasher};
pub use config::HashFamily;
pub use keccak::Keccak256Hasher;
