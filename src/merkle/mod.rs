//! Binary Merkle commitments over ordered leaf sequences.
//!
//! Layout rules shared by the prover ([`MerkleTree`]) and the verifier
//! ([`verify_proof`]):
//!
//! * **Leaves:** layer 0 stores `H(leaf)` for every leaf, in input order.
//! * **Pairs:** a parent is `H(min(a, b) || max(a, b))` where the minimum is
//!   taken bytewise. Position inside the pair does not influence the parent,
//!   so proofs carry sibling digests only.
//! * **Odd layers:** the last node of an odd-length layer is paired with
//!   itself.
//! * **Proofs:** one sibling per layer below the root, leaf layer first. A
//!   self-paired node contributes its own digest, which keeps the proof length
//!   at `ceil(log2(leaf_count))` and lets the verifier fold without knowing
//!   the layer sizes.
//! * **Hash family:** selected through the [`MerkleHasher`] type parameter;
//!   [`Keccak256Hasher`](crate::hash::Keccak256Hasher) is the default.

mod proof;
mod ser;
pub mod traits;
mod tree;
mod types;

pub use proof::{
    compute_root_from_path, verify_proof, verify_proof_bytes, MerkleProof, PROOF_VERSION,
};
pub use ser::{decode_proof, encode_proof};
pub use traits::MerkleHasher;
pub use tree::MerkleTree;
pub use types::{tree_depth, Digest, MerkleError, SerKind, DIGEST_SIZE};
