//! Receipts proving that a consumer received a specific oracle observation.
//!
//! Every aggregation round commits to its observations with one Merkle tree.
//! Leaf `i` is the JSON encoding of the pair `[consumer, value]` of the
//! `i`-th observation. The round root is published; each consumer gets a
//! [`Receipt`] carrying its observation, the root and the inclusion proof.
//!
//! Signatures are produced and checked elsewhere. A receipt only transports
//! the signature bytes.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::TreeParams;
use crate::hash::Keccak256Hasher;
use crate::merkle::{verify_proof, Digest, MerkleError, MerkleHasher, MerkleTree, SerKind};
use crate::utils::serialization::hex_bytes;

/// One observation delivered to a consumer in a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// Consumer address, as published by the feed.
    pub consumer: String,
    /// Observed value in its canonical decimal form.
    pub value: String,
}

impl Observation {
    pub fn new(consumer: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            consumer: consumer.into(),
            value: value.into(),
        }
    }

    /// Leaf bytes committed for this observation: `["<consumer>","<value>"]`.
    pub fn leaf_bytes(&self) -> Result<Vec<u8>, MerkleError> {
        serde_json::to_vec(&(&self.consumer, &self.value))
            .map_err(|_| MerkleError::Serialization(SerKind::Observation))
    }

    pub fn leaf_hash<H: MerkleHasher>(&self) -> Result<Digest, MerkleError> {
        Ok(H::hash_leaf(&self.leaf_bytes()?))
    }
}

/// Consumer-facing proof that `value` was part of round `round_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub feed_id: String,
    pub round_id: u64,
    pub consumer: String,
    pub value: String,
    /// Round timestamp in seconds since the Unix epoch.
    pub timestamp: u64,
    pub merkle_root: Digest,
    pub merkle_proof: Vec<Digest>,
    /// Position of the observation inside the round.
    pub leaf_index: u32,
    /// Opaque signature bytes attached by the issuing signer. Empty until
    /// signed.
    #[serde(with = "hex_bytes", default)]
    pub signature: Vec<u8>,
}

impl Receipt {
    pub fn observation(&self) -> Observation {
        Observation::new(self.consumer.clone(), self.value.clone())
    }

    /// Attaches signature bytes produced by an external signer.
    pub fn with_signature(mut self, signature: impl Into<Vec<u8>>) -> Self {
        self.signature = signature.into();
        self
    }

    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Checks the proof against the receipt's own root.
    pub fn verify<H: MerkleHasher>(&self) -> bool {
        let Ok(leaf_hash) = self.observation().leaf_hash::<H>() else {
            return false;
        };
        let valid = verify_proof::<H>(
            &self.merkle_proof,
            &self.merkle_root,
            &leaf_hash,
            self.leaf_index as usize,
        );
        if !valid {
            trace!(
                feed_id = %self.feed_id,
                round_id = self.round_id,
                consumer = %self.consumer,
                "receipt proof rejected"
            );
        }
        valid
    }

    /// Checks the receipt against a root published for the round, for
    /// example one read back from chain.
    pub fn verify_against<H: MerkleHasher>(&self, published_root: &Digest) -> bool {
        if self.merkle_root != *published_root {
            trace!(
                claimed = %self.merkle_root,
                published = %published_root,
                "receipt root differs from published root"
            );
            return false;
        }
        self.verify::<H>()
    }
}

/// Commitment to the observations of one aggregation round.
pub struct RoundCommitment<H: MerkleHasher = Keccak256Hasher> {
    feed_id: String,
    round_id: u64,
    timestamp: u64,
    observations: Vec<Observation>,
    tree: MerkleTree<H>,
}

impl<H: MerkleHasher> RoundCommitment<H> {
    /// Builds the round tree over `observations` in the given order.
    ///
    /// Fails with [`MerkleError::InvalidInput`] when the round is empty.
    pub fn build(
        feed_id: impl Into<String>,
        round_id: u64,
        timestamp: u64,
        observations: Vec<Observation>,
    ) -> Result<Self, MerkleError> {
        let tree = MerkleTree::<H>::build(encode_leaves(&observations)?)?;
        Ok(Self::assemble(
            feed_id.into(),
            round_id,
            timestamp,
            observations,
            tree,
        ))
    }

    /// Same as [`RoundCommitment::build`] with the hash family and leaf cap
    /// checked against `params`.
    pub fn build_with(
        params: &TreeParams,
        feed_id: impl Into<String>,
        round_id: u64,
        timestamp: u64,
        observations: Vec<Observation>,
    ) -> Result<Self, MerkleError> {
        let tree = MerkleTree::<H>::build_with(params, encode_leaves(&observations)?)?;
        Ok(Self::assemble(
            feed_id.into(),
            round_id,
            timestamp,
            observations,
            tree,
        ))
    }

    fn assemble(
        feed_id: String,
        round_id: u64,
        timestamp: u64,
        observations: Vec<Observation>,
        tree: MerkleTree<H>,
    ) -> Self {
        debug!(
            feed_id = %feed_id,
            round_id,
            observations = observations.len(),
            root = %tree.root(),
            "committed oracle round"
        );
        Self {
            feed_id,
            round_id,
            timestamp,
            observations,
            tree,
        }
    }

    /// Root to publish for the round.
    pub fn root(&self) -> Digest {
        self.tree.root()
    }

    pub fn tree(&self) -> &MerkleTree<H> {
        &self.tree
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn feed_id(&self) -> &str {
        &self.feed_id
    }

    pub fn round_id(&self) -> u64 {
        self.round_id
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Index of the first observation addressed to `consumer`.
    pub fn position_of(&self, consumer: &str) -> Option<usize> {
        self.observations
            .iter()
            .position(|observation| observation.consumer == consumer)
    }

    /// Issues the unsigned receipt for the observation at `index`.
    pub fn receipt_for(&self, index: usize) -> Result<Receipt, MerkleError> {
        let merkle_proof = self.tree.proof(index)?;
        let observation = &self.observations[index];
        Ok(Receipt {
            feed_id: self.feed_id.clone(),
            round_id: self.round_id,
            consumer: observation.consumer.clone(),
            value: observation.value.clone(),
            timestamp: self.timestamp,
            merkle_root: self.tree.root(),
            merkle_proof,
            leaf_index: index as u32,
            signature: Vec::new(),
        })
    }

    /// Issues one unsigned receipt per observation, in round order.
    pub fn receipts(&self) -> Result<Vec<Receipt>, MerkleError> {
        (0..self.observations.len())
            .map(|index| self.receipt_for(index))
            .collect()
    }
}

fn encode_leaves(observations: &[Observation]) -> Result<Vec<Vec<u8>>, MerkleError> {
    observations.iter().map(Observation::leaf_bytes).collect()
}
