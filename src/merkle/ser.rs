//! Canonical byte layout for [`MerkleProof`].
//!
//! | Field | Size | Encoding |
//! |-------|------|----------|
//! | `version` | 2 | u16 little-endian |
//! | `hash` | 1 | [`HashFamily::code`] |
//! | `digest_size` | 2 | u16 little-endian |
//! | `leaf_index` | 4 | u32 little-endian |
//! | `leaf_count` | 4 | u32 little-endian |
//! | `sibling_count` | 4 | u32 little-endian |
//! | `siblings` | `sibling_count * digest_size` | raw digests, leaf layer first |

use crate::hash::HashFamily;

use super::proof::{MerkleProof, PROOF_VERSION};
use super::types::{tree_depth, Digest, MerkleError, SerKind, DIGEST_SIZE};

const HEADER_LEN: usize = 2 + 1 + 2 + 4 + 4 + 4;

/// Serialises a [`MerkleProof`] into the canonical byte layout.
pub fn encode_proof(proof: &MerkleProof) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + proof.siblings.len() * DIGEST_SIZE);
    out.extend_from_slice(&PROOF_VERSION.to_le_bytes());
    out.push(proof.hash.code());
    out.extend_from_slice(&(DIGEST_SIZE as u16).to_le_bytes());
    out.extend_from_slice(&proof.leaf_index.to_le_bytes());
    out.extend_from_slice(&proof.leaf_count.to_le_bytes());
    out.extend_from_slice(&(proof.siblings.len() as u32).to_le_bytes());
    for sibling in &proof.siblings {
        out.extend_from_slice(sibling.as_bytes());
    }
    out
}

/// Deserialises a [`MerkleProof`] from its canonical byte representation.
///
/// The sibling count must match the depth implied by `leaf_count` and the
/// input must not carry trailing bytes.
pub fn decode_proof(bytes: &[u8]) -> Result<MerkleProof, MerkleError> {
    let mut cursor = 0usize;
    let mut take = |len: usize| -> Result<&[u8], MerkleError> {
        let end = cursor.checked_add(len).ok_or_else(malformed)?;
        let slice = bytes.get(cursor..end).ok_or_else(malformed)?;
        cursor = end;
        Ok(slice)
    };

    let version = u16::from_le_bytes(array(take(2)?)?);
    if version != PROOF_VERSION {
        return Err(MerkleError::ProofVersionMismatch {
            expected: PROOF_VERSION,
            got: version,
        });
    }
    let hash = HashFamily::from_code(take(1)?[0]).ok_or_else(malformed)?;
    let digest_size = u16::from_le_bytes(array(take(2)?)?);
    if digest_size as usize != DIGEST_SIZE {
        return Err(MerkleError::IncompatibleParams {
            reason: "digest size mismatch",
        });
    }
    let leaf_index = u32::from_le_bytes(array(take(4)?)?);
    let leaf_count = u32::from_le_bytes(array(take(4)?)?);
    let sibling_count = u32::from_le_bytes(array(take(4)?)?) as usize;
    if leaf_index >= leaf_count || sibling_count != tree_depth(leaf_count as usize) {
        return Err(malformed());
    }

    let mut siblings = Vec::with_capacity(sibling_count);
    for _ in 0..sibling_count {
        let raw = take(DIGEST_SIZE)?;
        siblings.push(Digest::from_slice(raw).ok_or_else(malformed)?);
    }
    if cursor != bytes.len() {
        return Err(malformed());
    }

    Ok(MerkleProof::new(hash, leaf_index, leaf_count, siblings))
}

fn malformed() -> MerkleError {
    MerkleError::Serialization(SerKind::Proof)
}

fn array<const N: usize>(slice: &[u8]) -> Result<[u8; N], MerkleError> {
    slice.try_into().map_err(|_| malformed())
}
