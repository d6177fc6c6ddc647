use blake2::{Blake2s256, Digest as _};

use crate::merkle::{Digest, MerkleHasher};

use super::HashFamily;

/// BLAKE2s-256 Merkle hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake2sHasher;

impl MerkleHasher for Blake2sHasher {
    fn hash_chunks(chunks: &[&[u8]]) -> Digest {
        let mut hasher = Blake2s256::new();
        for chunk in chunks {
            hasher.update(chunk);
        }
        Digest::new(hasher.finalize().into())
    }

    fn hash_family() -> HashFamily {
        HashFamily::Blake2s
    }
}

/// BLAKE3 Merkle hasher (256-bit output).
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    fn hash_chunks(chunks: &[&[u8]]) -> Digest {
        let mut hasher = blake3::Hasher::new();
        for chunk in chunks {
            hasher.update(chunk);
        }
        Digest::new(*hasher.finalize().as_bytes())
    }

    fn hash_family() -> HashFamily {
        HashFamily::Blake3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2s_empty_matches_reference() {
        let expected: Digest = "69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9"
            .parse()
            .unwrap();
        assert_eq!(Blake2sHasher::hash_leaf(b""), expected);
    }

    #[test]
    fn blake3_empty_matches_reference() {
        let expected: Digest = "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
            .parse()
            .unwrap();
        assert_eq!(Blake3Hasher::hash_leaf(b""), expected);
    }

    #[test]
    fn pair_hash_is_commutative() {
        let a = Blake3Hasher::hash_leaf(b"left");
        let b = Blake3Hasher::hash_leaf(b"right");
        assert_eq!(Blake3Hasher::hash_pair(&a, &b), Blake3Hasher::hash_pair(&b, &a));
        assert_eq!(Blake2sHasher::hash_pair(&a, &b), Blake2sHasher::hash_pair(&b, &a));
    }

    #[test]
    fn pair_hash_absorbs_smaller_digest_first() {
        let a = Blake2sHasher::hash_leaf(b"left");
        let b = Blake2sHasher::hash_leaf(b"right");
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let expected = Blake2sHasher::hash_chunks(&[low.as_bytes(), high.as_bytes()]);
        assert_eq!(Blake2sHasher::hash_pair(&high, &low), expected);
    }
}
