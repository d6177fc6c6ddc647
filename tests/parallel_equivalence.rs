#![cfg(feature = "parallel")]

use oracle_merkle::merkle::MerkleTree;
use oracle_merkle::utils::set_parallelism;
use oracle_merkle::{Blake3Hasher, Keccak256Hasher};

fn leaves(count: usize) -> Vec<Vec<u8>> {
    (0..count as u32).map(|i| i.to_le_bytes().to_vec()).collect()
}

#[test]
fn keccak_parallel_matches_sequential() {
    let leaves = leaves(5_000);
    let baseline = {
        let _guard = set_parallelism(false);
        MerkleTree::<Keccak256Hasher>::build(&leaves).expect("sequential build")
    };
    let parallel = MerkleTree::<Keccak256Hasher>::build(&leaves).expect("parallel build");
    assert_eq!(baseline.root(), parallel.root());
    assert_eq!(baseline.levels(), parallel.levels());
}

#[test]
fn blake3_parallel_matches_sequential() {
    let leaves = leaves(1_027);
    let baseline = {
        let _guard = set_parallelism(false);
        MerkleTree::<Blake3Hasher>::build(&leaves).expect("sequential build")
    };
    let parallel = MerkleTree::<Blake3Hasher>::build(&leaves).expect("parallel build");
    assert_eq!(baseline.levels(), parallel.levels());
    assert_eq!(baseline.proof(1_026).unwrap(), parallel.proof(1_026).unwrap());
}
