//! Fixed Keccak-256 and BLAKE2s vectors for the sorted-pair layout.

use oracle_merkle::merkle::{compute_root_from_path, Digest, MerkleHasher, MerkleTree};
use oracle_merkle::{build_tree, hash_leaf, verify_proof, Blake2sHasher, Keccak256Hasher};

fn digest(hex: &str) -> Digest {
    hex.parse().expect("valid hex digest")
}

fn numbered_leaves(count: usize) -> Vec<Vec<u8>> {
    (0..count).map(|i| format!("leaf-{i}").into_bytes()).collect()
}

#[test]
fn keccak_leaf_hash_matches_reference() {
    assert_eq!(
        hash_leaf(b"A"),
        digest("03783fac2efed8fbc9ad443e592ee30e61d65f471140c10ca155e937b435b760")
    );
}

#[test]
fn keccak_three_leaf_tree() {
    let tree = build_tree(["A", "B", "C"]).unwrap();
    assert_eq!(
        tree.levels()[1],
        vec![
            digest("69de756fea16daddbbdccf85c849315f51c0b50d111e3d2063cab451803324a0"),
            digest("8f3e872a5d925781b6f2b7d2be29497c3807f1ff45b7786a5b2613cce6165027"),
        ]
    );
    let root = digest("f027ad2a8405abb665af1bbdd40d29cf0ac06e86f20f6d1ce04a7587849b40fd");
    assert_eq!(tree.root(), root);

    let proof = tree.proof(2).unwrap();
    assert_eq!(
        proof,
        vec![
            digest("017e667f4b8c174291d1543c466717566e206df1bfd6f30271055ddafdb18f72"),
            digest("69de756fea16daddbbdccf85c849315f51c0b50d111e3d2063cab451803324a0"),
        ]
    );
    assert_eq!(proof[0], hash_leaf(b"C"));
    assert!(verify_proof(&proof, &root, &hash_leaf(b"C"), 2));
}

#[test]
fn keccak_five_leaf_path() {
    let leaves = numbered_leaves(5);
    let tree = MerkleTree::<Keccak256Hasher>::build(&leaves).unwrap();
    let root = digest("5dcde6f707bca413ca422cdcad126c1bad22723ad89ac633b9b33e1c2a7567cc");
    assert_eq!(tree.root(), root);

    let path = [
        digest("0c165b804a4294c8f1b189940bb8b69b41a807ec46741112fd60df7dd62c8ea1"),
        digest("51bdae31104580fe6c1a58e19c0fab411bc184026aeff90c761cc852ff8540dc"),
        digest("2ce3397d89b7f69d8a5ccdc2da249e742b90970c7472177f54b04f3cc33c667d"),
    ];
    assert_eq!(tree.proof(4).unwrap(), path);
    let computed =
        compute_root_from_path::<Keccak256Hasher>(&hash_leaf(&leaves[4]), 4, &path).unwrap();
    assert_eq!(computed, root);
}

#[test]
fn keccak_eight_leaf_path() {
    let leaves = numbered_leaves(8);
    let tree = MerkleTree::<Keccak256Hasher>::build(&leaves).unwrap();
    let root = digest("940ad8a50a83d63b2b51cd1d0308b1ff08c61af917333c144c321183055c0484");
    assert_eq!(tree.root(), root);
    let path = [
        digest("1a781601caf452f463e2ffee266417f2880cb4558048ba3cbf13fd4b4279ae10"),
        digest("7c9360ae6110342e34fdc7d8dc639a6edaf8ee33a93fa69acec09968178527eb"),
        digest("2ce3397d89b7f69d8a5ccdc2da249e742b90970c7472177f54b04f3cc33c667d"),
    ];
    assert_eq!(tree.proof(7).unwrap(), path);
    assert!(verify_proof(&path, &root, &hash_leaf(&leaves[7]), 7));
}

#[test]
fn blake2s_three_leaf_root() {
    let tree = MerkleTree::<Blake2sHasher>::build(["A", "B", "C"]).unwrap();
    assert_eq!(
        tree.root(),
        digest("e3aea8890c82d7d452eba141ef9251de0e065233491d4d5bb379ffe77760da6a")
    );
    let proof = tree.proof(0).unwrap();
    assert!(oracle_merkle::merkle::verify_proof::<Blake2sHasher>(
        &proof,
        &tree.root(),
        &Blake2sHasher::hash_leaf(b"A"),
        0
    ));
}

#[test]
fn single_leaf_tree() {
    let tree = build_tree(["solo"]).unwrap();
    assert_eq!(tree.root(), hash_leaf(b"solo"));
    let proof = tree.proof(0).unwrap();
    assert!(proof.is_empty());
    assert!(verify_proof(&[], &tree.root(), &hash_leaf(b"solo"), 0));
    assert!(!verify_proof(&[], &tree.root(), &hash_leaf(b"solo"), 1));
}
