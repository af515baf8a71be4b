//! Sorted-pair keccak Merkle trees: leaf encoding, proof verification, and
//! the tree builder used to produce roots and proofs for an allocation list.
//!
//! Builder and verifier share `hash_pair`, so a proof produced here verifies
//! on-chain byte for byte. Any off-chain builder must use the same leaf
//! encoding and the same sorted-pair convention.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

/// Leaf for an allocation: `keccak256(xdr(account) || u256_be(amount))`.
///
/// The amount is widened to a 32-byte big-endian unsigned integer. Callers
/// must pass a positive amount: claims reject anything else, so a leaf built
/// from a non-positive amount can never be redeemed.
pub fn leaf_hash(env: &Env, account: &Address, amount: i128) -> BytesN<32> {
    let mut encoded: Bytes = account.clone().to_xdr(env);
    encoded.extend_from_array(&[0u8; 16]);
    encoded.extend_from_array(&(amount as u128).to_be_bytes());
    env.crypto().keccak256(&encoded).to_bytes()
}

/// Parent node of two siblings, hashed smaller-first so position does not matter.
pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut combined = Bytes::new(env);
    combined.append(&first.clone().into());
    combined.append(&second.clone().into());
    env.crypto().keccak256(&combined).to_bytes()
}

/// Rebuilds the root from `leaf` and its bottom-up `proof` and compares it to `root`.
///
/// An empty proof only verifies a single-leaf tree, where `leaf == root`.
pub fn verify(env: &Env, proof: &Vec<BytesN<32>>, root: &BytesN<32>, leaf: &BytesN<32>) -> bool {
    let mut computed = leaf.clone();
    for sibling in proof.iter() {
        computed = hash_pair(env, &computed, &sibling);
    }
    computed == *root
}

/// In-memory Merkle tree over a fixed list of leaves.
///
/// Adjacent nodes are paired left to right; an unpaired last node is promoted
/// to the next layer unchanged. Leaves keep their given order.
pub struct MerkleTree {
    env: Env,
    layers: Vec<Vec<BytesN<32>>>,
}

impl MerkleTree {
    pub fn new(env: &Env, leaves: Vec<BytesN<32>>) -> Self {
        let mut layers = Vec::new(env);
        let mut current = leaves;
        while current.len() > 1 {
            let mut next = Vec::new(env);
            let mut i = 0;
            while i < current.len() {
                let left = current.get_unchecked(i);
                match current.get(i + 1) {
                    Some(right) => next.push_back(hash_pair(env, &left, &right)),
                    None => next.push_back(left),
                }
                i += 2;
            }
            layers.push_back(current);
            current = next;
        }
        layers.push_back(current);

        MerkleTree {
            env: env.clone(),
            layers,
        }
    }

    pub fn leaf_count(&self) -> u32 {
        self.layers.get_unchecked(0).len()
    }

    /// `None` for a tree without leaves.
    pub fn root(&self) -> Option<BytesN<32>> {
        self.layers.last()?.first()
    }

    /// Sibling path for the leaf at `index`, or `None` if out of range.
    pub fn proof(&self, index: u32) -> Option<Vec<BytesN<32>>> {
        if index >= self.leaf_count() {
            return None;
        }

        let mut proof = Vec::new(&self.env);
        let mut idx = index;
        for layer in self.layers.iter().take(self.layers.len() as usize - 1) {
            // Promoted nodes have no sibling at this level.
            if let Some(sibling) = layer.get(idx ^ 1) {
                proof.push_back(sibling);
            }
            idx >>= 1;
        }
        Some(proof)
    }
}
