//! Keccak-256 digests and the node combination rule

use sha3::{Digest, Keccak256};
use std::ops::Deref;

/// Hash arbitrary bytes into a 32-byte Keccak-256 digest
pub(crate) fn keccak_256(bytes: &[u8]) -> MerkleHash {
    let mut hasher = Keccak256::default();
    let mut result = [0u8; 32];

    hasher.update(bytes);
    result.copy_from_slice(hasher.finalize().as_slice());
    MerkleHash(result)
}

/// Combine two nodes of a merkle tree by hashing their concatenation.
/// The pair is sorted by byte value before hashing, so the combined
/// digest does not depend on which side of the tree either node sat
/// on. Proofs can then carry bare sibling digests with no left/right
/// markers, and verifiers fold them in sequence.
pub fn combine_nodes(a: &MerkleHash, b: &MerkleHash) -> MerkleHash {
    let (lo, hi) = if a.0 <= b.0 { (a, b) } else { (b, a) };
    let mut hasher = Keccak256::default();
    let mut result = [0u8; 32];

    hasher.update(lo.0);
    hasher.update(hi.0);
    result.copy_from_slice(hasher.finalize().as_slice());
    MerkleHash(result)
}

/// Digest of a leaf or internal tree node
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MerkleHash(pub [u8; 32]);

impl MerkleHash {
    /// Render as lowercase hex with a `0x` prefix, the publishable form
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl Deref for MerkleHash {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[u8; 32]> for MerkleHash {
    fn from(bytes: [u8; 32]) -> Self {
        MerkleHash(bytes)
    }
}

impl PartialEq<[u8; 32]> for MerkleHash {
    fn eq(&self, other: &[u8; 32]) -> bool {
        &self.0 == other
    }
}
