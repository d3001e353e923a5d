//! Commitment over an ordered distribution list
//!
//! Each recipient is committed together with its position in the
//! list, so a proof for one position can never be replayed at
//! another even when the same account appears twice.

use crate::{
    address::{decode_address, ACCOUNT_ID_LEN},
    error::Error,
    hash::{keccak_256, MerkleHash},
    tree::{MerkleProof, MerkleTree},
};

/// Positions are committed as 16-bit integers, capping a single
/// distribution at 65536 recipients
pub const MAX_CLAIMS: usize = 1 << 16;

/// Width of the encoded position in the leaf preimage
const INDEX_LEN: usize = 2;

/// Encode a claim into its leaf digest
///
/// The preimage is the position as two little-endian bytes followed by
/// the raw 32-byte account id, hashed with Keccak-256. An index beyond
/// the 16-bit range is rejected rather than truncated.
pub fn claim_leaf(index: usize, address: &str) -> Result<MerkleHash, Error> {
    if index >= MAX_CLAIMS {
        return Err(Error::IndexOutOfRange(index, MAX_CLAIMS));
    }
    let account = decode_address(address)?;
    let mut preimage = [0u8; INDEX_LEN + ACCOUNT_ID_LEN];
    preimage[..INDEX_LEN].copy_from_slice(&(index as u16).to_le_bytes());
    preimage[INDEX_LEN..].copy_from_slice(&account);
    Ok(keccak_256(&preimage))
}

/// Merkle commitment over an ordered list of recipient addresses
///
/// The position of each address in the list is its claim index. The
/// tree is built in the constructor and never mutated afterwards.
#[derive(Debug)]
pub struct DistributionTree {
    tree: MerkleTree,
}

impl DistributionTree {
    /// Encode every `(position, address)` pair and build the tree
    ///
    /// Fails on the first address that does not decode, on an empty
    /// list, and on lists longer than [`MAX_CLAIMS`].
    pub fn new<S: AsRef<str>>(accounts: &[S]) -> Result<Self, Error> {
        let leaves = accounts
            .iter()
            .enumerate()
            .map(|(index, account)| claim_leaf(index, account.as_ref()))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self {
            tree: MerkleTree::from_leaves(leaves)?,
        })
    }

    /// The committed root digest
    pub fn root(&self) -> &MerkleHash {
        self.tree.root()
    }

    /// The root rendered as `0x`-prefixed lowercase hex, the form
    /// published for verifiers
    pub fn root_hex(&self) -> String {
        self.tree.root().to_hex()
    }

    /// Number of claims committed
    pub fn num_claims(&self) -> usize {
        self.tree.num_leaves()
    }

    /// The underlying digest tree
    pub fn merkle_tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// Inclusion proof for the claim at `index`
    pub fn proof(&self, index: usize) -> Result<MerkleProof, Error> {
        self.tree.proof(index)
    }
}

/// Check a claim against a published root without holding the tree
///
/// Recomputes the claim's leaf, folds the proof into it, and compares
/// the implied root byte-for-byte. Any proof shape is accepted; a
/// mismatch is an ordinary `false`. An address that does not decode,
/// or a position outside the committable range, can never be part of
/// a commitment and likewise verifies as `false`.
pub fn verify_claim(
    index: usize,
    address: &str,
    proof: &MerkleProof,
    root: &MerkleHash,
) -> bool {
    match claim_leaf(index, address) {
        Ok(leaf) => proof.compute_implied_root(leaf) == *root,
        Err(_) => false,
    }
}
