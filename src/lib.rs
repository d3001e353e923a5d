//! Merkle commitment over an ordered distribution list
//!
//! Binds each recipient address to its position in the list, builds a
//! binary hash tree over the resulting digests, and produces short
//! inclusion proofs. A verifier holding only the 32-byte root can
//! check that a `(position, address)` claim was committed without
//! seeing the rest of the list.

mod address;
mod distribution;
mod error;
mod hash;
mod tree;

pub use crate::{
    address::{decode_address, AccountId, ACCOUNT_ID_LEN},
    distribution::{claim_leaf, verify_claim, DistributionTree, MAX_CLAIMS},
    error::Error,
    hash::{combine_nodes, MerkleHash},
    tree::{MerkleProof, MerkleTree},
};
