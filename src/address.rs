//! Checksummed account address decoding
//!
//! Recipient addresses arrive as SS58 strings: base58 text carrying a
//! network prefix, the raw 32-byte account id, and a 2-byte checksum.
//! The checksum is the leading bytes of blake2b-512 over the payload
//! preceded by the `SS58PRE` domain tag. Only the account id matters
//! to the commitment; the network prefix is validated and discarded.

use crate::error::Error;
use blake2::{Blake2b512, Digest};

/// Length of a raw account id in bytes
pub const ACCOUNT_ID_LEN: usize = 32;

/// Trailing checksum bytes on a simple account address
const CHECKSUM_LEN: usize = 2;

/// Domain tag mixed into the checksum hash
const CHECKSUM_TAG: &[u8] = b"SS58PRE";

/// Raw fixed-length form of a recipient account
pub type AccountId = [u8; ACCOUNT_ID_LEN];

/// Decode a checksummed address string into its raw account id.
///
/// Network prefixes in the simple-account range are accepted (one
/// leading byte for 0..=63, two for 64..=127). Malformed base58, an
/// unexpected payload length, or a checksum mismatch all fail with
/// [`Error::InvalidAddress`].
pub fn decode_address(address: &str) -> Result<AccountId, Error> {
    let data = bs58::decode(address)
        .into_vec()
        .map_err(|_| Error::InvalidAddress(address.to_string()))?;

    let prefix_len = match data.first().copied() {
        Some(0..=63) => 1,
        Some(64..=127) => 2,
        _ => return Err(Error::InvalidAddress(address.to_string())),
    };
    if data.len() != prefix_len + ACCOUNT_ID_LEN + CHECKSUM_LEN {
        return Err(Error::InvalidAddress(address.to_string()));
    }

    let (payload, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
    let mut hasher = Blake2b512::new();
    hasher.update(CHECKSUM_TAG);
    hasher.update(payload);
    if hasher.finalize()[..CHECKSUM_LEN] != *checksum {
        return Err(Error::InvalidAddress(address.to_string()));
    }

    let mut account = [0u8; ACCOUNT_ID_LEN];
    account.copy_from_slice(&payload[prefix_len..]);
    Ok(account)
}
