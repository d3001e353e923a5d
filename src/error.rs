//! Distribution commitment errors

use displaydoc::Display;

#[derive(Debug, Display)]
pub enum Error {
    /// Address: {0} is not a valid checksummed account address
    InvalidAddress(String),
    /// Requested index: {0} is outside the valid range: 0..{1}
    IndexOutOfRange(usize, usize),
    /// A commitment requires at least one leaf
    EmptyInput,
}
