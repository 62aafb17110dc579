//! Core AES implementation for encryption and decryption of a 16 byte block, plus the key schedule
//! that feeds it. Exports encrypt_block and decrypt_block.

pub(crate) mod constants;
pub(crate) mod decryption;
pub(crate) mod encryption;
mod gf;
mod schedule;
mod util;

use crate::aescbc::error::{Error, Result};

pub use schedule::{RoundKeys, expand_key};
pub use util::{BLOCK_SIZE, Block};
pub(crate) use util::xor_block;

/// Checks that `bytes` is exactly one block long.
pub(crate) fn as_block(bytes: &[u8]) -> Result<&Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: bytes.len() })
}

/// Encrypts exactly one 16-byte block with an expanded key schedule.
/// Returns an InvalidBlockLength error for any other input length.
pub fn encrypt_block(block: &[u8], round_keys: &RoundKeys) -> Result<Block> {
    Ok(encryption::encrypt_block(as_block(block)?, round_keys.as_slice()))
}

/// Decrypts exactly one 16-byte block with an expanded key schedule.
/// Returns an InvalidBlockLength error for any other input length.
pub fn decrypt_block(block: &[u8], round_keys: &RoundKeys) -> Result<Block> {
    Ok(decryption::decrypt_block(as_block(block)?, round_keys.as_slice()))
}
