//! PKCS#7 padding for 16-byte blocks.

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater};

use crate::aescbc::core::BLOCK_SIZE;
use crate::aescbc::error::{Error, Result};

/// Appends `n` bytes of value `n`, where `n = 16 - len % 16`. A message that is already
/// block aligned gains a full block of `0x10`.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;

    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Validates and strips PKCS#7 padding, returning the unpadded prefix of `padded`.
///
/// The padding length `n` is read from the last byte and must satisfy `1 <= n <= 16` and
/// `n <= padded.len()`; every one of the last `n` bytes must equal `n`. The check always walks
/// the same trailing window and folds each comparison into a single [`Choice`], so where the
/// padding goes wrong does not alter the path taken.
pub fn unpad(padded: &[u8]) -> Result<&[u8]> {
    let Some(&last) = padded.last() else {
        return Err(Error::InvalidPadding);
    };
    let len = padded.len();

    let mut valid = !last.ct_eq(&0) & !last.ct_gt(&(BLOCK_SIZE as u8));
    valid &= !(last as u64).ct_gt(&(len as u64));

    // walk the last min(len, 16) bytes; bytes past the claimed padding are ignored
    let window = len.min(BLOCK_SIZE);
    for (i, &byte) in padded[len - window..].iter().rev().enumerate() {
        let in_padding: Choice = last.ct_gt(&(i as u8));
        valid &= !in_padding | byte.ct_eq(&last);
    }

    if bool::from(valid) {
        Ok(&padded[..len - last as usize])
    } else {
        Err(Error::InvalidPadding)
    }
}

/// Remove and validate PKCS#7 padding in place.
pub(crate) fn unpad_vec(input: &mut Vec<u8>) -> Result<()> {
    let keep = unpad(input)?.len();
    input.truncate(keep);
    Ok(())
}
