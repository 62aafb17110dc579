use log::trace;
use rayon::prelude::*;

use crate::aescbc::core::{BLOCK_SIZE, Block, decryption, encryption, xor_block};
use crate::aescbc::error::*;

/// Core CBC encryption algorithm over block-aligned input (no padding is applied here).
/// Each plaintext block is XOR'd with the previous ciphertext block (the IV for block 0)
/// before encryption, so blocks are produced strictly in order.
pub fn cbc_core_enc(plaintext: &[u8], round_keys: &[Block], iv: &Block) -> Vec<u8> {
    debug_assert_eq!(plaintext.len() % BLOCK_SIZE, 0, "CBC input must be padded");

    let mut ciphertext = vec![0u8; plaintext.len()];
    let mut prev = *iv;

    for (pt, ct) in plaintext
        .chunks_exact(BLOCK_SIZE)
        .zip(ciphertext.chunks_exact_mut(BLOCK_SIZE))
    {
        prev = encryption::encrypt_block(&xor_block(&prev, pt), round_keys);
        ct.copy_from_slice(&prev);
    }

    ciphertext
}

/// Core CBC decryption algorithm, serial. Ciphertext must be a multiple of 16 bytes; an empty
/// ciphertext decrypts to an empty buffer.
pub fn cbc_core_dec_serial(
    ciphertext: &[u8],
    round_keys: &[Block],
    iv: &Block,
) -> Result<Vec<u8>> {
    check_ciphertext_len(ciphertext)?;

    let mut plaintext = vec![0u8; ciphertext.len()];
    for (ct, pt) in ciphertext
        .chunks_exact(BLOCK_SIZE)
        .zip(plaintext.chunks_exact_mut(BLOCK_SIZE))
    {
        let ct_block: &Block = ct.try_into().unwrap(); // safe unwrap, exact chunks of 16
        pt.copy_from_slice(&decryption::decrypt_block(ct_block, round_keys));
    }

    chain_xor(&mut plaintext, ciphertext, iv);
    Ok(plaintext)
}

/// Core CBC decryption algorithm, parallel. Every block is decrypted independently on the
/// rayon pool; only once all of them are done is the XOR chain applied.
pub fn cbc_core_dec_parallel(
    ciphertext: &[u8],
    round_keys: &[Block],
    iv: &Block,
) -> Result<Vec<u8>> {
    check_ciphertext_len(ciphertext)?;

    let mut plaintext = vec![0u8; ciphertext.len()];
    plaintext
        .par_chunks_exact_mut(BLOCK_SIZE)
        .zip(ciphertext.par_chunks_exact(BLOCK_SIZE))
        .for_each(|(pt, ct)| {
            let ct_block: &Block = ct.try_into().unwrap(); // safe unwrap, exact chunks of 16
            pt.copy_from_slice(&decryption::decrypt_block(ct_block, round_keys));
        });

    chain_xor(&mut plaintext, ciphertext, iv);
    Ok(plaintext)
}

fn check_ciphertext_len(ciphertext: &[u8]) -> Result<()> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertextLength {
            len: ciphertext.len(),
        });
    }
    trace!("CBC decrypt: {} blocks", ciphertext.len() / BLOCK_SIZE);
    Ok(())
}

/// XOR each decrypted block with the ciphertext block before it (IV for block 0).
/// Reads only ciphertext, never another block's decryption result.
#[inline(always)]
fn chain_xor(decrypted: &mut [u8], ciphertext: &[u8], iv: &Block) {
    let previous = std::iter::once(&iv[..]).chain(ciphertext.chunks_exact(BLOCK_SIZE));
    for (block, prev) in decrypted.chunks_exact_mut(BLOCK_SIZE).zip(previous) {
        for (b, p) in block.iter_mut().zip(prev) {
            *b ^= p;
        }
    }
}
