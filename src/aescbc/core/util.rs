/// A single 16-byte AES block.
pub type Block = [u8; 16];

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

// used for both encryption and decryption
#[inline(always)]
pub(crate) fn add_round_key(state: &mut Block, round_key: &Block) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

#[inline(always)]
pub(crate) fn xor_block(a: &Block, b: &[u8]) -> Block {
    let mut out = *a;
    for (o, x) in out.iter_mut().zip(b) {
        *o ^= x;
    }
    out
}
