//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial (the x^8 term is shifted out).
const REDUCTION: u8 = 0x1B;

/// Multiplication by x. Shifts left and reduces when the high bit falls off.
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub(crate) fn dbl(a: u8) -> u8 {
    (a << 1) ^ (REDUCTION & (0u8).wrapping_sub((a >> 7) & 1))
}

/// Carry-less multiply-and-reduce of two field elements: 8 shift-and-conditional-XOR
/// steps, one per bit of `b`, masking instead of branching.
#[inline(always)]
pub(crate) fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        p ^= a & (0u8).wrapping_sub(b & 1);
        a = dbl(a);
        b >>= 1;
    }
    p
}
