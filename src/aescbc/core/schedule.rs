use log::debug;
use zeroize::Zeroize;

use super::constants::{RCON, SBOX};
use crate::aescbc::key::{Key, KeySize};

/// Expanded AES key schedule: `Nr + 1` round keys of 16 bytes each. Every round key is stored
/// column-major (four 4-byte words back to back), the same layout as the cipher state, so
/// AddRoundKey is a plain byte-wise XOR. Wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeys {
    keys: Vec<[u8; 16]>,
    size: KeySize,
}

impl RoundKeys {
    /// Runs the key schedule on `key`.
    pub fn new(key: &Key) -> Self {
        expand_key(key)
    }

    /// Key size the schedule was derived from.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`). One less than the number of round keys.
    pub fn rounds(&self) -> usize {
        self.keys.len() - 1
    }

    /// Round key for `round` (0..=Nr), or None if out of range.
    pub fn get(&self, round: usize) -> Option<&[u8; 16]> {
        self.keys.get(round)
    }

    /// All round keys, round 0 first.
    pub fn as_slice(&self) -> &[[u8; 16]] {
        &self.keys
    }
}

impl std::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundKeys")
            .field("size", &self.size)
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}

impl Drop for RoundKeys {
    fn drop(&mut self) {
        self.keys.zeroize();
    }
}

#[inline(always)]
fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// AES key schedule. Returns 11, 13, or 15 round keys, corresponding with AES-128, AES-192,
/// and AES-256, respectively. The extra round key is the initial round key, which is not
/// counted in most documentation as it is simply the original key.
pub fn expand_key(key: &Key) -> RoundKeys {
    let size = key.size();
    let key = key.as_bytes();

    // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   The number of 32-bit words comprising the key
    // Nr   The number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively
    // w    The result of the key schedule, an array of words that form round keys
    // Nw   The total number of words generated by the key schedule (including initial key)
    let nk = size.nk();
    let nr = size.nr();
    let nw = (nr + 1) * 4;

    let mut w: Vec<[u8; 4]> = vec![[0u8; 4]; nw];

    // first nk words of w are filled with the initial key
    for (i, &byte) in key.iter().enumerate() {
        w[i / 4][i % 4] = byte;
    }

    let mut temp = w[nk - 1];
    for i in nk..nw {
        if i % nk == 0 {
            // rot_word, sub_word, and rcon in one step
            temp = [
                SBOX[temp[1] as usize] ^ RCON[i / nk],
                SBOX[temp[2] as usize],
                SBOX[temp[3] as usize],
                SBOX[temp[0] as usize],
            ];
        } else if nk > 6 && i % nk == 4 {
            // AES-256 only
            temp = [
                SBOX[temp[0] as usize],
                SBOX[temp[1] as usize],
                SBOX[temp[2] as usize],
                SBOX[temp[3] as usize],
            ];
        }

        // w[i] = temp ⊕ w[i − Nk]
        w[i] = xor_words(&temp, &w[i - nk]);
        temp = w[i];
    }

    let mut keys = vec![[0u8; 16]; nr + 1];
    for (round_key, words) in keys.iter_mut().zip(w.chunks_exact(4)) {
        for (col, word) in words.iter().enumerate() {
            round_key[col * 4..col * 4 + 4].copy_from_slice(word);
        }
    }
    w.zeroize();
    temp.zeroize();

    debug!("expanded AES-{} key into {} round keys", size.bits(), keys.len());
    RoundKeys { keys, size }
}
