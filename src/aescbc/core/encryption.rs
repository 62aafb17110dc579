use super::constants::SBOX;
use super::gf::gf_mul;
use super::util::{Block, add_round_key};

/// MixColumns multiplier matrix, one row per output byte of a column.
const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Core AES encryption function. Encrypts 16 byte block using provided round keys.
#[inline(always)]
pub(crate) fn encrypt_block(plaintext: &Block, round_keys: &[Block]) -> Block {
    let mut state = *plaintext;
    let last_key_idx = round_keys.len() - 1;

    // add first round key to state
    add_round_key(&mut state, &round_keys[0]);

    // perform all rounds except for the last
    for round_key in &round_keys[1..last_key_idx] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    // last round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[last_key_idx]);

    state
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut Block) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step.
/// The 0th row does not change.
/// The first row shifts left by one position.
/// The second row shifts left by two positions.
/// The third row shifts left by three positions.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut Block) {
    // state is stored as columns: [c0, c0, c0, c0, c1, ... c1, c2, ... c2, ...]
    // for row,col of updated state, old value is at ((col + row) & 3) * 4 + row
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// MixColumns step. Each column is multiplied by a constant matrix using Galois field
/// multiplication.
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let b = [column[0], column[1], column[2], column[3]];
        for (out, row) in column.iter_mut().zip(&MIX) {
            *out = gf_mul(row[0], b[0])
                ^ gf_mul(row[1], b[1])
                ^ gf_mul(row[2], b[2])
                ^ gf_mul(row[3], b[3]);
        }
    }
}
