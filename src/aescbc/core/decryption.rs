use super::constants::SBOX_INV;
use super::gf::gf_mul;
use super::util::{Block, add_round_key};

/// Inverse MixColumns multiplier matrix.
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Core AES decryption function. Decrypts 16 byte block using provided round keys.
#[inline(always)]
pub(crate) fn decrypt_block(ciphertext: &Block, round_keys: &[Block]) -> Block {
    let mut state = *ciphertext;
    let num_keys = round_keys.len();

    add_round_key(&mut state, &round_keys[num_keys - 1]);

    for round_key in round_keys[1..num_keys - 1].iter().rev() {
        shift_rows_inv(&mut state);
        sub_bytes_inv(&mut state);
        add_round_key(&mut state, round_key);
        mix_columns_inv(&mut state);
    }

    shift_rows_inv(&mut state);
    sub_bytes_inv(&mut state);
    add_round_key(&mut state, &round_keys[0]);

    state
}

/// Inverse SubBytes step. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut Block) {
    for byte in state {
        *byte = SBOX_INV[*byte as usize];
    }
}

/// Inverse ShiftRows step.
/// The 0th row does not change.
/// The first row shifts right by one position.
/// The second row shifts right by two positions.
/// The third row shifts right by three positions.
/// [
///     01 02 03 04   ---->   01 02 03 04
///     06 07 08 05   ---->   05 06 07 08
///     11 12 09 10   ---->   09 10 11 12
///     16 13 14 15   ---->   13 14 15 16
/// ]
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut Block) {
    // for row,col of updated state, old value is at ((col + 4 - row) & 3) * 4 + row
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + 4 - row) & 3) * 4 + row];
        }
    }
}

/// Inverse MixColumns step. Each column is multiplied by a constant matrix using Galois field
/// multiplication.
/// [ b0 ]      [ 14  11  13  09 ]  [ d0 ]
/// | b1 |  =   | 09  14  11  13 |  | d1 |
/// | b2 |      | 13  09  14  11 |  | d2 |
/// [ b3 ]      [ 11  13  09  14 ]  [ d3 ]
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let d = [column[0], column[1], column[2], column[3]];
        for (out, row) in column.iter_mut().zip(&INV_MIX) {
            *out = gf_mul(row[0], d[0])
                ^ gf_mul(row[1], d[1])
                ^ gf_mul(row[2], d[2])
                ^ gf_mul(row[3], d[3]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aescbc::cipher::Cipher;
    use crate::aescbc::core::encryption;
    use crate::aescbc::error::Result;
    use crate::aescbc::key::Key;

    fn sample_state() -> [u8; 16] {
        [
            // col 0
            0x00, 0x01, 0x02, 0x03,
            // col 1
            0x04, 0x05, 0x06, 0x07,
            // col 2
            0x08, 0x09, 0x0a, 0x0b,
            // col 3
            0x0c, 0x0d, 0x0e, 0x0f,
        ]
    }

    #[test]
    fn test_shift_rows() {
        let mut actual = sample_state();
        let expected = actual;

        encryption::shift_rows(&mut actual);
        shift_rows_inv(&mut actual);

        assert_eq!(
            actual, expected,
            "shift rows inverse does not exactly reverse shift rows"
        );
    }

    #[test]
    fn test_sub_bytes() {
        let mut actual = sample_state();
        let expected = actual;

        encryption::sub_bytes(&mut actual);
        sub_bytes_inv(&mut actual);

        assert_eq!(
            actual, expected,
            "sub bytes inverse does not exactly reverse sub bytes"
        );
    }

    #[test]
    fn test_mix_columns() {
        let mut actual = sample_state();
        let expected = actual;

        encryption::mix_columns(&mut actual);
        mix_columns_inv(&mut actual);

        assert_eq!(
            actual, expected,
            "mix columns inverse does not exactly reverse mix columns"
        );
    }

    #[test]
    fn inverse_mix_columns_known_column() {
        let mut state = [
            0x04, 0x66, 0x81, 0xe5, //
            0xe0, 0xcb, 0x19, 0x9a, //
            0x48, 0xf8, 0xd3, 0x7a, //
            0x28, 0x06, 0x26, 0x4c, //
        ];
        mix_columns_inv(&mut state);
        assert_eq!(state[..4], [0xd4, 0xbf, 0x5d, 0x30]);
    }

    #[test]
    fn test_decrypt_block_fips197() -> Result<()> {
        // FIPS-197 Appendix C.3 (AES-256), inverse cipher
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let ciphertext: [u8; 16] = [
            0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, //
            0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60, 0x89, //
        ];
        let expected: [u8; 16] = core::array::from_fn(|i| (i as u8) * 0x11);

        let cipher = Cipher::new(&Key::new(&key, 256)?);
        let actual = decrypt_block(&ciphertext, cipher.round_keys().as_slice());

        assert_eq!(actual, expected, "incorrect AES-256 decryption of FIPS-197 block");
        Ok(())
    }

    #[test]
    fn test_decrypt_block() -> Result<()> {
        for key in [Key::rand_key_128()?, Key::rand_key_192()?, Key::rand_key_256()?] {
            let cipher = Cipher::new(&key);
            let round_keys = cipher.round_keys().as_slice();
            let plaintext = sample_state();

            let encrypted = encryption::encrypt_block(&plaintext, round_keys);
            let decrypted = decrypt_block(&encrypted, round_keys);

            assert_eq!(
                decrypted, plaintext,
                "decrypt block does not exactly reverse encrypt block"
            );
        }
        Ok(())
    }
}
