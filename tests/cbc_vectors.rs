#![cfg(feature = "test-vectors")]

// block vectors from FIPS-197 Appendix C, CBC vectors from NIST SP 800-38A F.2

use std::error::Error;

use aescbc::{CbcCipher, Cipher, Key, pad};
use hex_literal::hex;

const FIPS_PLAINTEXT: [u8; 16] = hex!("00112233445566778899aabbccddeeff");

const SP_IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

const SP_PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

struct CbcCase {
    bits: u32,
    key: &'static [u8],
    ciphertext: [u8; 64],
}

const CBC_CASES: [CbcCase; 3] = [
    CbcCase {
        bits: 128,
        key: &hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        ciphertext: hex!(
            "7649abac8119b246cee98e9b12e9197d"
            "5086cb9b507219ee95db113a917678b2"
            "73bed6b8e3c1743b7116e69e22229516"
            "3ff1caa1681fac09120eca307586e1a7"
        ),
    },
    CbcCase {
        bits: 192,
        key: &hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b"),
        ciphertext: hex!(
            "4f021db243bc633d7178183a9fa071e8"
            "b4d9ada9ad7dedf4e5e738763f69145a"
            "571b242012fb7ae07fa9baac3df102e0"
            "08b0e27988598881d920a9e64f5615cd"
        ),
    },
    CbcCase {
        bits: 256,
        key: &hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"),
        ciphertext: hex!(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6"
            "9cfc4e967edb808d679f777bc6702c7d"
            "39f23369a9d9bacfa530e26304231461"
            "b2eb05e2c39be9fcda6c19078c6a9d1b"
        ),
    },
];

#[test]
fn fips197_appendix_c() -> Result<(), Box<dyn Error>> {
    let cases: [(u32, &[u8], [u8; 16]); 3] = [
        (
            128,
            &hex!("000102030405060708090a0b0c0d0e0f"),
            hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
        ),
        (
            192,
            &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
            hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
        ),
        (
            256,
            &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
            hex!("8ea2b7ca516745bfeafc49904b496089"),
        ),
    ];

    for (bits, key, expected) in cases {
        let cipher = Cipher::new(&Key::new(key, bits)?);
        assert_eq!(
            cipher.encrypt_block(&FIPS_PLAINTEXT)?,
            expected,
            "AES-{bits} encryption"
        );
        assert_eq!(
            cipher.decrypt_block(&expected)?,
            FIPS_PLAINTEXT,
            "AES-{bits} decryption"
        );
    }
    Ok(())
}

#[test]
fn sp800_38a_cbc_encrypt() -> Result<(), Box<dyn Error>> {
    for case in &CBC_CASES {
        let session = CbcCipher::new(case.key, &SP_IV, case.bits)?;
        let ciphertext = session.encrypt(&SP_PLAINTEXT);

        // the published vectors are unpadded; our output carries one extra padding block
        assert_eq!(ciphertext.len(), 80);
        assert_eq!(ciphertext[..64], case.ciphertext, "AES-{} CBC", case.bits);

        let last_block = session.cipher().encrypt_block(
            &pad(&[])
                .iter()
                .zip(&case.ciphertext[48..])
                .map(|(p, c)| p ^ c)
                .collect::<Vec<u8>>(),
        )?;
        assert_eq!(ciphertext[64..], last_block);
    }
    Ok(())
}

#[test]
fn sp800_38a_cbc_decrypt() -> Result<(), Box<dyn Error>> {
    for case in &CBC_CASES {
        let session = CbcCipher::new(case.key, &SP_IV, case.bits)?;
        let ciphertext = session.encrypt(&SP_PLAINTEXT);

        assert_eq!(session.decrypt_serial(&ciphertext)?, SP_PLAINTEXT);
        assert_eq!(session.decrypt_parallel(&ciphertext)?, SP_PLAINTEXT);
    }
    Ok(())
}
