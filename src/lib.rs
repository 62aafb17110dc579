//! AES-128/192/256 block cipher with PKCS#7 padded CBC mode.
//!
//! ```
//! use aescbc::{CbcCipher, Key, random_iv};
//!
//! # fn main() -> aescbc::Result<()> {
//! let key = Key::rand_key_256()?;
//! let iv = random_iv()?;
//! let session = CbcCipher::from_key(&key, &iv)?;
//!
//! let ciphertext = session.encrypt(b"attack at dawn");
//! assert_eq!(ciphertext.len(), 16);
//! assert_eq!(session.decrypt(&ciphertext)?, b"attack at dawn");
//! # Ok(())
//! # }
//! ```
//!
//! Decryption of inputs of at least [PARALLEL_THRESHOLD] bytes runs on the rayon global pool.

mod aescbc;

pub use aescbc::{
    BLOCK_SIZE, Block, CbcCipher, Cipher, Error, Key, KeySize, PARALLEL_THRESHOLD, Result,
    RoundKeys, decrypt_block, encrypt_block, expand_key, pad, random_iv, unpad,
};
