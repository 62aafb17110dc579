use crate::aescbc::cipher::{Cipher, as_iv};
use crate::aescbc::core::Block;
use crate::aescbc::error::Result;
use crate::aescbc::key::Key;
use crate::aescbc::modes::cbc_core_enc;
use crate::aescbc::padding::pad;

/// A CBC session: one key schedule paired with one IV.
///
/// Encrypting twice with the same session produces the same ciphertext, so a fresh IV
/// (see [random_iv](crate::random_iv)) should be used per message when that matters.
#[derive(Clone, Debug)]
pub struct CbcCipher {
    cipher: Cipher,
    iv: Block,
}

impl CbcCipher {
    /// Builds a session from raw key bytes, an IV and a key size in bits.
    /// The IV is validated before the key.
    pub fn new(key: &[u8], iv: &[u8], key_size: u32) -> Result<Self> {
        let iv = *as_iv(iv)?;
        let cipher = Cipher::with_key_size(key, key_size)?;
        Ok(Self { cipher, iv })
    }

    /// Builds a session from an existing [Key].
    pub fn from_key(key: &Key, iv: &[u8]) -> Result<Self> {
        Ok(Self {
            iv: *as_iv(iv)?,
            cipher: Cipher::new(key),
        })
    }

    /// IV used for the first block of every message.
    pub fn iv(&self) -> &Block {
        &self.iv
    }

    /// Underlying block cipher.
    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }

    /// Pads and encrypts `plaintext`. Output is `ceil((len + 1) / 16) * 16` bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        cbc_core_enc(&pad(plaintext), self.cipher.round_keys().as_slice(), &self.iv)
    }

    /// Decrypts and unpads `ciphertext`, choosing serial or parallel decryption by size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.cipher.decrypt_cbc(&self.iv, ciphertext)
    }

    /// Same as [decrypt](Self::decrypt), always on the calling thread.
    pub fn decrypt_serial(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.cipher.decrypt_cbc_serial(&self.iv, ciphertext)
    }

    /// Same as [decrypt](Self::decrypt), always on the rayon pool.
    pub fn decrypt_parallel(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.cipher.decrypt_cbc_parallel(&self.iv, ciphertext)
    }
}
