use log::debug;
use rayon::prelude::*;

use crate::aescbc::core::{Block, RoundKeys, decrypt_block, encrypt_block, expand_key};
use crate::aescbc::error::{Error, Result};
use crate::aescbc::key::{Key, KeySize};
use crate::aescbc::modes::*;
use crate::aescbc::padding::{pad, unpad_vec};

/// Checks that `iv` is exactly one block long.
pub(crate) fn as_iv(iv: &[u8]) -> Result<&Block> {
    iv.try_into()
        .map_err(|_| Error::InvalidIvLength { len: iv.len() })
}

/// AES block cipher. Instantiated with an AES [Key], which is expanded into round keys once and
/// stored in the instance. Provides single-block encryption and decryption plus
/// [CBC](crate::Cipher::encrypt_cbc) over whole buffers with PKCS#7 padding.
///
/// The round keys are never modified after construction, so one instance can be shared across
/// threads and used concurrently without locking.
#[derive(Clone, Debug)]
pub struct Cipher {
    round_keys: RoundKeys,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Builds a cipher from raw key bytes and a key size in bits (128, 192, or 256).
    /// Returns InvalidKeySize or InvalidKeyLength if they do not describe a valid AES key.
    pub fn with_key_size(key: &[u8], key_size: u32) -> Result<Self> {
        Ok(Self::new(&Key::new(key, key_size)?))
    }

    /// Key size this cipher was built with.
    pub fn key_size(&self) -> KeySize {
        self.round_keys.size()
    }

    /// Getter for internal round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts exactly one 16-byte block (ECB-equivalent, no chaining or padding).
    pub fn encrypt_block(&self, block: &[u8]) -> Result<Block> {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts exactly one 16-byte block.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<Block> {
        decrypt_block(block, &self.round_keys)
    }

    /// **Cipher block chaining** encryption.
    ///
    /// The plaintext is PKCS#7 padded, then for each 16-byte block:
    /// 1. The block is `XOR`'d with the previous ciphertext block (the IV for the first block).
    /// 2. The result is encrypted using the round keys.
    ///
    /// Every block depends on the one before it, so encryption always runs serially.
    /// Output is `ceil((len + 1) / 16) * 16` bytes; the IV is not included.
    pub fn encrypt_cbc(&self, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        Ok(cbc_core_enc(&pad(plaintext), self.round_keys.as_slice(), iv))
    }

    /// **Cipher block chaining** decryption.
    ///
    /// Runs on the rayon pool when the ciphertext is at least [PARALLEL_THRESHOLD] bytes, and
    /// serially otherwise. Returns:
    /// - [InvalidIvLength](crate::Error::InvalidIvLength) if the IV is not 16 bytes.
    /// - [InvalidCiphertextLength](crate::Error::InvalidCiphertextLength) if the ciphertext is
    ///   not a multiple of 16 bytes.
    /// - [InvalidPadding](crate::Error::InvalidPadding) if the decrypted padding is malformed or
    ///   missing (an empty ciphertext), which is also what a modified ciphertext, wrong key, or
    ///   wrong IV usually produces.
    pub fn decrypt_cbc(&self, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() >= PARALLEL_THRESHOLD {
            debug!("CBC decrypt of {} bytes: parallel", ciphertext.len());
            self.decrypt_cbc_parallel(iv, ciphertext)
        } else {
            debug!("CBC decrypt of {} bytes: serial", ciphertext.len());
            self.decrypt_cbc_serial(iv, ciphertext)
        }
    }

    /// CBC decryption on the calling thread only.
    pub fn decrypt_cbc_serial(&self, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let mut plaintext = cbc_core_dec_serial(ciphertext, self.round_keys.as_slice(), iv)?;
        unpad_vec(&mut plaintext)?;
        Ok(plaintext)
    }

    /// CBC decryption with the per-block phase spread across the rayon pool.
    pub fn decrypt_cbc_parallel(&self, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let mut plaintext = cbc_core_dec_parallel(ciphertext, self.round_keys.as_slice(), iv)?;
        unpad_vec(&mut plaintext)?;
        Ok(plaintext)
    }

    /// Encrypts many independent messages in parallel, each as `(iv, plaintext)`.
    ///
    /// Results are returned in input order. If any message fails, the whole batch fails with
    /// the error of the first failing message.
    pub fn encrypt_cbc_batch(&self, messages: &[(&[u8], &[u8])]) -> Result<Vec<Vec<u8>>> {
        debug!("CBC batch encrypt of {} messages", messages.len());
        let results: Vec<Result<Vec<u8>>> = messages
            .par_iter()
            .map(|(iv, plaintext)| self.encrypt_cbc(iv, plaintext))
            .collect();
        results.into_iter().collect()
    }

    /// Decrypts many independent messages in parallel, each as `(iv, ciphertext)`.
    /// Same ordering and failure rules as [encrypt_cbc_batch](crate::Cipher::encrypt_cbc_batch).
    pub fn decrypt_cbc_batch(&self, messages: &[(&[u8], &[u8])]) -> Result<Vec<Vec<u8>>> {
        debug!("CBC batch decrypt of {} messages", messages.len());
        let results: Vec<Result<Vec<u8>>> = messages
            .par_iter()
            .map(|(iv, ciphertext)| self.decrypt_cbc(iv, ciphertext))
            .collect();
        results.into_iter().collect()
    }
}
