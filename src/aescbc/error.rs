use rand::rand_core;
use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Key bytes do not match the requested key size (or, when the size is inferred,
    /// the key is not 16, 24, or 32 bytes long).
    #[error("invalid key length: {len} bytes (expected {expected})")]
    InvalidKeyLength { len: usize, expected: &'static str },

    /// Requested key size is not 128, 192, or 256 bits.
    #[error("invalid key size: {bits} bits (expected 128, 192, or 256)")]
    InvalidKeySize { bits: u32 },

    /// Attempted to encrypt or decrypt a single block that is not exactly 16 bytes.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidBlockLength { len: usize },

    /// CBC initialisation vector is not exactly 16 bytes.
    #[error("invalid IV length: {len} bytes (expected 16)")]
    InvalidIvLength { len: usize },

    /// CBC ciphertext is not a multiple of the block size.
    #[error("invalid ciphertext length: {len} bytes (expected a multiple of 16)")]
    InvalidCiphertextLength { len: usize },

    /// PKCS#7 padding could not be removed. The ciphertext was corrupted, modified, or
    /// decrypted with the wrong key or IV.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    /// OS RNG failed during random key or IV generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
