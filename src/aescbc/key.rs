//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits, and the
//! [`KeySize`] enumeration that carries the per-size parameters of the cipher.
//! Keys can be randomly generated or constructed from an existing byte slice.

use rand::TryRngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::aescbc::error::{Error, Result};

/// The three AES key sizes. Each variant fixes `Nk` (key length in 32-bit words) and
/// `Nr` (number of rounds), as named in FIPS-197.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    /// Maps a key size in bits to a variant. Returns an InvalidKeySize error for anything
    /// other than 128, 192, or 256.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(Self::Aes128),
            192 => Ok(Self::Aes192),
            256 => Ok(Self::Aes256),
            _ => Err(Error::InvalidKeySize { bits }),
        }
    }

    /// Key size in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Aes128 => 128,
            Self::Aes192 => 192,
            Self::Aes256 => 256,
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Number of 32-bit words comprising the key.
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds.
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    fn expected_len(self) -> &'static str {
        match self {
            Self::Aes128 => "16",
            Self::Aes192 => "24",
            Self::Aes256 => "32",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key. Can be instantiated with a random key, or built from a slice
/// of bytes that is 16, 24, or 32 bytes long. Key bytes are wiped when the key is dropped.
/// A `Key` object is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> aescbc::Result<()> {
/// use aescbc::{Key, KeySize};
///
/// // Instantiate random keys:
/// let rk_128 = Key::rand_key_128()?;
/// let rk_256 = Key::rand_key_256()?;
/// assert_eq!(rk_128.size(), KeySize::Aes128);
/// assert_eq!(rk_256.size(), KeySize::Aes256);
///
/// // Instantiate keys from a slice with an explicit size in bits:
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
/// let my_key_192 = Key::new(&key_bytes[..24], 192)?;
/// assert_eq!(my_key_192.as_bytes(), &key_bytes[..24]);
///
/// // Key bytes must match the requested size:
/// assert!(Key::new(&key_bytes[..15], 128).is_err());
/// // And the size must be one of 128, 192, or 256:
/// assert!(Key::new(&key_bytes[..20], 160).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Builds a key from `bytes` for the requested `key_size` in bits. The size is checked
    /// first (InvalidKeySize), then the byte length against it (InvalidKeyLength).
    pub fn new(bytes: &[u8], key_size: u32) -> Result<Self> {
        let size = KeySize::from_bits(key_size)?;
        if bytes.len() != size.key_len() {
            return Err(Error::InvalidKeyLength {
                len: bytes.len(),
                expected: size.expected_len(),
            });
        }
        Self::try_from_slice(bytes)
    }

    /// Attempts to build a key from a slice of bytes, inferring the key size from its length.
    /// Will return an InvalidKeyLength error if the input slice is anything other than 16, 24,
    /// or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength {
            len: bytes.len(),
            expected: "16, 24, or 32",
        };
        Ok(match bytes.len() {
            16 => Self {
                bytes: KeyBytes::K128(bytes.try_into().map_err(|_| invalid())?),
            },
            24 => Self {
                bytes: KeyBytes::K192(bytes.try_into().map_err(|_| invalid())?),
            },
            32 => Self {
                bytes: KeyBytes::K256(bytes.try_into().map_err(|_| invalid())?),
            },
            _ => return Err(invalid()),
        })
    }

    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key_128() -> Result<Self> {
        let mut k = [0u8; 16];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K128(k),
        })
    }

    /// Generate a random 192-bit key. Returns Error if OsRng fails.
    pub fn rand_key_192() -> Result<Self> {
        let mut k = [0u8; 24];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K192(k),
        })
    }

    /// Generate a random 256-bit key. Returns Error if OsRng fails.
    pub fn rand_key_256() -> Result<Self> {
        let mut k = [0u8; 32];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K256(k),
        })
    }

    /// Generate a random key of the given size. Returns Error if OsRng fails.
    pub fn random(size: KeySize) -> Result<Self> {
        match size {
            KeySize::Aes128 => Self::rand_key_128(),
            KeySize::Aes192 => Self::rand_key_192(),
            KeySize::Aes256 => Self::rand_key_256(),
        }
    }

    /// Size of this key.
    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Aes128,
            KeyBytes::K192(_) => KeySize::Aes192,
            KeyBytes::K256(_) => KeySize::Aes256,
        }
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        match &mut self.bytes {
            KeyBytes::K128(k) => k.zeroize(),
            KeyBytes::K192(k) => k.zeroize(),
            KeyBytes::K256(k) => k.zeroize(),
        }
    }
}

/// Generate a random 16-byte initialisation vector for CBC. Returns Error if OsRng fails.
pub fn random_iv() -> Result<[u8; 16]> {
    let mut iv = [0u8; 16];
    OsRng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_size_parameters() {
        assert_eq!((KeySize::Aes128.nk(), KeySize::Aes128.nr()), (4, 10));
        assert_eq!((KeySize::Aes192.nk(), KeySize::Aes192.nr()), (6, 12));
        assert_eq!((KeySize::Aes256.nk(), KeySize::Aes256.nr()), (8, 14));
        assert_eq!(KeySize::Aes192.key_len(), 24);
        assert_eq!(KeySize::Aes256.bits(), 256);
    }

    #[test]
    fn short_key_for_128_bits_is_rejected() {
        let err = Key::new(&[0u8; 15], 128).unwrap_err();
        assert!(matches!(err, Error::InvalidKeyLength { len: 15, .. }));
    }

    #[test]
    fn mismatched_size_and_length_is_rejected() {
        // a valid 256-bit key presented as 128 bits
        let err = Key::new(&[0u8; 32], 128).unwrap_err();
        assert!(matches!(err, Error::InvalidKeyLength { len: 32, .. }));
    }

    #[test]
    fn unsupported_key_size_is_rejected_before_length() {
        let err = Key::new(&[0u8; 15], 100).unwrap_err();
        assert!(matches!(err, Error::InvalidKeySize { bits: 100 }));
    }

    #[test]
    fn inferred_sizes() -> Result<()> {
        assert_eq!(Key::try_from_slice(&[1u8; 16])?.size(), KeySize::Aes128);
        assert_eq!(Key::try_from_slice(&[1u8; 24])?.size(), KeySize::Aes192);
        assert_eq!(Key::try_from_slice(&[1u8; 32])?.size(), KeySize::Aes256);
        assert!(Key::try_from_slice(&[1u8; 20]).is_err());
        Ok(())
    }

    #[test]
    fn random_keys_have_requested_size() -> Result<()> {
        for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
            let key = Key::random(size)?;
            assert_eq!(key.size(), size);
            assert_eq!(key.as_bytes().len(), size.key_len());
        }
        Ok(())
    }

    #[test]
    fn debug_output_hides_key_bytes() -> Result<()> {
        let key = Key::new(&[0xAB; 16], 128)?;
        let shown = format!("{key:?}");
        assert!(!shown.contains("171"));
        assert!(shown.contains("Aes128"));
        Ok(())
    }
}
