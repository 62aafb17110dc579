mod cbc;
mod cipher;
mod core;
mod error;
mod key;
mod modes;
mod padding;

pub use cbc::CbcCipher;
pub use cipher::Cipher;
pub use self::core::{BLOCK_SIZE, Block, RoundKeys, decrypt_block, encrypt_block, expand_key};
pub use error::{Error, Result};
pub use key::{Key, KeySize, random_iv};
pub use modes::PARALLEL_THRESHOLD;
pub use padding::{pad, unpad};
