use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Number of worker threads for parallel decryption (defaults to one per core).
    #[arg(long = "threads", global = true, value_name = "N")]
    pub threads: Option<usize>,

    /// Print the written output as hex.
    #[arg(long = "print", global = true)]
    pub print: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output, prefixing the ciphertext with its IV
    Encrypt(EncryptArgs),

    /// Decrypt input (IV followed by ciphertext) to output
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path (raw 16, 24, or 32 bytes).
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Only valid with --gen-key.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits256,
        requires = "gen_key"
    )]
    pub key_size: KeySize,

    /// Initialisation vector as 32 hex digits (random if omitted)
    #[arg(long = "iv", value_name = "HEX")]
    pub iv: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl From<KeySize> for aescbc::KeySize {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Bits128 => aescbc::KeySize::Aes128,
            KeySize::Bits192 => aescbc::KeySize::Aes192,
            KeySize::Bits256 => aescbc::KeySize::Aes256,
        }
    }
}
