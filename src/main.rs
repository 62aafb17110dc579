mod args;

use args::{Cli, Commands};
use clap::Parser;
use log::debug;

use std::fs;
use std::time::Instant;

use aescbc::{BLOCK_SIZE, Cipher, Key};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid --iv hex: {0}")]
    IvInvalidHex(#[from] hex::FromHexError),

    #[error("input too short to hold an IV: {0} bytes")]
    MissingIv(usize),

    #[error("could not size thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aescbc::Error),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = aes_cli() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn aes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        debug!("rayon pool sized to {threads} threads");
    }

    let written = match args.command {
        Commands::Encrypt(enc) => {
            let input_path = enc.common.input; // move ownership
            let output_path = enc.common.output;
            let key_path = enc.common.key;

            let plaintext = fs::read(input_path)?;

            // read or generate key
            let key = if enc.gen_key {
                let rand_key = Key::random(enc.key_size.into())?;
                fs::write(key_path, rand_key.as_bytes())?;
                rand_key
            } else {
                Key::try_from_slice(&fs::read(key_path)?)?
            };

            let iv = match enc.iv {
                Some(iv_hex) => hex::decode(iv_hex.trim())?,
                None => aescbc::random_iv()?.to_vec(),
            };

            let start = Instant::now();
            let ciphertext = Cipher::new(&key).encrypt_cbc(&iv, &plaintext)?;
            let duration = start.elapsed();

            let mut output = Vec::with_capacity(iv.len() + ciphertext.len());
            output.extend_from_slice(&iv);
            output.extend_from_slice(&ciphertext);
            fs::write(output_path, &output)?;

            println!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            output
        }
        Commands::Decrypt(common) => {
            let input_path = common.input; // move ownership
            let output_path = common.output;
            let key_path = common.key;

            let input = fs::read(input_path)?;
            let key = Key::try_from_slice(&fs::read(key_path)?)?;

            if input.len() < BLOCK_SIZE {
                return Err(CliError::MissingIv(input.len()));
            }
            let (iv, ciphertext) = input.split_at(BLOCK_SIZE);

            let start = Instant::now();
            let plaintext = Cipher::new(&key).decrypt_cbc(iv, ciphertext)?;
            let duration = start.elapsed();

            fs::write(output_path, &plaintext)?;

            println!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            plaintext
        }
    };

    if args.print {
        println!("{}", hex::encode(&written));
    }

    Ok(())
}
