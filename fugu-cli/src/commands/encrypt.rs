//! String encryption command.

use anyhow::{Context, Result};
use fugu::PasswordCipher;
use log::info;

/// Encrypts `text` under a key derived from `password` and prints the
/// hex-framed result.
pub fn encrypt(text: &str, password: &str, iv: Option<&str>) -> Result<()> {
    let mut cipher = PasswordCipher::new(password);

    let encrypted = match iv {
        Some(hex) => {
            let iv = parse_iv(hex)?;
            info!("encrypting with caller-fixed IV");
            cipher.encrypt_str_with_iv(text, iv)?
        }
        None => cipher.encrypt_str(text, &mut rand::thread_rng())?,
    };

    println!("{encrypted}");
    Ok(())
}

/// Parses an IV given as 16 hex characters, with or without `0x`.
fn parse_iv(hex: &str) -> Result<u64> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    u64::from_str_radix(digits, 16)
        .with_context(|| format!("invalid IV '{hex}': expected up to 16 hex characters"))
}
