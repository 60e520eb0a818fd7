//! Built-in known-answer vectors.

use anyhow::Result;
use colored::Colorize;
use fugu::{convert, Blowfish, PasswordCipher, Sha1};

/// Published Blowfish single-block vectors: (key, plaintext, ciphertext).
const BLOWFISH_VECTORS: &[(&str, &str, &str)] = &[
    ("0000000000000000", "0000000000000000", "4ef997456198dd78"),
    ("ffffffffffffffff", "ffffffffffffffff", "51866fd5b85ecb8a"),
    ("3000000000000000", "1000000000000001", "7d856f9a613063f2"),
    ("1111111111111111", "1111111111111111", "2466dd878b963c9d"),
    ("0123456789abcdef", "1111111111111111", "61f9c3802281b096"),
];

/// SHA-1 vectors: (message, digest).
const SHA1_VECTORS: &[(&str, &str)] = &[
    ("", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
    ("abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
    (
        "The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    ),
];

/// Runs every built-in vector, printing one line per check.
pub fn run() -> Result<()> {
    println!("{}", "Running all known-answer vectors...".bold());
    println!();

    test_blowfish()?;
    println!();
    test_sha1()?;
    println!();
    test_string_cipher()?;

    Ok(())
}

fn test_blowfish() -> Result<()> {
    println!("{}", "Blowfish Block Vectors".cyan());
    println!("{}", "=".repeat(50));

    for (key_hex, plain_hex, expected_hex) in BLOWFISH_VECTORS {
        let mut key = [0u8; 8];
        let mut block = [0u8; 8];
        convert::hex_to_bytes(key_hex, &mut key);
        convert::hex_to_bytes(plain_hex, &mut block);

        let engine = Blowfish::new(&key)?;
        engine.encrypt_block(&mut block)?;
        let got = convert::bytes_to_hex(&block);

        if got == *expected_hex {
            println!("{} {key_hex} / {plain_hex} -> {got}", "✓".green());
        } else {
            println!(
                "{} {key_hex} / {plain_hex} -> {got} (expected {expected_hex})",
                "✗".red()
            );
            anyhow::bail!("Blowfish vector failed");
        }

        engine.decrypt_block(&mut block)?;
        if convert::bytes_to_hex(&block) != *plain_hex {
            anyhow::bail!("Blowfish decryption did not restore the plaintext");
        }
    }

    println!("\n{} Blowfish vectors passed", "✓".green());
    Ok(())
}

fn test_sha1() -> Result<()> {
    println!("{}", "SHA-1 Vectors".cyan());
    println!("{}", "=".repeat(50));

    for (message, expected) in SHA1_VECTORS {
        let got = convert::bytes_to_hex(&Sha1::digest_of(message.as_bytes()));
        if got == *expected {
            println!("{} {:?} -> {got}", "✓".green(), message);
        } else {
            println!("{} {:?} -> {got} (expected {expected})", "✗".red(), message);
            anyhow::bail!("SHA-1 vector failed");
        }
    }

    println!("\n{} SHA-1 vectors passed", "✓".green());
    Ok(())
}

fn test_string_cipher() -> Result<()> {
    println!("{}", "String Cipher Round Trip".cyan());
    println!("{}", "=".repeat(50));

    let mut cipher = PasswordCipher::new("selftest password");
    let plain = "The magic words are squeamish ossifrage";

    let encrypted = cipher.encrypt_str(plain, &mut rand::thread_rng())?;
    println!("encrypted: {encrypted}");

    let decrypted = cipher.decrypt_str(&encrypted)?;
    if decrypted.as_deref() == Some(plain) {
        println!("{} String cipher round trip successful", "✓".green());
        Ok(())
    } else {
        println!("{} String cipher round trip failed", "✗".red());
        anyhow::bail!("string cipher round trip failed");
    }
}
