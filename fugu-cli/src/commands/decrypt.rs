//! String decryption command.

use anyhow::Result;
use fugu::PasswordCipher;

/// Decrypts a hex string produced by `encrypt` and prints the plaintext.
pub fn decrypt(text: &str, password: &str) -> Result<()> {
    let mut cipher = PasswordCipher::new(password);

    match cipher.decrypt_str(text)? {
        Some(plain) => {
            println!("{plain}");
            Ok(())
        }
        None => anyhow::bail!("ciphertext is malformed (not a valid hex-framed message)"),
    }
}
