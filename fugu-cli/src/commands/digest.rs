//! SHA-1 digest command.

use anyhow::Result;
use fugu::{convert, Sha1};

/// Prints the SHA-1 digest of `text` as 40 hex characters.
///
/// Hashes the UTF-8 bytes by default; with `utf16` set, hashes the
/// big-endian UTF-16 encoding the string cipher uses for key derivation.
pub fn digest(text: &str, utf16: bool) -> Result<()> {
    let digest = if utf16 {
        Sha1::digest_of(&convert::string_to_utf16_bytes(text))
    } else {
        Sha1::digest_of(text.as_bytes())
    };

    println!("{}", convert::bytes_to_hex(&digest));
    Ok(())
}
