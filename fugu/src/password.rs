//! Password-based string encryption.
//!
//! Composes the SHA-1 engine (password to 160-bit key), the CBC mode and
//! the hex codec into a convenience layer for encrypting text: the IV is
//! drawn from a caller-supplied random source, the plaintext travels as
//! big-endian UTF-16 code units padded to a block multiple, and the result
//! is framed as `hex(IV) || hex(ciphertext)`.

use log::debug;
use rand::Rng;

use crate::convert;
use crate::crypto::{Cbc, BLOCK_SIZE};
use crate::error::Result;
use crate::hash::Sha1;

/// A string cipher keyed from a password.
///
/// The password is hashed down to a 160-bit key once at construction; the
/// password itself is not retained. Encryption draws a fresh 64-bit IV per
/// message from an explicitly passed random source and prepends it (as 8
/// bytes) to the ciphertext before hex encoding.
pub struct PasswordCipher {
    cbc: Cbc,
}

impl PasswordCipher {
    /// Keys a cipher from `password`.
    ///
    /// The password's UTF-16 big-endian bytes are hashed with SHA-1 and
    /// the 20-byte digest becomes the Blowfish key.
    pub fn new(password: &str) -> Self {
        let units = password.encode_utf16().count();
        let key = Sha1::digest_of(&convert::string_to_utf16_bytes(password));
        debug!("derived 160-bit cipher key from password ({units} UTF-16 units)");

        // A 20-byte digest is always within the accepted key range.
        let cbc = Cbc::new(&key).expect("digest-sized key");
        PasswordCipher { cbc }
    }

    /// Encrypts `plain`, drawing the message IV from `rng`.
    ///
    /// The caller picks the random source; for confidentiality it must be
    /// unpredictable per message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineDisposed`](crate::Error::EngineDisposed)
    /// after [`destroy`](Self::destroy).
    pub fn encrypt_str<R: Rng + ?Sized>(&mut self, plain: &str, rng: &mut R) -> Result<String> {
        self.encrypt_str_with_iv(plain, rng.gen())
    }

    /// Encrypts `plain` under a caller-chosen IV.
    ///
    /// Deterministic; meant for interoperability and testing. Reusing an
    /// IV across messages leaks plaintext relationships.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineDisposed`](crate::Error::EngineDisposed)
    /// after [`destroy`](Self::destroy).
    pub fn encrypt_str_with_iv(&mut self, plain: &str, iv: u64) -> Result<String> {
        let raw = convert::string_to_utf16_bytes(plain);

        // Pad up to the next block boundary, always adding at least one
        // byte; the pad byte value is the pad count.
        let padded_len = (raw.len() & !(BLOCK_SIZE - 1)) + BLOCK_SIZE;
        let pad = (padded_len - raw.len()) as u8;
        let mut buf = raw;
        buf.resize(padded_len, pad);

        self.cbc.set_iv(iv)?;
        self.cbc.encrypt(&mut buf)?;

        let mut iv_bytes = [0u8; BLOCK_SIZE];
        convert::u64_to_bytes(iv, &mut iv_bytes);

        let mut out = convert::bytes_to_hex(&iv_bytes);
        out.push_str(&convert::bytes_to_hex(&buf));
        Ok(out)
    }

    /// Decrypts a string produced by [`encrypt_str`](Self::encrypt_str).
    ///
    /// Handling is case sensitive and deliberately tolerant: the hex
    /// length is truncated down to a block multiple, and a trailing pad
    /// byte larger than the block size is treated as zero padding rather
    /// than rejected, recovering as much text as possible. `Ok(None)`
    /// means the input was too malformed to carry a message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineDisposed`](crate::Error::EngineDisposed)
    /// after [`destroy`](Self::destroy).
    pub fn decrypt_str(&mut self, cipher: &str) -> Result<Option<String>> {
        let total = (cipher.chars().count() / 2) & !(BLOCK_SIZE - 1);
        if total < BLOCK_SIZE {
            return Ok(None);
        }

        let mut iv_bytes = [0u8; BLOCK_SIZE];
        if convert::hex_to_bytes(cipher, &mut iv_bytes) < BLOCK_SIZE {
            return Ok(None);
        }
        self.cbc.set_iv_bytes(&iv_bytes)?;

        let body_len = total - BLOCK_SIZE;
        if body_len == 0 {
            return Ok(Some(String::new()));
        }

        let body: String = cipher.chars().skip(BLOCK_SIZE * 2).collect();
        let mut buf = vec![0u8; body_len];
        if convert::hex_to_bytes(&body, &mut buf) < body_len {
            return Ok(None);
        }

        self.cbc.decrypt(&mut buf)?;

        let mut pad = buf[buf.len() - 1] as usize;
        // Recover what we can even when the padding looks wrong.
        if pad > BLOCK_SIZE {
            pad = 0;
        }
        let keep = buf.len() - pad;

        Ok(Some(convert::bytes_to_utf16_string(&buf[..keep])))
    }

    /// Disposes the underlying cipher; the instance is dead afterwards.
    pub fn destroy(&mut self) {
        self.cbc.clean_up();
    }
}

impl std::fmt::Debug for PasswordCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCipher").finish_non_exhaustive()
    }
}
