//! Electronic codebook mode.
//!
//! Stateless multi-block driver over [`Blowfish`]: every block is encrypted
//! independently, so equal plaintext blocks produce equal ciphertext blocks.
//! That makes ECB unsuitable for plaintext with repeating structure; it
//! exists as the primitive the chaining mode is built on and as a direct
//! low-level interface.

use super::blowfish::{Blowfish, BLOCK_SIZE};
use super::check_alignment;
use crate::error::Result;

/// Blowfish in ECB mode.
#[derive(Debug)]
pub struct Ecb {
    engine: Blowfish,
}

impl Ecb {
    /// Creates the mode around a freshly keyed engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyLength`](crate::Error::InvalidKeyLength)
    /// unless `key` is 4..=56 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Ecb {
            engine: Blowfish::new(key)?,
        })
    }

    /// Encrypts `data` in place, one independent block at a time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnalignedLength`](crate::Error::UnalignedLength)
    /// unless the length is a positive multiple of 8, and
    /// [`Error::EngineDisposed`](crate::Error::EngineDisposed) after
    /// [`clean_up`](Self::clean_up).
    pub fn encrypt(&self, data: &mut [u8]) -> Result<()> {
        self.engine.ensure_usable()?;
        check_alignment(data.len())?;

        for block in data.chunks_exact_mut(BLOCK_SIZE) {
            self.engine.encrypt_block(block)?;
        }
        Ok(())
    }

    /// Decrypts `data` in place; the exact mirror of [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// Same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, data: &mut [u8]) -> Result<()> {
        self.engine.ensure_usable()?;
        check_alignment(data.len())?;

        for block in data.chunks_exact_mut(BLOCK_SIZE) {
            self.engine.decrypt_block(block)?;
        }
        Ok(())
    }

    /// Disposes the underlying engine; the mode is unusable afterwards.
    pub fn clean_up(&mut self) {
        self.engine.clean_up();
    }
}
