//! Cipher block chaining mode.
//!
//! Wraps a [`Blowfish`] engine with a 64-bit chaining register. Every block
//! depends on the previous ciphertext block, so blocks within one call are
//! processed strictly in order, and repeated calls continue the chain until
//! the register is reset for a new message.

use super::blowfish::{Blowfish, BLOCK_SIZE};
use super::check_alignment;
use crate::convert;
use crate::error::{Error, Result};

/// Blowfish in CBC mode.
///
/// Callers must set a fresh, unpredictable IV before each independent
/// message; the register is consumed and updated by every encrypt/decrypt
/// call. One instance serves one logical owner at a time.
#[derive(Debug)]
pub struct Cbc {
    engine: Blowfish,
    iv: u64,
}

impl Cbc {
    /// Creates the mode around a freshly keyed engine, register zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyLength`] unless `key` is 4..=56 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Cbc {
            engine: Blowfish::new(key)?,
            iv: 0,
        })
    }

    /// Creates the mode with an initial chaining value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyLength`] unless `key` is 4..=56 bytes.
    pub fn with_iv(key: &[u8], iv: u64) -> Result<Self> {
        Ok(Cbc {
            engine: Blowfish::new(key)?,
            iv,
        })
    }

    /// Overwrites the chaining register.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineDisposed`] after [`clean_up`](Self::clean_up).
    pub fn set_iv(&mut self, iv: u64) -> Result<()> {
        self.engine.ensure_usable()?;
        self.iv = iv;
        Ok(())
    }

    /// Overwrites the chaining register from 8 big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] when `bytes` holds less than one
    /// block, or [`Error::EngineDisposed`] after [`clean_up`](Self::clean_up).
    pub fn set_iv_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.engine.ensure_usable()?;
        if bytes.len() < BLOCK_SIZE {
            return Err(Error::BufferTooSmall {
                needed: BLOCK_SIZE,
                available: bytes.len(),
            });
        }
        self.iv = convert::u64_from_bytes(bytes);
        Ok(())
    }

    /// Current value of the chaining register.
    pub fn iv(&self) -> u64 {
        self.iv
    }

    /// Encrypts `data` in place, chaining every block into the next.
    ///
    /// Each plaintext block is XORed with the register before encryption,
    /// and the register then takes the fresh ciphertext block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnalignedLength`] unless the length is a positive
    /// multiple of 8, and [`Error::EngineDisposed`] after
    /// [`clean_up`](Self::clean_up).
    pub fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.engine.ensure_usable()?;
        check_alignment(data.len())?;

        for block in data.chunks_exact_mut(BLOCK_SIZE) {
            let chained = convert::u64_from_bytes(block) ^ self.iv;
            let (left, right) = self
                .engine
                .encrypt_words((chained >> 32) as u32, chained as u32);
            let cipher = (left as u64) << 32 | right as u64;
            convert::u64_to_bytes(cipher, block);
            self.iv = cipher;
        }
        Ok(())
    }

    /// Decrypts `data` in place; the exact mirror of [`encrypt`](Self::encrypt).
    ///
    /// The register is XORed into the block *after* decryption and is then
    /// loaded with the ciphertext block as it was *before* decryption.
    ///
    /// # Errors
    ///
    /// Same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.engine.ensure_usable()?;
        check_alignment(data.len())?;

        for block in data.chunks_exact_mut(BLOCK_SIZE) {
            let cipher = convert::u64_from_bytes(block);
            let (left, right) = self
                .engine
                .decrypt_words((cipher >> 32) as u32, cipher as u32);
            let plain = ((left as u64) << 32 | right as u64) ^ self.iv;
            convert::u64_to_bytes(plain, block);
            self.iv = cipher;
        }
        Ok(())
    }

    /// Disposes the underlying engine and zeroes the register; terminal.
    pub fn clean_up(&mut self) {
        self.engine.clean_up();
        self.iv = 0;
    }
}
