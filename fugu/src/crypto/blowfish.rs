//! The Blowfish block cipher engine.
//!
//! Holds the expanded key schedule (18 subkeys and four 256-entry
//! substitution boxes) and exposes single-block encrypt/decrypt. Multi-block
//! drivers live in [`ecb`](crate::crypto::Ecb) and [`cbc`](crate::crypto::Cbc).

use std::fmt;

use log::debug;
use zeroize::Zeroize;

use super::constants::{P_INIT, S_INIT};
use crate::convert;
use crate::error::{Error, Result};

/// Cipher block size in bytes (64 bits).
pub const BLOCK_SIZE: usize = 8;

/// Smallest accepted key size in bytes (32 bits).
pub const MIN_KEY_BYTES: usize = 4;

/// Largest accepted key size in bytes (448 bits).
pub const MAX_KEY_BYTES: usize = 56;

/// A Blowfish engine with an expanded key schedule.
///
/// The schedule is fixed at construction and wiped on [`clean_up`]
/// (or on drop); it is never readable from outside. Two engines built
/// from the same key bytes hold bit-identical schedules.
///
/// [`clean_up`]: Blowfish::clean_up
pub struct Blowfish {
    pbox: [u32; 18],
    sbox: [[u32; 256]; 4],
    disposed: bool,
}

impl Blowfish {
    /// Creates an engine by expanding `key` into the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyLength`] unless `key` is 4..=56 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        if !(MIN_KEY_BYTES..=MAX_KEY_BYTES).contains(&key.len()) {
            return Err(Error::InvalidKeyLength { len: key.len() });
        }

        debug!("expanding Blowfish key schedule from {} key bytes", key.len());

        let mut engine = Blowfish {
            pbox: P_INIT,
            sbox: S_INIT,
            disposed: false,
        };
        engine.expand_key(key);
        Ok(engine)
    }

    /// Folds the key into the subkeys, then rewrites the whole schedule by
    /// repeatedly encrypting the all-zero block.
    fn expand_key(&mut self, key: &[u8]) {
        let mut pos = 0;
        for subkey in self.pbox.iter_mut() {
            let mut word = 0u32;
            for _ in 0..4 {
                word = word << 8 | key[pos % key.len()] as u32;
                pos += 1;
            }
            *subkey ^= word;
        }

        let (mut left, mut right) = (0u32, 0u32);

        for i in (0..self.pbox.len()).step_by(2) {
            let (l, r) = self.encrypt_words(left, right);
            self.pbox[i] = l;
            self.pbox[i + 1] = r;
            left = l;
            right = r;
        }

        for sbox in 0..self.sbox.len() {
            for i in (0..self.sbox[sbox].len()).step_by(2) {
                let (l, r) = self.encrypt_words(left, right);
                self.sbox[sbox][i] = l;
                self.sbox[sbox][i + 1] = r;
                left = l;
                right = r;
            }
        }
    }

    /// The round function F over one 32-bit half-block.
    ///
    /// The half-block indexes the four S-boxes MSB first; the lookups are
    /// mixed through alternating modular addition and XOR, wrapping at 32
    /// bits.
    #[inline]
    fn round(&self, x: u32) -> u32 {
        let a = (x >> 24) as usize;
        let b = (x >> 16 & 0xff) as usize;
        let c = (x >> 8 & 0xff) as usize;
        let d = (x & 0xff) as usize;

        (self.sbox[0][a].wrapping_add(self.sbox[1][b]) ^ self.sbox[2][c])
            .wrapping_add(self.sbox[3][d])
    }

    /// Runs the 16-round Feistel network forward over one block.
    pub(crate) fn encrypt_words(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        for i in 0..16 {
            left ^= self.pbox[i];
            right ^= self.round(left);
            std::mem::swap(&mut left, &mut right);
        }
        // Undo the 16th swap, then whiten with the two remaining subkeys.
        std::mem::swap(&mut left, &mut right);
        right ^= self.pbox[16];
        left ^= self.pbox[17];
        (left, right)
    }

    /// Runs the network with subkeys applied in reverse order.
    pub(crate) fn decrypt_words(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        for i in (2..18).rev() {
            left ^= self.pbox[i];
            right ^= self.round(left);
            std::mem::swap(&mut left, &mut right);
        }
        std::mem::swap(&mut left, &mut right);
        right ^= self.pbox[1];
        left ^= self.pbox[0];
        (left, right)
    }

    /// Fails when the schedule has been wiped.
    pub(crate) fn ensure_usable(&self) -> Result<()> {
        if self.disposed {
            Err(Error::EngineDisposed)
        } else {
            Ok(())
        }
    }

    /// Encrypts the first 8 bytes of `buf` in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] when `buf` holds less than one
    /// block, or [`Error::EngineDisposed`] after [`clean_up`](Self::clean_up).
    pub fn encrypt_block(&self, buf: &mut [u8]) -> Result<()> {
        self.ensure_usable()?;
        check_block(buf)?;

        let left = convert::u32_from_bytes(buf);
        let right = convert::u32_from_bytes(&buf[4..]);
        let (left, right) = self.encrypt_words(left, right);
        convert::u32_to_bytes(left, buf);
        convert::u32_to_bytes(right, &mut buf[4..]);
        Ok(())
    }

    /// Decrypts the first 8 bytes of `buf` in place.
    ///
    /// # Errors
    ///
    /// Same conditions as [`encrypt_block`](Self::encrypt_block).
    pub fn decrypt_block(&self, buf: &mut [u8]) -> Result<()> {
        self.ensure_usable()?;
        check_block(buf)?;

        let left = convert::u32_from_bytes(buf);
        let right = convert::u32_from_bytes(&buf[4..]);
        let (left, right) = self.decrypt_words(left, right);
        convert::u32_to_bytes(left, buf);
        convert::u32_to_bytes(right, &mut buf[4..]);
        Ok(())
    }

    /// Wipes the key schedule and marks the engine disposed.
    ///
    /// Safe to call more than once; any encrypt/decrypt after the first
    /// call fails with [`Error::EngineDisposed`] rather than silently
    /// operating on a zeroed schedule.
    pub fn clean_up(&mut self) {
        if !self.disposed {
            self.pbox.zeroize();
            self.sbox.zeroize();
            self.disposed = true;
        }
    }
}

impl Drop for Blowfish {
    fn drop(&mut self) {
        self.pbox.zeroize();
        self.sbox.zeroize();
    }
}

impl fmt::Debug for Blowfish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The schedule is key material and stays out of debug output.
        f.debug_struct("Blowfish")
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

/// Fails unless `buf` holds at least one block.
fn check_block(buf: &[u8]) -> Result<()> {
    if buf.len() < BLOCK_SIZE {
        Err(Error::BufferTooSmall {
            needed: BLOCK_SIZE,
            available: buf.len(),
        })
    } else {
        Ok(())
    }
}
