//! Streaming SHA-1 digest engine.
//!
//! Implements the standard 80-round compression function over 64-byte
//! blocks with an update/finish/digest protocol. Its place in this crate
//! is key derivation: hashing arbitrary-length password material down to
//! a fixed 160-bit key for the cipher engine.

use std::fmt;

use crate::convert;
use crate::error::{Error, Result};

/// Digest size in bytes (160 bits).
pub const DIGEST_SIZE: usize = 20;

/// Compression block size in bytes.
const BLOCK_LEN: usize = 64;

/// Initial accumulator values from the SHA-1 specification.
const H_INIT: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

/// A streaming SHA-1 engine.
///
/// Bytes fed through [`update`](Self::update) accumulate in an internal
/// block buffer that is compressed whenever it fills. [`finish`](Self::finish)
/// applies the standard padding and freezes the digest; after that the
/// engine only serves digest reads until [`reset`](Self::reset).
pub struct Sha1 {
    state: [u32; 5],
    buffer: [u8; BLOCK_LEN],
    bit_count: u64,
    finalized: bool,
}

impl Sha1 {
    /// Creates an engine ready to absorb a new message.
    pub fn new() -> Self {
        Sha1 {
            state: H_INIT,
            buffer: [0; BLOCK_LEN],
            bit_count: 0,
            finalized: false,
        }
    }

    /// Re-arms the engine for a fresh message, discarding all state.
    pub fn reset(&mut self) {
        self.state = H_INIT;
        self.buffer = [0; BLOCK_LEN];
        self.bit_count = 0;
        self.finalized = false;
    }

    /// Absorbs `data` into the running digest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineFinalized`] once [`finish`](Self::finish)
    /// has been called.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.ensure_live()?;
        self.absorb(data);
        Ok(())
    }

    /// Absorbs a single byte.
    ///
    /// # Errors
    ///
    /// Same conditions as [`update`](Self::update).
    pub fn update_byte(&mut self, byte: u8) -> Result<()> {
        self.ensure_live()?;
        self.put_byte(byte);
        Ok(())
    }

    /// Applies the final padding and freezes the digest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineFinalized`] when called a second time.
    pub fn finish(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.pad_and_finish();
        Ok(())
    }

    /// Copies the 20-byte digest into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineNotFinalized`] before [`finish`](Self::finish),
    /// or [`Error::BufferTooSmall`] when `out` holds fewer than 20 bytes.
    pub fn digest_into(&self, out: &mut [u8]) -> Result<()> {
        if !self.finalized {
            return Err(Error::EngineNotFinalized);
        }
        if out.len() < DIGEST_SIZE {
            return Err(Error::BufferTooSmall {
                needed: DIGEST_SIZE,
                available: out.len(),
            });
        }
        self.write_digest(out);
        Ok(())
    }

    /// Returns the 20-byte digest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineNotFinalized`] before [`finish`](Self::finish).
    pub fn digest(&self) -> Result<[u8; DIGEST_SIZE]> {
        let mut out = [0u8; DIGEST_SIZE];
        self.digest_into(&mut out)?;
        Ok(out)
    }

    /// Returns the digest as 40 lowercase hex characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineNotFinalized`] before [`finish`](Self::finish).
    pub fn hex_digest(&self) -> Result<String> {
        Ok(convert::bytes_to_hex(&self.digest()?))
    }

    /// One-shot digest of a complete message.
    pub fn digest_of(data: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut engine = Sha1::new();
        engine.absorb(data);
        engine.pad_and_finish();

        let mut out = [0u8; DIGEST_SIZE];
        engine.write_digest(&mut out);
        out
    }

    fn ensure_live(&self) -> Result<()> {
        if self.finalized {
            Err(Error::EngineFinalized)
        } else {
            Ok(())
        }
    }

    fn absorb(&mut self, data: &[u8]) {
        for &byte in data {
            self.put_byte(byte);
        }
    }

    /// Appends one byte to the block buffer, compressing on overflow, and
    /// advances the total-bit counter.
    fn put_byte(&mut self, byte: u8) {
        let index = ((self.bit_count >> 3) & 63) as usize;
        self.buffer[index] = byte;
        self.bit_count = self.bit_count.wrapping_add(8);
        if index == BLOCK_LEN - 1 {
            self.compress();
        }
    }

    /// Standard padding: a single 1 bit, zeros to byte 56 of the final
    /// block, then the 64-bit big-endian message bit length.
    fn pad_and_finish(&mut self) {
        let bit_len = self.bit_count;

        self.put_byte(0x80);
        while (self.bit_count >> 3) & 63 != 56 {
            self.put_byte(0);
        }
        for &byte in &bit_len.to_be_bytes() {
            self.put_byte(byte);
        }

        self.finalized = true;
    }

    fn write_digest(&self, out: &mut [u8]) {
        for (i, &word) in self.state.iter().enumerate() {
            convert::u32_to_bytes(word, &mut out[i * 4..]);
        }
    }

    /// Compresses the full block buffer into the accumulator.
    fn compress(&mut self) {
        let mut w = [0u32; 80];
        for (i, chunk) in self.buffer.chunks_exact(4).enumerate() {
            w[i] = convert::u32_from_bytes(chunk);
        }
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.state;

        for (t, &word) in w.iter().enumerate() {
            let (f, k) = match t {
                0..=19 => (b & c | !b & d, 0x5a82_7999),
                20..=39 => (b ^ c ^ d, 0x6ed9_eba1),
                40..=59 => (b & c | b & d | c & d, 0x8f1b_bcdc),
                _ => (b ^ c ^ d, 0xca62_c1d6),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
        self.state[4] = self.state[4].wrapping_add(e);
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The block buffer may hold sensitive input; keep it out of output.
        f.debug_struct("Sha1")
            .field("bits", &self.bit_count)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}
