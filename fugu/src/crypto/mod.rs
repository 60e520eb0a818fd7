//! The Blowfish cipher core: key schedule, block operations and the
//! ECB/CBC block modes built on them.

mod blowfish;
mod cbc;
mod constants;
mod ecb;

pub use blowfish::{Blowfish, BLOCK_SIZE, MAX_KEY_BYTES, MIN_KEY_BYTES};
pub use cbc::Cbc;
pub use ecb::Ecb;

use crate::error::{Error, Result};

/// Fails unless `len` is a positive multiple of the block size.
pub(crate) fn check_alignment(len: usize) -> Result<()> {
    if len == 0 || len % BLOCK_SIZE != 0 {
        Err(Error::UnalignedLength { len })
    } else {
        Ok(())
    }
}
