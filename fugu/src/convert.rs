//! Conversion helpers for fixed-width integers, hex strings and UTF-16
//! byte framing.
//!
//! All multi-byte data is treated in network byte order. These routines
//! carry no cryptographic logic; the cipher and digest engines consume
//! them for key material import, IV serialization and text framing.

/// Reads a big-endian `u32` from the first four bytes of `buf`.
///
/// # Panics
///
/// Panics if `buf` holds fewer than four bytes.
pub fn u32_from_bytes(buf: &[u8]) -> u32 {
    u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]])
}

/// Writes `value` into the first four bytes of `buf`, big-endian.
///
/// # Panics
///
/// Panics if `buf` holds fewer than four bytes.
pub fn u32_to_bytes(value: u32, buf: &mut [u8]) {
    buf[..4].copy_from_slice(&value.to_be_bytes());
}

/// Reads a big-endian `u64` from the first eight bytes of `buf`.
///
/// # Panics
///
/// Panics if `buf` holds fewer than eight bytes.
pub fn u64_from_bytes(buf: &[u8]) -> u64 {
    let hi = u32_from_bytes(buf) as u64;
    let lo = u32_from_bytes(&buf[4..]) as u64;
    hi << 32 | lo
}

/// Writes `value` into the first eight bytes of `buf`, big-endian.
///
/// # Panics
///
/// Panics if `buf` holds fewer than eight bytes.
pub fn u64_to_bytes(value: u64, buf: &mut [u8]) {
    buf[..8].copy_from_slice(&value.to_be_bytes());
}

/// Converts a byte slice to its lowercase hex representation.
pub fn bytes_to_hex(data: &[u8]) -> String {
    const HEXTAB: &[u8; 16] = b"0123456789abcdef";

    let mut out = String::with_capacity(data.len() * 2);
    for &b in data {
        out.push(HEXTAB[(b >> 4) as usize] as char);
        out.push(HEXTAB[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decodes a hex string into `out`, two characters per byte.
///
/// Decoding is permissive: a character pair containing anything outside
/// `0-9a-f` simply produces no byte. Uppercase digits are not accepted;
/// handling is case sensitive. Stops when `out` is full or the input is
/// exhausted, and returns the number of bytes written, which is less than
/// `hex.len() / 2` whenever invalid pairs were skipped.
pub fn hex_to_bytes(hex: &str, out: &mut [u8]) -> usize {
    let avail = hex.chars().count() / 2;
    let want = avail.min(out.len());

    let mut chars = hex.chars();
    let mut written = 0;

    for _ in 0..want {
        let mut byte = 0u8;
        let mut valid = true;

        for _ in 0..2 {
            byte <<= 4;
            match chars.next() {
                Some(c @ '0'..='9') => byte |= c as u8 - b'0',
                Some(c @ 'a'..='f') => byte |= c as u8 - b'a' + 10,
                _ => valid = false,
            }
        }

        if valid {
            out[written] = byte;
            written += 1;
        }
    }

    written
}

/// Encodes a string as big-endian UTF-16 code units, two bytes each.
pub fn string_to_utf16_bytes(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Decodes big-endian UTF-16 code units back into a string.
///
/// An odd trailing byte is ignored, and malformed code-unit sequences are
/// replaced rather than rejected.
pub fn bytes_to_utf16_string(data: &[u8]) -> String {
    let len = data.len() & !1;
    let units: Vec<u16> = data[..len]
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_round_trip() {
        let mut buf = [0u8; 4];
        u32_to_bytes(0x0123_4567, &mut buf);
        assert_eq!(buf, [0x01, 0x23, 0x45, 0x67]);
        assert_eq!(u32_from_bytes(&buf), 0x0123_4567);
    }

    #[test]
    fn u64_round_trip() {
        let mut buf = [0u8; 8];
        u64_to_bytes(0x0123_4567_89ab_cdef, &mut buf);
        assert_eq!(buf, [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
        assert_eq!(u64_from_bytes(&buf), 0x0123_4567_89ab_cdef);
    }

    #[test]
    fn hex_encode() {
        assert_eq!(bytes_to_hex(&[0x4e, 0xf9, 0x97, 0x45]), "4ef99745");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn hex_decode() {
        let mut out = [0u8; 4];
        assert_eq!(hex_to_bytes("4ef99745", &mut out), 4);
        assert_eq!(out, [0x4e, 0xf9, 0x97, 0x45]);
    }

    #[test]
    fn hex_decode_skips_invalid_pairs() {
        let mut out = [0u8; 4];
        // "zz" and "4G" are dropped; only "ab" and "01" survive.
        assert_eq!(hex_to_bytes("zzab4G01", &mut out), 2);
        assert_eq!(&out[..2], &[0xab, 0x01]);
    }

    #[test]
    fn hex_decode_rejects_uppercase() {
        let mut out = [0u8; 4];
        assert_eq!(hex_to_bytes("AB01", &mut out), 1);
        assert_eq!(out[0], 0x01);
    }

    #[test]
    fn hex_decode_stops_at_capacity() {
        let mut out = [0u8; 2];
        assert_eq!(hex_to_bytes("01020304", &mut out), 2);
        assert_eq!(out, [0x01, 0x02]);
    }

    #[test]
    fn hex_decode_odd_tail_ignored() {
        let mut out = [0u8; 4];
        assert_eq!(hex_to_bytes("0102f", &mut out), 2);
        assert_eq!(&out[..2], &[0x01, 0x02]);
    }

    #[test]
    fn utf16_round_trip() {
        let s = "Hello, \u{4e16}\u{754c}!";
        let bytes = string_to_utf16_bytes(s);
        assert_eq!(bytes_to_utf16_string(&bytes), s);
    }

    #[test]
    fn utf16_ascii_framing() {
        assert_eq!(string_to_utf16_bytes("Hi"), vec![0x00, 0x48, 0x00, 0x69]);
        assert_eq!(bytes_to_utf16_string(&[0x00, 0x48, 0x00, 0x69]), "Hi");
    }

    #[test]
    fn utf16_odd_trailing_byte_ignored() {
        assert_eq!(bytes_to_utf16_string(&[0x00, 0x48, 0x00]), "H");
    }

    #[test]
    fn utf16_supplementary_plane() {
        // U+1D11E (musical G clef) needs a surrogate pair.
        let s = "\u{1d11e}";
        let bytes = string_to_utf16_bytes(s);
        assert_eq!(bytes.len(), 4);
        assert_eq!(bytes_to_utf16_string(&bytes), s);
    }
}
