//! Published Blowfish known-answer vectors.

use fugu::{convert, Blowfish, Ecb};

/// Single-block vectors from the reference vector set: (key, plaintext,
/// ciphertext), all hex.
const VECTORS: &[(&str, &str, &str)] = &[
    ("0000000000000000", "0000000000000000", "4ef997456198dd78"),
    ("ffffffffffffffff", "ffffffffffffffff", "51866fd5b85ecb8a"),
    ("3000000000000000", "1000000000000001", "7d856f9a613063f2"),
    ("1111111111111111", "1111111111111111", "2466dd878b963c9d"),
    ("0123456789abcdef", "1111111111111111", "61f9c3802281b096"),
    ("1111111111111111", "0123456789abcdef", "7d0cc630afda1ec7"),
    ("fedcba9876543210", "0123456789abcdef", "0aceab0fc6a0a28d"),
    ("7ca110454a1a6e57", "01a1d6d039776742", "59c68245eb05282b"),
    ("0131d9619dc1376e", "5cd54ca83def57da", "b1b8cc0b250f09a0"),
];

fn unhex(hex: &str) -> Vec<u8> {
    let mut out = vec![0u8; hex.len() / 2];
    assert_eq!(convert::hex_to_bytes(hex, &mut out), out.len());
    out
}

#[test]
fn published_single_block_vectors() {
    for (key_hex, plain_hex, cipher_hex) in VECTORS {
        let engine = Blowfish::new(&unhex(key_hex)).unwrap();

        let mut block = unhex(plain_hex);
        engine.encrypt_block(&mut block).unwrap();
        assert_eq!(
            convert::bytes_to_hex(&block),
            *cipher_hex,
            "encrypt mismatch for key {key_hex}"
        );

        engine.decrypt_block(&mut block).unwrap();
        assert_eq!(
            convert::bytes_to_hex(&block),
            *plain_hex,
            "decrypt mismatch for key {key_hex}"
        );
    }
}

#[test]
fn text_key_multi_block_vector() {
    // Two independent blocks under a 17-byte text key.
    let ecb = Ecb::new(b"Who is John Galt?").unwrap();
    let mut data = unhex("fedcba98765432100123456789abcdef");
    ecb.encrypt(&mut data).unwrap();
    assert_eq!(
        convert::bytes_to_hex(&data),
        "cc91732b8022f684f0b2cca174fe255a"
    );
}

#[test]
fn engines_with_equal_keys_are_interchangeable() {
    for key in [&b"abcd"[..], &b"a slightly longer key"[..], &[0x55u8; 56][..]] {
        let a = Blowfish::new(key).unwrap();
        let b = Blowfish::new(key).unwrap();

        let mut block = *b"\x00\x11\x22\x33\x44\x55\x66\x77";
        a.encrypt_block(&mut block).unwrap();
        b.decrypt_block(&mut block).unwrap();
        assert_eq!(&block, b"\x00\x11\x22\x33\x44\x55\x66\x77");
    }
}

#[test]
fn key_length_changes_the_ciphertext() {
    // A key extended by one byte must not alias the shorter schedule.
    let short = Blowfish::new(&[0x01, 0x02, 0x03, 0x04]).unwrap();
    let long = Blowfish::new(&[0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();

    let mut a = [0u8; 8];
    let mut b = [0u8; 8];
    short.encrypt_block(&mut a).unwrap();
    long.encrypt_block(&mut b).unwrap();
    assert_ne!(a, b);
}
