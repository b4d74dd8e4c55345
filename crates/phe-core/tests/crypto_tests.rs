use phe_core::crypto;
use phe_core::types::*;

#[test]
fn random_bytes_fills_buffer() {
    let mut buf = [0u8; 64];
    crypto::random_bytes(&mut buf).unwrap();
    assert!(!buf.iter().all(|&b| b == 0));
}

#[test]
fn random_bytes_empty_fails() {
    let mut buf = [];
    assert_eq!(crypto::random_bytes(&mut buf), Err(PheError::InvalidInput));
}

#[test]
fn random_nonzero_scalars_differ() {
    let a = crypto::random_nonzero_scalar();
    let b = crypto::random_nonzero_scalar();
    assert_ne!(a, b);
}

#[test]
fn sha512_matches_known_digest() {
    assert_eq!(
        hex::encode(crypto::sha512(b"abc")),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn sha512_multi_equals_concatenation() {
    assert_eq!(
        crypto::sha512_multi(&[b"a", b"bc"]),
        crypto::sha512(b"abc")
    );
    assert_eq!(crypto::sha512_multi(&[]), crypto::sha512(b""));
}

#[test]
fn hkdf_sha512_is_deterministic() {
    let mut okm1 = [0u8; 64];
    let mut okm2 = [0u8; 64];
    crypto::hkdf_sha512(b"ikm", b"salt", b"info", &mut okm1).unwrap();
    crypto::hkdf_sha512(b"ikm", b"salt", b"info", &mut okm2).unwrap();
    assert_eq!(okm1, okm2);
}

#[test]
fn hkdf_sha512_separates_salts() {
    let mut okm1 = [0u8; 64];
    let mut okm2 = [0u8; 64];
    crypto::hkdf_sha512(b"ikm", b"salt1", b"info", &mut okm1).unwrap();
    crypto::hkdf_sha512(b"ikm", b"salt2", b"info", &mut okm2).unwrap();
    assert_ne!(okm1, okm2);
}

#[test]
fn hkdf_sha512_prefix_is_stable() {
    let mut short = [0u8; 32];
    let mut long = [0u8; 96];
    crypto::hkdf_sha512(b"ikm", b"salt", b"info", &mut short).unwrap();
    crypto::hkdf_sha512(b"ikm", b"salt", b"info", &mut long).unwrap();
    assert_eq!(short, long[..32]);
}

#[test]
fn hkdf_sha512_rejects_empty_and_oversized_output() {
    let mut empty = [];
    assert_eq!(
        crypto::hkdf_sha512(b"ikm", b"salt", b"info", &mut empty),
        Err(PheError::InvalidInput)
    );
    let mut oversized = vec![0u8; 255 * HASH_LENGTH + 1];
    assert_eq!(
        crypto::hkdf_sha512(b"ikm", b"salt", b"info", &mut oversized),
        Err(PheError::CryptoError)
    );
}

#[test]
fn hmac_sha256_matches_rfc4231_case_2() {
    let tag = crypto::hmac_sha256(b"Jefe", &[b"what do ya want ", b"for nothing?"]).unwrap();
    assert_eq!(
        hex::encode(tag),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn hmac_sha256_rejects_empty_key() {
    assert_eq!(
        crypto::hmac_sha256(&[], &[b"data"]),
        Err(PheError::InvalidInput)
    );
}

#[test]
fn verify_hmac_accepts_valid_and_rejects_modified() {
    let key = [0x0bu8; 32];
    let tag = crypto::hmac_sha256(&key, &[b"message"]).unwrap();
    crypto::verify_hmac(&key, &[b"message"], &tag).unwrap();

    let mut bad = tag;
    bad[MAC_LENGTH - 1] ^= 0x80;
    assert_eq!(
        crypto::verify_hmac(&key, &[b"message"], &bad),
        Err(PheError::AuthenticationFailed)
    );
    assert_eq!(
        crypto::verify_hmac(&key, &[b"message"], &tag[..16]),
        Err(PheError::AuthenticationFailed)
    );
}

#[test]
fn constant_time_eq_behaviour() {
    assert!(constant_time_eq(b"abc", b"abc"));
    assert!(!constant_time_eq(b"abc", b"abd"));
    assert!(!constant_time_eq(b"abc", b"abcd"));
    assert!(constant_time_eq(b"", b""));
}

#[test]
fn secure_bytes_debug_is_redacted() {
    let mut bytes = SecureBytes::new(4);
    bytes.data_mut().copy_from_slice(&[1, 2, 3, 4]);
    assert_eq!(bytes.len(), 4);
    assert_eq!(&bytes[..], &[1, 2, 3, 4]);
    assert_eq!(format!("{bytes:?}"), "SecureBytes([REDACTED; 4])");
}
