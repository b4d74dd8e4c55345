use phe_core::crypto;
use phe_core::envelope;
use phe_core::types::*;

fn random_key() -> [u8; SYMMETRIC_KEY_LENGTH] {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut key = [0u8; SYMMETRIC_KEY_LENGTH];
    crypto::random_bytes(&mut key).unwrap();
    key
}

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = random_key();
    let data = vec![0u8; 365];

    let ciphertext = envelope::encrypt(&data, &key).unwrap();
    let plaintext = envelope::decrypt(&ciphertext, &key).unwrap();
    assert_eq!(plaintext, data);
}

#[test]
fn encrypt_decrypt_empty_plaintext() {
    let key = random_key();

    let ciphertext = envelope::encrypt(&[], &key).unwrap();
    assert_eq!(ciphertext.len(), MIN_CIPHERTEXT_LENGTH);
    let plaintext = envelope::decrypt(&ciphertext, &key).unwrap();
    assert!(plaintext.is_empty());
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let mut key = random_key();
    let ciphertext = envelope::encrypt(&[0u8; 365], &key).unwrap();

    key[0] = key[0].wrapping_add(1);
    assert_eq!(
        envelope::decrypt(&ciphertext, &key),
        Err(PheError::AuthenticationFailed)
    );
}

#[test]
fn decrypt_rejects_short_ciphertext() {
    let key = random_key();
    let ciphertext = [0u8; 32 + 15];

    let err = envelope::decrypt(&ciphertext, &key).unwrap_err();
    assert_eq!(err, PheError::InvalidCiphertextLength);
    assert_eq!(err.to_string(), "invalid ciphertext length");
}

#[test]
fn decrypt_rejects_one_byte_below_minimum() {
    let key = random_key();
    let ciphertext = vec![0u8; MIN_CIPHERTEXT_LENGTH - 1];
    assert_eq!(
        envelope::decrypt(&ciphertext, &key),
        Err(PheError::InvalidCiphertextLength)
    );
}

#[test]
fn decrypt_rejects_misaligned_payload() {
    let key = random_key();
    let mut ciphertext = envelope::encrypt(b"block aligned?", &key).unwrap();
    ciphertext.push(0);
    assert_eq!(
        envelope::decrypt(&ciphertext, &key),
        Err(PheError::InvalidCiphertextLength)
    );
}

#[test]
fn decrypt_detects_tampering_in_every_field() {
    let key = random_key();
    let ciphertext = envelope::encrypt(b"attack at dawn", &key).unwrap();

    let offsets = [
        0,
        SALT_LENGTH,
        CIPHERTEXT_HEADER_LENGTH,
        ciphertext.len() - MAC_LENGTH,
        ciphertext.len() - 1,
    ];
    for offset in offsets {
        let mut tampered = ciphertext.clone();
        tampered[offset] ^= 0x01;
        assert_eq!(
            envelope::decrypt(&tampered, &key),
            Err(PheError::AuthenticationFailed),
            "flip at offset {offset} was not detected"
        );
    }
}

#[test]
fn ciphertext_length_follows_layout() {
    let key = random_key();
    for len in [0usize, 1, 15, 16, 17, 31, 32, 365] {
        let ciphertext = envelope::encrypt(&vec![0xAB; len], &key).unwrap();
        let padded = (len / BLOCK_LENGTH + 1) * BLOCK_LENGTH;
        assert_eq!(ciphertext.len(), CIPHERTEXT_HEADER_LENGTH + padded + MAC_LENGTH);
    }
}

#[test]
fn encrypt_is_randomized() {
    let key = random_key();
    let a = envelope::encrypt(b"same message", &key).unwrap();
    let b = envelope::encrypt(b"same message", &key).unwrap();

    assert_ne!(a, b);
    assert_ne!(a[..SALT_LENGTH], b[..SALT_LENGTH]);
    assert_eq!(envelope::decrypt(&a, &key).unwrap(), envelope::decrypt(&b, &key).unwrap());
}

#[test]
fn parse_ciphertext_splits_fields() {
    let key = random_key();
    let ciphertext = envelope::encrypt(&[7u8; 40], &key).unwrap();
    let parsed = envelope::parse_ciphertext(&ciphertext).unwrap();

    assert_eq!(parsed.salt.len(), SALT_LENGTH);
    assert_eq!(parsed.iv.len(), IV_LENGTH);
    assert_eq!(parsed.payload.len(), 3 * BLOCK_LENGTH);
    assert_eq!(parsed.tag.len(), MAC_LENGTH);
    assert_eq!(parsed.salt, &ciphertext[..SALT_LENGTH]);
    assert_eq!(parsed.tag, &ciphertext[ciphertext.len() - MAC_LENGTH..]);
}

#[test]
fn truncated_ciphertext_is_rejected() {
    let key = random_key();
    let ciphertext = envelope::encrypt(&[1u8; 64], &key).unwrap();

    let shortened = &ciphertext[..ciphertext.len() - BLOCK_LENGTH];
    assert_eq!(
        envelope::decrypt(shortened, &key),
        Err(PheError::AuthenticationFailed)
    );
}
