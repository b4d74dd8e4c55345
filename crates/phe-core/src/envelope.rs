// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Password-Hardened Encryption
// Licensed under the MIT License

use crate::crypto;
use crate::types::{
    labels, PheError, PheResult, SecureBytes, BLOCK_LENGTH, CIPHERTEXT_HEADER_LENGTH,
    ENCRYPTION_KEY_LENGTH, IV_LENGTH, MAC_KEY_LENGTH, MAC_LENGTH, MIN_CIPHERTEXT_LENGTH,
    SALT_LENGTH, SYMMETRIC_KEY_LENGTH,
};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const SALT_OFFSET: usize = 0;
const IV_OFFSET: usize = SALT_LENGTH;
const PAYLOAD_OFFSET: usize = CIPHERTEXT_HEADER_LENGTH;

/// Borrowed view over a ciphertext: `salt ∥ iv ∥ payload ∥ tag`.
pub struct CiphertextRef<'a> {
    pub salt: &'a [u8],
    pub iv: &'a [u8],
    pub payload: &'a [u8],
    pub tag: &'a [u8],
}

impl CiphertextRef<'_> {
    /// Bytes covered by the authentication tag.
    fn authenticated_parts(&self) -> [&[u8]; 3] {
        [self.salt, self.iv, self.payload]
    }
}

/// Splits a ciphertext into its fields, checking only the length layout.
///
/// # Errors
///
/// Returns [`PheError::InvalidCiphertextLength`] if `data` is shorter than
/// [`MIN_CIPHERTEXT_LENGTH`] or the payload is not a multiple of the block size.
pub fn parse_ciphertext(data: &[u8]) -> PheResult<CiphertextRef<'_>> {
    if data.len() < MIN_CIPHERTEXT_LENGTH
        || (data.len() - CIPHERTEXT_HEADER_LENGTH - MAC_LENGTH) % BLOCK_LENGTH != 0
    {
        return Err(PheError::InvalidCiphertextLength);
    }
    let tag_offset = data.len() - MAC_LENGTH;
    Ok(CiphertextRef {
        salt: &data[SALT_OFFSET..IV_OFFSET],
        iv: &data[IV_OFFSET..PAYLOAD_OFFSET],
        payload: &data[PAYLOAD_OFFSET..tag_offset],
        tag: &data[tag_offset..],
    })
}

/// Encryption and MAC sub-keys derived from the master key and a salt.
struct SubKeys(SecureBytes);

impl SubKeys {
    fn derive(master_key: &[u8; SYMMETRIC_KEY_LENGTH], salt: &[u8]) -> PheResult<Self> {
        let mut okm = SecureBytes::new(ENCRYPTION_KEY_LENGTH + MAC_KEY_LENGTH);
        crypto::hkdf_sha512(master_key, salt, labels::ENCRYPT, okm.data_mut())?;
        Ok(Self(okm))
    }

    fn encryption_key(&self) -> &[u8] {
        &self.0[..ENCRYPTION_KEY_LENGTH]
    }

    fn mac_key(&self) -> &[u8] {
        &self.0[ENCRYPTION_KEY_LENGTH..]
    }
}

/// Encrypts `plaintext` under `master_key`.
///
/// A fresh salt and IV are drawn for every call. The sub-keys come from
/// HKDF-SHA-512 over the master key and salt; the payload is AES-256-CBC with
/// PKCS#7 padding (an empty plaintext still yields one block) and the tag is
/// HMAC-SHA-256 over `salt ∥ iv ∥ payload`.
///
/// # Errors
///
/// Returns [`PheError::CryptoError`] if the random source or cipher setup fails.
pub fn encrypt(plaintext: &[u8], master_key: &[u8; SYMMETRIC_KEY_LENGTH]) -> PheResult<Vec<u8>> {
    let mut salt = [0u8; SALT_LENGTH];
    crypto::random_bytes(&mut salt)?;
    let mut iv = [0u8; IV_LENGTH];
    crypto::random_bytes(&mut iv)?;

    let keys = SubKeys::derive(master_key, &salt)?;
    let payload = Aes256CbcEnc::new_from_slices(keys.encryption_key(), &iv)
        .map_err(|_| PheError::CryptoError)?
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);
    let tag = crypto::hmac_sha256(keys.mac_key(), &[&salt, &iv, &payload])?;

    let mut out = Vec::with_capacity(CIPHERTEXT_HEADER_LENGTH + payload.len() + MAC_LENGTH);
    out.extend_from_slice(&salt);
    out.extend_from_slice(&iv);
    out.extend_from_slice(&payload);
    out.extend_from_slice(&tag);
    log::trace!("encrypted {} bytes into {} bytes", plaintext.len(), out.len());
    Ok(out)
}

/// Authenticates and decrypts a ciphertext produced by [`encrypt`].
///
/// Nothing is decrypted unless the tag verifies, so a wrong key or any
/// modification yields an error and never partial plaintext.
///
/// # Errors
///
/// Returns [`PheError::InvalidCiphertextLength`] if the length layout is wrong
/// (checked before the key is used).
/// Returns [`PheError::AuthenticationFailed`] if the tag does not verify.
/// Returns [`PheError::CryptoError`] if the cipher cannot be set up.
pub fn decrypt(ciphertext: &[u8], master_key: &[u8; SYMMETRIC_KEY_LENGTH]) -> PheResult<Vec<u8>> {
    let parsed = parse_ciphertext(ciphertext).inspect_err(|_| {
        log::debug!("rejected ciphertext of length {}", ciphertext.len());
    })?;

    let keys = SubKeys::derive(master_key, parsed.salt)?;
    crypto::verify_hmac(keys.mac_key(), &parsed.authenticated_parts(), parsed.tag).inspect_err(
        |_| {
            log::debug!("ciphertext authentication failed");
        },
    )?;

    Aes256CbcDec::new_from_slices(keys.encryption_key(), parsed.iv)
        .map_err(|_| PheError::CryptoError)?
        .decrypt_padded_vec_mut::<Pkcs7>(parsed.payload)
        .map_err(|_| PheError::AuthenticationFailed)
}
