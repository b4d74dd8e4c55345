// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Password-Hardened Encryption
// Licensed under the MIT License

use crate::types::{constant_time_eq, PheError, PheResult, HASH_LENGTH, MAC_LENGTH};
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use p256::elliptic_curve::Field;
use p256::Scalar;
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroize;

type HmacSha256 = Hmac<Sha256>;

/// Fills `buf` with cryptographically secure random bytes from the OS.
///
/// # Errors
///
/// Returns [`PheError::InvalidInput`] if `buf` is empty.
/// Returns [`PheError::CryptoError`] if the OS random source fails.
pub fn random_bytes(buf: &mut [u8]) -> PheResult<()> {
    if buf.is_empty() {
        return Err(PheError::InvalidInput);
    }
    OsRng.try_fill_bytes(buf).map_err(|_| PheError::CryptoError)
}

/// Generates a uniformly random, non-zero P-256 scalar.
///
/// Loops until a non-zero scalar is obtained (overwhelmingly likely on the first try).
pub fn random_nonzero_scalar() -> Scalar {
    loop {
        let scalar = Scalar::random(&mut OsRng);
        if !bool::from(scalar.is_zero()) {
            return scalar;
        }
    }
}

/// Computes the SHA-512 digest of `input`.
pub fn sha512(input: &[u8]) -> [u8; HASH_LENGTH] {
    sha512_multi(&[input])
}

/// Computes the SHA-512 digest of the concatenation of all `parts`.
pub fn sha512_multi(parts: &[&[u8]]) -> [u8; HASH_LENGTH] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; HASH_LENGTH];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Runs HKDF-SHA-512 (extract then expand) and fills `okm`.
///
/// # Errors
///
/// Returns [`PheError::InvalidInput`] if `okm` is empty.
/// Returns [`PheError::CryptoError`] if `okm` exceeds the HKDF-Expand maximum
/// of `255 * 64` bytes.
pub fn hkdf_sha512(ikm: &[u8], salt: &[u8], info: &[u8], okm: &mut [u8]) -> PheResult<()> {
    if okm.is_empty() {
        return Err(PheError::InvalidInput);
    }
    Hkdf::<Sha512>::new(Some(salt), ikm)
        .expand(info, okm)
        .map_err(|_| PheError::CryptoError)
}

/// Computes HMAC-SHA-256 over the concatenation of `parts` using `key`.
///
/// # Errors
///
/// Returns [`PheError::InvalidInput`] if `key` is empty.
pub fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> PheResult<[u8; MAC_LENGTH]> {
    if key.is_empty() {
        return Err(PheError::InvalidInput);
    }
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| PheError::CryptoError)?;
    for part in parts {
        mac.update(part);
    }
    let mut out = [0u8; MAC_LENGTH];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Computes HMAC-SHA-256 over `parts` and compares it to `expected_mac` in constant time.
///
/// # Errors
///
/// Returns [`PheError::InvalidInput`] if `key` is empty.
/// Returns [`PheError::AuthenticationFailed`] if the computed tag does not match.
pub fn verify_hmac(key: &[u8], parts: &[&[u8]], expected_mac: &[u8]) -> PheResult<()> {
    let mut computed = hmac_sha256(key, parts)?;
    let matches = constant_time_eq(&computed, expected_mac);
    computed.zeroize();
    if matches {
        Ok(())
    } else {
        Err(PheError::AuthenticationFailed)
    }
}
