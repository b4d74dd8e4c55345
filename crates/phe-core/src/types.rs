// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Password-Hardened Encryption
// Licensed under the MIT License

use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Width of a P-256 field element (and of each point coordinate) in bytes.
pub const FIELD_LENGTH: usize = 32;
/// Width of a P-256 scalar in bytes.
pub const SCALAR_LENGTH: usize = 32;
/// Leading byte of an uncompressed SEC1 point encoding.
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;
/// Length of a marshaled (uncompressed) curve point in bytes.
pub const POINT_LENGTH: usize = 1 + 2 * FIELD_LENGTH;
/// Length of a SHA-512 digest in bytes.
pub const HASH_LENGTH: usize = 64;
/// Length of the per-record nonce that leads every tagged point transcript.
pub const NONCE_LENGTH: usize = 32;

/// Length of the caller-supplied master key in bytes.
pub const SYMMETRIC_KEY_LENGTH: usize = 32;
/// Length of the per-ciphertext HKDF salt in bytes.
pub const SALT_LENGTH: usize = 32;
/// Length of the AES-CBC initialization vector in bytes.
pub const IV_LENGTH: usize = 16;
/// AES block size in bytes.
pub const BLOCK_LENGTH: usize = 16;
/// Length of an HMAC-SHA-256 tag in bytes.
pub const MAC_LENGTH: usize = 32;
/// Length of the derived AES-256 key in bytes.
pub const ENCRYPTION_KEY_LENGTH: usize = 32;
/// Length of the derived HMAC key in bytes.
pub const MAC_KEY_LENGTH: usize = 32;

/// Length of the ciphertext header (salt followed by IV) in bytes.
pub const CIPHERTEXT_HEADER_LENGTH: usize = SALT_LENGTH + IV_LENGTH;
/// Smallest well-formed ciphertext: header, one padded block, tag.
pub const MIN_CIPHERTEXT_LENGTH: usize = CIPHERTEXT_HEADER_LENGTH + BLOCK_LENGTH + MAC_LENGTH;

const _: () = assert!(POINT_LENGTH == 65);
const _: () = assert!(FIELD_LENGTH == SCALAR_LENGTH);
const _: () = assert!(IV_LENGTH == BLOCK_LENGTH);
const _: () = assert!(ENCRYPTION_KEY_LENGTH + MAC_KEY_LENGTH == HASH_LENGTH);
const _: () = assert!(CIPHERTEXT_HEADER_LENGTH == 48);
const _: () = assert!(MIN_CIPHERTEXT_LENGTH == 96);

/// Domain-separation tags.
///
/// The four point tags share one length; [`crate::hash::hash_to_point`] relies
/// on that to keep its undelimited transcript unambiguous. Each point tag is
/// hashed with a [`crate::types::NONCE_LENGTH`]-byte nonce, followed by the password
/// for the client tags.
pub mod labels {
    /// Client password point, variant 0.
    pub const CLIENT_POINT_0: &[u8] = b"hc0";
    /// Client password point, variant 1.
    pub const CLIENT_POINT_1: &[u8] = b"hc1";
    /// Server masking point, variant 0.
    pub const SERVER_POINT_0: &[u8] = b"hs0";
    /// Server masking point, variant 1.
    pub const SERVER_POINT_1: &[u8] = b"hs1";
    /// Transcript tag for the proof of a successful evaluation.
    pub const PROOF_SUCCESS: &[u8] = b"ProofOk";
    /// Transcript tag for the proof of a failed evaluation.
    pub const PROOF_FAILURE: &[u8] = b"ProofError";
    /// HKDF info string for the symmetric sub-keys.
    pub const ENCRYPT: &[u8] = b"PheEncrypt";

    const _: () = assert!(
        CLIENT_POINT_0.len() == CLIENT_POINT_1.len()
            && CLIENT_POINT_0.len() == SERVER_POINT_0.len()
            && CLIENT_POINT_0.len() == SERVER_POINT_1.len()
    );
}

/// Enumerates all error conditions raised by the PHE primitives.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PheError {
    /// An input parameter has an invalid value or length.
    #[error("invalid input parameter")]
    InvalidInput,
    /// Point bytes are malformed, have the wrong length, or lie off the curve.
    #[error("invalid point encoding")]
    InvalidEncoding,
    /// The ciphertext is shorter than the minimum or its payload is not block aligned.
    #[error("invalid ciphertext length")]
    InvalidCiphertextLength,
    /// The ciphertext tag did not verify (tampering or wrong key).
    #[error("authentication failed")]
    AuthenticationFailed,
    /// A low-level primitive (CSPRNG, KDF, cipher setup) failed.
    #[error("cryptographic operation failed")]
    CryptoError,
    /// A success or failure proof did not verify.
    #[error("proof verification failed")]
    ProofVerificationFailed,
}

/// Convenience alias for `Result<T, PheError>`.
pub type PheResult<T> = Result<T, PheError>;

/// A heap-allocated byte buffer that is zeroized on drop.
///
/// Holds derived key material; the `Debug` implementation redacts the contents.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Creates a zero-filled buffer of the given length.
    pub fn new(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    /// Returns a mutable reference to the underlying bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl std::ops::Deref for SecureBytes {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureBytes([REDACTED; {}])", self.0.len())
    }
}

/// Compares two byte slices in constant time.
///
/// Returns `false` immediately if the lengths differ (length itself is not secret).
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
