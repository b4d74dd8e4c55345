// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Password-Hardened Encryption
// Licensed under the MIT License

use crate::crypto;
use crate::point::{scalar_from_biguint, Point};
use crate::swu;
use crate::types::{HASH_LENGTH, NONCE_LENGTH, POINT_LENGTH, SCALAR_LENGTH};
use num_bigint::BigUint;
use p256::Scalar;

/// Derives a protocol point for the role named by `tag` from `parts`.
///
/// The point is `SWU(SHA-512(tag ∥ parts…))`. Parts are concatenated without
/// delimiters. Callers pass the fixed-width nonce first and at most one
/// variable-length part (the password) after it; debug builds assert that
/// shape.
pub fn hash_to_point(tag: &[u8], parts: &[&[u8]]) -> Point {
    debug_assert!(
        parts.len() <= 2 && parts.first().map_or(true, |nonce| nonce.len() == NONCE_LENGTH),
        "hash_to_point expects a {NONCE_LENGTH}-byte nonce and at most one more part"
    );
    swu::digest_to_point(&transcript_digest(tag, parts))
}

fn transcript_digest(tag: &[u8], parts: &[&[u8]]) -> [u8; HASH_LENGTH] {
    let mut transcript = Vec::with_capacity(1 + parts.len());
    transcript.push(tag);
    transcript.extend_from_slice(parts);
    crypto::sha512_multi(&transcript)
}

/// Hashes `tag ∥ parts…` to an integer.
///
/// The leading field-width bytes of the SHA-512 digest are read big-endian,
/// the same digest prefix [`hash_to_point`] feeds to the curve map. The
/// result is not reduced; see [`challenge_scalar`].
pub fn hash_z(tag: &[u8], parts: &[&[u8]]) -> BigUint {
    BigUint::from_bytes_be(&transcript_digest(tag, parts)[..SCALAR_LENGTH])
}

/// Fiat-Shamir challenge over `tag ∥ public_key ∥ generator ∥ points…`, each
/// point in its 65-byte uncompressed encoding.
///
/// The function is agnostic to how many auxiliary points the caller supplies;
/// the proof variant decides the transcript shape.
pub fn challenge(tag: &[u8], public_key: &Point, generator: &Point, points: &[Point]) -> BigUint {
    let mut encoded: Vec<[u8; POINT_LENGTH]> = Vec::with_capacity(2 + points.len());
    encoded.push(public_key.marshal());
    encoded.push(generator.marshal());
    encoded.extend(points.iter().map(Point::marshal));
    let parts: Vec<&[u8]> = encoded.iter().map(|p| p.as_slice()).collect();
    hash_z(tag, &parts)
}

/// Reduces a challenge integer modulo `n` for use in proof arithmetic.
pub fn challenge_scalar(z: &BigUint) -> Scalar {
    scalar_from_biguint(z)
}
