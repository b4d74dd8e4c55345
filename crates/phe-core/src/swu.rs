// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Password-Hardened Encryption
// Licensed under the MIT License

//! Simplified Shallue–van de Woestijne–Ulas map onto P-256.
//!
//! P-256 has `p ≡ 3 (mod 4)`, so a single exponentiation both tests whether
//! `h2 = g(X2)` is a square and yields its square root; when it is not, the
//! companion abscissa `X3 = α·X2` is used and its root is recovered from the
//! same exponent. The map is total: every field element lands on the curve
//! without a retry loop.
//!
//! The arithmetic runs on `p256`'s Montgomery field elements. Both candidates
//! are always computed and the result is picked with a constant-time select,
//! so the running time does not depend on the (password-derived) input.

use crate::crypto;
use crate::point::{Point, CURVE_B_BYTES, FIELD_PRIME};
use crate::types::{FIELD_LENGTH, HASH_LENGTH};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use p256::elliptic_curve::subtle::{ConditionallySelectable, ConstantTimeEq};
use p256::FieldElement;

const CURVE_A: FieldElement = FieldElement::from_u64(3).neg();
static CURVE_B: Lazy<FieldElement> = Lazy::new(|| reduce_be_bytes(&CURVE_B_BYTES));

/// `-b / a mod p`.
static MINUS_B_OVER_A: Lazy<FieldElement> =
    Lazy::new(|| -*CURVE_B * CURVE_A.invert().unwrap_or(FieldElement::ZERO));

/// `(p - 3) / 4` as little-endian 64-bit limbs.
const P_MINUS_3_OVER_4: [u64; 4] = [
    0xffff_ffff_ffff_ffff,
    0x0000_0000_3fff_ffff,
    0x4000_0000_0000_0000,
    0x3fff_ffff_c000_0000,
];

/// Reads 32 big-endian bytes as a field element, reducing modulo `p`.
fn reduce_be_bytes(bytes: &[u8; FIELD_LENGTH]) -> FieldElement {
    let radix = FieldElement::from_u64(1 << 32).square();
    bytes.chunks_exact(8).fold(FieldElement::ZERO, |acc, limb| {
        let mut word = [0u8; 8];
        word.copy_from_slice(limb);
        acc * radix + FieldElement::from_u64(u64::from_be_bytes(word))
    })
}

/// `x^3 + a·x + b`.
fn curve_rhs(x: &FieldElement) -> FieldElement {
    x.square() * x + CURVE_A * x + *CURVE_B
}

fn map_field_element(t: &FieldElement) -> Point {
    let alpha = -t.square();
    // 1/0 is taken as 0.
    let inv = (alpha.square() + alpha).invert().unwrap_or(FieldElement::ZERO);
    let x2 = *MINUS_B_OVER_A * (FieldElement::ONE + inv);
    let x3 = alpha * x2;
    let h2 = curve_rhs(&x2);

    let i2 = h2.pow_vartime(&P_MINUS_3_OVER_4);
    let y2 = i2 * h2;
    let y3 = t.square() * t * y2;
    let is_square = (i2 * y2).ct_eq(&FieldElement::ONE);

    let x = FieldElement::conditional_select(&x3, &x2, is_square);
    let y = FieldElement::conditional_select(&y3, &y2, is_square);
    match Point::from_field_elements(&x, &y) {
        Ok(point) => point,
        Err(_) => {
            log::warn!("swu: exceptional field element mapped to the identity");
            Point::identity()
        }
    }
}

/// Maps an integer `t` to a curve point.
///
/// `t` is reduced modulo `p` first. The handful of exceptional inputs
/// (`t² ∈ {0, 1}`) whose candidate does not validate map to the identity.
pub fn map_to_point(t: &BigUint) -> Point {
    let raw = (t % &*FIELD_PRIME).to_bytes_be();
    let mut bytes = [0u8; FIELD_LENGTH];
    bytes[FIELD_LENGTH - raw.len()..].copy_from_slice(&raw);
    map_field_element(&reduce_be_bytes(&bytes))
}

/// Maps a SHA-512 digest to a curve point. Only the leading field-width bytes
/// are used, read big-endian and reduced modulo `p`.
pub fn digest_to_point(digest: &[u8; HASH_LENGTH]) -> Point {
    let mut t = [0u8; FIELD_LENGTH];
    t.copy_from_slice(&digest[..FIELD_LENGTH]);
    map_field_element(&reduce_be_bytes(&t))
}

/// Hashes `data` with SHA-512 and maps the digest to a curve point.
pub fn data_to_point(data: &[u8]) -> Point {
    digest_to_point(&crypto::sha512(data))
}

