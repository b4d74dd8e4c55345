// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Password-Hardened Encryption
// Licensed under the MIT License

//! P-256 points with fixed-width uncompressed encoding.
//!
//! Arithmetic is delegated to the constant-time `p256` backend; this module
//! owns the encoding contract (`0x04 ∥ X ∥ Y`, big-endian, 32 bytes each) and
//! the conversions between curve objects and arbitrary-precision integers.

use crate::types::{
    PheError, PheResult, FIELD_LENGTH, POINT_LENGTH, SCALAR_LENGTH, UNCOMPRESSED_POINT_TAG,
};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use p256::elliptic_curve::bigint::U256;
use p256::elliptic_curve::ops::Reduce;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::elliptic_curve::{Group, PrimeField};
use p256::{AffinePoint, EncodedPoint, FieldBytes, FieldElement, ProjectivePoint, Scalar};
use std::ops::Add;

const FIELD_PRIME_BYTES: [u8; FIELD_LENGTH] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

pub(crate) const CURVE_B_BYTES: [u8; FIELD_LENGTH] = [
    0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7, 0xb3, 0xeb, 0xbd, 0x55, 0x76, 0x98, 0x86, 0xbc,
    0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6, 0x3b, 0xce, 0x3c, 0x3e, 0x27, 0xd2, 0x60, 0x4b,
];

const CURVE_ORDER_BYTES: [u8; SCALAR_LENGTH] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
];

/// The field prime `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`.
pub static FIELD_PRIME: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&FIELD_PRIME_BYTES));
/// The curve coefficient `b` of `y^2 = x^3 - 3x + b`.
pub static CURVE_B: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&CURVE_B_BYTES));
/// The order `n` of the generator.
pub static CURVE_ORDER: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&CURVE_ORDER_BYTES));

/// A point on P-256, or the point at infinity.
///
/// Every value of this type satisfies the curve equation: constructors that
/// take external data validate it first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point(ProjectivePoint);

impl Point {
    /// The fixed generator `G`.
    pub fn generator() -> Self {
        Self(ProjectivePoint::GENERATOR)
    }

    /// The point at infinity.
    pub fn identity() -> Self {
        Self(ProjectivePoint::IDENTITY)
    }

    /// Returns `true` for the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.0.is_identity().into()
    }

    /// Builds a point from affine coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PheError::InvalidEncoding`] if either coordinate is not a
    /// canonical field element or the pair does not satisfy the curve equation.
    pub fn from_coordinates(x: &BigUint, y: &BigUint) -> PheResult<Self> {
        let x = field_bytes(x).ok_or(PheError::InvalidEncoding)?;
        let y = field_bytes(y).ok_or(PheError::InvalidEncoding)?;
        let encoded = EncodedPoint::from_affine_coordinates(&x, &y, false);
        Self::from_encoded(&encoded)
    }

    pub(crate) fn from_field_elements(x: &FieldElement, y: &FieldElement) -> PheResult<Self> {
        let encoded = EncodedPoint::from_affine_coordinates(&x.to_bytes(), &y.to_bytes(), false);
        Self::from_encoded(&encoded)
    }

    /// Returns the affine coordinates `(X, Y)`, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(BigUint, BigUint)> {
        let encoded = self.0.to_affine().to_encoded_point(false);
        match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => Some((BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))),
            _ => None,
        }
    }

    /// Multiplies this point by `k` in constant time.
    pub fn mul(&self, k: &Scalar) -> Self {
        Self(self.0 * k)
    }

    /// Encodes the point as `0x04 ∥ X ∥ Y`.
    ///
    /// The identity has no affine coordinates and encodes as the tag byte
    /// followed by zeros, which [`Point::unmarshal`] rejects.
    pub fn marshal(&self) -> [u8; POINT_LENGTH] {
        let mut out = [0u8; POINT_LENGTH];
        out[0] = UNCOMPRESSED_POINT_TAG;
        let encoded = self.0.to_affine().to_encoded_point(false);
        if let (Some(x), Some(y)) = (encoded.x(), encoded.y()) {
            out[1..1 + FIELD_LENGTH].copy_from_slice(x);
            out[1 + FIELD_LENGTH..].copy_from_slice(y);
        }
        out
    }

    /// Decodes a 65-byte uncompressed point and checks it lies on the curve.
    ///
    /// # Errors
    ///
    /// Returns [`PheError::InvalidEncoding`] on a wrong length, a wrong tag
    /// byte, a non-canonical coordinate, or an off-curve pair.
    pub fn unmarshal(data: &[u8]) -> PheResult<Self> {
        if data.len() != POINT_LENGTH || data[0] != UNCOMPRESSED_POINT_TAG {
            return Err(PheError::InvalidEncoding);
        }
        let encoded = EncodedPoint::from_bytes(data).map_err(|_| PheError::InvalidEncoding)?;
        Self::from_encoded(&encoded)
    }

    fn from_encoded(encoded: &EncodedPoint) -> PheResult<Self> {
        let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(encoded).into();
        affine
            .map(|p| Self(ProjectivePoint::from(p)))
            .ok_or(PheError::InvalidEncoding)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Point> for &'a Point {
    type Output = Point;

    fn add(self, rhs: &'a Point) -> Point {
        Point(self.0 + rhs.0)
    }
}

/// Reduces an arbitrary non-negative integer modulo the curve order.
pub fn scalar_from_biguint(k: &BigUint) -> Scalar {
    let reduced = k % &*CURVE_ORDER;
    match field_bytes(&reduced) {
        Some(bytes) => <Scalar as Reduce<U256>>::reduce_bytes(&bytes),
        None => Scalar::from(0u64),
    }
}

/// Returns the canonical integer value of `k`.
pub fn scalar_to_biguint(k: &Scalar) -> BigUint {
    BigUint::from_bytes_be(&k.to_repr())
}

/// Left-pads `value` to a 32-byte big-endian field encoding; `None` if it does
/// not fit below the field prime.
pub(crate) fn field_bytes(value: &BigUint) -> Option<FieldBytes> {
    if value >= &*FIELD_PRIME {
        return None;
    }
    let raw = value.to_bytes_be();
    let mut bytes = FieldBytes::default();
    bytes[FIELD_LENGTH - raw.len()..].copy_from_slice(&raw);
    Some(bytes)
}
