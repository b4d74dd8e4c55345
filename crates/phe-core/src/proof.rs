// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Password-Hardened Encryption
// Licensed under the MIT License

//! Non-interactive proofs that the server evaluated with its enrolled key.
//!
//! Both proofs are Fiat-Shamir transforms of sigma protocols over P-256. The
//! transcript is `public_key ∥ G ∥ c0 ∥ c1 ∥ commitments…`, hashed by
//! [`hash::challenge`] under the tag of the proof variant.
//!
//! * Success: knowledge of `y` with `c0 = y·hs0`, `c1 = y·hs1` and `Y = y·G`.
//! * Failure: `c1 = a·c0 + b·hs0` for some `(a, b)` with `a·Y + b·G = O`,
//!   which shows `c1 = r·(c0 − y·hs0)` without revealing `r` or `y`.

use crate::crypto;
use crate::hash::{self, challenge_scalar};
use crate::point::Point;
use crate::types::{labels, PheError, PheResult};
use num_bigint::BigUint;
use p256::elliptic_curve::Field;
use p256::Scalar;

/// The server's long-term key `y` and its public point `Y = y·G`.
#[derive(Clone)]
pub struct ServerKeyPair {
    private_key: Scalar,
    public_key: Point,
}

impl ServerKeyPair {
    /// Draws a fresh non-zero private key from the OS CSPRNG.
    pub fn generate() -> Self {
        let private_key = crypto::random_nonzero_scalar();
        Self {
            private_key,
            public_key: Point::generator().mul(&private_key),
        }
    }

    /// Rebuilds a key pair from a stored private key.
    ///
    /// # Errors
    ///
    /// Returns [`PheError::InvalidInput`] if `private_key` is zero.
    pub fn from_private_key(private_key: Scalar) -> PheResult<Self> {
        if bool::from(private_key.is_zero()) {
            return Err(PheError::InvalidInput);
        }
        Ok(Self {
            private_key,
            public_key: Point::generator().mul(&private_key),
        })
    }

    pub fn private_key(&self) -> &Scalar {
        &self.private_key
    }

    pub fn public_key(&self) -> &Point {
        &self.public_key
    }
}

impl std::fmt::Debug for ServerKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerKeyPair")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Commitment points of a proof, tagged by variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProofKind {
    Success {
        term1: Point,
        term2: Point,
        term3: Point,
    },
    Failure {
        term1: Point,
        term2: Point,
        term3: Point,
        term4: Point,
    },
}

impl ProofKind {
    /// Domain tag hashed into the challenge of this variant.
    pub fn tag(&self) -> &'static [u8] {
        match self {
            ProofKind::Success { .. } => labels::PROOF_SUCCESS,
            ProofKind::Failure { .. } => labels::PROOF_FAILURE,
        }
    }

    /// Commitments in transcript order.
    pub fn commitments(&self) -> Vec<Point> {
        match *self {
            ProofKind::Success {
                term1,
                term2,
                term3,
            } => vec![term1, term2, term3],
            ProofKind::Failure {
                term1,
                term2,
                term3,
                term4,
            } => vec![term1, term2, term3, term4],
        }
    }

    /// Fiat-Shamir challenge binding the statement `(Y, c0, c1)` to these
    /// commitments.
    pub fn challenge(&self, public_key: &Point, c0: &Point, c1: &Point) -> BigUint {
        let mut points = Vec::with_capacity(6);
        points.push(*c0);
        points.push(*c1);
        points.extend(self.commitments());
        hash::challenge(self.tag(), public_key, &Point::generator(), &points)
    }
}

/// Proof that `c0` and `c1` were computed with the enrolled private key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProofOfSuccess {
    pub term1: Point,
    pub term2: Point,
    pub term3: Point,
    pub blind_x: Scalar,
}

impl ProofOfSuccess {
    pub fn kind(&self) -> ProofKind {
        ProofKind::Success {
            term1: self.term1,
            term2: self.term2,
            term3: self.term3,
        }
    }
}

/// Proof that `c1` is a blinded non-match for `c0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProofOfFailure {
    pub term1: Point,
    pub term2: Point,
    pub term3: Point,
    pub term4: Point,
    pub blind_a: Scalar,
    pub blind_b: Scalar,
}

impl ProofOfFailure {
    pub fn kind(&self) -> ProofKind {
        ProofKind::Failure {
            term1: self.term1,
            term2: self.term2,
            term3: self.term3,
            term4: self.term4,
        }
    }
}

/// Proves `c0 = y·hs0`, `c1 = y·hs1` for the key pair's `y`.
pub fn prove_success(
    keys: &ServerKeyPair,
    hs0: &Point,
    hs1: &Point,
    c0: &Point,
    c1: &Point,
) -> ProofOfSuccess {
    let blind = crypto::random_nonzero_scalar();
    let term1 = hs0.mul(&blind);
    let term2 = hs1.mul(&blind);
    let term3 = Point::generator().mul(&blind);

    let kind = ProofKind::Success {
        term1,
        term2,
        term3,
    };
    let z = challenge_scalar(&kind.challenge(keys.public_key(), c0, c1));

    ProofOfSuccess {
        term1,
        term2,
        term3,
        blind_x: blind + z * keys.private_key,
    }
}

/// Checks a [`ProofOfSuccess`] against the statement `(Y, hs0, hs1, c0, c1)`.
///
/// # Errors
///
/// Returns [`PheError::ProofVerificationFailed`] if any of the three
/// equations does not hold.
pub fn verify_success(
    public_key: &Point,
    hs0: &Point,
    hs1: &Point,
    c0: &Point,
    c1: &Point,
    proof: &ProofOfSuccess,
) -> PheResult<()> {
    let z = challenge_scalar(&proof.kind().challenge(public_key, c0, c1));

    let ok = proof.term1 + c0.mul(&z) == hs0.mul(&proof.blind_x)
        && proof.term2 + c1.mul(&z) == hs1.mul(&proof.blind_x)
        && proof.term3 + public_key.mul(&z) == Point::generator().mul(&proof.blind_x);
    if !ok {
        log::debug!("success proof rejected");
        return Err(PheError::ProofVerificationFailed);
    }
    Ok(())
}

/// Blinds a non-matching evaluation: returns `c1 = r·(c0 − y·hs0)` for a fresh
/// `r` together with a proof of its form.
pub fn prove_failure(keys: &ServerKeyPair, hs0: &Point, c0: &Point) -> (Point, ProofOfFailure) {
    let a = crypto::random_nonzero_scalar();
    let b = -(a * keys.private_key);
    let c1 = c0.mul(&a) + hs0.mul(&b);

    let blind_a = crypto::random_nonzero_scalar();
    let blind_b = crypto::random_nonzero_scalar();
    let term1 = c0.mul(&blind_a);
    let term2 = hs0.mul(&blind_b);
    let term3 = keys.public_key().mul(&blind_a);
    let term4 = Point::generator().mul(&blind_b);

    let kind = ProofKind::Failure {
        term1,
        term2,
        term3,
        term4,
    };
    let z = challenge_scalar(&kind.challenge(keys.public_key(), c0, &c1));

    (
        c1,
        ProofOfFailure {
            term1,
            term2,
            term3,
            term4,
            blind_a: blind_a + z * a,
            blind_b: blind_b + z * b,
        },
    )
}

/// Checks a [`ProofOfFailure`] against the statement `(Y, hs0, c0, c1)`.
///
/// # Errors
///
/// Returns [`PheError::ProofVerificationFailed`] if `c1` is the identity (the
/// evaluation actually matched) or either equation does not hold.
pub fn verify_failure(
    public_key: &Point,
    hs0: &Point,
    c0: &Point,
    c1: &Point,
    proof: &ProofOfFailure,
) -> PheResult<()> {
    if c1.is_identity() {
        log::debug!("failure proof over an identity c1 rejected");
        return Err(PheError::ProofVerificationFailed);
    }
    let z = challenge_scalar(&proof.kind().challenge(public_key, c0, c1));

    let ok = proof.term1 + proof.term2 + c1.mul(&z)
        == c0.mul(&proof.blind_a) + hs0.mul(&proof.blind_b)
        && proof.term3 + proof.term4
            == public_key.mul(&proof.blind_a) + Point::generator().mul(&proof.blind_b);
    if !ok {
        log::debug!("failure proof rejected");
        return Err(PheError::ProofVerificationFailed);
    }
    Ok(())
}
