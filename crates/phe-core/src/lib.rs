// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Password-Hardened Encryption
// Licensed under the MIT License

//! Core primitives for the Ecliptix Password-Hardened Encryption (PHE) scheme.
//!
//! A PHE server holds a long-term key and helps clients turn low-entropy
//! passwords into strong record keys; it proves every evaluation with a
//! zero-knowledge proof, and a stolen database alone does not allow offline
//! guessing. This crate supplies the building blocks both parties share; the
//! enrollment and verification message flow lives above it.
//!
//! # Crate layout
//!
//! * [`types`] -- shared constants, domain tags, error types, and secure byte containers.
//! * [`crypto`] -- CSPRNG, SHA-512, HKDF and HMAC helpers.
//! * [`point`] -- P-256 points with the fixed 65-byte uncompressed encoding.
//! * [`swu`] -- total SWU map from field elements and data to curve points.
//! * [`hash`] -- tagged hash-to-curve and the Fiat-Shamir challenge.
//! * [`envelope`] -- encrypt-then-MAC authenticated encryption under a 32-byte key.
//! * [`proof`] -- success and failure proofs for server evaluations.

/// CSPRNG, hashing, key derivation and MAC helpers.
pub mod crypto;
/// Authenticated encryption of records under a master key.
pub mod envelope;
/// Tagged hash-to-curve and the proof challenge.
pub mod hash;
/// P-256 point arithmetic and encoding.
pub mod point;
/// Success and failure proofs over the challenge transcript.
pub mod proof;
/// Simplified SWU map onto P-256.
pub mod swu;
/// Shared constants, error types, and secure byte containers.
pub mod types;

pub use point::Point;
pub use types::{PheError, PheResult};
