// src/core/nonce.rs
//! Fresh nonce generation
//!
//! One independent draw from the OS CSPRNG per encryption call. A nonce must
//! never repeat under the same key — reuse breaks both confidentiality and
//! authentication of GCM. Purely random 96-bit nonces make collisions
//! negligible at the volumes this engine targets; a seeded PRNG would not.

use aes_gcm::aead::{rand_core::RngCore, OsRng};

use crate::consts::NONCE_LEN;

/// Draw 12 cryptographically random bytes
pub fn fresh_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
