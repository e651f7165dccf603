// src/core/aead.rs
//! AES-128-GCM seal/open
//!
//! `seal` encrypts the plaintext and authenticates both the plaintext and
//! the associated data; `open` verifies the 128-bit tag (constant-time,
//! inside the aes-gcm crate) before releasing any plaintext. A tag mismatch
//! reports nothing about where the mismatch occurred — wrong key and
//! tampered ciphertext are indistinguishable.
//!
//! Each call constructs its own cipher value: there is no shared transform
//! state, so one derived key is safe to use from any number of threads.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes128Gcm, Nonce,
};

use crate::consts::NONCE_LEN;
use crate::error::EngineError;

use super::Result;

/// Build a cipher for one seal/open operation
pub(crate) fn build_cipher(key: &[u8]) -> Result<Aes128Gcm> {
    Aes128Gcm::new_from_slice(key)
        .map_err(|_| EngineError::AlgorithmUnavailable("AES-128-GCM"))
}

/// Encrypt and authenticate: plaintext → ciphertext ‖ tag
///
/// Deterministic given identical (key, nonce, aad, plaintext); all the
/// randomness lives in the nonce. Empty plaintext is valid and yields just
/// the 16-byte tag.
pub fn seal(key: &[u8], nonce: &[u8; NONCE_LEN], aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = build_cipher(key)?;
    cipher
        .encrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|_| EngineError::AlgorithmUnavailable("AES-128-GCM encrypt"))
}

/// Verify and decrypt: ciphertext ‖ tag → plaintext
///
/// Returns [`EngineError::Authentication`] on tag mismatch; no partial
/// plaintext is ever released.
pub fn open(key: &[u8], nonce: &[u8; NONCE_LEN], aad: &[u8], sealed: &[u8]) -> Result<Vec<u8>> {
    let cipher = build_cipher(key)?;
    cipher
        .decrypt(Nonce::from_slice(nonce), Payload { msg: sealed, aad })
        .map_err(|_| EngineError::Authentication)
}
