// src/core/frame.rs
//! Wire framing and text encoding
//!
//! Decoded layout: `nonce(12) ‖ ciphertext(N) ‖ tag(16)`, N ≥ 0, rendered
//! as standard base64 with padding. Anything shorter than 28 decoded bytes
//! cannot hold a nonce plus a tag and is rejected outright.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::consts::{MIN_FRAMED_LEN, NONCE_LEN};
use crate::error::EngineError;

use super::Result;

/// Concatenate nonce and sealed ciphertext+tag into one blob
pub fn frame(nonce: &[u8; NONCE_LEN], sealed: &[u8]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
    blob.extend_from_slice(nonce);
    blob.extend_from_slice(sealed);
    blob
}

/// Split a decoded blob back into (nonce, sealed ciphertext+tag)
pub fn unframe(blob: &[u8]) -> Result<([u8; NONCE_LEN], &[u8])> {
    if blob.len() < MIN_FRAMED_LEN {
        return Err(EngineError::Format(format!(
            "framed input too short: {} bytes, minimum is {MIN_FRAMED_LEN}",
            blob.len()
        )));
    }
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&blob[..NONCE_LEN]);
    Ok((nonce, &blob[NONCE_LEN..]))
}

/// Render a framed blob as printable text
pub fn encode(blob: &[u8]) -> String {
    STANDARD.encode(blob)
}

/// Decode printable text back into a framed blob
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}
