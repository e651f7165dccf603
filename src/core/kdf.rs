// src/core/kdf.rs
//! Passphrase → AES-128 key derivation
//!
//! The key is the first 16 bytes of the SHA-256 digest of the passphrase.
//! No salt, no iteration count: the same passphrase must always derive the
//! same key so that previously produced ciphertexts stay decryptable without
//! auxiliary key storage.
//!
//! SECURITY NOTE: this is deliberately NOT a stretched KDF. Deriving is fast,
//! so low-entropy passphrases are cheap to brute-force. Callers are expected
//! to supply high-entropy passphrases. Upgrading to an iterated or
//! memory-hard KDF would break compatibility with existing ciphertexts.

use sha2::{Digest, Sha256};

use crate::aliases::EngineKey;
use crate::consts::KEY_LEN;

/// Derive the AES-128 key from passphrase bytes
pub fn derive_key(passphrase: &[u8]) -> EngineKey {
    let digest = Sha256::digest(passphrase);
    EngineKey::new(digest[..KEY_LEN].to_vec())
}
