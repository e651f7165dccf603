// src/enums.rs
//! Public enum types used throughout the crate

use serde::{Deserialize, Serialize};

/// Supported encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum EncryptionAlgorithm {
    #[default]
    Aes128Gcm,
    // Future:
    // ChaCha20Poly1305,
    // XChaCha20Poly1305,
}
