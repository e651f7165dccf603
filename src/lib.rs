// src/lib.rs
//! sealed-object — passphrase-based authenticated encryption of values
//!
//! Features:
//! - AES-128-GCM with a 128-bit authentication tag
//! - SHA-256 key derivation (no stretching — see `core::kdf`)
//! - Passphrase bound as AAD: wrong passphrase and tampering are
//!   indistinguishable authentication failures
//! - Pluggable serialization codec (JSON by default)
//! - Wire format: base64 of `nonce(12) ‖ ciphertext ‖ tag(16)`

pub mod aliases;
pub mod codec;
pub mod consts;
pub mod core;
pub mod engine;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use codec::{JsonCodec, PayloadCodec, RawBytes};
pub use engine::EncryptionEngine;
pub use enums::EncryptionAlgorithm;
pub use error::{EngineError, Result};
