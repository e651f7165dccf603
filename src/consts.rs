// src/consts.rs
//! Shared constants — wire-format parameters and defaults

/// AES-128 key length in bytes (first half of the SHA-256 digest)
pub const KEY_LEN: usize = 16;

/// AES-GCM nonce length in bytes (96 bits, the standard GCM nonce size)
pub const NONCE_LEN: usize = 12;

/// GCM authentication tag length in bytes (128 bits, fixed)
pub const TAG_LEN: usize = 16;

/// Smallest possible decoded frame: nonce + tag around an empty plaintext
pub const MIN_FRAMED_LEN: usize = NONCE_LEN + TAG_LEN;

/// Convenience passphrase for tests and throwaway data.
///
/// SECURITY WARNING: this string is public, so anything encrypted under it
/// is readable by anyone. Use [`crate::EncryptionEngine::new`] with your own
/// high-entropy passphrase for real data.
pub const DEFAULT_PASSPHRASE: &str =
    "This is clearly a default passphrase: {OYrkhC'I(=fW&yNtP2peBndT5Hz&}. \
     Set yours with: `EncryptionEngine::new(<your_passphrase>)`";
