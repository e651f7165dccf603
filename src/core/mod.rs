// src/core/mod.rs
//! Pure cryptographic primitives — no I/O beyond the OS random source
//!
//! Everything here works on in-memory buffers. The public façade lives in
//! [`crate::engine`].

pub mod aead;
pub mod frame;
pub mod kdf;
pub mod nonce;

pub use aead::*;
pub use frame::*;
pub use kdf::*;
pub use nonce::*;

pub type Result<T> = std::result::Result<T, crate::error::EngineError>;
