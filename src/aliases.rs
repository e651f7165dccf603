// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret-holding types used throughout
//! sealed-object. All of them zeroize their contents on drop.

pub use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(EngineKey, Vec<u8>); // 128-bit AES key derived from the passphrase
dynamic_alias!(AadBlob, Vec<u8>); // passphrase bytes bound as associated data
dynamic_alias!(PlainBytes, Vec<u8>); // serialized payload before sealing / after opening
