// src/engine.rs
//! The public encryption façade
//!
//! One [`EncryptionEngine`] holds an immutable derived key plus the
//! passphrase bytes as AAD, fixed at construction. Every `encrypt`/`decrypt`
//! call draws its own nonce and builds its own cipher, so a single engine is
//! safe to share across threads without synchronization.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace, warn};

use crate::aliases::{AadBlob, EngineKey, PlainBytes};
use crate::codec::{JsonCodec, PayloadCodec};
use crate::consts::DEFAULT_PASSPHRASE;
use crate::core::aead::build_cipher;
use crate::core::{decode, derive_key, encode, frame, fresh_nonce, open, seal, unframe};
use crate::enums::EncryptionAlgorithm;
use crate::error::Result;

pub struct EncryptionEngine<C: PayloadCodec> {
    key: EngineKey,
    aad: AadBlob,
    codec: C,
}

impl<T: Serialize + DeserializeOwned> EncryptionEngine<JsonCodec<T>> {
    /// Build an engine with the default JSON codec
    pub fn new(passphrase: &str) -> Result<Self> {
        Self::with_codec(passphrase, JsonCodec::new())
    }

    /// Build an engine with the built-in default passphrase.
    ///
    /// SECURITY WARNING: the default passphrase is published in this crate's
    /// source, so the derived key is public. Anything encrypted with it is
    /// readable by anyone. Convenience for tests and throwaway data only.
    pub fn with_default_passphrase() -> Result<Self> {
        warn!("engine constructed with the public default passphrase; ciphertexts are NOT confidential");
        Self::new(DEFAULT_PASSPHRASE)
    }
}

impl<C: PayloadCodec> EncryptionEngine<C> {
    /// Build an engine around a caller-supplied codec.
    ///
    /// Identical passphrase text always yields an identical key and AAD, so
    /// two engines built from the same passphrase can decrypt each other's
    /// output. Fails with `AlgorithmUnavailable` if the cipher cannot be
    /// constructed in this environment.
    pub fn with_codec(passphrase: &str, codec: C) -> Result<Self> {
        let key = derive_key(passphrase.as_bytes());
        let aad = AadBlob::new(passphrase.as_bytes().to_vec());
        // Probe cipher construction now so a broken environment fails here,
        // not on the first encrypt.
        build_cipher(key.expose_secret())?;
        Ok(Self { key, aad, codec })
    }

    /// The AEAD algorithm this engine seals with
    pub fn algorithm(&self) -> EncryptionAlgorithm {
        EncryptionAlgorithm::Aes128Gcm
    }

    /// Encrypt a value into a self-contained base64 string.
    ///
    /// Fails only if the codec cannot serialize the value or the cipher is
    /// unavailable. Two calls with the same value never produce the same
    /// output: each draws a fresh random nonce.
    pub fn encrypt(&self, value: &C::Value) -> Result<String> {
        let plain = PlainBytes::new(self.codec.to_bytes(value)?);
        let nonce = fresh_nonce();
        let sealed = seal(
            self.key.expose_secret(),
            &nonce,
            self.aad.expose_secret(),
            plain.expose_secret(),
        )?;
        trace!(plaintext_len = plain.expose_secret().len(), "sealed payload");
        Ok(encode(&frame(&nonce, &sealed)))
    }

    /// Decrypt a string previously produced by [`Self::encrypt`].
    ///
    /// Fails with `Format` on malformed base64 or truncated framing,
    /// `Authentication` on tag mismatch (wrong passphrase and tampered data
    /// are indistinguishable on purpose), and `Serialization` if the
    /// recovered bytes do not parse as the payload type.
    pub fn decrypt(&self, text: &str) -> Result<C::Value> {
        let blob = decode(text)?;
        let (nonce, sealed) = unframe(&blob)?;
        let plain = PlainBytes::new(open(
            self.key.expose_secret(),
            &nonce,
            self.aad.expose_secret(),
            sealed,
        )?);
        debug!(ciphertext_len = sealed.len(), "opened payload");
        self.codec.from_bytes(plain.expose_secret())
    }
}
