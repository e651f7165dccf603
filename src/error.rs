// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("cryptographic algorithm unavailable: {0}")]
    AlgorithmUnavailable(&'static str),

    #[error("malformed input: {0}")]
    Format(String),

    #[error("authentication failed: wrong passphrase or tampered ciphertext")]
    Authentication,

    #[error("payload serialization failed: {0}")]
    Serialization(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EngineError {
    /// Wrap a foreign codec error into the `Serialization` variant
    pub fn serialization<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        EngineError::Serialization(Box::new(err))
    }
}

impl From<base64::DecodeError> for EngineError {
    fn from(err: base64::DecodeError) -> Self {
        EngineError::Format(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
