// src/codec.rs
//! Serialization adapter boundary
//!
//! The engine treats payload serialization as an opaque collaborator: a
//! [`PayloadCodec`] turns a value into bytes and back, and the engine never
//! inspects those bytes beyond sealing them. [`JsonCodec`] is the default;
//! [`RawBytes`] passes `Vec<u8>` payloads through untouched.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// Turns values into bytes and back — supplied by the calling application
pub trait PayloadCodec {
    type Value;

    fn to_bytes(&self, value: &Self::Value) -> Result<Vec<u8>>;
    fn from_bytes(&self, bytes: &[u8]) -> Result<Self::Value>;
}

/// JSON codec for any serde-serializable type
pub struct JsonCodec<T>(PhantomData<T>);

impl<T> JsonCodec<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

// Manual impls: derives would put bounds on T that PhantomData does not need
impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for JsonCodec<T> {}

impl<T: Serialize + DeserializeOwned> PayloadCodec for JsonCodec<T> {
    type Value = T;

    fn to_bytes(&self, value: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(value)?)
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Identity codec for callers that already hold raw bytes
#[derive(Debug, Default, Clone, Copy)]
pub struct RawBytes;

impl PayloadCodec for RawBytes {
    type Value = Vec<u8>;

    fn to_bytes(&self, value: &Vec<u8>) -> Result<Vec<u8>> {
        Ok(value.clone())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}
