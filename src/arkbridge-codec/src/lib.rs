//! Implements the binary value codec of the cross-language message bridge.
//!
//! Bridges created in binary mode exchange dynamically-typed [`Value`]s
//! between JavaScript and native code. Each value is encoded as a one
//! byte opcode followed by a type-specific payload, with fixed-width
//! payloads aligned relative to the start of the message buffer.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

#[cfg(feature = "json")]
pub mod json;

pub mod serde;

pub mod value;
pub use value::Value;

/// Encodes `value` into a new buffer with the default options.
pub fn to_vec(value: &Value) -> Result<Vec<u8>, serde::Error> {
    serde::Serializer::default().serialize(value)
}

/// Decodes a single [`Value`] from `data` with the default options.
///
/// The entire input must be consumed by the value.
pub fn from_slice(data: &[u8]) -> Result<Value, serde::Error> {
    serde::Serializer::default().deserialize(data)
}
