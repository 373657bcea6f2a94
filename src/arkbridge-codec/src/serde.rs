//! Serialization support for bridge values.

use arkbridge_buf::{ByteReader, ByteWriter, UnexpectedEof};
use thiserror::Error;

use crate::Value;

mod de;

mod opcode;
pub use opcode::*;

mod ser;

pub mod size;

/// Errors that may occur during the (de)serialization process.
#[derive(Debug, Error)]
pub enum Error {
    /// The input ended before a value was fully read.
    #[error("{0}")]
    Eof(#[from] UnexpectedEof),

    /// Encountered a byte which does not identify any value type.
    #[error("unknown value opcode '{0:#04x}'")]
    UnknownOpcode(u8),

    /// Failed to decode an UTF-8 string where one was expected.
    #[error("{0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Configured recursion limit was exceeded during the process.
    #[error("recursion limit exceeded")]
    Recursion,

    /// A string or collection is too long for its length prefix.
    #[error("length {0} exceeds the maximum encodable size")]
    SizeOverflow(usize),

    /// Input data was left over after the value was read.
    #[error("{0} trailing bytes after the value")]
    TrailingData(usize),
}

/// Serializer configuration which influences how data is interpreted.
#[derive(Clone, Copy, Debug)]
pub struct SerializerOptions {
    /// Degrades malformed input to default values instead of failing.
    ///
    /// This reproduces the legacy bridge behavior: truncated input reads
    /// as zeros, unknown opcodes read as [`Value::Null`], and invalid
    /// UTF-8 is replaced lossily. Every such event is logged.
    ///
    /// Ignored during serialization.
    pub lenient: bool,
    /// A recursion limit for nested maps and lists to avoid stack
    /// overflows during deserialization.
    ///
    /// Ignored during serialization.
    pub recursion_limit: u8,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            lenient: false,
            recursion_limit: 128,
        }
    }
}

/// A serializer and deserializer for bridge [`Value`]s.
///
/// The serializer holds no state besides its configuration, so one
/// instance can be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct Serializer {
    /// The serializer configuration in use.
    pub options: SerializerOptions,
}

impl Serializer {
    /// Creates a new serializer with its configuration.
    pub const fn new(options: SerializerOptions) -> Self {
        Self { options }
    }

    /// Serializes `value` into a new byte buffer.
    pub fn serialize(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let mut writer = ByteWriter::new();
        self.serialize_into(value, &mut writer)?;

        Ok(writer.into_inner())
    }

    /// Serializes `value` into an existing [`ByteWriter`].
    ///
    /// Alignment padding is computed relative to the start of the
    /// writer's buffer.
    pub fn serialize_into(&self, value: &Value, writer: &mut ByteWriter) -> Result<(), Error> {
        ser::serialize(writer, value)
    }

    /// Deserializes a [`Value`] from the given data.
    ///
    /// The value must span the entire input.
    pub fn deserialize(&self, data: &[u8]) -> Result<Value, Error> {
        let mut reader = if self.options.lenient {
            ByteReader::lenient(data)
        } else {
            ByteReader::new(data)
        };
        log::debug!("Deserializing value with config {:?}", self.options);

        let value = self.deserialize_from(&mut reader)?;

        let rest = reader.remaining();
        if rest != 0 {
            if !self.options.lenient {
                return Err(Error::TrailingData(rest));
            }
            log::warn!("Ignoring {rest} trailing bytes after value");
        }

        Ok(value)
    }

    /// Deserializes the next [`Value`] from a [`ByteReader`].
    ///
    /// Underrun handling follows the reader's own mode; the remaining
    /// leniency rules follow [`SerializerOptions::lenient`].
    pub fn deserialize_from(&self, reader: &mut ByteReader<'_>) -> Result<Value, Error> {
        de::Decoder::new(&self.options).value(reader)
    }
}
