//! The variable-width length prefix used before strings and collections.
//!
//! Lengths below [`U16_MARKER`] are a single byte. Larger lengths are
//! a marker byte followed by a 16-bit or 32-bit little-endian value.

use arkbridge_buf::{ByteReader, ByteWriter};

use super::Error;

/// Marker byte for a length stored as [`u16`].
pub const U16_MARKER: u8 = 0xFE;

/// Marker byte for a length stored as [`u32`].
pub const U32_MARKER: u8 = 0xFF;

/// Gets the number of bytes `size` occupies when encoded.
#[inline]
pub const fn encoded_len(size: usize) -> usize {
    if size < U16_MARKER as usize {
        1
    } else if size <= u16::MAX as usize {
        3
    } else {
        5
    }
}

/// Writes a length prefix.
///
/// Fails for lengths that do not fit into 32 bits.
pub fn write_size(writer: &mut ByteWriter, size: usize) -> Result<(), Error> {
    if size < U16_MARKER as usize {
        writer.write_u8(size as u8);
    } else if let Ok(v) = u16::try_from(size) {
        writer.write_u8(U16_MARKER);
        writer.write_u16(v);
    } else {
        let v = u32::try_from(size).map_err(|_| Error::SizeOverflow(size))?;
        writer.write_u8(U32_MARKER);
        writer.write_u32(v);
    }

    Ok(())
}

/// Reads a length prefix.
pub fn read_size(reader: &mut ByteReader<'_>) -> Result<usize, Error> {
    let size = match reader.read_u8()? {
        U16_MARKER => reader.read_u16()? as usize,
        U32_MARKER => reader.read_u32()? as usize,
        v => v as usize,
    };

    Ok(size)
}
