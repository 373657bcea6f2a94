use byteorder::{ByteOrder, LE};
use thiserror::Error;

use crate::align;

/// Error for reads which extend past the end of the input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("reached premature EOF at offset {position}: needed {needed} bytes, {remaining} remaining")]
pub struct UnexpectedEof {
    /// The cursor position at which the read was attempted.
    pub position: usize,
    /// The number of bytes the read required.
    pub needed: usize,
    /// The number of bytes that were still available.
    pub remaining: usize,
}

macro_rules! read_impl {
    ($($fn:ident() -> $ty:ty),* $(,)*) => {
        $(
            #[doc = concat!("Reads a little-endian [`", stringify!($ty), "`] value.")]
            ///
            /// In lenient mode, a value past the end of input reads as zero.
            #[inline]
            pub fn $fn(&mut self) -> Result<$ty, UnexpectedEof> {
                let mut v = [0; std::mem::size_of::<$ty>()];
                self.read_into(&mut v)?;
                Ok(<$ty>::from_le_bytes(v))
            }
        )*
    };
}

macro_rules! read_slice_impl {
    ($($fn:ident($ty:ty) => $from:ident),* $(,)*) => {
        $(
            #[doc = concat!("Fills `out` from a packed block of [`", stringify!($ty), "`] values.")]
            ///
            /// In lenient mode, `out` is left untouched when the block
            /// extends past the end of input.
            pub fn $fn(&mut self, out: &mut [$ty]) -> Result<(), UnexpectedEof> {
                if let Some(src) = self.take(out.len() * std::mem::size_of::<$ty>())? {
                    LE::$from(src, out);
                }

                Ok(())
            }
        )*
    };
}

/// A cursor which consumes values from a borrowed byte slice.
///
/// In its default strict mode, every read past the end of the input
/// fails with [`UnexpectedEof`] and leaves the cursor where it was.
///
/// A lenient reader instead mirrors the legacy bridge behavior: bytes
/// past the end read as zero, blocks past the end are skipped without
/// touching the destination, and the condition is only logged. Its
/// reads never fail.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    lenient: bool,
}

impl<'a> ByteReader<'a> {
    /// Creates a new strict [`ByteReader`] over a given byte slice.
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            lenient: false,
        }
    }

    /// Creates a new lenient [`ByteReader`] over a given byte slice.
    pub const fn lenient(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            lenient: true,
        }
    }

    /// Whether this reader degrades instead of failing on underruns.
    #[inline]
    pub fn is_lenient(&self) -> bool {
        self.lenient
    }

    /// Gets the current cursor position from the start of the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Gets the number of bytes that were not consumed yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether all input was consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Checks that at least `nbytes` bytes are available for reading.
    ///
    /// Lenient readers always succeed.
    #[inline]
    pub fn ensure(&self, nbytes: usize) -> Result<(), UnexpectedEof> {
        if self.lenient || nbytes <= self.remaining() {
            Ok(())
        } else {
            Err(self.underrun(nbytes))
        }
    }

    #[cold]
    fn underrun(&self, needed: usize) -> UnexpectedEof {
        UnexpectedEof {
            position: self.pos,
            needed,
            remaining: self.remaining(),
        }
    }

    // Consumes `nbytes` bytes from the input. Lenient readers get `None`
    // back when not enough input is left, without moving the cursor.
    fn take(&mut self, nbytes: usize) -> Result<Option<&'a [u8]>, UnexpectedEof> {
        match self.data[self.pos..].get(..nbytes) {
            Some(buf) => {
                self.pos += nbytes;
                Ok(Some(buf))
            }

            None if self.lenient => {
                log::error!("{}", self.underrun(nbytes));
                Ok(None)
            }

            None => Err(self.underrun(nbytes)),
        }
    }

    /// Reads a single byte.
    ///
    /// In lenient mode, reading past the end yields `0`.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, UnexpectedEof> {
        Ok(self.take(1)?.map_or(0, |b| b[0]))
    }

    /// Copies `out.len()` bytes from the input into `out`.
    ///
    /// In lenient mode, `out` is left untouched when not enough input
    /// is left.
    pub fn read_into(&mut self, out: &mut [u8]) -> Result<(), UnexpectedEof> {
        if let Some(src) = self.take(out.len())? {
            out.copy_from_slice(src);
        }

        Ok(())
    }

    read_impl! {
        read_u16() -> u16,
        read_u32() -> u32,
        read_i32() -> i32,
        read_i64() -> i64,
        read_f64() -> f64,
    }

    read_slice_impl! {
        read_i32_into(i32) => read_i32_into,
        read_i64_into(i64) => read_i64_into,
        read_f64_into(f64) => read_f64_into,
    }

    /// Skips padding bytes until the cursor is a multiple of `align`.
    ///
    /// The skipped bytes are not validated. Lenient readers clamp the
    /// cursor to the end of input if the padding exceeds it.
    pub fn skip_alignment(&mut self, align: usize) -> Result<(), UnexpectedEof> {
        let pad = align::padding_for(self.pos, align);
        if pad <= self.remaining() {
            self.pos += pad;
            Ok(())
        } else if self.lenient {
            log::error!("{}", self.underrun(pad));
            self.pos = self.data.len();
            Ok(())
        } else {
            Err(self.underrun(pad))
        }
    }
}
