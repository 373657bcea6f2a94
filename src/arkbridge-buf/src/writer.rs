use byteorder::{ByteOrder, LE};

use crate::align;

macro_rules! write_impl {
    ($($fn:ident($ty:ty)),* $(,)*) => {
        $(
            #[doc = concat!("Writes a [`", stringify!($ty), "`] value in little-endian byte order.")]
            #[inline]
            pub fn $fn(&mut self, v: $ty) {
                self.inner.extend_from_slice(&v.to_le_bytes());
            }
        )*
    };
}

macro_rules! write_slice_impl {
    ($($fn:ident($ty:ty) => $into:ident),* $(,)*) => {
        $(
            #[doc = concat!("Writes a packed block of [`", stringify!($ty), "`] values.")]
            ///
            /// No length prefix or alignment is emitted; callers are
            /// responsible for framing the block.
            pub fn $fn(&mut self, values: &[$ty]) {
                if values.is_empty() {
                    log::warn!("Requested write of an empty element block");
                    return;
                }

                let start = self.inner.len();
                self.inner.resize(start + values.len() * std::mem::size_of::<$ty>(), 0);
                LE::$into(values, &mut self.inner[start..]);
            }
        )*
    };
}

/// A growable byte buffer which values are serialized into.
///
/// Alignment requests made through [`ByteWriter::write_alignment`]
/// are relative to the start of the underlying vector.
#[derive(Clone, Debug, Default)]
pub struct ByteWriter {
    inner: Vec<u8>,
}

impl ByteWriter {
    /// Creates an empty [`ByteWriter`].
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Creates an empty [`ByteWriter`] with at least `capacity` bytes
    /// of pre-allocated storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Creates a [`ByteWriter`] which appends to a given output vector.
    ///
    /// This is useful if you want to reuse existing buffer allocations.
    /// Existing contents are kept and count towards alignment.
    pub const fn from_vec(vec: Vec<u8>) -> Self {
        Self { inner: vec }
    }

    /// Gets the number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether nothing was written to the buffer yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Gets a view of the buffer's storage as a byte slice.
    #[inline]
    pub fn view(&self) -> &[u8] {
        &self.inner
    }

    /// Consumes the [`ByteWriter`] and returns the byte buffer.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Reserves capacity for at least `nbytes` more bytes in the
    /// output buffer.
    #[inline]
    pub fn reserve(&mut self, nbytes: usize) {
        self.inner.reserve(nbytes);
    }

    /// Writes a single byte to the buffer.
    #[inline]
    pub fn write_u8(&mut self, v: u8) {
        self.inner.push(v);
    }

    /// Writes whole bytes from `buf` to the output vector.
    ///
    /// Writing an empty slice does nothing and emits a warning.
    pub fn write_bytes(&mut self, buf: &[u8]) {
        if buf.is_empty() {
            log::warn!("Requested write of zero bytes");
            return;
        }

        self.inner.extend_from_slice(buf);
    }

    write_impl! {
        write_u16(u16),
        write_u32(u32),
        write_i32(i32),
        write_i64(i64),
        write_f64(f64),
    }

    write_slice_impl! {
        write_i32_slice(i32) => write_i32_into,
        write_i64_slice(i64) => write_i64_into,
        write_f64_slice(f64) => write_f64_into,
    }

    /// Pads the buffer with zero bytes until its length is a multiple
    /// of `align`.
    ///
    /// `align` must be a power of two.
    pub fn write_alignment(&mut self, align: usize) {
        let pad = align::padding_for(self.inner.len(), align);
        if pad != 0 {
            self.inner.resize(self.inner.len() + pad, 0);
        }
    }
}
