//! Provides byte-level sinks and sources for the bridge wire format.
//!
//! Values crossing the message bridge are encoded into a flat byte
//! buffer. Fixed-width payloads inside that buffer are aligned to
//! their natural size, relative to the start of the buffer, so that
//! a reader with an aligned base address could map them in place.
//!
//! [`ByteWriter`] appends to a growable buffer, [`ByteReader`]
//! consumes a borrowed byte slice. All multi-byte quantities are
//! stored in little-endian byte order.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod reader;
pub use reader::{ByteReader, UnexpectedEof};

mod writer;
pub use writer::ByteWriter;

pub mod align;
