//! Reader for StarDict style `.idx` files: a headerless run of records, each
//! made of a NUL terminated key followed by an offset and a 32-bit size
//! pointing into the companion `.dict` file.
//!
//! ```text
//! Record := Key NUL Offset(u32 or u64) Size(u32)
//! ```
//!
//! Offsets are 32 bits and both numbers little-endian unless the
//! `ReaderBuilder` says otherwise.

#[cfg(test)]
#[macro_use] extern crate quickcheck;

/// The longest key accepted by default, terminator excluded.
pub const MAX_KEY_LEN: usize = 255;

pub use error::{Error, IdxError};
pub use compression::CompressionType;
pub use self::dump::dump;
pub use self::file::IndexFile;
pub use self::layout::{Endianness, OffsetBits};
pub use self::reader::{Reader, ReaderBuilder};
pub use self::record::IndexRecord;

mod compression;
mod dump;
mod error;
mod file;
mod layout;
mod reader;
mod record;
