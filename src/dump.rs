use std::io::{BufRead, Write};

use crate::error::Error;
use crate::reader::Reader;

/// Writes every record as a `key | offset | size` line, stopping at the first error.
///
/// Lines already written when an error is hit are left in place.
/// Returns the number of records written.
///
/// The numbers are printed as the reader decoded them: an index written in
/// the other byte order than the one the reader was built with can't be told
/// apart and shows byte swapped offsets and sizes, see `ReaderBuilder::endianness`.
pub fn dump<R: BufRead, W: Write>(reader: Reader<R>, mut out: W) -> Result<u64, Error> {
    let mut count = 0;
    for record in reader {
        let record = record?;
        writeln!(out, "{}", record)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}
