use std::io::{self, BufRead, Read};
use std::mem;
use std::path::Path;

use log::{debug, trace};

use crate::error::{Error, IdxError};
use crate::file::IndexFile;
use crate::layout::{Endianness, OffsetBits};
use crate::record::IndexRecord;
use crate::MAX_KEY_LEN;

const MAX_TAIL_SIZE: usize = 12;

#[derive(Debug, Clone, Copy)]
pub struct ReaderBuilder {
    max_key_len: usize,
    endianness: Endianness,
    offset_bits: OffsetBits,
}

impl ReaderBuilder {
    pub fn new() -> ReaderBuilder {
        ReaderBuilder {
            max_key_len: MAX_KEY_LEN,
            endianness: Endianness::default(),
            offset_bits: OffsetBits::default(),
        }
    }

    /// Reads the numbers in the given byte order, for indexes
    /// written on a host of the other endianness.
    pub fn endianness(&mut self, endianness: Endianness) -> &mut Self {
        self.endianness = endianness;
        self
    }

    pub fn offset_bits(&mut self, bits: OffsetBits) -> &mut Self {
        self.offset_bits = bits;
        self
    }

    /// The longest key, terminator excluded, accepted before failing
    /// with `IdxError::KeyTooLong`.
    pub fn max_key_len(&mut self, len: usize) -> &mut Self {
        self.max_key_len = len;
        self
    }

    pub fn read<R: BufRead>(&self, reader: R) -> Reader<R> {
        Reader {
            reader,
            max_key_len: self.max_key_len,
            endianness: self.endianness,
            offset_bits: self.offset_bits,
            key: Vec::new(),
            count: 0,
            done: false,
        }
    }

    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<Reader<IndexFile>, Error> {
        IndexFile::open(path).map(|file| self.read(file))
    }
}

impl Default for ReaderBuilder {
    fn default() -> ReaderBuilder {
        ReaderBuilder::new()
    }
}

/// Decodes the records of an index stream one at a time, in stream order.
///
/// Iteration stops at the first error, the framing of the rest of the
/// stream can't be trusted anymore.
pub struct Reader<R> {
    reader: R,
    max_key_len: usize,
    endianness: Endianness,
    offset_bits: OffsetBits,
    key: Vec<u8>,
    count: u64,
    done: bool,
}

impl<R> Reader<R> {
    /// The number of records decoded so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl Reader<IndexFile> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Reader<IndexFile>, Error> {
        ReaderBuilder::new().open(path)
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Reader<R> {
        ReaderBuilder::new().read(reader)
    }

    pub fn next_record(&mut self) -> Result<Option<IndexRecord>, Error> {
        self.key.clear();

        // One byte over the bound is enough to tell a key that is too long
        // from a key of exactly max_key_len bytes followed by its NUL.
        let limit = (self.max_key_len as u64).saturating_add(1);
        let read = (&mut self.reader).take(limit).read_until(0, &mut self.key)?;
        if read == 0 {
            debug!("end of index after {} records", self.count);
            return Ok(None);
        }

        if self.key.last() == Some(&0) {
            self.key.pop();
        } else if read as u64 == limit {
            return Err(Error::from(IdxError::KeyTooLong { max: self.max_key_len }));
        } else {
            let key_len = self.key.len();
            let missing = self.offset_bits.tail_size();
            return Err(Error::from(IdxError::TruncatedRecord { key_len, missing }));
        }

        let mut buf = [0u8; MAX_TAIL_SIZE];
        let tail = &mut buf[..self.offset_bits.tail_size()];
        let filled = read_fully(&mut self.reader, tail)?;
        if filled < tail.len() {
            let key_len = self.key.len();
            let missing = tail.len() - filled;
            return Err(Error::from(IdxError::TruncatedRecord { key_len, missing }));
        }

        let (offset, size) = tail.split_at(tail.len() - 4);
        let offset = match self.offset_bits {
            OffsetBits::Bits32 => u64::from(self.endianness.read_u32(offset)),
            OffsetBits::Bits64 => self.endianness.read_u64(offset),
        };
        let size = self.endianness.read_u32(size);
        let key = mem::take(&mut self.key);
        self.count += 1;

        let record = IndexRecord { key, offset, size };
        trace!("record {}: {}", self.count, record);

        Ok(Some(record))
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<IndexRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.next_record().transpose();
        if !matches!(result, Some(Ok(_))) {
            self.done = true;
        }
        result
    }
}

/// Like `read_exact` but reports how many bytes were read before the end of stream.
fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => (),
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
