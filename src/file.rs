use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::compression::{self, CompressionType};
use crate::error::Error;

/// An index file opened for sequential reading, files with
/// a `.gz` extension are decompressed on the fly.
pub struct IndexFile {
    inner: Inner,
}

enum Inner {
    Raw(BufReader<File>),
    #[cfg(feature = "gzip")]
    Gzip(BufReader<flate2::bufread::MultiGzDecoder<BufReader<File>>>),
}

impl IndexFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<IndexFile, Error> {
        let path = path.as_ref();
        let open_error = |source: io::Error| Error::Open { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(open_error)?;
        let metadata = file.metadata().map_err(open_error)?;
        if !metadata.is_file() {
            let error = io::Error::new(io::ErrorKind::Other, "not a regular file");
            return Err(open_error(error));
        }

        let file = BufReader::new(file);
        let compression = CompressionType::from_path(path);
        debug!("opened {} ({} bytes, {:?})", path.display(), metadata.len(), compression);

        let inner = match compression {
            CompressionType::None => Inner::Raw(file),
            CompressionType::Gzip => gzip(file).map_err(open_error)?,
        };

        Ok(IndexFile { inner })
    }

    pub fn compression_type(&self) -> CompressionType {
        match self.inner {
            Inner::Raw(_) => CompressionType::None,
            #[cfg(feature = "gzip")]
            Inner::Gzip(_) => CompressionType::Gzip,
        }
    }
}

#[cfg(feature = "gzip")]
fn gzip(file: BufReader<File>) -> io::Result<Inner> {
    let decoder = compression::gzip_decoder(file)?;
    Ok(Inner::Gzip(BufReader::new(decoder)))
}

#[cfg(not(feature = "gzip"))]
fn gzip(file: BufReader<File>) -> io::Result<Inner> {
    compression::gzip_decoder(file).map(Inner::Raw)
}

impl Read for IndexFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            Inner::Raw(reader) => reader.read(buf),
            #[cfg(feature = "gzip")]
            Inner::Gzip(reader) => reader.read(buf),
        }
    }
}

impl BufRead for IndexFile {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match &mut self.inner {
            Inner::Raw(reader) => reader.fill_buf(),
            #[cfg(feature = "gzip")]
            Inner::Gzip(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match &mut self.inner {
            Inner::Raw(reader) => reader.consume(amt),
            #[cfg(feature = "gzip")]
            Inner::Gzip(reader) => reader.consume(amt),
        }
    }
}
