use std::io::{self, BufRead};
use std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CompressionType {
    None,
    Gzip,
}

impl CompressionType {
    /// StarDict ships compressed indexes as `.idx.gz`, the content of a raw
    /// index can start with any byte so the extension is all there is to go on.
    pub fn from_path(path: &Path) -> CompressionType {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => CompressionType::Gzip,
            _ => CompressionType::None,
        }
    }
}

#[cfg(feature = "gzip")]
pub fn gzip_decoder<R: BufRead>(reader: R) -> io::Result<flate2::bufread::MultiGzDecoder<R>> {
    Ok(flate2::bufread::MultiGzDecoder::new(reader))
}

#[cfg(not(feature = "gzip"))]
pub fn gzip_decoder<R: BufRead>(_reader: R) -> io::Result<R> {
    Err(io::Error::new(io::ErrorKind::Other, "unsupported gzip decompression"))
}
