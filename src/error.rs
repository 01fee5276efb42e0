use std::path::PathBuf;
use std::{fmt, io, error};

#[derive(Debug)]
pub enum Error {
    Open { path: PathBuf, source: io::Error },
    Idx(IdxError),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open { path, source } => write!(f, "cannot open {}: {}", path.display(), source),
            Error::Idx(idx) => write!(f, "{}", idx),
            Error::Io(io) => write!(f, "{}", io),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Open { source, .. } => Some(source),
            Error::Idx(idx) => Some(idx),
            Error::Io(io) => Some(io),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<IdxError> for Error {
    fn from(err: IdxError) -> Error {
        Error::Idx(err)
    }
}

/// Framing violations found while decoding an index stream.
///
/// The format has no resynchronization marker, so any of these
/// invalidates everything after the point where it was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdxError {
    /// The stream ended inside a record. `missing` counts the bytes absent
    /// from the offset/size pair, all of them when the key was never terminated.
    TruncatedRecord { key_len: usize, missing: usize },
    /// A key grew past `max` bytes without meeting its terminator.
    KeyTooLong { max: usize },
}

impl fmt::Display for IdxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IdxError::TruncatedRecord { key_len, missing } => write!(
                f,
                "truncated record: key of {} bytes is missing {} trailing bytes",
                key_len, missing,
            ),
            IdxError::KeyTooLong { max } => write!(f, "key longer than {} bytes", max),
        }
    }
}

impl error::Error for IdxError { }
