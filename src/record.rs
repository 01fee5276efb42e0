use std::fmt;

/// One entry of an index file: a key and the location of its
/// blob inside the companion data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub key: Vec<u8>,
    pub offset: u64,
    pub size: u32,
}

impl IndexRecord {
    pub fn new<K: Into<Vec<u8>>>(key: K, offset: u64, size: u32) -> IndexRecord {
        IndexRecord { key: key.into(), offset, size }
    }
}

/// Renders the record as `key | offset | size`, keys that
/// are not valid UTF-8 are shown lossily.
impl fmt::Display for IndexRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = String::from_utf8_lossy(&self.key);
        write!(f, "{} | {} | {}", key, self.offset, self.size)
    }
}
