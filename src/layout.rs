use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order of the offset and size fields.
///
/// Nothing in the framing tells one order from the other, an index read
/// with the wrong one decodes without error but with byte swapped numbers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn read_u32(self, buf: &[u8]) -> u32 {
        match self {
            Endianness::Little => LittleEndian::read_u32(buf),
            Endianness::Big => BigEndian::read_u32(buf),
        }
    }

    pub fn read_u64(self, buf: &[u8]) -> u64 {
        match self {
            Endianness::Little => LittleEndian::read_u64(buf),
            Endianness::Big => BigEndian::read_u64(buf),
        }
    }
}

impl Default for Endianness {
    fn default() -> Endianness {
        Endianness::Little
    }
}

/// Width of the offset field, StarDict 3.0.0 indexes declaring
/// `idxoffsetbits=64` in their `.ifo` use 64-bit offsets.
/// The size field is always 32 bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum OffsetBits {
    Bits32 = 32,
    Bits64 = 64,
}

impl OffsetBits {
    pub fn from_u32(value: u32) -> Option<OffsetBits> {
        match value {
            32 => Some(OffsetBits::Bits32),
            64 => Some(OffsetBits::Bits64),
            _ => None,
        }
    }

    /// Number of bytes following the key terminator.
    pub fn tail_size(self) -> usize {
        match self {
            OffsetBits::Bits32 => 4 + 4,
            OffsetBits::Bits64 => 8 + 4,
        }
    }
}

impl Default for OffsetBits {
    fn default() -> OffsetBits {
        OffsetBits::Bits32
    }
}
