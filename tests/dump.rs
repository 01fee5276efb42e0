use std::io::Write;
use std::process::Command;

use byteorder::{LittleEndian, WriteBytesExt};
use stardict_idx::{dump, Error, IdxError, Reader};
use tempfile::NamedTempFile;

const HEAD: &[(&str, u32, u32)] = &[
    ("a", 0, 2214592512),
    ("A and B agglutinogens", 2214592512, 402653184),
    ("A AND NOT B gate", 2617245696, 318767104),
    ("A as well as B", 2936012800, 469762048),
];

const HEAD_DUMP: &str = "\
a | 0 | 2214592512
A and B agglutinogens | 2214592512 | 402653184
A AND NOT B gate | 2617245696 | 318767104
A as well as B | 2936012800 | 469762048
";

fn encode(records: &[(&str, u32, u32)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for (key, offset, size) in records {
        bytes.extend_from_slice(key.as_bytes());
        bytes.push(0);
        bytes.write_u32::<LittleEndian>(*offset).unwrap();
        bytes.write_u32::<LittleEndian>(*size).unwrap();
    }
    bytes
}

fn index_file(bytes: &[u8]) -> NamedTempFile {
    index_file_with_suffix(bytes, ".idx")
}

fn index_file_with_suffix(bytes: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn dump_file() {
    let file = index_file(&encode(HEAD));
    let mut out = Vec::new();
    let count = dump(Reader::open(file.path()).unwrap(), &mut out).unwrap();
    assert_eq!(count, 4);
    assert_eq!(String::from_utf8(out).unwrap(), HEAD_DUMP);
}

#[cfg(feature = "gzip")]
#[test]
fn dump_gzip_file() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&encode(HEAD)).unwrap();
    let file = index_file_with_suffix(&encoder.finish().unwrap(), ".idx.gz");

    let mut out = Vec::new();
    dump(Reader::open(file.path()).unwrap(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), HEAD_DUMP);
}

#[test]
fn raw_key_with_gzip_magic() {
    let mut bytes = b"\x1f\x8bkey\0".to_vec();
    bytes.write_u32::<LittleEndian>(1).unwrap();
    bytes.write_u32::<LittleEndian>(2).unwrap();
    bytes.extend_from_slice(&encode(HEAD));
    let file = index_file(&bytes);

    let records: Vec<_> = Reader::open(file.path()).unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(records.len(), HEAD.len() + 1);
    assert_eq!(records[0].key, b"\x1f\x8bkey");
    assert_eq!((records[0].offset, records[0].size), (1, 2));
}

#[test]
fn trailing_garbage() {
    let mut bytes = encode(HEAD);
    bytes.extend_from_slice(b"a back number\0\x00\x00");
    let file = index_file(&bytes);

    let mut reader = Reader::open(file.path()).unwrap();
    for _ in 0..HEAD.len() {
        assert!(reader.next().unwrap().is_ok());
    }
    match reader.next() {
        Some(Err(Error::Idx(IdxError::TruncatedRecord { key_len: 13, missing: 6 }))) => (),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn command_line() {
    let bin = env!("CARGO_BIN_EXE_stardict-idx");

    let file = index_file(&encode(HEAD));
    let output = Command::new(bin).arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), HEAD_DUMP);

    let empty = index_file(&[]);
    let output = Command::new(bin).arg(empty.path()).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(bin).arg(dir.path().join("missing.idx")).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());

    let mut bytes = encode(HEAD);
    bytes.extend_from_slice(&[b'k'; 300]);
    let file = index_file(&bytes);
    let output = Command::new(bin).arg(file.path()).output().unwrap();
    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), HEAD_DUMP);

    let output = Command::new(bin).output().unwrap();
    assert!(!output.status.success());
}
