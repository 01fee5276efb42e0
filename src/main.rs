//! Prints the records of a StarDict `.idx` (or `.idx.gz`) file, one
//! `key | offset | size` line each. The index is read with 32-bit offsets
//! in little-endian order; an index written big-endian still decodes, with
//! byte swapped numbers.

use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::{env, process};

use log::error;
use stardict_idx::{dump, Error, Reader};

fn run(path: OsString) -> Result<u64, Error> {
    let reader = Reader::open(path)?;
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    dump(reader, out)
}

fn main() {
    if let Err(e) = stderrlog::new().verbosity(1).init() {
        eprintln!("cannot initialize logging: {}", e);
    }

    let mut args = env::args_os().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            let program = env::args_os().next().unwrap_or_else(|| "stardict-idx".into());
            eprintln!("Usage: {} <path-to-idx-file>", program.to_string_lossy());
            process::exit(1);
        },
    };

    if let Err(e) = run(path) {
        error!("{}", e);
        process::exit(1);
    }
}
