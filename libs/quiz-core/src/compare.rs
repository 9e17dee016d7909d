//! Line-by-line comparison of quiz bank files.
//!
//! Used to tell whether a freshly fetched bank differs from the local copy.
//! Lines are compared as raw bytes so legacy encodings need no decoding.
//! LF and CRLF endings compare equal.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// First 1-based line at which the two sources differ, or `None` if equal.
///
/// A source that ends early differs at the first line it is missing.
pub fn first_difference<A: BufRead, B: BufRead>(a: A, b: B) -> io::Result<Option<usize>> {
    let mut left = a.split(b'\n');
    let mut right = b.split(b'\n');
    let mut line = 1;

    loop {
        match (left.next().transpose()?, right.next().transpose()?) {
            (None, None) => return Ok(None),
            (Some(l), Some(r)) if trim_cr(&l) == trim_cr(&r) => line += 1,
            _ => return Ok(Some(line)),
        }
    }
}

/// Line content without the `\r` of a CRLF ending.
fn trim_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Compare two files on disk.
pub fn first_difference_files(
    a: impl AsRef<Path>,
    b: impl AsRef<Path>,
) -> io::Result<Option<usize>> {
    let a = BufReader::new(File::open(a)?);
    let b = BufReader::new(File::open(b)?);
    first_difference(a, b)
}
