use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::IoError;
use crate::pattern::PatternSet;

/// Counts the lines of `path` that match none of the skip patterns.
///
/// Lines end at `\n`; a trailing line without a newline still counts. The
/// line text is matched as-is, so a `\r` before the newline stays part of it.
/// Invalid UTF-8 is replaced lossily before matching.
pub fn count_lines(path: &Path, skip: &PatternSet) -> Result<u64, IoError> {
    let file = File::open(path).map_err(|e| IoError::open_error(path, e))?;
    count_reader(BufReader::new(file), skip).map_err(|e| IoError::read_error(path, e))
}

pub fn count_reader<R: BufRead>(mut reader: R, skip: &PatternSet) -> std::io::Result<u64> {
    let mut buf = Vec::new();
    let mut total = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }

        let line = String::from_utf8_lossy(&buf);
        if !skip.matches_any(&line) {
            total += 1;
        }
    }

    Ok(total)
}
