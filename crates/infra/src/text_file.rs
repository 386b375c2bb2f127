//! Line-oriented text file reading shared by the file-backed stores.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pizzashop_core::DomainResult;

/// Read `path` line by line, parsing each line with `parse`.
///
/// Only failing to open the file is returned as an error. Bytes that are not
/// valid UTF-8 are replaced, so such a line simply fails to parse. A line that
/// fails to parse is logged and skipped; a read error stops the scan and the
/// records parsed so far are returned.
pub(crate) fn read_records<T, F>(path: &Path, parse: F) -> std::io::Result<Vec<T>>
where
    F: Fn(&str) -> DomainResult<Option<T>>,
{
    let mut reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_no += 1,
            Err(err) => {
                tracing::error!(
                    path = %path.display(),
                    line_no = line_no + 1,
                    error = %err,
                    "read failed; keeping records read so far"
                );
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        match parse(line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    line_no,
                    error = %err,
                    "skipping malformed line"
                );
            }
        }
    }

    Ok(records)
}
