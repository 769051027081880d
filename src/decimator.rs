//! Line decimation for maze files
//!
//! Each line loses its final character (normally the `\n`) and then keeps
//! every `stride`-th character starting with the first. The result is
//! written back over the original file and the leftover tail is truncated.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use tracing::{debug, info};

use crate::config::{Config, DEFAULT_STRIDE};
use crate::error_helpers;

/// Summary of one in-place rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimateReport {
    pub lines: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

/// Sample `line` minus its last character with the given stride, then add `\n`
///
/// Works on chars, so multi-byte characters are never split. A `\r` of a
/// CRLF terminator is an ordinary character here and takes part in sampling.
fn sample_line(line: &str, stride: usize) -> String {
    let mut chars = line.chars();
    chars.next_back();

    let mut out: String = chars.step_by(stride).collect();
    out.push('\n');
    out
}

/// Decimate a single line (terminator included) with the default stride
pub fn decimate_line(line: &str) -> String {
    sample_line(line, DEFAULT_STRIDE)
}

fn sample_content(content: &str, stride: usize) -> (String, usize) {
    let mut out = String::with_capacity(content.len() / stride + 1);
    let mut lines = 0;

    // A trailing line without `\n` still counts and still loses its last char
    for line in content.split_inclusive('\n') {
        out.push_str(&sample_line(line, stride));
        lines += 1;
    }

    (out, lines)
}

/// Decimate every line of `content`, preserving order
pub fn decimate_content(content: &str) -> String {
    sample_content(content, DEFAULT_STRIDE).0
}

/// Rewrite the configured file in place
///
/// The file is opened for read and write and is never created. Nothing is
/// written until the whole file has been read and decoded, so open and read
/// failures leave it untouched. A failure after the seek may leave the file
/// partially overwritten.
pub fn decimate_file(config: &Config) -> Result<DecimateReport> {
    config.validate()?;
    let path = config.file_name();

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| {
            let msg = error_helpers::open_error(path, &e);
            anyhow::Error::new(e).context(msg)
        })?;
    debug!("Opened {}", path.display());

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    debug!("Read {} bytes", content.len());

    let (cut, lines) = sample_content(&content, config.stride());
    debug!("Transformed {} lines", lines);

    file.seek(SeekFrom::Start(0))
        .with_context(|| format!("Failed to seek to start of {}", path.display()))?;
    file.write_all(cut.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    let bytes_after = cut.len() as u64;
    file.set_len(bytes_after)
        .with_context(|| format!("Failed to truncate file: {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;
    debug!("Wrote {} bytes", bytes_after);

    let report = DecimateReport {
        lines,
        bytes_before: content.len() as u64,
        bytes_after,
    };
    info!(
        "Decimated {}: {} lines, {} -> {} bytes",
        path.display(),
        report.lines,
        report.bytes_before,
        report.bytes_after
    );

    Ok(report)
}
