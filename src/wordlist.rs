//! Wordlist file output and the crate error type.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by wordmill operations.
#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("path not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, WordlistError>;

/// Write each word followed by a newline, preserving iteration order.
///
/// Returns the number of words written. The writer is flushed before
/// returning so I/O failures surface here rather than on drop.
pub fn write_words<W, I>(writer: &mut W, words: I) -> Result<u64>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut written = 0u64;
    for word in words {
        writer.write_all(word.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Append words to a file, creating it if absent.
///
/// The file is opened in append mode and never truncated: re-running against
/// the same path accumulates content. The handle lives only for the duration
/// of this call, so it is released even when a write fails partway.
pub fn append_words<P, I>(path: P, words: I) -> Result<u64>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = BufWriter::new(file);
    write_words(&mut writer, words)
}
