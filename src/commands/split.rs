//! Split command implementation.
//!
//! Divides a wordlist file into byte-bounded part files. Parts are raw
//! byte-range slices read in exact chunks of the configured maximum, so a
//! part may end mid-line. The source file is never modified or deleted.
//!
//! Part naming: `<input_path>_<index>.txt`, index starting at 0. A file
//! already within the size limit is left alone, and a missing input is a
//! reported outcome rather than an error.

use crate::wordlist::{Result, WordlistError};
use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Buffer size for part I/O (256KB, matches typical throughput sweet spot)
const BUF_SIZE: usize = 256 * 1024;

/// A byte count parsed from a human-readable size spec.
///
/// Accepts a bare integer or a `K`/`M`/`G` suffix (1024-based, since these
/// are file byte sizes): `"512"`, `"64K"`, `"5M"`, `"1G"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSize {
    pub bytes: u64,
}

impl ByteSize {
    /// Parse a size spec. Returns `None` for malformed or zero sizes.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        if s.is_empty() {
            return None;
        }

        let (num_part, multiplier) = if let Some(stripped) = s.strip_suffix('K') {
            (stripped, 1024u64)
        } else if let Some(stripped) = s.strip_suffix('M') {
            (stripped, 1024u64 * 1024)
        } else if let Some(stripped) = s.strip_suffix('G') {
            (stripped, 1024u64 * 1024 * 1024)
        } else {
            (s.as_str(), 1u64)
        };

        let n: u64 = num_part.parse().ok()?;
        let bytes = n.checked_mul(multiplier)?;
        if bytes == 0 {
            return None;
        }
        Some(Self { bytes })
    }

    /// Format for display, using the largest exact suffix.
    pub fn display(&self) -> String {
        const G: u64 = 1024 * 1024 * 1024;
        const M: u64 = 1024 * 1024;
        const K: u64 = 1024;
        if self.bytes >= G && self.bytes % G == 0 {
            format!("{}G", self.bytes / G)
        } else if self.bytes >= M && self.bytes % M == 0 {
            format!("{}M", self.bytes / M)
        } else if self.bytes >= K && self.bytes % K == 0 {
            format!("{}K", self.bytes / K)
        } else {
            self.bytes.to_string()
        }
    }
}

/// One part file produced by a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Result of a split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// Input path does not exist; reported, non-fatal, no parts created.
    MissingInput,
    /// File size is within the limit; nothing to do.
    WithinLimit { size: u64 },
    /// File was split into `parts.len()` part files, in write order.
    Split { size: u64, parts: Vec<PartFile> },
}

impl fmt::Display for SplitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "input file does not exist"),
            Self::WithinLimit { size } => {
                write!(f, "{} bytes, within limit, not split", size)
            }
            Self::Split { size, parts } => {
                write!(f, "{} bytes split into {} parts", size, parts.len())
            }
        }
    }
}

/// Split command configuration.
#[derive(Debug, Clone, Copy)]
pub struct SplitCommand {
    /// Maximum bytes per part (must be > 0)
    pub max_bytes: u64,
}

impl SplitCommand {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn with_size(size: ByteSize) -> Self {
        Self::new(size.bytes)
    }

    /// Path of the part file with the given index.
    pub fn part_path(input: &Path, index: u64) -> PathBuf {
        let mut name = OsString::from(input.as_os_str());
        name.push(format!("_{}.txt", index));
        PathBuf::from(name)
    }

    /// Split `input` into parts of at most `max_bytes` bytes each.
    ///
    /// A file of size S > max produces exactly `ceil(S / max)` parts: every
    /// part holds the full maximum except the last, which holds the
    /// remainder. Each part is written and closed before the next opens.
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<SplitOutcome> {
        let input = input.as_ref();

        if self.max_bytes == 0 {
            return Err(WordlistError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "maximum part size must be greater than zero",
            )));
        }

        let size = match fs::metadata(input) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(SplitOutcome::MissingInput)
            }
            Err(e) => return Err(e.into()),
        };

        if size <= self.max_bytes {
            return Ok(SplitOutcome::WithinLimit { size });
        }

        let num = size.div_ceil(self.max_bytes);
        let mut reader = BufReader::with_capacity(BUF_SIZE, File::open(input)?);
        let mut parts = Vec::with_capacity(num as usize);

        for index in 0..num {
            let path = Self::part_path(input, index);
            let mut writer = BufWriter::new(File::create(&path)?);
            let bytes = io::copy(&mut (&mut reader).take(self.max_bytes), &mut writer)?;
            writer.flush()?;
            parts.push(PartFile { path, bytes });
        }

        Ok(SplitOutcome::Split { size, parts })
    }
}
