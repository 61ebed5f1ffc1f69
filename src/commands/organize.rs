//! Organize command implementation.
//!
//! Relocates regular files from a source directory into year-month
//! subdirectories of a destination directory, keyed by each file's
//! modification time (local time, `YYYY-MM`). Both directories are explicit
//! configuration; nothing is read from process-wide state.
//!
//! Only entries directly under the source directory are considered, and only
//! regular files move; subdirectories and their contents stay put. A file
//! whose destination already exists is skipped and left in the source.

use crate::wordlist::{Result, WordlistError};
use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Organize command configuration.
#[derive(Debug, Clone)]
pub struct OrganizeCommand {
    /// Directory whose files are relocated
    pub source: PathBuf,
    /// Directory receiving the `YYYY-MM` subdirectories
    pub dest: PathBuf,
}

/// Statistics from an organize run.
#[derive(Debug, Default, Clone)]
pub struct OrganizeStats {
    pub moved: u64,
    pub skipped: u64,
}

impl fmt::Display for OrganizeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} moved, {} skipped", self.moved, self.skipped)
    }
}

impl OrganizeCommand {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(source: P, dest: Q) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }

    /// Year-month subdirectory label for a modification time.
    fn month_label(mtime: DateTime<Local>) -> String {
        mtime.format("%Y-%m").to_string()
    }

    /// Move every regular file under the source into its year-month bucket.
    ///
    /// Returns `NotFound` if the source directory does not exist. I/O
    /// failures on individual files abort the run; files already moved stay
    /// moved (no rollback).
    pub fn run(&self) -> Result<OrganizeStats> {
        if !self.source.is_dir() {
            return Err(WordlistError::NotFound(self.source.clone()));
        }

        let mut stats = OrganizeStats::default();

        for entry in fs::read_dir(&self.source)? {
            let entry = entry?;
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }

            let mtime: DateTime<Local> = meta.modified()?.into();
            let bucket = self.dest.join(Self::month_label(mtime));
            fs::create_dir_all(&bucket)?;

            let target = bucket.join(entry.file_name());
            if target.exists() {
                stats.skipped += 1;
                continue;
            }

            move_file(&entry.path(), &target)?;
            stats.moved += 1;
        }

        Ok(stats)
    }
}

/// Rename, falling back to copy-then-remove for cross-device destinations.
fn move_file(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(from, to)?;
            fs::remove_file(from)?;
            Ok(())
        }
    }
}
