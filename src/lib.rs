//! Wordmill: wordlist generation and file housekeeping utilities.
//!
//! This library provides three single-purpose, fully sequential operations:
//!
//! - **Generate**: enumerate every fixed-length combination over a toggled
//!   character set and append them, one per line, to a wordlist file
//! - **Split**: divide an oversized file into byte-bounded part files
//! - **Organize**: relocate files into year-month directories by mtime
//!
//! # Example
//!
//! ```rust,no_run
//! use wordmill::{AlphabetSpec, GenerateCommand, SplitCommand};
//!
//! // Write all 2-character digit combinations to a wordlist
//! let spec = AlphabetSpec::new().with_letters(false).with_symbols(false);
//! let stats = GenerateCommand::new()
//!     .with_length(2)
//!     .with_spec(spec)
//!     .run("words.txt")
//!     .unwrap();
//! println!("{}", stats);
//!
//! // Split it into parts of at most 1KB
//! let outcome = SplitCommand::new(1024).run("words.txt").unwrap();
//! println!("{}", outcome);
//! ```

pub mod alphabet;
pub mod commands;
pub mod sequence;
pub mod wordlist;

// Re-export commonly used types
pub use alphabet::{AlphabetSpec, CHARSET_SUPERSET};
pub use commands::{
    ByteSize, GenerateCommand, GenerateStats, OrganizeCommand, OrganizeStats, PartFile,
    SplitCommand, SplitOutcome,
};
pub use sequence::Sequences;
pub use wordlist::{append_words, write_words, Result, WordlistError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::alphabet::{AlphabetSpec, CHARSET_SUPERSET};
    pub use crate::commands::{
        ByteSize, GenerateCommand, OrganizeCommand, SplitCommand, SplitOutcome,
    };
    pub use crate::sequence::Sequences;
    pub use crate::wordlist::{Result, WordlistError};
}
