//! Generate command implementation.
//!
//! Streams every fixed-length combination of the configured alphabet into an
//! append-mode wordlist file, one word per line. Sequences are produced
//! lazily, so memory use stays flat no matter how large the A^L output is.

use crate::alphabet::AlphabetSpec;
use crate::sequence::Sequences;
use crate::wordlist::{append_words, Result};
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Generate command configuration.
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    /// Word length (0 produces a single empty line)
    pub length: usize,
    /// Character classes included in the alphabet
    pub spec: AlphabetSpec,
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerateCommand {
    /// Length 1, all character classes enabled.
    pub fn new() -> Self {
        Self {
            length: 1,
            spec: AlphabetSpec::new(),
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_spec(mut self, spec: AlphabetSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Enumerate the configured word stream without writing it anywhere.
    pub fn sequences(&self) -> Sequences {
        Sequences::new(self.spec.build(), self.length)
    }

    /// Generate all words and append them to `output`.
    ///
    /// An empty alphabet (all classes disabled) writes nothing and is not an
    /// error; the stats simply report zero words.
    pub fn run<P: AsRef<Path>>(&self, output: P) -> Result<GenerateStats> {
        let start = Instant::now();
        let alphabet_len = self.spec.build().len();
        let words_written = append_words(output, self.sequences())?;

        Ok(GenerateStats {
            words_written,
            alphabet_len,
            word_length: self.length,
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }
}

/// Statistics from a generate run.
#[derive(Debug, Default, Clone)]
pub struct GenerateStats {
    pub words_written: u64,
    pub alphabet_len: usize,
    pub word_length: usize,
    pub elapsed_secs: f64,
}

impl fmt::Display for GenerateStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words of length {} over {} characters ({:.2}s)",
            self.words_written, self.word_length, self.alphabet_len, self.elapsed_secs
        )
    }
}
