//! Wordmill: wordlist generation and file housekeeping utilities.
//!
//! Usage: wordmill <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use wordmill::alphabet::AlphabetSpec;
use wordmill::commands::{ByteSize, GenerateCommand, OrganizeCommand, SplitCommand, SplitOutcome};
use wordmill::wordlist::WordlistError;

#[derive(Parser)]
#[command(name = "wordmill")]
#[command(version)]
#[command(about = "Wordlist generation, byte-bounded splitting, and mtime-based file organizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all fixed-length character combinations into a wordlist file
    Generate {
        /// Word length
        #[arg(short, long)]
        length: usize,

        /// Output file (appended to, never truncated)
        #[arg(short, long)]
        output: PathBuf,

        /// Exclude letters from the alphabet
        #[arg(long)]
        no_letters: bool,

        /// Exclude digits from the alphabet
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbol characters from the alphabet
        #[arg(long)]
        no_symbols: bool,

        /// Split the output file afterwards (size spec: 512, 64K, 5M, 1G)
        #[arg(long)]
        split: Option<String>,

        /// Print generation statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Split a file into byte-bounded parts named <input>_<index>.txt
    Split {
        /// Input file to split
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum part size (size spec: 512, 64K, 5M, 1G)
        #[arg(short, long, default_value = "5M")]
        max_size: String,
    },

    /// Move files into year-month subdirectories by modification time
    Organize {
        /// Source directory to scan (non-recursive)
        #[arg(short, long)]
        source: PathBuf,

        /// Destination directory receiving YYYY-MM subdirectories
        #[arg(short, long)]
        dest: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            length,
            output,
            no_letters,
            no_digits,
            no_symbols,
            split,
            stats,
        } => run_generate(length, output, no_letters, no_digits, no_symbols, split, stats),

        Commands::Split { input, max_size } => run_split(input, &max_size),

        Commands::Organize { source, dest } => run_organize(source, dest),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Parse a size spec argument, mapping malformed input to an error.
fn parse_size(arg: &str) -> Result<ByteSize, WordlistError> {
    ByteSize::from_str(arg).ok_or_else(|| {
        WordlistError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid size spec: '{}'", arg),
        ))
    })
}

fn run_generate(
    length: usize,
    output: PathBuf,
    no_letters: bool,
    no_digits: bool,
    no_symbols: bool,
    split: Option<String>,
    stats: bool,
) -> Result<(), WordlistError> {
    let spec = AlphabetSpec::new()
        .with_letters(!no_letters)
        .with_digits(!no_digits)
        .with_symbols(!no_symbols);

    let result = GenerateCommand::new()
        .with_length(length)
        .with_spec(spec)
        .run(&output)?;

    if stats {
        eprintln!("Generate stats: {}", result);
    }

    if let Some(size_arg) = split {
        let size = parse_size(&size_arg)?;
        let outcome = SplitCommand::with_size(size).run(&output)?;
        report_split(&outcome);
    }

    Ok(())
}

fn run_split(input: PathBuf, max_size: &str) -> Result<(), WordlistError> {
    let size = parse_size(max_size)?;
    let outcome = SplitCommand::with_size(size).run(&input)?;
    report_split(&outcome);
    Ok(())
}

fn run_organize(source: PathBuf, dest: PathBuf) -> Result<(), WordlistError> {
    let result = OrganizeCommand::new(source, dest).run()?;
    eprintln!("Organize stats: {}", result);
    Ok(())
}

/// Print the reported (non-error) split outcomes to stderr.
fn report_split(outcome: &SplitOutcome) {
    match outcome {
        SplitOutcome::MissingInput => eprintln!("input file does not exist"),
        SplitOutcome::WithinLimit { .. } => {}
        SplitOutcome::Split { parts, .. } => {
            for part in parts {
                eprintln!("wrote part {}", part.path.display());
            }
        }
    }
}
