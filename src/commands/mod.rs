//! Command implementations for wordmill.

pub mod generate;
pub mod organize;
pub mod split;

pub use generate::{GenerateCommand, GenerateStats};
pub use organize::{OrganizeCommand, OrganizeStats};
pub use split::{ByteSize, PartFile, SplitCommand, SplitOutcome};
