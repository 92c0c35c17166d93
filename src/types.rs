use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// What to do when two task records share an id.
///
/// - `LastWriteWins`: the later record replaces the earlier one (default).
/// - `Reject`: building the graph fails with a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateIdPolicy {
    LastWriteWins,
    Reject,
}

impl Default for DuplicateIdPolicy {
    fn default() -> Self {
        DuplicateIdPolicy::LastWriteWins
    }
}

/// Final tie-break once priority and deadline are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Smallest task id first (default).
    Id,
    /// Earliest position in the input first.
    Insertion,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::Id
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Id => f.write_str("id"),
            TieBreak::Insertion => f.write_str("insertion"),
        }
    }
}

/// How the schedule is printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}
