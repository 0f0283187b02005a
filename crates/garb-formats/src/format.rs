//! Outfit format tags.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The four outfit file formats the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Cherax entity files: JSON keyed by slot names.
    Cherax,
    /// YimMenu outfit files: JSON keyed by slot indices; the canonical shape.
    Yim,
    /// Lexis outfit files: JSON with parallel drawable/variation arrays.
    Lexis,
    /// Stand outfit files: plain text, one `Label: value` pair per line.
    Stand,
}

impl Format {
    /// All known formats, in detection-priority order for the JSON shapes.
    pub const ALL: [Format; 4] = [Format::Cherax, Format::Lexis, Format::Yim, Format::Stand];

    /// Display name matching what the menus themselves use.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Cherax => "Cherax",
            Format::Yim => "YimMenu",
            Format::Lexis => "Lexis",
            Format::Stand => "Stand",
        }
    }

    /// File extension this format is written with.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Stand => "txt",
            _ => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a format name cannot be parsed.
#[derive(Debug, Error)]
#[error("unknown outfit format {0:?} (expected cherax, yimmenu, lexis or stand)")]
pub struct ParseFormatError(String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cherax" => Ok(Format::Cherax),
            "yim" | "yimmenu" => Ok(Format::Yim),
            "lexis" => Ok(Format::Lexis),
            "stand" => Ok(Format::Stand),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}
