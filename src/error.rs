use std::num::ParseIntError;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    InvalidIdentifier { input: String, source: ParseIntError },
    LegacyParse { line: usize, reason: String },
    LegacyImport { path: PathBuf, source: Box<Error> },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Serde(e) => write!(f, "unable to read inventory data: {e}"),
            Self::InvalidIdentifier { input, source } => {
                write!(f, "\"{input}\" is not a valid identifier: {source}")
            }
            Self::LegacyParse { line, reason } => {
                write!(f, "malformed legacy record on line {line}: {reason}")
            }
            Self::LegacyImport { path, source } => {
                write!(f, "unable to import {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serde(e) => Some(e),
            Self::InvalidIdentifier { source, .. } => Some(source),
            Self::LegacyParse { .. } => None,
            Self::LegacyImport { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
