use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub creator: String,
}

impl Record {
    pub fn new(id: i64, title: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            creator: creator.into(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{} (by:{})", self.id, self.title, self.creator)
    }
}

/// Parses a user supplied identifier. Surrounding whitespace is ignored.
pub fn parse_identifier(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|source| Error::InvalidIdentifier { input: input.to_string(), source })
}
