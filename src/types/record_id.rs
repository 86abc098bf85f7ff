use serde::Serialize;
use std::{fmt, num::ParseIntError, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub const FIRST: RecordId = RecordId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// `None` once the id space is used up.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordIdParseError {
    #[error("record id is empty")]
    Empty,
    #[error("invalid record id: {0}")]
    Invalid(#[from] ParseIntError),
}

impl FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('#');
        if s.is_empty() {
            return Err(RecordIdParseError::Empty);
        }
        Ok(RecordId(s.parse::<u64>()?))
    }
}
