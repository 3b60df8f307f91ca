//! Catalog record domain model.
//!
//! # Responsibility
//! - Define the canonical catalog entry rendered by the list view.
//! - Own identifier generation and parsing for records.
//!
//! # Invariants
//! - `id` is assigned at creation time and never changes.
//! - Records created through the add flow carry only `id`, `title` and
//!   `is_complete`; descriptive fields stay `None`.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier for a catalog record.
///
/// Seed catalog entries keep their fixed numeric ids; records created at
/// runtime receive a random v4 uuid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Fixed id of a seed catalog entry.
    Seed(u64),
    /// Id generated for a record created through the add flow.
    Generated(Uuid),
}

impl RecordId {
    /// Generates a fresh id for a runtime-created record.
    pub fn generate() -> Self {
        Self::Generated(Uuid::new_v4())
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seed(value) => write!(f, "{value}"),
            Self::Generated(uuid) => write!(f, "{uuid}"),
        }
    }
}

/// Error returned when text cannot be read back as a [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIdParseError(pub String);

impl Display for RecordIdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid record id `{}`; expected a number or a uuid",
            self.0
        )
    }
}

impl Error for RecordIdParseError {}

impl FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Ok(number) = trimmed.parse::<u64>() {
            return Ok(Self::Seed(number));
        }
        Uuid::parse_str(trimmed)
            .map(Self::Generated)
            .map_err(|_| RecordIdParseError(trimmed.to_string()))
    }
}

/// One catalog entry.
///
/// Serialized with the catalog's field names (`objectID`, `num_comments`,
/// `isComplete`) so exported snapshots read the same as the seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "objectID")]
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Present only on seed data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<u32>,
    /// Present only on seed data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(rename = "isComplete", default)]
    pub is_complete: bool,
}

impl Record {
    /// Creates a record for the add flow with a generated id.
    ///
    /// # Invariants
    /// - `is_complete` starts as `false`.
    /// - `url`, `author`, `num_comments` and `points` are `None`.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(RecordId::generate(), title)
    }

    /// Creates a record with a caller-provided id and no descriptive fields.
    pub fn with_id(id: RecordId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: None,
            author: None,
            num_comments: None,
            points: None,
            is_complete: false,
        }
    }

    /// Returns a copy of this record with the completion flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            is_complete: !self.is_complete,
            ..self.clone()
        }
    }
}
