//! Immutable list snapshot and its pure transitions.
//!
//! # Responsibility
//! - Hold the authoritative record sequence and the two UI-intent flags.
//! - Provide value-returning transitions used by `ListStore`.
//!
//! # Invariants
//! - Insertion order is preserved; appends go to the end and nothing reorders.
//! - Record ids are unique within `records`.
//! - Transitions return a new value; `self` is never modified.
//! - `is_show_list` / `is_disabled` change only through
//!   [`ListState::derive_gating_from_draft`].

use crate::model::record::{Record, RecordId};
use crate::model::seed::seed_records;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for list construction from caller-provided records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStateError {
    /// Two input records share the same id.
    DuplicateId(RecordId),
}

impl Display for ListStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
        }
    }
}

impl Error for ListStateError {}

/// Snapshot of the catalog list plus UI-intent flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    records: Vec<Record>,
    is_show_list: bool,
    is_disabled: bool,
}

impl ListState {
    /// Creates the session-start state: seed catalog, list shown, add disabled.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
            is_show_list: true,
            is_disabled: true,
        }
    }

    /// Creates a state over caller-provided records with initial flags.
    ///
    /// # Errors
    /// - Returns [`ListStateError::DuplicateId`] when two records share an id.
    pub fn from_records(records: Vec<Record>) -> Result<Self, ListStateError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(ListStateError::DuplicateId(record.id));
            }
        }

        Ok(Self {
            records,
            is_show_list: true,
            is_disabled: true,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_show_list(&self) -> bool {
        self.is_show_list
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Looks up a record by id.
    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Returns a new state with `record` appended at the end.
    ///
    /// Returns `None` when a record with the same id is already present.
    pub fn with_appended(&self, record: Record) -> Option<Self> {
        if self.find(&record.id).is_some() {
            return None;
        }

        let mut records = self.records.clone();
        records.push(record);
        Some(self.replace_records(records))
    }

    /// Returns a new state without the record matching `id`.
    ///
    /// Returns `None` when no record matches.
    pub fn without(&self, id: &RecordId) -> Option<Self> {
        self.find(id)?;

        let records = self
            .records
            .iter()
            .filter(|record| &record.id != id)
            .cloned()
            .collect();
        Some(self.replace_records(records))
    }

    /// Returns a new state where the matching record's completion is flipped.
    ///
    /// Returns `None` when no record matches.
    pub fn with_completion_toggled(&self, id: &RecordId) -> Option<Self> {
        self.find(id)?;

        let records = self
            .records
            .iter()
            .map(|record| {
                if &record.id == id {
                    record.toggled()
                } else {
                    record.clone()
                }
            })
            .collect();
        Some(self.replace_records(records))
    }

    /// Derives both UI flags from whether the draft currently has text.
    ///
    /// - empty draft: add is disabled, list visibility is left as is.
    /// - non-empty draft: add is enabled and the list is shown.
    pub fn derive_gating_from_draft(&self, has_text: bool) -> Self {
        let (is_show_list, is_disabled) = if has_text {
            (true, false)
        } else {
            (self.is_show_list, true)
        };

        Self {
            records: self.records.clone(),
            is_show_list,
            is_disabled,
        }
    }

    fn replace_records(&self, records: Vec<Record>) -> Self {
        Self {
            records,
            is_show_list: self.is_show_list,
            is_disabled: self.is_disabled,
        }
    }
}
