//! Owner of the authoritative list snapshot.
//!
//! # Responsibility
//! - Apply add/remove/toggle/gating transitions to the current `ListState`.
//! - Publish each result as a new shared snapshot.
//!
//! # Invariants
//! - A published `Arc<ListState>` is never mutated; holders keep a valid
//!   view until they ask for the next snapshot.
//! - No-op operations return the current snapshot itself (`Arc::ptr_eq`).
//! - `add` appends to the master list regardless of any search term.

use crate::model::list_state::ListState;
use crate::model::record::{Record, RecordId};
use log::{debug, info};
use std::sync::Arc;

/// Store holding the current list snapshot.
#[derive(Debug, Clone)]
pub struct ListStore {
    state: Arc<ListState>,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new(ListState::seeded())
    }
}

impl ListStore {
    /// Creates a store starting from `initial`.
    pub fn new(initial: ListState) -> Self {
        Self {
            state: Arc::new(initial),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<ListState> {
        Arc::clone(&self.state)
    }

    /// Appends a new record titled `title`.
    ///
    /// # Contract
    /// - New record gets a generated id and `is_complete = false`.
    /// - Empty `title` is a no-op; the add gate normally prevents this call.
    pub fn add(&mut self, title: impl Into<String>) -> Arc<ListState> {
        let title = title.into();
        if title.is_empty() {
            debug!("event=record_add module=list_store status=noop reason=empty_title");
            return self.snapshot();
        }

        let record = Record::new(title);
        let record_id = record.id;
        match self.state.with_appended(record) {
            Some(next) => {
                info!(
                    "event=record_add module=list_store status=ok record_id={} total={}",
                    record_id,
                    next.records().len()
                );
                self.publish(next)
            }
            None => {
                debug!(
                    "event=record_add module=list_store status=noop reason=id_collision record_id={}",
                    record_id
                );
                self.snapshot()
            }
        }
    }

    /// Removes the record matching `id`; no-op when absent.
    pub fn remove(&mut self, id: &RecordId) -> Arc<ListState> {
        match self.state.without(id) {
            Some(next) => {
                info!(
                    "event=record_remove module=list_store status=ok record_id={} total={}",
                    id,
                    next.records().len()
                );
                self.publish(next)
            }
            None => {
                debug!(
                    "event=record_remove module=list_store status=noop reason=not_found record_id={}",
                    id
                );
                self.snapshot()
            }
        }
    }

    /// Flips completion of the record matching `id`; no-op when absent.
    pub fn toggle_complete(&mut self, id: &RecordId) -> Arc<ListState> {
        match self.state.with_completion_toggled(id) {
            Some(next) => {
                let is_complete = next.find(id).is_some_and(|record| record.is_complete);
                info!(
                    "event=record_toggle module=list_store status=ok record_id={} is_complete={}",
                    id, is_complete
                );
                self.publish(next)
            }
            None => {
                debug!(
                    "event=record_toggle module=list_store status=noop reason=not_found record_id={}",
                    id
                );
                self.snapshot()
            }
        }
    }

    /// Re-derives the add gate and list visibility from draft content.
    pub fn set_draft_gating(&mut self, has_text: bool) -> Arc<ListState> {
        let next = self.state.derive_gating_from_draft(has_text);
        if next == *self.state {
            return self.snapshot();
        }
        self.publish(next)
    }

    fn publish(&mut self, next: ListState) -> Arc<ListState> {
        self.state = Arc::new(next);
        self.snapshot()
    }
}
