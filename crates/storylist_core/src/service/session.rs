//! Catalog session: the contract between core state and a view.
//!
//! # Responsibility
//! - Own the persisted search term, the list store and the draft input.
//! - Translate view events into core operations.
//! - Produce the per-render view model.
//!
//! # Invariants
//! - Every handler runs to completion before the next one; `&mut self`
//!   makes interleaving impossible.
//! - Add never fires while the gate reports disabled.
//! - After a successful add the draft is empty and the gate is disabled.
//! - The filtered list is derived from the latest master list on every render.

use crate::config::SessionSettings;
use crate::model::list_state::ListState;
use crate::model::record::{Record, RecordId};
use crate::search::filter::filter_records;
use crate::service::draft_input::DraftInput;
use crate::service::list_store::ListStore;
use crate::store::kv::KeyValueStore;
use crate::store::persistent_value::PersistentValue;
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;

/// Everything a view needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub search_term: String,
    pub draft_title: String,
    pub is_add_disabled: bool,
    pub is_list_visible: bool,
    /// Master list narrowed by `search_term`, in insertion order.
    pub filtered_records: Vec<Record>,
}

/// User intent forwarded by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    SearchEdit(String),
    DraftEdit(String),
    AddClick,
    DeleteClick(RecordId),
    ToggleClick(RecordId),
}

/// Single-user catalog session over an injected key/value store.
pub struct CatalogSession<S: KeyValueStore> {
    search_term: PersistentValue<S>,
    list: ListStore,
    draft: DraftInput,
}

impl<S: KeyValueStore> CatalogSession<S> {
    /// Starts a session with the seed catalog and the stored search term.
    pub fn start(store: S, settings: &SessionSettings) -> Self {
        Self::with_list(store, settings, ListState::seeded())
    }

    /// Starts a session over a caller-provided initial list.
    pub fn with_list(store: S, settings: &SessionSettings, initial: ListState) -> Self {
        let search_term = PersistentValue::initialize(
            store,
            settings.search_key.as_str(),
            settings.default_search_term.as_str(),
        );
        info!(
            "event=session_start module=session status=ok records={} search_len={}",
            initial.records().len(),
            search_term.get().chars().count()
        );

        Self {
            search_term,
            list: ListStore::new(initial),
            draft: DraftInput::new(),
        }
    }

    /// Updates and persists the search term.
    pub fn on_search_edit(&mut self, text: impl Into<String>) {
        self.search_term.set(text);
        debug!(
            "event=search_edit module=session status=ok search_len={}",
            self.search_term.get().chars().count()
        );
    }

    /// Updates the draft and re-derives the add gate from it.
    pub fn on_draft_edit(&mut self, text: impl Into<String>) {
        let signal = self.draft.on_keystroke(text);
        let state = self.list.set_draft_gating(signal.has_text);
        debug!(
            "event=draft_edit module=session status=ok has_text={} add_disabled={}",
            signal.has_text,
            state.is_disabled()
        );
    }

    /// Adds the draft as a new record when the gate allows it.
    pub fn on_add_click(&mut self) {
        if self.list.snapshot().is_disabled() {
            debug!("event=add_click module=session status=noop reason=add_disabled");
            return;
        }

        let title = self.draft.on_submit();
        self.list.add(title);
        self.list.set_draft_gating(false);
    }

    pub fn on_delete_click(&mut self, id: &RecordId) {
        self.list.remove(id);
    }

    pub fn on_toggle_click(&mut self, id: &RecordId) {
        self.list.toggle_complete(id);
    }

    /// Routes a parsed view event to its handler.
    pub fn dispatch(&mut self, intent: ViewIntent) {
        match intent {
            ViewIntent::SearchEdit(text) => self.on_search_edit(text),
            ViewIntent::DraftEdit(text) => self.on_draft_edit(text),
            ViewIntent::AddClick => self.on_add_click(),
            ViewIntent::DeleteClick(id) => self.on_delete_click(&id),
            ViewIntent::ToggleClick(id) => self.on_toggle_click(&id),
        }
    }

    /// Builds the view model for the current state.
    pub fn render(&self) -> ViewModel {
        let state = self.list.snapshot();
        let term = self.search_term.get();

        ViewModel {
            search_term: term.to_string(),
            draft_title: self.draft.text().to_string(),
            is_add_disabled: state.is_disabled(),
            is_list_visible: state.is_show_list(),
            filtered_records: filter_records(state.records(), term)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn search_term(&self) -> &str {
        self.search_term.get()
    }

    /// Returns the unfiltered list snapshot.
    pub fn list_snapshot(&self) -> Arc<ListState> {
        self.list.snapshot()
    }

    /// Borrows the backing key/value store.
    pub fn store(&self) -> &S {
        self.search_term.store()
    }
}
