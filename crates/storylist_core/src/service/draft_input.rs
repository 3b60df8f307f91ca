//! Pending title for the add flow.
//!
//! # Invariants
//! - `on_submit` hands out the title and clears the draft in one step.
//! - The gating signal reflects the draft exactly as typed (no trimming).

/// Emitted after each keystroke; feeds `ListStore::set_draft_gating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatingSignal {
    pub has_text: bool,
}

/// Holder of the not-yet-submitted record title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
}

impl DraftInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft with `text` and reports whether it is non-empty.
    pub fn on_keystroke(&mut self, text: impl Into<String>) -> GatingSignal {
        self.text = text.into();
        GatingSignal {
            has_text: !self.text.is_empty(),
        }
    }

    /// Takes the current title, leaving the draft empty.
    pub fn on_submit(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
