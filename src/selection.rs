//! Selection state for the span list
//!
//! At most one span is selected; clicking the selected span again clears
//! it.

use crate::span::SpanId;

/// Current selection, keyed by span id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    selected: Option<SpanId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on the given span: selects it, or clears the
    /// selection when it was already selected. Returns whether anything
    /// is selected afterwards.
    pub fn click(&mut self, id: SpanId) -> bool {
        if self.selected.as_ref() == Some(&id) {
            self.selected = None;
            false
        } else {
            self.selected = Some(id);
            true
        }
    }

    /// Drop any selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Currently selected id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&SpanId> {
        self.selected.as_ref()
    }

    /// Membership test used by highlight derivation.
    #[must_use]
    pub fn is_selected(&self, id: &SpanId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}
