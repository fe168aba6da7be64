//! Selection: at most one selected element id, resolved against the live
//! model on every read.
//!
//! History snapshots are independent copies, so the "same" element after an
//! undo is a different value with the same id. Callers must therefore read
//! the selection through [`Selection::resolve`] against the current state
//! rather than holding on to an `Element` they fetched earlier.

use inv_core::{CanvasState, Element, ElementId};

#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    selected: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection. No membership validation happens here — a
    /// selection may legitimately be set transiently during creation,
    /// before the model append completes.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The raw selected id, unvalidated.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    /// Re-validate against `state` and return the selected element. If the
    /// id is no longer present the selection resets to none.
    pub fn resolve<'a>(&mut self, state: &'a CanvasState) -> Option<&'a Element> {
        match self.selected.and_then(|id| state.get(id)) {
            Some(element) => Some(element),
            None => {
                self.selected = None;
                None
            }
        }
    }
}
