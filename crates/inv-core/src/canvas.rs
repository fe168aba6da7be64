//! Canvas state: the single source of truth for the edited element set.
//!
//! Elements live in a flat `Vec` whose order **is** the z-order: index 0 is
//! painted first (bottom-most), the last index last (top-most). All
//! mutation goes through the methods here — the vector is never handed out
//! mutably, so index order == paint order == hit-test priority holds by
//! construction.
//!
//! Unknown-id updates, removes, and boundary moves are deliberate no-ops:
//! ids can go stale through ordinary UI races (a click racing a delete),
//! and a stale id must never corrupt the state or crash the session.

use crate::id::ElementId;
use crate::model::{Element, ElementPatch};
use serde::{Deserialize, Serialize};

/// A point-in-time canvas: ordered elements plus canvas dimensions.
///
/// `clone()` is a full structural deep copy (the state owns all of its
/// data), which is what the history layer relies on for snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    elements: Vec<Element>,
    pub width: f32,
    pub height: f32,
}

impl CanvasState {
    /// Create an empty canvas of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { elements: Vec::new(), width, height }
    }

    // ─── Reads ───────────────────────────────────────────────────────────

    /// Elements in paint order (bottom → top). This is the sequence the
    /// renderer consumes as-is.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Look up an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Position of an element in the z-order, if present.
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// The bottom-most background element, if the canvas has one.
    pub fn background(&self) -> Option<&Element> {
        self.elements.iter().find(|e| e.is_background())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Replace the whole element sequence (template application).
    ///
    /// Ids must be unique within a state on this path too: an entry
    /// repeating an id that is already installed is dropped with a
    /// warning, the same treatment malformed template entries get.
    pub fn apply_template(&mut self, elements: Vec<Element>) {
        self.elements.clear();
        for element in elements {
            if self.index_of(element.id).is_some() {
                log::warn!("apply_template: duplicate id {}, dropping element", element.id);
                continue;
            }
            self.elements.push(element);
        }
    }

    /// Append an element to the end of the sequence — it becomes top-most.
    /// Returns the id, or refuses (warn + no-op) when the id is already
    /// present: element ids are unique within a state.
    pub fn add_element(&mut self, element: Element) -> Option<ElementId> {
        if self.index_of(element.id).is_some() {
            log::warn!("add_element: duplicate id {}, refusing", element.id);
            return None;
        }
        let id = element.id;
        self.elements.push(element);
        Some(id)
    }

    /// Patch an element in place, preserving its z-position. Returns
    /// `false` (no-op) when the id is not found.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        match self.elements.iter_mut().find(|e| e.id == id) {
            Some(element) => {
                patch.apply_to(element);
                true
            }
            None => {
                log::debug!("update_element: unknown id {id}, ignoring");
                false
            }
        }
    }

    /// Remove an element, returning it if it was present.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        match self.index_of(id) {
            Some(idx) => Some(self.elements.remove(idx)),
            None => {
                log::debug!("remove_element: unknown id {id}, ignoring");
                None
            }
        }
    }

    /// Swap the element one step toward the top. No-op when it is already
    /// top-most or unknown. Returns whether the order changed.
    pub fn move_up(&mut self, id: ElementId) -> bool {
        let Some(idx) = self.index_of(id) else { return false };
        if idx + 1 >= self.elements.len() {
            return false;
        }
        self.elements.swap(idx, idx + 1);
        true
    }

    /// Swap the element one step toward the bottom. No-op at the bottom or
    /// on an unknown id. Returns whether the order changed.
    pub fn move_down(&mut self, id: ElementId) -> bool {
        let Some(idx) = self.index_of(id) else { return false };
        if idx == 0 {
            return false;
        }
        self.elements.swap(idx, idx - 1);
        true
    }

    /// Move the element to the end of the sequence (top-most). Returns
    /// whether the order changed.
    pub fn move_to_front(&mut self, id: ElementId) -> bool {
        let Some(idx) = self.index_of(id) else { return false };
        if idx + 1 == self.elements.len() {
            return false;
        }
        let element = self.elements.remove(idx);
        self.elements.push(element);
        true
    }

    /// Move the element to index 0 (bottom-most). Returns whether the
    /// order changed.
    pub fn move_to_back(&mut self, id: ElementId) -> bool {
        let Some(idx) = self.index_of(id) else { return false };
        if idx == 0 {
            return false;
        }
        let element = self.elements.remove(idx);
        self.elements.insert(0, element);
        true
    }
}
