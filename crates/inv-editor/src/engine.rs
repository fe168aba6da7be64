//! The editor engine: the composition root that turns user intents into
//! canvas mutations, history commits, and selection updates.
//!
//! Every committed operation runs the same fixed sequence:
//!
//! 1. mutate the live [`CanvasState`],
//! 2. commit the resulting state to [`History`],
//! 3. re-resolve the [`Selection`] against the new state,
//! 4. re-arm the autosave debouncer.
//!
//! Mutating without committing would desynchronize undo/redo from the
//! visible state; committing without re-resolving selection would leave a
//! dangling reference. Operations that end up changing nothing (unknown
//! id, boundary move, empty selection) skip the commit entirely, so the
//! history only ever grows by real edits.
//!
//! The engine is single-threaded and synchronous: each operation runs to
//! completion before the next user event is processed.

use crate::autosave::SaveDebouncer;
use crate::history::History;
use crate::selection::Selection;
use inv_core::{
    CanvasState, Color, Element, ElementId, ElementPatch, TemplateCatalog, factory, hit_test,
    template,
};
use std::time::{Duration, Instant};

/// Read-only configuration injected at construction: catalog data the UI
/// offers (templates, fonts, sticker glyphs, color swatches) plus canvas
/// defaults. Tests substitute fixtures freely.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub templates: TemplateCatalog,
    pub fonts: Vec<String>,
    pub sticker_palette: Vec<String>,
    pub swatches: Vec<Color>,
    pub autosave_delay: Duration,
    /// Source of "now" for arming the autosave deadline. Defaults to
    /// `Instant::now`; tests substitute a frozen clock so both sides of
    /// the debouncer are deterministic.
    pub clock: fn() -> Instant,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 1200.0,
            templates: TemplateCatalog::default(),
            fonts: Vec::new(),
            sticker_palette: Vec::new(),
            swatches: Vec::new(),
            autosave_delay: Duration::from_millis(800),
            clock: Instant::now,
        }
    }
}

pub struct EditorEngine {
    config: EditorConfig,
    canvas: CanvasState,
    history: History,
    selection: Selection,
    autosave: SaveDebouncer,
}

impl EditorEngine {
    /// Start an editing session on an empty canvas. History is seeded with
    /// that initial state at cursor 0.
    pub fn new(config: EditorConfig) -> Self {
        let canvas = CanvasState::new(config.canvas_width, config.canvas_height);
        let history = History::new(canvas.clone());
        let autosave = SaveDebouncer::new(config.autosave_delay);
        Self { config, canvas, history, selection: Selection::new(), autosave }
    }

    /// Finalize a mutation: snapshot, re-validate selection, re-arm save.
    fn commit(&mut self) {
        self.history.commit(&self.canvas);
        self.selection.resolve(&self.canvas);
        self.autosave.note_change((self.config.clock)());
    }

    // ─── Templates ───────────────────────────────────────────────────────

    /// Apply a catalog template, replacing the whole canvas. An unknown id
    /// falls back to an empty canvas (logged) — a stale template reference
    /// must not crash the session.
    pub fn select_template(&mut self, template_id: &str) {
        match self.config.templates.get(template_id) {
            Some(t) => {
                self.canvas.width = t.width;
                self.canvas.height = t.height;
                self.canvas.apply_template(t.elements.clone());
            }
            None => {
                log::warn!("unknown template {template_id:?}, applying empty canvas");
                self.canvas.apply_template(Vec::new());
            }
        }
        self.commit();
    }

    /// Apply a template handed over as raw JSON (e.g. freshly fetched by
    /// the host). Decoding is lenient and the canvas adopts the decoded
    /// dimensions, exactly like the catalog path; a payload too broken to
    /// decode degrades to an empty canvas.
    pub fn load_template_value(&mut self, value: &serde_json::Value) {
        match template::decode_template(value) {
            Ok(t) => {
                self.canvas.width = t.width;
                self.canvas.height = t.height;
                self.canvas.apply_template(t.elements);
            }
            Err(err) => {
                log::warn!("malformed template payload ({err}), applying empty canvas");
                self.canvas.apply_template(Vec::new());
            }
        }
        self.commit();
    }

    // ─── Element creation ────────────────────────────────────────────────

    /// Add a text block with factory defaults merged with `overrides`.
    /// The new element becomes top-most and selected.
    pub fn add_text_element(&mut self, overrides: &ElementPatch) -> ElementId {
        self.add_created(factory::text(overrides))
    }

    /// Add a sticker for `glyph`. The new element becomes top-most and
    /// selected.
    pub fn add_sticker_element(&mut self, glyph: &str, overrides: &ElementPatch) -> ElementId {
        self.add_created(factory::sticker(glyph, overrides))
    }

    fn add_created(&mut self, element: Element) -> ElementId {
        let id = element.id;
        self.selection.select(Some(id));
        let _ = self.canvas.add_element(element);
        self.commit();
        id
    }

    /// Clone the selected element with a fresh id, nudged by (16, 16) so
    /// the copy is visible, appended top-most and selected.
    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        let source = self.selection.resolve(&self.canvas)?;
        let mut copy = source.clone();
        copy.id = ElementId::fresh("copy");
        copy.x += 16.0;
        copy.y += 16.0;
        Some(self.add_created(copy))
    }

    // ─── Element mutation ────────────────────────────────────────────────

    /// Patch the selected element. A missing selection or an id that has
    /// gone stale is a pure no-op — no snapshot is recorded.
    pub fn update_selected(&mut self, patch: &ElementPatch) {
        let Some(id) = self.selection.selected_id() else { return };
        if self.canvas.update_element(id, patch) {
            self.commit();
        }
    }

    /// Recolor the canvas background. This deliberately targets the
    /// bottom-most background element regardless of what is selected; if
    /// the canvas has none, one is inserted at the very bottom.
    pub fn set_background_color(&mut self, color: Color) {
        let patch = ElementPatch { color: Some(color), ..Default::default() };
        match self.canvas.background().map(|bg| bg.id) {
            Some(id) => {
                self.canvas.update_element(id, &patch);
            }
            None => {
                let bg = factory::background(color, self.canvas.width, self.canvas.height);
                let id = bg.id;
                let _ = self.canvas.add_element(bg);
                self.canvas.move_to_back(id);
            }
        }
        self.commit();
    }

    /// Resize the canvas itself.
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas.width = width;
        self.canvas.height = height;
        self.commit();
    }

    /// Delete the selected element. No selection → no-op.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selection.selected_id() else { return };
        if self.canvas.remove_element(id).is_some() {
            self.commit();
        }
    }

    // ─── Z-order ─────────────────────────────────────────────────────────

    /// Raise the selected element one step. Top-most or no selection →
    /// no-op without a snapshot.
    pub fn move_selected_up(&mut self) {
        self.reorder(CanvasState::move_up);
    }

    /// Lower the selected element one step. Bottom-most or no selection →
    /// no-op without a snapshot.
    pub fn move_selected_down(&mut self) {
        self.reorder(CanvasState::move_down);
    }

    /// Raise the selected element above everything else.
    pub fn bring_selected_to_front(&mut self) {
        self.reorder(CanvasState::move_to_front);
    }

    /// Lower the selected element below everything else.
    pub fn send_selected_to_back(&mut self) {
        self.reorder(CanvasState::move_to_back);
    }

    fn reorder(&mut self, op: fn(&mut CanvasState, ElementId) -> bool) {
        let Some(id) = self.selection.selected_id() else { return };
        if op(&mut self.canvas, id) {
            self.commit();
        }
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Step back one snapshot. At the beginning this is a no-op. The live
    /// canvas becomes an independent copy of the snapshot and the selection
    /// is re-resolved against it.
    pub fn undo(&mut self) {
        self.canvas = self.history.undo().clone();
        self.selection.resolve(&self.canvas);
    }

    /// Step forward one snapshot. At the end this is a no-op.
    pub fn redo(&mut self) {
        self.canvas = self.history.redo().clone();
        self.selection.resolve(&self.canvas);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Set the selection directly (e.g. from a layer list click).
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selection.select(id);
    }

    /// Hit-test the canvas point and select whatever is top-most there.
    /// Returns the new selection.
    pub fn select_at(&mut self, x: f32, y: f32) -> Option<ElementId> {
        let hit = hit_test(&self.canvas, x, y);
        self.selection.select(hit);
        hit
    }

    /// The selected element, resolved against the live canvas. Never a
    /// cached object — after undo/redo the id is re-validated here.
    pub fn selected_element(&mut self) -> Option<&Element> {
        self.selection.resolve(&self.canvas)
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selection.selected_id()
    }

    // ─── External collaborators ──────────────────────────────────────────

    /// The live canvas, in paint order, for the renderer.
    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    /// Read-only catalog data for the UI layer.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Serialize the current state for the exporter. The returned JSON is
    /// self-contained and unaffected by later edits.
    pub fn export_snapshot(&self) -> Result<String, String> {
        serde_json::to_string(&self.canvas).map_err(|e| e.to_string())
    }

    /// Poll the autosave debouncer. When a save is due, returns an
    /// independent copy of the current state for the persistence client;
    /// the engine knows nothing of the transport or format beyond that.
    pub fn poll_autosave(&mut self, now: Instant) -> Option<CanvasState> {
        self.autosave.poll(now).then(|| self.canvas.clone())
    }

    /// Tear down the session: cancels any pending autosave so a save never
    /// fires against a dead editor. Also invoked by `Drop`.
    pub fn teardown(&mut self) {
        self.autosave.cancel();
    }
}

impl Drop for EditorEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}
