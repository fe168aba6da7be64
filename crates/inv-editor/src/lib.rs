//! Invita editor: engine, selection, and undo/redo history.
//!
//! Builds the user-visible editing operations on top of `inv-core`. The
//! [`engine::EditorEngine`] is the composition root: it owns the live
//! canvas, the snapshot [`history::History`], the [`selection::Selection`],
//! and the [`autosave::SaveDebouncer`], and enforces the fixed
//! mutate → commit → re-resolve sequencing on every operation.

pub mod autosave;
pub mod engine;
pub mod history;
pub mod selection;

pub use autosave::SaveDebouncer;
pub use engine::{EditorConfig, EditorEngine};
pub use history::History;
pub use selection::Selection;
