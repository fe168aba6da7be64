//! Invita core: canvas element model, templates, and hit testing.
//!
//! This crate is the data layer of the invitation editor. It owns the
//! element model (a tagged union over background / text / sticker), the
//! [`canvas::CanvasState`] that keeps them in paint order, the factory
//! defaults for new elements, lenient template decoding, and point
//! hit-testing. The editor layer (`inv-editor`) composes these into
//! user-visible operations with history and selection.

pub mod canvas;
pub mod factory;
pub mod hit;
pub mod id;
pub mod model;
pub mod template;

pub use canvas::CanvasState;
pub use hit::hit_test;
pub use id::ElementId;
pub use model::*;
pub use template::{Template, TemplateCatalog, decode_template};
