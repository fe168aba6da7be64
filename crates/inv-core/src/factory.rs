//! Element construction with type-appropriate defaults.
//!
//! Each constructor builds a fully-formed [`Element`] with a fresh id and
//! deterministic defaults, then merges the caller's [`ElementPatch`] on
//! top. Construction has no side effects beyond id allocation — nothing is
//! registered into a canvas here.

use crate::id::ElementId;
use crate::model::{
    BlendMode, Color, Element, ElementKind, ElementPatch, FontStyle, FontWeight, TextAlign,
    TextDecoration,
};

/// Default font family for new text blocks.
pub const DEFAULT_FONT_FAMILY: &str = "Montserrat";

fn base(id: ElementId, x: f32, y: f32, width: f32, height: f32, kind: ElementKind) -> Element {
    Element {
        id,
        x,
        y,
        width,
        height,
        opacity: 1.0,
        rotation: 0.0,
        blend_mode: BlendMode::Normal,
        kind,
    }
}

/// New text block: "Nuevo texto", 200×40 at (100, 100), 24pt black,
/// left-aligned, normal weight and style. `overrides` wins field-by-field.
pub fn text(overrides: &ElementPatch) -> Element {
    let mut element = base(
        ElementId::fresh("text"),
        100.0,
        100.0,
        200.0,
        40.0,
        ElementKind::Text {
            content: "Nuevo texto".to_string(),
            font_size: 24.0,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            color: Color::BLACK,
            align: TextAlign::Left,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
            decoration: TextDecoration::None,
        },
    );
    overrides.apply_to(&mut element);
    element
}

/// New sticker: the chosen glyph in a 60×60 box at (100, 100), drawn at
/// 48pt, no rotation, fully opaque. `overrides` wins field-by-field.
pub fn sticker(glyph: &str, overrides: &ElementPatch) -> Element {
    let mut element = base(
        ElementId::fresh("sticker"),
        100.0,
        100.0,
        60.0,
        60.0,
        ElementKind::Sticker { glyph: glyph.to_string(), font_size: 48.0 },
    );
    overrides.apply_to(&mut element);
    element
}

/// New background: a full-canvas fill at the origin.
pub fn background(color: Color, canvas_width: f32, canvas_height: f32) -> Element {
    base(
        ElementId::fresh("bg"),
        0.0,
        0.0,
        canvas_width,
        canvas_height,
        ElementKind::Background { color },
    )
}
