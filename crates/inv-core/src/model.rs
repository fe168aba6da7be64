//! Core data model for invitation canvases.
//!
//! A canvas is a flat, ordered sequence of [`Element`] values. Each element
//! is a tagged union over the three kinds the editor knows about
//! (background, text, sticker) with shared geometry and compositing fields.
//! Z-order is **not** stored on the element: it is implied by position in
//! the owning sequence (index 0 = bottom-most), see [`crate::canvas`].

use crate::id::ElementId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0]; serialized as a hex string
/// (`#RRGGBB` or `#RRGGBBAA`) since that is what templates and swatches use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let b = hex.as_bytes();

        let channel = |hi: u8, lo: u8| -> Option<f32> {
            Some(f32::from(hex_digit(hi)? << 4 | hex_digit(lo)?) / 255.0)
        };

        match b.len() {
            3 => Some(Self::rgba(
                f32::from(hex_digit(b[0])? * 17) / 255.0,
                f32::from(hex_digit(b[1])? * 17) / 255.0,
                f32::from(hex_digit(b[2])? * 17) / 255.0,
                1.0,
            )),
            6 => Some(Self::rgba(
                channel(b[0], b[1])?,
                channel(b[2], b[3])?,
                channel(b[4], b[5])?,
                1.0,
            )),
            8 => Some(Self::rgba(
                channel(b[0], b[1])?,
                channel(b[2], b[3])?,
                channel(b[4], b[5])?,
                channel(b[6], b[7])?,
            )),
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        let a = (self.a * 255.0).round() as u8;
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s:?}")))
    }
}

// ─── Text styling ────────────────────────────────────────────────────────

/// Horizontal text alignment. Newly created text is left-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

// ─── Compositing ─────────────────────────────────────────────────────────

/// Compositing mode applied when the renderer paints the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
}

// ─── Elements ────────────────────────────────────────────────────────────

fn default_opacity() -> f32 {
    1.0
}

/// Kind-specific payload of an element. The kind is fixed at creation;
/// patches that target a different kind's fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// Full-canvas color fill, conventionally the bottom-most element.
    Background { color: Color },

    /// A block of user-editable text.
    Text {
        content: String,
        font_size: f32,
        font_family: String,
        color: Color,
        #[serde(default)]
        align: TextAlign,
        #[serde(default)]
        weight: FontWeight,
        #[serde(default)]
        style: FontStyle,
        #[serde(default)]
        decoration: TextDecoration,
    },

    /// A decorative glyph (emoji / icon id) drawn at `font_size`.
    Sticker { glyph: String, font_size: f32 },
}

/// A single element on the canvas.
///
/// Geometry is in canvas-space units with the origin at the top-left.
/// The axis-aligned bounding box is `[x, x + width] × [y, y + height]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable unique identifier, assigned at creation, never reused.
    pub id: ElementId,

    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,

    /// 0.0 (transparent) ..= 1.0 (opaque).
    #[serde(default = "default_opacity")]
    pub opacity: f32,

    /// Clockwise rotation in degrees around the bounding-box center.
    #[serde(default)]
    pub rotation: f32,

    #[serde(default)]
    pub blend_mode: BlendMode,

    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// Inclusive axis-aligned bounding-box containment test.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Whether this element is the canvas background.
    pub fn is_background(&self) -> bool {
        matches!(self.kind, ElementKind::Background { .. })
    }
}

// ─── Patches ─────────────────────────────────────────────────────────────

/// Sparse update for an element. Only present fields are applied.
///
/// Common fields (geometry, opacity, rotation, blend mode) apply to any
/// kind. Kind-specific fields apply only when the element's kind matches:
/// `content` targets text content or a sticker glyph, `color` targets text
/// color or the background fill, and the font/text fields target text only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<TextDecoration>,
}

impl ElementPatch {
    /// Apply this patch to `element`, field by field. Fields that do not
    /// exist on the element's kind are silently ignored — the kind itself
    /// is immutable after creation.
    pub fn apply_to(&self, element: &mut Element) {
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(w) = self.width {
            element.width = w;
        }
        if let Some(h) = self.height {
            element.height = h;
        }
        if let Some(o) = self.opacity {
            element.opacity = o;
        }
        if let Some(r) = self.rotation {
            element.rotation = r;
        }
        if let Some(bm) = self.blend_mode {
            element.blend_mode = bm;
        }

        match &mut element.kind {
            ElementKind::Background { color } => {
                if let Some(c) = self.color {
                    *color = c;
                }
            }
            ElementKind::Text {
                content,
                font_size,
                font_family,
                color,
                align,
                weight,
                style,
                decoration,
            } => {
                if let Some(ref c) = self.content {
                    content.clone_from(c);
                }
                if let Some(fs) = self.font_size {
                    *font_size = fs;
                }
                if let Some(ref ff) = self.font_family {
                    font_family.clone_from(ff);
                }
                if let Some(c) = self.color {
                    *color = c;
                }
                if let Some(a) = self.align {
                    *align = a;
                }
                if let Some(w) = self.weight {
                    *weight = w;
                }
                if let Some(s) = self.style {
                    *style = s;
                }
                if let Some(d) = self.decoration {
                    *decoration = d;
                }
            }
            ElementKind::Sticker { glyph, font_size } => {
                if let Some(ref c) = self.content {
                    glyph.clone_from(c);
                }
                if let Some(fs) = self.font_size {
                    *font_size = fs;
                }
            }
        }
    }
}
