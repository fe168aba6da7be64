//! Template catalog: the read-only starting points a user picks from.
//!
//! Templates come from an external catalog as JSON. Decoding is lenient by
//! design — a corrupt template must degrade to an empty canvas, never crash
//! an edit session. Broken entries are logged and skipped; a missing
//! element array yields an empty element list.

use crate::model::Element;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An invitation template: a named, sized, ready-made element sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Ordered, read-only collection of templates, injected into the editor at
/// construction (never ambient module state).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Decode one template from raw catalog JSON.
///
/// Identity fields are required (without an id there is nothing to
/// select), but the element list is decoded element by element: entries
/// that fail to decode are skipped with a warning instead of poisoning the
/// whole template.
pub fn decode_template(value: &Value) -> Result<Template, String> {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| "template missing string field `id`".to_string())?
        .to_string();
    let name = value.get("name").and_then(Value::as_str).unwrap_or(&id).to_string();
    let width = value.get("width").and_then(Value::as_f64).unwrap_or(800.0) as f32;
    let height = value.get("height").and_then(Value::as_f64).unwrap_or(1200.0) as f32;

    Ok(Template { id, name, width, height, elements: decode_elements(value) })
}

/// Decode the `elements` array of a template value, leniently.
pub fn decode_elements(value: &Value) -> Vec<Element> {
    let Some(entries) = value.get("elements").and_then(Value::as_array) else {
        log::warn!("template has no `elements` array, falling back to empty canvas");
        return Vec::new();
    };

    let mut elements = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<Element>(entry.clone()) {
            Ok(element) => elements.push(element),
            Err(err) => {
                log::warn!("skipping malformed template element #{i}: {err}");
            }
        }
    }
    elements
}
