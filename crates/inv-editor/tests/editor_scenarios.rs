//! Integration tests: end-to-end editing scenarios (inv-editor).
//!
//! Walks the engine through the flows a user actually performs (add,
//! reorder, recolor, delete) and checks z-order, selection resolution,
//! and hit-testing against the committed states.

use inv_core::{Color, ElementKind, ElementPatch, Template, TemplateCatalog, factory, hit_test};
use inv_editor::{EditorConfig, EditorEngine};

fn engine_with_template() -> EditorEngine {
    let template = Template {
        id: "boda".into(),
        name: "Boda".into(),
        width: 800.0,
        height: 1200.0,
        elements: vec![
            factory::background(Color::WHITE, 800.0, 1200.0),
            factory::text(&Default::default()),
        ],
    };
    EditorEngine::new(EditorConfig {
        templates: TemplateCatalog::new(vec![template]),
        ..Default::default()
    })
}

#[test]
fn add_then_lower_the_sticker() {
    // Empty canvas → text → sticker (on top) → move the sticker down:
    // final order is [sticker, text].
    let mut engine = EditorEngine::new(EditorConfig::default());
    let text_id = engine.add_text_element(&Default::default());
    let sticker_id = engine.add_sticker_element("🎉", &Default::default());

    assert_eq!(engine.canvas().index_of(sticker_id), Some(1));

    engine.select(Some(sticker_id));
    engine.move_selected_down();

    let order: Vec<_> = engine.canvas().elements().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![sticker_id, text_id]);
}

#[test]
fn recolor_undo_redo_roundtrip() {
    // Template with background + text → recolor the text → undo reverts
    // the color → redo reapplies it.
    let mut engine = engine_with_template();
    engine.select_template("boda");
    let text_id = engine.canvas().elements()[1].id;
    let red = Color::from_hex("#ff0000").unwrap();

    engine.select(Some(text_id));
    engine.update_selected(&ElementPatch { color: Some(red), ..Default::default() });

    let color_of = |engine: &EditorEngine| match &engine.canvas().get(text_id).unwrap().kind {
        ElementKind::Text { color, .. } => *color,
        other => panic!("expected Text, got {other:?}"),
    };
    assert_eq!(color_of(&engine), red);

    engine.undo();
    assert_eq!(color_of(&engine), Color::BLACK, "color must revert on undo");

    engine.redo();
    assert_eq!(color_of(&engine), red, "color must come back on redo");
}

#[test]
fn selection_resolves_to_none_after_undo_past_creation() {
    let mut engine = EditorEngine::new(EditorConfig::default());
    engine.add_text_element(&Default::default());
    let sticker_id = engine.add_sticker_element("⭐", &Default::default());

    engine.select(Some(sticker_id));
    // Undo past the state where the sticker existed.
    engine.undo();

    assert!(engine.canvas().get(sticker_id).is_none());
    assert_eq!(engine.selected_element(), None);
    assert_eq!(engine.selected_id(), None, "selection must be cleared, not dangling");
}

#[test]
fn selection_survives_undo_when_element_still_exists() {
    let mut engine = EditorEngine::new(EditorConfig::default());
    let text_id = engine.add_text_element(&Default::default());
    engine.add_sticker_element("⭐", &Default::default());

    engine.select(Some(text_id));
    engine.undo(); // removes only the sticker

    assert_eq!(engine.selected_element().unwrap().id, text_id);
}

#[test]
fn click_selection_follows_z_order() {
    let mut engine = EditorEngine::new(EditorConfig::default());
    let below = engine.add_text_element(&ElementPatch {
        x: Some(0.0),
        y: Some(0.0),
        width: Some(100.0),
        height: Some(100.0),
        ..Default::default()
    });
    let above = engine.add_sticker_element(
        "⭐",
        &ElementPatch {
            x: Some(0.0),
            y: Some(0.0),
            width: Some(100.0),
            height: Some(100.0),
            ..Default::default()
        },
    );

    assert_eq!(engine.select_at(50.0, 50.0), Some(above));

    // Raise the text; the same click now selects it.
    engine.select(Some(below));
    engine.move_selected_up();
    assert_eq!(engine.select_at(50.0, 50.0), Some(below));

    // A click in empty space clears the selection.
    assert_eq!(engine.select_at(700.0, 1100.0), None);
    assert_eq!(engine.selected_element(), None);
}

#[test]
fn delete_clears_selection_and_is_undoable() {
    let mut engine = engine_with_template();
    engine.select_template("boda");
    let text_id = engine.canvas().elements()[1].id;

    engine.select(Some(text_id));
    engine.delete_selected();
    assert!(engine.canvas().get(text_id).is_none());
    assert_eq!(engine.selected_id(), None);

    engine.undo();
    assert!(engine.canvas().get(text_id).is_some(), "delete must be undoable");
}

#[test]
fn front_back_layering_through_the_engine() {
    let mut engine = engine_with_template();
    engine.select_template("boda");
    let bg_id = engine.canvas().elements()[0].id;

    engine.select(Some(bg_id));
    engine.bring_selected_to_front();
    assert_eq!(engine.canvas().index_of(bg_id), Some(1));
    // The background now wins the hit-test everywhere it covers.
    assert_eq!(hit_test(engine.canvas(), 150.0, 110.0), Some(bg_id));

    engine.send_selected_to_back();
    assert_eq!(engine.canvas().index_of(bg_id), Some(0));
}

#[test]
fn malformed_template_json_degrades_to_empty_canvas() {
    let mut engine = EditorEngine::new(EditorConfig::default());
    engine.add_text_element(&Default::default());

    engine.load_template_value(&serde_json::json!({ "id": "broken", "elements": 42 }));
    assert!(engine.canvas().is_empty());
    // Still committed: the previous state is one undo away.
    engine.undo();
    assert_eq!(engine.canvas().len(), 1);
}
