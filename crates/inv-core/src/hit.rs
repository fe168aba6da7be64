//! Hit testing: point → element lookup.
//!
//! Scans the element sequence from top-most to bottom-most (reverse paint
//! order) and returns the first element whose bounding box contains the
//! point. Later-added or raised elements visually occlude earlier ones, so
//! top-most-wins is the required tie-break.

use crate::canvas::CanvasState;
use crate::id::ElementId;

/// Find the top-most element at `(px, py)`, or `None` on a miss.
pub fn hit_test(state: &CanvasState, px: f32, py: f32) -> Option<ElementId> {
    state
        .elements()
        .iter()
        .rev()
        .find(|e| e.contains(px, py))
        .map(|e| e.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use crate::model::{Color, ElementPatch};
    use pretty_assertions::assert_eq;

    fn patch_at(x: f32, y: f32, w: f32, h: f32) -> ElementPatch {
        ElementPatch {
            x: Some(x),
            y: Some(y),
            width: Some(w),
            height: Some(h),
            ..Default::default()
        }
    }

    #[test]
    fn miss_returns_none() {
        let mut canvas = CanvasState::new(800.0, 1200.0);
        canvas.add_element(factory::text(&patch_at(0.0, 0.0, 10.0, 10.0))).unwrap();
        assert_eq!(hit_test(&canvas, 500.0, 500.0), None);
    }

    #[test]
    fn empty_canvas_misses() {
        let canvas = CanvasState::new(800.0, 1200.0);
        assert_eq!(hit_test(&canvas, 0.0, 0.0), None);
    }

    #[test]
    fn topmost_wins_on_overlap() {
        let mut canvas = CanvasState::new(800.0, 1200.0);
        let below = canvas.add_element(factory::text(&patch_at(0.0, 0.0, 100.0, 100.0))).unwrap();
        let above =
            canvas.add_element(factory::sticker("⭐", &patch_at(50.0, 50.0, 100.0, 100.0))).unwrap();

        // Overlap region → the higher index wins.
        assert_eq!(hit_test(&canvas, 75.0, 75.0), Some(above));
        // Only the lower element covers this point.
        assert_eq!(hit_test(&canvas, 10.0, 10.0), Some(below));
    }

    #[test]
    fn reordering_changes_the_winner() {
        let mut canvas = CanvasState::new(800.0, 1200.0);
        let a = canvas.add_element(factory::text(&patch_at(0.0, 0.0, 100.0, 100.0))).unwrap();
        let b = canvas.add_element(factory::sticker("⭐", &patch_at(0.0, 0.0, 100.0, 100.0))).unwrap();

        assert_eq!(hit_test(&canvas, 50.0, 50.0), Some(b));
        canvas.move_up(a);
        assert_eq!(hit_test(&canvas, 50.0, 50.0), Some(a));
    }

    #[test]
    fn background_catches_what_nothing_else_does() {
        let mut canvas = CanvasState::new(800.0, 1200.0);
        let bg = canvas.add_element(factory::background(Color::WHITE, 800.0, 1200.0)).unwrap();
        canvas.add_element(factory::text(&patch_at(100.0, 100.0, 50.0, 50.0))).unwrap();
        assert_eq!(hit_test(&canvas, 700.0, 1100.0), Some(bg));
    }
}
