//! Topology canvas drag handlers
//!
//! The canvas widget reports raw pointer positions; these handlers drive the
//! drag state machine and write each new position through the store.

use crate::app::State;
use netsketch::core::network::{Position, SegmentPatch};
use netsketch::core::topology::CanvasSize;

pub(crate) fn handle_canvas_pressed(state: &mut State, position: Position) {
    state.drag.press(state.store.segments(), position);
}

pub(crate) fn handle_canvas_moved(state: &mut State, position: Position, canvas: CanvasSize) {
    if let Some((id, target)) = state.drag.drag(position, canvas) {
        state.store.update_segment(id, SegmentPatch::position(target));
    }
}

/// Ends any drag; the preview picks up the final position here rather than on
/// every move
pub(crate) fn handle_canvas_released(state: &mut State) {
    if state.drag.release().is_some() {
        state.update_cached_preview();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state_with_segment;
    use netsketch::core::topology::DragState;

    #[test]
    fn test_drag_moves_and_clamps() {
        let (mut state, id) = create_test_state_with_segment();
        // Card sits at (100, 100); grab it 10px in
        handle_canvas_pressed(&mut state, Position::new(110.0, 110.0));
        assert_eq!(state.drag.dragging(), Some(id));

        let canvas = CanvasSize::new(600.0, 600.0);
        handle_canvas_moved(&mut state, Position::new(310.0, 210.0), canvas);
        assert_eq!(
            state.store.segment(id).unwrap().position(),
            Position::new(300.0, 200.0)
        );

        handle_canvas_moved(&mut state, Position::new(710.0, 210.0), canvas);
        assert_eq!(state.store.segment(id).unwrap().position_x, 450.0);

        handle_canvas_moved(&mut state, Position::new(-40.0, 210.0), canvas);
        assert_eq!(state.store.segment(id).unwrap().position_x, 0.0);

        handle_canvas_released(&mut state);
        assert_eq!(state.drag, DragState::Idle);
        assert!(state.cached_preview.contains("\"position_x\": 0.0"));
    }

    #[test]
    fn test_move_without_press_does_nothing() {
        let (mut state, id) = create_test_state_with_segment();
        handle_canvas_moved(
            &mut state,
            Position::new(400.0, 400.0),
            CanvasSize::new(800.0, 600.0),
        );
        assert_eq!(
            state.store.segment(id).unwrap().position(),
            Position::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_press_on_empty_area_stays_idle() {
        let (mut state, _) = create_test_state_with_segment();
        handle_canvas_pressed(&mut state, Position::new(5.0, 5.0));
        assert_eq!(state.drag, DragState::Idle);
    }
}
