//! Topology canvas geometry and drag state machine
//!
//! The canvas draws every segment as a fixed-size card and connects each
//! unordered pair of cards with a line between their centers. Repositioning is
//! an explicit two-state machine:
//!
//! ```text
//!            press over card                move (pointer - offset, clamped)
//!   Idle ─────────────────────▶ Dragging ◀──────────────┐
//!    ▲                             │  └──────────────────┘
//!    └──────── release (anywhere) ─┘
//! ```
//!
//! Nothing here depends on a particular input API; the GUI translates its
//! pointer events into [`DragState::press`], [`DragState::drag`] and
//! [`DragState::release`] calls.

use crate::core::network::{NetworkSegment, Position};
use uuid::Uuid;

/// Card width in canvas units
pub const CARD_WIDTH: f64 = 150.0;

/// Card height in canvas units
pub const CARD_HEIGHT: f64 = 100.0;

/// Drawable area of the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        segment_id: Uuid,
        /// Pointer position relative to the card's top-left at press time
        offset: Position,
    },
}

impl DragState {
    /// Starts a drag if `pointer` is over a card. Ignored while a drag is
    /// already in progress. Returns the id of the grabbed segment.
    pub fn press(&mut self, segments: &[NetworkSegment], pointer: Position) -> Option<Uuid> {
        if self.is_dragging() {
            return None;
        }
        let segment = card_at(segments, pointer)?;
        *self = DragState::Dragging {
            segment_id: segment.id,
            offset: Position::new(
                pointer.x - segment.position_x,
                pointer.y - segment.position_y,
            ),
        };
        tracing::debug!("Drag started for segment {}", segment.id);
        Some(segment.id)
    }

    /// Position the dragged card should move to for the current pointer, or
    /// `None` when idle
    pub fn drag(&self, pointer: Position, canvas: CanvasSize) -> Option<(Uuid, Position)> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { segment_id, offset } => {
                let candidate = Position::new(pointer.x - offset.x, pointer.y - offset.y);
                Some((segment_id, clamp_to_canvas(candidate, canvas)))
            }
        }
    }

    /// Ends the current drag; returns the segment that was being dragged
    pub fn release(&mut self) -> Option<Uuid> {
        let released = self.dragging();
        if let Some(id) = released {
            tracing::debug!("Drag ended for segment {id}");
        }
        *self = DragState::Idle;
        released
    }

    pub fn dragging(&self) -> Option<Uuid> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { segment_id, .. } => Some(*segment_id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Keeps a card's top-left inside `[0, size - card]` on both axes
pub fn clamp_to_canvas(candidate: Position, canvas: CanvasSize) -> Position {
    Position::new(
        candidate.x.min(canvas.width - CARD_WIDTH).max(0.0),
        candidate.y.min(canvas.height - CARD_HEIGHT).max(0.0),
    )
}

/// The topmost card under `pointer`. Later segments are drawn over earlier ones.
pub fn card_at(segments: &[NetworkSegment], pointer: Position) -> Option<&NetworkSegment> {
    segments.iter().rev().find(|s| {
        pointer.x >= s.position_x
            && pointer.x <= s.position_x + CARD_WIDTH
            && pointer.y >= s.position_y
            && pointer.y <= s.position_y + CARD_HEIGHT
    })
}

pub fn card_center(segment: &NetworkSegment) -> Position {
    Position::new(
        segment.position_x + CARD_WIDTH / 2.0,
        segment.position_y + CARD_HEIGHT / 2.0,
    )
}

/// Decorative connection between two segment cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Uuid,
    pub to: Uuid,
    pub start: Position,
    pub end: Position,
}

/// One link per unordered pair of segments, n·(n−1)/2 in total
pub fn links(segments: &[NetworkSegment]) -> Vec<Link> {
    let mut links = Vec::with_capacity(segments.len() * segments.len().saturating_sub(1) / 2);
    for (i, source) in segments.iter().enumerate() {
        for target in &segments[i + 1..] {
            links.push(Link {
                from: source.id,
                to: target.id,
                start: card_center(source),
                end: card_center(target),
            });
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::network::SegmentDraft;
    use proptest::prelude::*;

    fn segment_at(x: f64, y: f64) -> NetworkSegment {
        let mut draft = SegmentDraft::new("S", "10.0.0.0/8", "Lab", 0);
        draft.position_x = x;
        draft.position_y = y;
        NetworkSegment::from_draft(Uuid::new_v4(), draft)
    }

    #[test]
    fn test_clamp_right_and_left_edges() {
        let canvas = CanvasSize::new(600.0, 600.0);
        assert_eq!(clamp_to_canvas(Position::new(700.0, 10.0), canvas).x, 450.0);
        assert_eq!(clamp_to_canvas(Position::new(-50.0, 10.0), canvas).x, 0.0);
        assert_eq!(clamp_to_canvas(Position::new(10.0, 900.0), canvas).y, 500.0);
    }

    #[test]
    fn test_clamp_canvas_smaller_than_card() {
        let canvas = CanvasSize::new(100.0, 50.0);
        assert_eq!(
            clamp_to_canvas(Position::new(30.0, 30.0), canvas),
            Position::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_press_records_offset_and_drag_keeps_it() {
        let seg = segment_at(100.0, 100.0);
        let segments = vec![seg.clone()];
        let mut state = DragState::default();

        assert_eq!(state.press(&segments, Position::new(120.0, 130.0)), Some(seg.id));
        assert_eq!(
            state,
            DragState::Dragging {
                segment_id: seg.id,
                offset: Position::new(20.0, 30.0),
            }
        );

        let (id, pos) = state
            .drag(Position::new(220.0, 230.0), CanvasSize::new(800.0, 600.0))
            .unwrap();
        assert_eq!(id, seg.id);
        assert_eq!(pos, Position::new(200.0, 200.0));
    }

    #[test]
    fn test_drag_past_edges_clamps() {
        let seg = segment_at(0.0, 0.0);
        let segments = vec![seg];
        let mut state = DragState::default();
        state.press(&segments, Position::new(0.0, 0.0));

        let canvas = CanvasSize::new(600.0, 600.0);
        assert_eq!(state.drag(Position::new(700.0, 0.0), canvas).unwrap().1.x, 450.0);
        assert_eq!(state.drag(Position::new(-50.0, 0.0), canvas).unwrap().1.x, 0.0);
    }

    #[test]
    fn test_press_on_empty_canvas_stays_idle() {
        let segments = vec![segment_at(100.0, 100.0)];
        let mut state = DragState::default();
        assert!(state.press(&segments, Position::new(10.0, 10.0)).is_none());
        assert_eq!(state, DragState::Idle);
        assert!(state.drag(Position::new(50.0, 50.0), CanvasSize::new(600.0, 600.0)).is_none());
    }

    #[test]
    fn test_second_press_while_dragging_is_ignored() {
        let a = segment_at(0.0, 0.0);
        let b = segment_at(300.0, 300.0);
        let segments = vec![a.clone(), b];
        let mut state = DragState::default();
        state.press(&segments, Position::new(10.0, 10.0));
        assert!(state.press(&segments, Position::new(310.0, 310.0)).is_none());
        assert_eq!(state.dragging(), Some(a.id));
    }

    #[test]
    fn test_release_returns_to_idle() {
        let seg = segment_at(0.0, 0.0);
        let segments = vec![seg.clone()];
        let mut state = DragState::default();
        state.press(&segments, Position::new(5.0, 5.0));
        assert_eq!(state.release(), Some(seg.id));
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn test_topmost_card_wins() {
        let below = segment_at(100.0, 100.0);
        let above = segment_at(150.0, 150.0);
        let segments = vec![below, above.clone()];
        assert_eq!(card_at(&segments, Position::new(160.0, 160.0)).unwrap().id, above.id);
    }

    #[test]
    fn test_links_connect_centers_of_every_pair() {
        let segments = vec![
            segment_at(0.0, 0.0),
            segment_at(200.0, 0.0),
            segment_at(0.0, 200.0),
        ];
        let links = links(&segments);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].start, Position::new(75.0, 50.0));
        assert_eq!(links[0].end, Position::new(275.0, 50.0));
        assert_eq!(links[2].from, segments[1].id);
        assert_eq!(links[2].to, segments[2].id);
    }

    #[test]
    fn test_links_for_zero_and_one_segment() {
        assert!(links(&[]).is_empty());
        assert!(links(&[segment_at(0.0, 0.0)]).is_empty());
    }

    proptest! {
        #[test]
        fn test_clamped_position_inside_canvas(
            x in -2000.0f64..2000.0,
            y in -2000.0f64..2000.0,
            w in 150.0f64..1600.0,
            h in 100.0f64..1200.0,
        ) {
            let pos = clamp_to_canvas(Position::new(x, y), CanvasSize::new(w, h));
            prop_assert!(pos.x >= 0.0 && pos.x <= w - CARD_WIDTH);
            prop_assert!(pos.y >= 0.0 && pos.y <= h - CARD_HEIGHT);
        }

        #[test]
        fn test_link_count_is_pair_count(n in 0usize..12) {
            let segments: Vec<NetworkSegment> = (0..n).map(|i| segment_at(i as f64, 0.0)).collect();
            prop_assert_eq!(links(&segments).len(), n * n.saturating_sub(1) / 2);
        }
    }
}
