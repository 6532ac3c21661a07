//! Topology map widget
//!
//! Draws segment cards and their pairwise links on an `iced` canvas and turns
//! pointer events into canvas messages. All drag logic lives in
//! `netsketch::core::topology`; this module only translates coordinates.

use crate::app::Message;
use crate::theme::{AppTheme, segment_color};
use iced::mouse;
use iced::widget::canvas;
use iced::widget::canvas::{Frame, LineDash, Path, Stroke};
use iced::widget::{center, container, text};
use iced::{Color, Element, Length, Point, Rectangle, Size, Vector};
use netsketch::core::network::{NetworkSegment, Position};
use netsketch::core::topology::{self, CARD_HEIGHT, CARD_WIDTH, CanvasSize, DragState};

/// Height of the map in logical pixels
pub const MAP_HEIGHT: f32 = 600.0;

/// Spacing of the background dot grid
const GRID_SPACING: f32 = 30.0;

pub fn view_topology<'a>(
    segments: &'a [NetworkSegment],
    drag: &'a DragState,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    if segments.is_empty() {
        return container(
            center(
                text("Add network segments to visualize topology")
                    .size(14)
                    .color(theme.fg_muted),
            ),
        )
        .width(Length::Fill)
        .height(MAP_HEIGHT)
        .style(move |_| container::Style {
            background: Some(theme.canvas_bg.into()),
            border: iced::Border {
                color: theme.border,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into();
    }

    canvas(TopologyMap {
        segments,
        drag,
        theme,
    })
    .width(Length::Fill)
    .height(MAP_HEIGHT)
    .into()
}

struct TopologyMap<'a> {
    segments: &'a [NetworkSegment],
    drag: &'a DragState,
    theme: &'a AppTheme,
}

fn to_position(point: Point) -> Position {
    Position::new(f64::from(point.x), f64::from(point.y))
}

fn to_point(position: Position) -> Point {
    Point::new(position.x as f32, position.y as f32)
}

fn canvas_size(bounds: Rectangle) -> CanvasSize {
    CanvasSize::new(f64::from(bounds.width), f64::from(bounds.height))
}

impl canvas::Program<Message> for TopologyMap<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let iced::Event::Mouse(mouse_event) = event else {
            return None;
        };

        match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let point = cursor.position_in(bounds)?;
                topology::card_at(self.segments, to_position(point))?;
                Some(
                    canvas::Action::publish(Message::CanvasPressed(to_position(point)))
                        .and_capture(),
                )
            }
            // Moves and releases are tracked outside the bounds too, so a drag
            // that leaves the map still clamps and still ends
            mouse::Event::CursorMoved { .. } if self.drag.is_dragging() => {
                let point = cursor.position_from(bounds.position())?;
                Some(
                    canvas::Action::publish(Message::CanvasMoved {
                        position: to_position(point),
                        canvas: canvas_size(bounds),
                    })
                    .and_capture(),
                )
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft
                if self.drag.is_dragging() =>
            {
                Some(canvas::Action::publish(Message::CanvasReleased))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let theme = self.theme;
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme.canvas_bg);
        draw_grid(&mut frame, bounds.size(), theme.canvas_grid);

        let link_stroke = Stroke {
            line_dash: LineDash {
                segments: &[5.0, 5.0],
                offset: 0,
            },
            ..Stroke::default()
                .with_color(theme.canvas_link)
                .with_width(2.0)
        };
        for link in topology::links(self.segments) {
            frame.stroke(
                &Path::line(to_point(link.start), to_point(link.end)),
                link_stroke,
            );
        }

        let dragging = self.drag.dragging();
        for segment in self.segments {
            draw_card(&mut frame, segment, dragging == Some(segment.id), theme);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.drag.is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(point) if topology::card_at(self.segments, to_position(point)).is_some() => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }
}

fn draw_grid(frame: &mut Frame, size: Size, color: Color) {
    let dots = Path::new(|builder| {
        let mut y = GRID_SPACING / 2.0;
        while y < size.height {
            let mut x = GRID_SPACING / 2.0;
            while x < size.width {
                builder.circle(Point::new(x, y), 1.0);
                x += GRID_SPACING;
            }
            y += GRID_SPACING;
        }
    });
    frame.fill(&dots, color);
}

fn draw_card(frame: &mut Frame, segment: &NetworkSegment, active: bool, theme: &AppTheme) {
    let top_left = to_point(segment.position());
    let size = Size::new(CARD_WIDTH as f32, CARD_HEIGHT as f32);
    let fill = segment_color(theme, &segment.color);

    // Drop shadow, larger while the card is lifted
    let lift = if active { 6.0 } else { 3.0 };
    frame.fill(
        &Path::rounded_rectangle(top_left + Vector::new(0.0, lift), size, 8.0.into()),
        Color {
            a: 0.35,
            ..Color::BLACK
        },
    );

    let card = Path::rounded_rectangle(top_left, size, 8.0.into());
    frame.fill(&card, fill);
    frame.stroke(
        &card,
        Stroke::default()
            .with_color(if active {
                Color::WHITE
            } else {
                Color {
                    a: 0.3,
                    ..Color::WHITE
                }
            })
            .with_width(if active { 2.0 } else { 1.0 }),
    );

    let lines = [
        (netsketch::utils::truncate_string(&segment.name, 18), 16.0, 1.0),
        (netsketch::utils::truncate_string(&segment.cidr, 20), 13.0, 0.9),
        (netsketch::utils::truncate_string(&segment.role, 20), 12.0, 0.75),
    ];
    let mut y = top_left.y + 14.0;
    for (content, font_size, alpha) in lines {
        frame.fill_text(canvas::Text {
            content,
            position: Point::new(top_left.x + 12.0, y),
            color: Color {
                a: alpha,
                ..Color::WHITE
            },
            size: font_size.into(),
            ..canvas::Text::default()
        });
        y += font_size + 10.0;
    }
}
