use super::page_header;
use crate::app::ui_components::{
    accent_card_container, card_container, danger_button, primary_button, secondary_button,
    themed_scrollable,
};
use crate::app::{Message, State};
use crate::theme::{AppTheme, segment_color};
use iced::widget::{Space, button, center, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use netsketch::core::network::NetworkSegment;

pub fn view_segments(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let header = row![
        page_header(
            "Network Segments",
            "Manage your network zones and subnets",
            theme
        ),
        Space::new().width(Length::Fill),
        button(text("+ Add Segment").size(14))
            .padding([8, 16])
            .on_press(Message::AddSegmentClicked)
            .style(move |_, status| primary_button(theme, status)),
    ]
    .align_y(Alignment::Center);

    let segments = state.store.segments();
    let body: Element<'_, Message> = if segments.is_empty() {
        container(center(
            column![
                text("No network segments yet").size(16).color(theme.fg_secondary),
                text("Create a segment to start sketching your network")
                    .size(13)
                    .color(theme.fg_muted),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        ))
        .height(240)
        .width(Length::Fill)
        .style(move |_| card_container(theme))
        .into()
    } else {
        scrollable(
            column(segments.iter().map(|segment| segment_card(segment, theme)))
                .spacing(12)
                .padding(iced::Padding::ZERO.right(12)),
        )
        .style(move |_, status| themed_scrollable(theme, status))
        .height(Length::Fill)
        .into()
    };

    column![header, body].spacing(20).into()
}

fn segment_card<'a>(segment: &'a NetworkSegment, theme: &'a AppTheme) -> Element<'a, Message> {
    let accent = segment_color(theme, &segment.color);

    let details = column![
        text(&segment.name).size(17).color(theme.fg_primary),
        text(&segment.cidr).size(13).color(accent),
        text(&segment.role).size(12).color(theme.fg_muted),
    ]
    .spacing(4);

    let actions = row![
        button(text("Edit").size(13))
            .padding([6, 12])
            .on_press(Message::EditSegmentClicked(segment.id))
            .style(move |_, status| secondary_button(theme, status)),
        button(text("Delete").size(13))
            .padding([6, 12])
            .on_press(Message::DeleteSegment(segment.id))
            .style(move |_, status| danger_button(theme, status)),
    ]
    .spacing(8);

    container(
        row![
            container(Space::new().width(4).height(48)).style(move |_| container::Style {
                background: Some(accent.into()),
                border: iced::Border {
                    radius: 2.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
            details,
            Space::new().width(Length::Fill),
            actions,
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(move |_| accent_card_container(theme, accent))
    .into()
}
