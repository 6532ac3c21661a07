//! Dashboard page: summary counts, topology map and segment overview

use super::{canvas, page_header, section_label};
use crate::app::ui_components::{card_container, themed_scrollable};
use crate::app::{Message, State};
use crate::theme::{AppTheme, segment_color};
use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Alignment, Color, Element, Length};
use netsketch::core::stats::DashboardStats;

pub fn view_dashboard(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let stats = DashboardStats::collect(state.store.segments(), state.store.rules());

    let stat_row = row![
        stat_card("Network Segments", stats.segments, theme.accent, theme),
        stat_card("Firewall Rules", stats.rules, theme.info, theme),
        stat_card("Active Connections", stats.allowed, theme.success, theme),
        stat_card("Blocked Rules", stats.denied, theme.danger, theme),
    ]
    .spacing(16);

    let topology = container(
        column![
            section_label("NETWORK TOPOLOGY", theme),
            canvas::view_topology(state.store.segments(), &state.drag, theme),
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(move |_| card_container(theme));

    let overview = container(
        column![
            section_label("SEGMENTS OVERVIEW", theme),
            segment_overview(state, theme),
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(move |_| card_container(theme));

    scrollable(
        column![
            page_header(
                "Dashboard",
                "Overview of your network segmentation",
                theme
            ),
            stat_row,
            topology,
            overview,
        ]
        .spacing(20)
        .padding(iced::Padding::ZERO.right(12)),
    )
    .style(move |_, status| themed_scrollable(theme, status))
    .into()
}

fn stat_card<'a>(
    label: &'a str,
    value: usize,
    accent: Color,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    container(
        column![
            text(label).size(12).color(theme.fg_muted),
            text(value.to_string()).size(28).color(accent),
        ]
        .spacing(6),
    )
    .padding(16)
    .width(Length::Fill)
    .style(move |_| card_container(theme))
    .into()
}

fn segment_overview<'a>(state: &'a State, theme: &'a AppTheme) -> Element<'a, Message> {
    if state.store.segments().is_empty() {
        return text("No segments configured yet")
            .size(13)
            .color(theme.fg_muted)
            .into();
    }

    column(state.store.segments().iter().map(|segment| {
        let swatch = segment_color(theme, &segment.color);
        row![
            container(Space::new().width(12).height(12)).style(move |_| container::Style {
                background: Some(swatch.into()),
                border: iced::Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
            text(&segment.name).size(14).color(theme.fg_primary),
            Space::new().width(Length::Fill),
            text(&segment.cidr).size(13).color(theme.fg_secondary),
            text(&segment.role).size(12).color(theme.fg_muted),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(8)
    .into()
}
