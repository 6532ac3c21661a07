use super::{page_header, section_label};
use crate::app::ui_components::{
    card_container, preview_container, primary_button, tab_button, themed_scrollable,
};
use crate::app::{Message, State};
use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Font, Length};
use netsketch::core::export::ExportFormat;

pub fn view_export(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let format_buttons = row(ExportFormat::ALL.iter().map(|&format| {
        let active = state.export_format == format;
        button(text(format.to_string()).size(13))
            .padding([6, 16])
            .on_press(Message::ExportFormatChanged(format))
            .style(move |_, status| tab_button(theme, active, status))
            .into()
    }))
    .spacing(8);

    let export_button = button(text("Export Configuration").size(14))
        .padding([8, 16])
        .on_press(Message::ExportClicked)
        .style(move |_, status| primary_button(theme, status));

    let controls = container(
        column![
            section_label("FORMAT", theme),
            row![
                format_buttons,
                Space::new().width(Length::Fill),
                export_button
            ]
            .align_y(Alignment::Center),
            text(format!(
                "{} segments and {} rules will be written to a .{} file",
                state.store.segments().len(),
                state.store.rules().len(),
                state.export_format.extension()
            ))
            .size(12)
            .color(theme.fg_muted),
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(move |_| card_container(theme));

    let preview = container(
        scrollable(
            container(
                text(&state.cached_preview)
                    .font(Font::MONOSPACE)
                    .size(13),
            )
            .padding(12)
            .width(Length::Fill),
        )
        .style(move |_, status| themed_scrollable(theme, status))
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| preview_container(theme));

    column![
        page_header(
            "Export Configuration",
            "Download your segments and rules as a configuration file",
            theme
        ),
        controls,
        section_label("PREVIEW", theme),
        preview,
    ]
    .spacing(16)
    .into()
}
