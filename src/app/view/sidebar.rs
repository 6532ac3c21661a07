use crate::app::ui_components::{sidebar_container, tab_button, themed_horizontal_rule};
use crate::app::{Message, State, Tab};
use iced::widget::{Space, button, column, container, row, rule, text};
use iced::{Alignment, Element, Length};
use strum::IntoEnumIterator;

pub fn view_sidebar(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let branding = column![
        text("NetSketch").size(22).color(theme.fg_primary),
        text("Network Segmentation").size(12).color(theme.fg_muted),
    ]
    .spacing(2);

    let tabs = column(Tab::iter().map(|tab| {
        let active = state.active_tab == tab;
        let badge = match tab {
            Tab::Segments => Some(state.store.segments().len()),
            Tab::Rules => Some(state.store.rules().len()),
            Tab::Dashboard | Tab::Export => None,
        };
        let mut label = row![text(tab.to_string()).size(14)].align_y(Alignment::Center);
        if let Some(count) = badge {
            label = label
                .push(Space::new().width(Length::Fill))
                .push(text(count.to_string()).size(12).color(theme.fg_muted));
        }

        button(label)
            .width(Length::Fill)
            .padding([8, 12])
            .on_press(Message::TabChanged(tab))
            .style(move |_, status| tab_button(theme, active, status))
            .into()
    }))
    .spacing(4);

    let footer = text(format!("v{}", env!("CARGO_PKG_VERSION")))
        .size(11)
        .color(theme.fg_muted);

    container(
        column![
            branding,
            rule::horizontal(1).style(move |_| themed_horizontal_rule(theme)),
            tabs,
            Space::new().height(Length::Fill),
            footer,
        ]
        .spacing(16),
    )
    .width(220)
    .height(Length::Fill)
    .padding(16)
    .style(move |_| sidebar_container(theme))
    .into()
}
