use super::page_header;
use crate::app::ui_components::{
    badge_container, card_container, danger_button, primary_button, themed_horizontal_rule,
    themed_scrollable,
};
use crate::app::{Message, State};
use crate::theme::AppTheme;
use iced::widget::{Space, button, center, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};
use netsketch::core::network::{Action, FirewallRule};
use netsketch::core::ordering::by_priority;

pub fn view_rules(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let header = row![
        page_header(
            "Firewall Rules",
            "Define traffic policies between segments",
            theme
        ),
        Space::new().width(Length::Fill),
        button(text("+ Add Rule").size(14))
            .padding([8, 16])
            .on_press(Message::AddRuleClicked)
            .style(move |_, status| primary_button(theme, status)),
    ]
    .align_y(Alignment::Center);

    let rules = by_priority(state.store.rules());
    let body: Element<'_, Message> = if rules.is_empty() {
        container(center(
            column![
                text("No firewall rules yet").size(16).color(theme.fg_secondary),
                text("Add a rule to control traffic between segments")
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
        let mut list = column![column_headers(theme)].spacing(0);
        for entry in rules {
            list = list
                .push(rule::horizontal(1).style(move |_| themed_horizontal_rule(theme)))
                .push(rule_row(entry, theme));
        }

        container(
            scrollable(list.padding(iced::Padding::ZERO.right(12)))
                .style(move |_, status| themed_scrollable(theme, status)),
        )
        .padding(8)
        .width(Length::Fill)
        .style(move |_| card_container(theme))
        .into()
    };

    column![header, body].spacing(20).into()
}

const PRIORITY_WIDTH: f32 = 70.0;
const ACTION_WIDTH: f32 = 80.0;
const DELETE_WIDTH: f32 = 80.0;

fn column_headers(theme: &AppTheme) -> Element<'_, Message> {
    let label = |s: &'static str| text(s).size(11).color(theme.fg_muted);
    row![
        container(label("PRIORITY")).width(PRIORITY_WIDTH),
        container(label("NAME")).width(Length::FillPortion(3)),
        container(label("TRAFFIC")).width(Length::FillPortion(4)),
        container(label("SERVICE")).width(Length::FillPortion(2)),
        container(label("ACTION")).width(ACTION_WIDTH),
        Space::new().width(DELETE_WIDTH),
    ]
    .spacing(12)
    .padding([8, 12])
    .into()
}

fn rule_row<'a>(entry: &'a FirewallRule, theme: &'a AppTheme) -> Element<'a, Message> {
    let action_color = match entry.action {
        Action::Allow => theme.success,
        Action::Deny => theme.danger,
    };

    row![
        container(
            text(entry.priority.to_string())
                .size(13)
                .color(theme.fg_secondary)
        )
        .width(PRIORITY_WIDTH),
        container(text(&entry.name).size(14).color(theme.fg_primary))
            .width(Length::FillPortion(3)),
        container(
            text(format!("{} → {}", entry.source, entry.destination))
                .size(13)
                .color(theme.fg_secondary)
        )
        .width(Length::FillPortion(4)),
        container(
            text(format!("{}/{}", entry.protocol, entry.port))
                .size(13)
                .color(theme.fg_secondary)
        )
        .width(Length::FillPortion(2)),
        container(
            container(text(entry.action.to_string()).size(11))
                .padding([2, 8])
                .style(move |_| badge_container(action_color))
        )
        .width(ACTION_WIDTH),
        container(
            button(text("Delete").size(12))
                .padding([4, 10])
                .on_press(Message::DeleteRule(entry.id))
                .style(move |_, status| danger_button(theme, status))
        )
        .width(DELETE_WIDTH),
    ]
    .spacing(12)
    .padding([10, 12])
    .align_y(Alignment::Center)
    .into()
}
