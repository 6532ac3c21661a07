//! Segment and rule form modals

use super::section_label;
use crate::app::forms::COLOR_PRESETS;
use crate::app::ui_components::{
    card_container, error_text_input, primary_button, secondary_button, swatch_button,
    themed_pick_list, themed_pick_list_menu, themed_text_input,
};
use crate::app::{FormErrors, Message, RuleForm, SegmentForm};
use crate::theme::{AppTheme, parse_css_hex, segment_color};
use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use netsketch::core::network::{Action, Protocol};

/// Labeled text field with its validation message underneath
fn text_field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    error: Option<&'a String>,
    on_input: fn(String) -> Message,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let has_error = error.is_some();
    let input = text_input(placeholder, value)
        .on_input(on_input)
        .padding(8)
        .style(move |_, status| {
            if has_error {
                error_text_input(theme, status)
            } else {
                themed_text_input(theme, status)
            }
        });

    let mut field = column![section_label(label, theme), input].spacing(4);
    if let Some(msg) = error {
        field = field.push(text(msg).size(12).color(theme.danger));
    }
    field.into()
}

fn form_buttons<'a>(
    submit_label: &'a str,
    on_submit: Message,
    on_cancel: Message,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    row![
        Space::new().width(Length::Fill),
        button(text("Cancel").size(14))
            .padding([8, 16])
            .on_press(on_cancel)
            .style(move |_, status| secondary_button(theme, status)),
        button(text(submit_label).size(14))
            .padding([8, 16])
            .on_press(on_submit)
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(8)
    .into()
}

fn form_card<'a>(
    title: &'a str,
    subtitle: &'a str,
    body: Element<'a, Message>,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    container(
        column![
            column![
                text(title).size(22).color(theme.info),
                text(subtitle).size(12).color(theme.fg_muted),
            ]
            .spacing(4),
            body,
        ]
        .spacing(20),
    )
    .padding(24)
    .width(480)
    .style(move |_| card_container(theme))
    .into()
}

pub fn view_segment_form<'a>(
    form: &'a SegmentForm,
    errors: Option<&'a FormErrors>,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let editing = form.id.is_some();
    let (title, submit) = if editing {
        ("Edit Segment", "Update")
    } else {
        ("New Network Segment", "Create")
    };

    let swatches = row(COLOR_PRESETS.iter().map(|&preset| {
        let fill = parse_css_hex(preset).unwrap_or(theme.accent);
        let selected = form.color.trim().eq_ignore_ascii_case(preset);
        button(Space::new().width(20).height(20))
            .padding(0)
            .on_press(Message::SegmentFormColorChanged(preset.to_string()))
            .style(move |_, status| swatch_button(fill, selected, theme, status))
            .into()
    }))
    .spacing(8)
    .align_y(Alignment::Center);

    let current = segment_color(theme, &form.color);
    let color_row = row![
        container(Space::new().width(32).height(32)).style(move |_| container::Style {
            background: Some(current.into()),
            border: iced::Border {
                color: theme.border_strong,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }),
        text_field(
            "COLOR",
            "#3b82f6",
            &form.color,
            errors.and_then(|e| e.color.as_ref()),
            Message::SegmentFormColorChanged,
            theme,
        ),
    ]
    .spacing(12)
    .align_y(Alignment::End);

    let body = column![
        text_field(
            "NAME",
            "e.g. DMZ",
            &form.name,
            errors.and_then(|e| e.name.as_ref()),
            Message::SegmentFormNameChanged,
            theme,
        ),
        text_field(
            "CIDR",
            "e.g. 10.0.1.0/24",
            &form.cidr,
            errors.and_then(|e| e.cidr.as_ref()),
            Message::SegmentFormCidrChanged,
            theme,
        ),
        text_field(
            "ROLE",
            "e.g. Public Zone",
            &form.role,
            errors.and_then(|e| e.role.as_ref()),
            Message::SegmentFormRoleChanged,
            theme,
        ),
        color_row,
        swatches,
        form_buttons(
            submit,
            Message::SaveSegmentForm,
            Message::CancelSegmentForm,
            theme
        ),
    ]
    .spacing(14)
    .into();

    form_card(title, "Describe a logical network zone.", body, theme)
}

pub fn view_rule_form<'a>(
    form: &'a RuleForm,
    errors: Option<&'a FormErrors>,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let protocol = column![
        section_label("PROTOCOL", theme),
        pick_list(
            Protocol::ALL,
            Some(form.protocol),
            Message::RuleFormProtocolChanged
        )
        .width(Length::Fill)
        .padding(8)
        .style(move |_, status| themed_pick_list(theme, status))
        .menu_style(move |_| themed_pick_list_menu(theme)),
    ]
    .spacing(4)
    .width(Length::FillPortion(1));

    let action = column![
        section_label("ACTION", theme),
        pick_list(Action::ALL, Some(form.action), Message::RuleFormActionChanged)
            .width(Length::Fill)
            .padding(8)
            .style(move |_, status| themed_pick_list(theme, status))
            .menu_style(move |_| themed_pick_list_menu(theme)),
    ]
    .spacing(4)
    .width(Length::FillPortion(1));

    let body = column![
        text_field(
            "NAME",
            "e.g. Allow HTTPS to DMZ",
            &form.name,
            errors.and_then(|e| e.name.as_ref()),
            Message::RuleFormNameChanged,
            theme,
        ),
        row![
            container(text_field(
                "SOURCE",
                "CIDR or ANY",
                &form.source,
                errors.and_then(|e| e.source.as_ref()),
                Message::RuleFormSourceChanged,
                theme,
            ))
            .width(Length::FillPortion(1)),
            container(text_field(
                "DESTINATION",
                "CIDR or ANY",
                &form.destination,
                errors.and_then(|e| e.destination.as_ref()),
                Message::RuleFormDestinationChanged,
                theme,
            ))
            .width(Length::FillPortion(1)),
        ]
        .spacing(12),
        row![
            protocol,
            container(text_field(
                "PORT",
                "e.g. 443",
                &form.port,
                errors.and_then(|e| e.port.as_ref()),
                Message::RuleFormPortChanged,
                theme,
            ))
            .width(Length::FillPortion(1)),
        ]
        .spacing(12),
        row![
            action,
            container(text_field(
                "PRIORITY",
                "100",
                &form.priority,
                errors.and_then(|e| e.priority.as_ref()),
                Message::RuleFormPriorityChanged,
                theme,
            ))
            .width(Length::FillPortion(1)),
        ]
        .spacing(12),
        text("Lower priority values are evaluated first.")
            .size(12)
            .color(theme.fg_muted),
        form_buttons(
            "Create",
            Message::SaveRuleForm,
            Message::CancelRuleForm,
            theme
        ),
    ]
    .spacing(14)
    .into();

    form_card("New Firewall Rule", "Define a traffic policy.", body, theme)
}
