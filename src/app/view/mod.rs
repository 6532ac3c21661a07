//! UI rendering module for NetSketch
//!
//! Split into one submodule per page plus the shared form modal pieces.

mod canvas;
mod dashboard;
mod export;
mod forms;
mod rules;
mod segments;
mod sidebar;

use crate::app::ui_components::{
    main_container, modal_backdrop, notification_banner, section_header_container,
};
use crate::app::{Message, State, Tab};
use crate::theme::AppTheme;
use iced::widget::{center, column, container, opaque, row, stack, text};
use iced::{Element, Length, alignment};

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let page: Element<'_, Message> = match state.active_tab {
        Tab::Dashboard => dashboard::view_dashboard(state),
        Tab::Segments => segments::view_segments(state),
        Tab::Rules => rules::view_rules(state),
        Tab::Export => export::view_export(state),
    };

    let content = row![
        sidebar::view_sidebar(state),
        container(page)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill),
    ];

    let base = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme));

    let overlay = if let Some(form) = &state.segment_form {
        Some(forms::view_segment_form(
            form,
            state.form_errors.as_ref(),
            theme,
        ))
    } else {
        state
            .rule_form
            .as_ref()
            .map(|form| forms::view_rule_form(form, state.form_errors.as_ref(), theme))
    };

    // Modal overlay layer (fades base content, blocks clicks with opaque)
    // Always use stack! to keep the widget tree structure consistent
    let with_overlay: Element<'_, Message> = if let Some(overlay) = overlay {
        stack![
            base,
            opaque(center(overlay).style(move |_| modal_backdrop(theme)))
        ]
        .into()
    } else {
        stack![base, iced::widget::Space::new()].into()
    };

    // Banner overlay layer (top-right, above the modal backdrop)
    if state.banners.is_empty() {
        stack![with_overlay, iced::widget::Space::new()].into()
    } else {
        let banner_column = column(
            state
                .banners
                .iter()
                .enumerate()
                .map(|(index, banner)| notification_banner(banner, theme, index))
                .collect::<Vec<_>>(),
        )
        .spacing(8)
        .width(Length::Shrink)
        .padding(16);

        stack![
            with_overlay,
            container(banner_column)
                .width(Length::Fill)
                .height(Length::Shrink)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
        ]
        .into()
    }
}

/// Page title with an optional subtitle
fn page_header<'a>(
    title: &'a str,
    subtitle: &'a str,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    column![
        text(title).size(24).color(theme.fg_primary),
        text(subtitle).size(13).color(theme.fg_muted),
    ]
    .spacing(4)
    .into()
}

/// Small caps label above a group of widgets
fn section_label<'a>(label: &'a str, theme: &'a AppTheme) -> Element<'a, Message> {
    container(text(label).size(11).color(theme.fg_muted))
        .padding([2, 6])
        .style(move |_| section_header_container(theme))
        .into()
}
