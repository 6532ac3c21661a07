use crate::app::{Banner, BannerSeverity, Message};
use crate::theme::AppTheme;
use iced::widget::{button, container, pick_list, row, rule, scrollable, text, text_input};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Vector};

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

pub fn sidebar_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_sidebar.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Card bordered in a segment's own color
pub fn accent_card_container(theme: &AppTheme, accent: Color) -> container::Style {
    container::Style {
        border: Border {
            color: accent,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..card_container(theme)
    }
}

pub fn section_header_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.02,
                ..theme.fg_primary
            }
            .into(),
        ),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small rounded label, e.g. ALLOW/DENY or protocol
pub fn badge_container(color: Color) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.15, ..color }.into()),
        text_color: Some(color),
        border: Border {
            color: Color { a: 0.4, ..color },
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

/// Code block for the export preview
pub fn preview_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.canvas_bg.into()),
        text_color: Some(theme.fg_secondary),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

fn scale(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        ..color
    }
}

fn filled_button(
    fill: Color,
    text_color: Color,
    theme: &AppTheme,
    status: button::Status,
) -> button::Style {
    let base = button::Style {
        background: Some(fill.into()),
        text_color,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(scale(fill, 1.08).into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 2.5),
                blur_radius: 4.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(scale(fill, 0.95).into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Color { a: 0.5, ..fill }.into()),
            text_color: Color {
                a: 0.5,
                ..text_color
            },
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme.accent, theme.fg_on_accent, theme, status)
}

pub fn danger_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme.danger, theme.fg_on_accent, theme, status)
}

pub fn secondary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let mut style = filled_button(theme.bg_surface, theme.fg_primary, theme, status);
    style.border = Border {
        color: theme.border,
        width: 1.0,
        radius: 4.0.into(),
    };
    if status == button::Status::Disabled {
        style.text_color = theme.fg_muted;
    }
    style
}

/// Color swatch in the segment form; `selected` draws a ring around it
pub fn swatch_button(
    fill: Color,
    selected: bool,
    theme: &AppTheme,
    status: button::Status,
) -> button::Style {
    let ring = if selected {
        theme.fg_primary
    } else if status == button::Status::Hovered {
        theme.border_strong
    } else {
        Color::TRANSPARENT
    };
    button::Style {
        background: Some(fill.into()),
        border: Border {
            color: ring,
            width: 2.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn tab_button(theme: &AppTheme, active: bool, status: button::Status) -> button::Style {
    let background = match (active, status) {
        (true, _) => theme.bg_active,
        (false, button::Status::Hovered) => theme.bg_hover,
        (false, _) => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: if active {
            theme.fg_primary
        } else {
            theme.fg_secondary
        },
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Text input styling with theme-aware colors
pub fn themed_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        icon: theme.fg_muted,
        placeholder: theme.fg_muted,
        value: theme.fg_primary,
        selection: theme.accent,
    };
    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            background: theme.bg_hover.into(),
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                radius: 4.0.into(),
            },
            icon: theme.accent,
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: Color { a: 0.5, ..theme.bg_elevated }.into(),
            value: theme.fg_muted,
            ..base
        },
    }
}

/// Text input with a red border for a field that failed validation
pub fn error_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    let style = themed_text_input(theme, status);
    text_input::Style {
        border: Border {
            color: theme.danger,
            ..style.border
        },
        ..style
    }
}

/// Pick list (dropdown) styling with theme-aware colors
pub fn themed_pick_list(theme: &AppTheme, status: pick_list::Status) -> pick_list::Style {
    let base = pick_list::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        handle_color: theme.fg_secondary,
        placeholder_color: theme.fg_muted,
        text_color: theme.fg_primary,
    };
    match status {
        pick_list::Status::Active => base,
        pick_list::Status::Hovered => pick_list::Style {
            background: theme.bg_hover.into(),
            handle_color: theme.fg_primary,
            ..base
        },
        pick_list::Status::Opened { .. } => pick_list::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                radius: 4.0.into(),
            },
            handle_color: theme.accent,
            ..base
        },
    }
}

/// Pick list menu styling (the dropdown menu itself)
pub fn themed_pick_list_menu(theme: &AppTheme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border_strong,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        text_color: theme.fg_primary,
        selected_background: theme.bg_hover.into(),
        selected_text_color: theme.fg_primary,
    }
}

/// Semi-transparent modal backdrop
pub fn modal_backdrop(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.85,
                ..theme.bg_base
            }
            .into(),
        ),
        ..Default::default()
    }
}

/// Themed horizontal rule (separator line)
pub fn themed_horizontal_rule(theme: &AppTheme) -> rule::Style {
    rule::Style {
        color: theme.border,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}

/// Themed scrollable with visible scrollbars
pub fn themed_scrollable(theme: &AppTheme, status: scrollable::Status) -> scrollable::Style {
    let scroller_color = match status {
        scrollable::Status::Active { .. } => theme.fg_muted,
        scrollable::Status::Hovered {
            is_horizontal_scrollbar_hovered,
            is_vertical_scrollbar_hovered,
            ..
        } => {
            if is_horizontal_scrollbar_hovered || is_vertical_scrollbar_hovered {
                theme.fg_secondary
            } else {
                theme.fg_muted
            }
        }
        scrollable::Status::Dragged { .. } => theme.accent,
    };

    let rail = scrollable::Rail {
        background: Some(theme.bg_elevated.into()),
        border: Border {
            color: theme.border,
            width: 0.0,
            radius: 4.0.into(),
        },
        scroller: scrollable::Scroller {
            background: scroller_color.into(),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: theme.bg_surface.into(),
            border: Border {
                color: theme.border,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            icon: theme.fg_primary,
        },
    }
}

/// Floating notification with a dismiss button
pub fn notification_banner<'a>(
    banner: &'a Banner,
    theme: &'a AppTheme,
    index: usize,
) -> Element<'a, Message> {
    let (accent, icon) = match banner.severity {
        BannerSeverity::Success => (theme.success, "✓"),
        BannerSeverity::Error => (theme.danger, "!"),
    };

    container(
        row![
            text(icon).size(16).color(accent),
            text(&banner.message).size(13).color(theme.fg_primary),
            button(text("×").size(14))
                .padding([0, 6])
                .on_press(Message::DismissBanner(index))
                .style(move |_, status| secondary_button(theme, status)),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding([10, 14])
    .width(Length::Shrink)
    .max_width(420)
    .style(move |_| container::Style {
        border: Border {
            color: accent,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..card_container(theme)
    })
    .into()
}
