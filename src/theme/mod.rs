use iced::Color;

/// Complete theme definition with semantic color naming
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // === Background Layers (progressive depth) ===
    pub bg_base: Color,     // App background (deepest)
    pub bg_sidebar: Color,  // Sidebar background
    pub bg_surface: Color,  // Cards, containers
    pub bg_elevated: Color, // Inputs, buttons
    pub bg_hover: Color,    // Hover states
    pub bg_active: Color,   // Active/selected states

    // === Foreground/Text ===
    pub fg_primary: Color,   // Main text
    pub fg_secondary: Color, // Less important text
    pub fg_muted: Color,     // Disabled/placeholder text
    pub fg_on_accent: Color, // Text on accent colors

    // === Semantic Colors ===
    pub accent: Color,  // Brand/primary actions
    pub success: Color, // Positive actions/states, ALLOW
    pub danger: Color,  // Destructive actions, DENY
    pub info: Color,    // Informational

    // === Borders & Dividers ===
    pub border: Color,        // Default borders
    pub border_strong: Color, // Emphasized borders

    // === Topology canvas ===
    pub canvas_bg: Color,   // Map background
    pub canvas_grid: Color, // Grid dots
    pub canvas_link: Color, // Segment connection lines

    // === Shadows ===
    pub shadow_color: Color,
}

impl AppTheme {
    /// Creates a theme from RGB hex values for easier definition
    #[allow(clippy::too_many_arguments)]
    pub fn from_hex(
        name: &str,
        bg_base: u32,
        bg_sidebar: u32,
        bg_surface: u32,
        bg_elevated: u32,
        bg_hover: u32,
        bg_active: u32,
        fg_primary: u32,
        fg_secondary: u32,
        fg_muted: u32,
        fg_on_accent: u32,
        accent: u32,
        success: u32,
        danger: u32,
        info: u32,
        border: u32,
        border_strong: u32,
        canvas_bg: u32,
        canvas_grid: u32,
        canvas_link: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            bg_base: hex_to_color(bg_base),
            bg_sidebar: hex_to_color(bg_sidebar),
            bg_surface: hex_to_color(bg_surface),
            bg_elevated: hex_to_color(bg_elevated),
            bg_hover: hex_to_color(bg_hover),
            bg_active: hex_to_color(bg_active),
            fg_primary: hex_to_color(fg_primary),
            fg_secondary: hex_to_color(fg_secondary),
            fg_muted: hex_to_color(fg_muted),
            fg_on_accent: hex_to_color(fg_on_accent),
            accent: hex_to_color(accent),
            success: hex_to_color(success),
            danger: hex_to_color(danger),
            info: hex_to_color(info),
            border: hex_to_color(border),
            border_strong: hex_to_color(border_strong),
            canvas_bg: hex_to_color(canvas_bg),
            canvas_grid: hex_to_color(canvas_grid),
            canvas_link: Color {
                a: 0.4,
                ..hex_to_color(canvas_link)
            },
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        }
    }

    /// Tailwind slate palette
    pub fn slate() -> Self {
        Self::from_hex(
            "Slate", 0x0f172a, // bg_base
            0x111827, // bg_sidebar
            0x1e293b, // bg_surface
            0x334155, // bg_elevated
            0x3b4a61, // bg_hover
            0x1e3a8a, // bg_active
            0xf1f5f9, // fg_primary
            0xcbd5e1, // fg_secondary
            0x94a3b8, // fg_muted
            0xffffff, // fg_on_accent
            0x3b82f6, // accent
            0x10b981, // success
            0xef4444, // danger
            0x60a5fa, // info
            0x334155, // border
            0x475569, // border_strong
            0x0b1120, // canvas_bg
            0x1e293b, // canvas_grid
            0x94a3b8, // canvas_link
        )
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::slate()
    }
}

/// Converts hex color (0xRRGGBB) to iced Color
#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Parses a segment's CSS color (`#rrggbb` or `#rgb`)
pub fn parse_css_hex(s: &str) -> Option<Color> {
    let digits = s.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let hex = match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok()?,
        3 => {
            let short = u32::from_str_radix(digits, 16).ok()?;
            let (r, g, b) = ((short >> 8) & 0xF, (short >> 4) & 0xF, short & 0xF);
            (r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11
        }
        _ => return None,
    };
    Some(hex_to_color(hex))
}

/// Segment card fill, falling back to the theme accent for unparseable colors
pub fn segment_color(theme: &AppTheme, css: &str) -> Color {
    parse_css_hex(css).unwrap_or(theme.accent)
}
