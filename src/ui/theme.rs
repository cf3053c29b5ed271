//! Dark theme for tubetui
//!
//! Central palette and style helpers so widgets never pick ad-hoc colors.

use ratatui::style::{Color, Modifier, Style};

/// Dark palette with a single warm accent
pub struct Theme;

impl Theme {
    /// Background: near-black
    pub const BACKGROUND: Color = Color::Rgb(0x0f, 0x0f, 0x12);

    /// Primary: warm red
    pub const PRIMARY: Color = Color::Rgb(0xff, 0x45, 0x4f);

    /// Accent: amber
    pub const ACCENT: Color = Color::Rgb(0xff, 0xb8, 0x3d);

    /// Text: soft white
    pub const TEXT: Color = Color::Rgb(0xe6, 0xe6, 0xe6);

    /// Dim: muted gray
    pub const DIM: Color = Color::Rgb(0x55, 0x55, 0x60);

    /// Success: green
    pub const SUCCESS: Color = Color::Rgb(0x3d, 0xd6, 0x8c);

    /// Error: red
    pub const ERROR: Color = Color::Rgb(0xff, 0x33, 0x4d);

    /// Border (dim)
    pub const BORDER: Color = Color::Rgb(0x3a, 0x3a, 0x44);

    /// Border when focused
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::SLOW_BLINK)
    }

    pub fn keybind() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::DIM)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }
}
