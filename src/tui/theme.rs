//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Movie card colors
    pub title: Color,
    pub label: Color,
    pub rating: Color,
    pub not_rated: Color,
    pub favorite: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub border_error: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub error: Color,
    pub button: Color,
    pub button_disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::White,
            label: Color::Cyan,
            rating: Color::Yellow,
            not_rated: GREY,
            favorite: Color::Magenta,

            border: GREY,
            border_focused: Color::Blue,
            border_error: Color::Red,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            error: Color::Red,
            button: Color::Blue,
            button_disabled: GREY,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
