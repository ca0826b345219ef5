//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading/title text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Stop marker color.
    pub stop: Color,
    /// Path segment color.
    pub path: Color,
    /// Highlighted stop color.
    pub highlight: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                stop: Color::Rgb(251, 73, 52),
                path: Color::Rgb(131, 165, 152),
                highlight: Color::Rgb(250, 189, 47),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                stop: Color::Rgb(157, 0, 6),
                path: Color::Rgb(7, 102, 120),
                highlight: Color::Rgb(181, 118, 20),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}
