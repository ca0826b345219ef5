//! User interface rendering.

mod keymap_bar;
mod plot;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    plot::draw_plot(f, app, chunks[0], &colors);
    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}
