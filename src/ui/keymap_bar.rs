//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let keymap_text =
        "q:quit | h/l:step stop | gg/G:first/last | y:copy summary | T:theme | ?:help";

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.status_fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
