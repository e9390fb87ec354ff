//! Border and color helpers shared by the select control and its menu.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// Color used for invalid controls, regardless of the focus color.
pub const INVALID_COLOR: Color = Color::Red;

/// Border color for a control in the given state.
///
/// Invalid wins over focus; a disabled control is always dimmed.
pub fn border_color(focused: bool, invalid: bool, enabled: bool, accent: Color) -> Color {
    if !enabled {
        Color::DarkGray
    } else if invalid {
        INVALID_COLOR
    } else if focused {
        accent
    } else {
        Color::Gray
    }
}

/// A bordered block titled `title`, colored with [`border_color`].
pub fn focus_block(title: &str, focused: bool, invalid: bool, enabled: bool, accent: Color) -> Block<'_> {
    let mut block = Block::new()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused, invalid, enabled, accent)));
    if !title.is_empty() {
        block = block.title(title);
    }
    block
}

/// Style for text inside a disabled control.
pub fn dimmed() -> Style {
    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_precedence() {
        assert_eq!(border_color(true, true, false, Color::Blue), Color::DarkGray);
        assert_eq!(border_color(true, true, true, Color::Blue), INVALID_COLOR);
        assert_eq!(border_color(true, false, true, Color::Magenta), Color::Magenta);
        assert_eq!(border_color(false, false, true, Color::Magenta), Color::Gray);
    }
}
