//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a full-width bordered button with centered label
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let (border_style, text_style) = button_styles(is_selected, is_enabled);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

fn button_styles(is_selected: bool, is_enabled: bool) -> (Style, Style) {
    if !is_enabled {
        let dimmed = Style::default().fg(Color::DarkGray);
        return (dimmed, dimmed.add_modifier(Modifier::DIM));
    }

    if is_selected {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::Gray), Style::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_ignores_selection() {
        assert_eq!(button_styles(true, false), button_styles(false, false));
    }

    #[test]
    fn test_selected_is_highlighted() {
        let (border, text) = button_styles(true, true);
        assert_eq!(border.fg, Some(Color::Cyan));
        assert_eq!(text.bg, Some(Color::Cyan));
    }
}
