//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border color for an input: errors win over focus
pub fn field_border_color(is_active: bool, has_error: bool) -> Color {
    if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw a single-line text input
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    has_error: bool,
) {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    // Keep the tail of long values visible while typing
    let inner_width = area.width.saturating_sub(3) as usize;
    let value = field.as_text();
    let visible = tail_chars(value, inner_width);

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(visible, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(field_border_color(is_active, has_error)));

    frame.render_widget(content.block(block), area);
}

/// Draw the error message line under a field (blank when valid)
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, area);
    }
}

fn tail_chars(value: &str, max: usize) -> &str {
    let count = value.chars().count();
    if count <= max {
        return value;
    }
    let skip = count - max;
    value
        .char_indices()
        .nth(skip)
        .map(|(idx, _)| &value[idx..])
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_border_wins_over_focus() {
        assert_eq!(field_border_color(true, true), Color::Red);
        assert_eq!(field_border_color(false, true), Color::Red);
        assert_eq!(field_border_color(true, false), Color::Cyan);
        assert_eq!(field_border_color(false, false), Color::DarkGray);
    }

    #[test]
    fn test_tail_chars() {
        assert_eq!(tail_chars("short", 10), "short");
        assert_eq!(tail_chars("accountant@example.com", 11), "example.com");
        assert_eq!(tail_chars("éèêë", 2), "êë");
        assert_eq!(tail_chars("abc", 0), "");
    }
}
