//! Checkbox component for TUI

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Marker text for a checkbox state
pub fn checkbox_marker(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Build a single checkbox line; the highlight only shows while the group has focus
pub fn checkbox_line(
    label: &'static str,
    checked: bool,
    is_highlighted: bool,
    is_focused: bool,
) -> Line<'static> {
    let marker_style = if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label_style = if is_focused && is_highlighted {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if is_focused {
        Style::default()
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(checkbox_marker(checked), marker_style),
        Span::raw(" "),
        Span::styled(label, label_style),
    ])
}
