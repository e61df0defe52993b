//! Layout components (card placement, status bar)

use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FocusTarget, SubmissionStatus};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form card is allowed to grow
pub const CARD_MAX_WIDTH: u16 = 72;

/// Rows needed to show the whole card without clipping
pub const CARD_HEIGHT: u16 = 27;

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center the card inside the content area, shrinking it on small terminals
pub fn centered_card(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(CARD_MAX_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::vertical([Constraint::Length(CARD_HEIGHT.min(area.height))])
        .flex(Flex::Center)
        .areas(column);
    card
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mut spans = vec![];

    let indicator = match form.status() {
        SubmissionStatus::Idle => Span::styled(" ● ready ", Style::default().fg(Color::Green)),
        SubmissionStatus::Submitting => {
            Span::styled(" ◌ submitting ", Style::default().fg(Color::Yellow))
        }
    };
    spans.push(indicator);

    let hints = if app.state.has_dialog() {
        "Enter/Esc:dismiss".to_string()
    } else {
        get_focus_hints(form.focus())
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = format!(" {QUIT_SHORTCUT}:quit ");
    let hint_width = quit_hint.chars().count() as u16;
    if area.width > hint_width {
        let quit_area = Rect {
            x: area.x + area.width - hint_width,
            y: area.y,
            width: hint_width,
            height: 1,
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

/// Key hints for the focused part of the form
pub fn get_focus_hints(focus: FocusTarget) -> String {
    let local = match focus {
        FocusTarget::AccountantName | FocusTarget::AccountantEmail | FocusTarget::ClientName => {
            "type to edit Ctrl+U:clear"
        }
        FocusTarget::WorkTypes => "←↑↓→:move Space:toggle",
        FocusTarget::SubmitButton => "Enter:submit",
    };
    format!("Tab/S-Tab:field {local} {SUBMIT_SHORTCUT}:submit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(content.height, 29);
        assert_eq!(status, Rect::new(0, 29, 80, 1));
    }

    #[test]
    fn test_card_is_centered() {
        let card = centered_card(Rect::new(0, 0, 100, 41));
        assert_eq!(card.width, CARD_MAX_WIDTH);
        assert_eq!(card.height, CARD_HEIGHT);
        assert_eq!(card.x, (100 - CARD_MAX_WIDTH) / 2);
        assert_eq!(card.y, (41 - CARD_HEIGHT) / 2);
    }

    #[test]
    fn test_card_shrinks_to_small_terminal() {
        let card = centered_card(Rect::new(0, 0, 40, 10));
        assert_eq!(card, Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn test_hints_follow_focus() {
        assert!(get_focus_hints(FocusTarget::WorkTypes).contains("Space:toggle"));
        assert!(get_focus_hints(FocusTarget::SubmitButton).contains("Enter:submit"));
        assert!(get_focus_hints(FocusTarget::ClientName).contains("Ctrl+S:submit"));
        assert!(get_focus_hints(FocusTarget::AccountantName).contains("Ctrl+U:clear"));
    }
}
