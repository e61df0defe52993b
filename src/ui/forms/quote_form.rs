//! Request for Quote card rendering

use super::field_renderer::{draw_error_line, draw_field};
use super::work_type_grid::{draw_work_types, grid_rows};
use crate::app::App;
use crate::state::{FieldName, FocusTarget, Form};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const SUBMIT_LABEL: &str = "Submit Request for Quote";
pub const SUBMITTING_LABEL: &str = "Submitting...";
const DESCRIPTION: &str =
    "Please fill out the form below to request a quote for our marketing services.";

/// Draw the quote request card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let focus = form.focus();

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(3),               // Accountant name
            Constraint::Length(1),               //   error
            Constraint::Length(3),               // Accountant email
            Constraint::Length(1),               //   error
            Constraint::Length(3),               // Client name
            Constraint::Length(1),               //   error
            Constraint::Length(1 + grid_rows()), // Type of work
            Constraint::Length(1),               //   error
            Constraint::Length(BUTTON_HEIGHT),   // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    draw_header(frame, chunks[0], &app.state.card_title());

    // Text inputs occupy focus slots 0..3, each followed by its error line
    let errors = form.errors();
    for index in 0..3 {
        if let Some(field) = form.get_field(index) {
            let row = 1 + index * 2;
            let error = errors.get(field.name);
            let is_active = form.active_field() == index;
            draw_field(frame, chunks[row], field, is_active, error.is_some());
            draw_error_line(frame, chunks[row + 1], error);
        }
    }

    draw_work_types(frame, chunks[7], form, focus == FocusTarget::WorkTypes);
    draw_error_line(frame, chunks[8], errors.get(FieldName::WorkTypes));

    let label = if form.is_submitting() {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    };
    render_button(
        frame,
        chunks[9],
        label,
        focus == FocusTarget::SubmitButton,
        !form.is_submitting(),
    );
}

fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(DESCRIPTION, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}
