//! Work type checkbox grid

use crate::state::{QuoteForm, WorkType, WORK_TYPE_COLUMNS};
use crate::ui::components::checkbox_line;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Rows needed to lay the catalog out in the grid
pub fn grid_rows() -> u16 {
    WorkType::ALL.len().div_ceil(WORK_TYPE_COLUMNS) as u16
}

/// Draw the "Type of Work" label and checkbox grid
pub fn draw_work_types(frame: &mut Frame, area: Rect, form: &QuoteForm, is_focused: bool) {
    let [label_area, grid_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let label_style = if is_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Paragraph::new(" Type of Work").style(label_style), label_area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(grid_area);

    for (col, column_area) in columns.iter().enumerate() {
        let lines: Vec<Line> = WorkType::ALL
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx % WORK_TYPE_COLUMNS == col)
            .map(|(idx, work_type)| {
                checkbox_line(
                    work_type.label(),
                    form.is_selected(*work_type),
                    idx == form.work_type_cursor,
                    is_focused,
                )
            })
            .collect();
        let indented = Rect {
            x: column_area.x + 1,
            width: column_area.width.saturating_sub(1),
            ..*column_area
        };
        frame.render_widget(Paragraph::new(lines), indented);
    }
}
