//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Dialog;
use components::{render_error_dialog, render_success_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    forms::draw_quote_form(frame, layout::centered_card(content_area), app);
    layout::draw_status_bar(frame, status_area, app);

    // Dialogs overlay everything else
    match &app.state.dialog {
        Some(Dialog::Success { ticket_number }) => render_success_dialog(frame, ticket_number),
        Some(Dialog::Error(message)) => render_error_dialog(frame, message),
        None => {}
    }
}
