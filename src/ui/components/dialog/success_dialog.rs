//! Submission confirmation dialog

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use crate::state::SUCCESS_MESSAGE;
use ratatui::{style::Color, Frame};

/// Render the confirmation shown after a quote request is accepted
pub fn render_success_dialog(frame: &mut Frame, ticket_number: &str) {
    let message = format!("{SUCCESS_MESSAGE}\n\nTicket: {ticket_number}");
    render_dialog(
        frame,
        DialogConfig {
            title: "Request Sent",
            accent: Color::Green,
            message: &message,
            hint: Some(dismiss_hint()),
            max_width: 60,
        },
    );
}
