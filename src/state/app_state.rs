//! Application state definitions

use super::forms::QuoteForm;
use crate::config::DEFAULT_COMPANY_NAME;

/// Confirmation shown once the quote request has been accepted
pub const SUCCESS_MESSAGE: &str =
    "Form submitted successfully! Check your email for the ticket number.";

/// Modal overlay shown above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// The request was accepted
    Success { ticket_number: String },
    /// The request could not be delivered
    Error(String),
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: QuoteForm,
    pub dialog: Option<Dialog>,
    /// Company shown in the card title
    pub company_name: String,
    /// One-line message in the status bar
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY_NAME)
    }
}

impl AppState {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            form: QuoteForm::new(),
            dialog: None,
            company_name: company_name.into(),
            status_message: None,
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn show_success(&mut self, ticket_number: impl Into<String>) {
        self.dialog = Some(Dialog::Success {
            ticket_number: ticket_number.into(),
        });
    }

    /// Show an error dialog, replacing any dialog already open
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.dialog = Some(Dialog::Error(message.into()));
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Title line of the card
    pub fn card_title(&self) -> String {
        format!("{} - Request for Quote", self.company_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_dialog() {
        let state = AppState::default();
        assert!(!state.has_dialog());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_card_title_uses_company() {
        assert_eq!(
            AppState::default().card_title(),
            "Tartaglia Marketing - Request for Quote"
        );
        assert_eq!(
            AppState::new("Acme").card_title(),
            "Acme - Request for Quote"
        );
    }

    #[test]
    fn test_error_replaces_success() {
        let mut state = AppState::default();
        state.show_success("AB12CD34");
        state.push_error("Quote service unavailable");
        assert_eq!(
            state.dialog,
            Some(Dialog::Error("Quote service unavailable".to_string()))
        );
    }

    #[test]
    fn test_dismiss_clears_dialog() {
        let mut state = AppState::default();
        state.show_success("AB12CD34");
        state.dismiss_dialog();
        assert!(!state.has_dialog());
    }
}
