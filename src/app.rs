//! Application state and core logic

use crate::config::RfqConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::sink::{QuoteSink, SimulatedSink, SinkError, SubmissionReceipt};
use crate::state::{AppState, FocusTarget, Form, SubmitAttempt};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;

type SubmissionOutcome = Result<SubmissionReceipt, SinkError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated quote requests are sent
    sink: Arc<dyn QuoteSink>,
    /// Outcome of the in-flight submission, if any
    pending: Option<oneshot::Receiver<SubmissionOutcome>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the simulated sink
    pub fn new(config: &RfqConfig) -> Self {
        let delay = config.submit_delay();
        tracing::info!("Using simulated quote sink with {}ms delay", delay.as_millis());
        Self::with_sink(Arc::new(SimulatedSink::new(delay)), config.company_name())
    }

    /// Create an App that submits to the given sink
    pub fn with_sink(sink: Arc<dyn QuoteSink>, company_name: &str) -> Self {
        Self {
            state: AppState::new(company_name),
            sink,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return Ok(());
        }

        // Keyboard shortcut (works from anywhere)
        if key.code == KeyCode::Char('s') && key.modifiers.contains(SUBMIT_MODIFIER) {
            self.submit();
            return Ok(());
        }

        match self.state.form.focus() {
            FocusTarget::WorkTypes => self.handle_work_types_key(key),
            FocusTarget::SubmitButton => self.handle_submit_button_key(key),
            _ => self.handle_text_field_key(key),
        }
        Ok(())
    }

    fn handle_common_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_text_field_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            // Readline-style clear of the whole field
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(name) = form.get_active_field_mut().map(|field| field.name) {
                    form.set_field(name, "");
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            // Enter moves on, like a browser form moving focus
            KeyCode::Enter | KeyCode::Down => form.next_field(),
            KeyCode::Up => form.prev_field(),
            _ => self.handle_common_key(key),
        }
    }

    fn handle_work_types_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => form.toggle_highlighted_work_type(),
            KeyCode::Left | KeyCode::Char('h') => form.work_type_cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => form.work_type_cursor_right(),
            KeyCode::Up | KeyCode::Char('k') => form.work_type_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => form.work_type_cursor_down(),
            _ => self.handle_common_key(key),
        }
    }

    fn handle_submit_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            KeyCode::Up => self.state.form.prev_field(),
            _ => self.handle_common_key(key),
        }
    }

    /// Submit trigger: validate, then hand the request to the sink in the background
    pub fn submit(&mut self) {
        match self.state.form.begin_submit() {
            SubmitAttempt::Blocked => {
                let invalid: Vec<&str> = self
                    .state
                    .form
                    .errors()
                    .iter()
                    .map(|(field, _)| field.key())
                    .collect();
                tracing::debug!(?invalid, "Quote request blocked by validation");
                self.state.status_message = None;
            }
            SubmitAttempt::AlreadySubmitting => {
                tracing::debug!("Ignoring submit while a submission is in flight");
            }
            SubmitAttempt::Started(request) => {
                let (tx, rx) = oneshot::channel();
                let sink = Arc::clone(&self.sink);
                tokio::spawn(async move {
                    let outcome = sink.submit(request).await;
                    // Receiver is gone if the app quit mid-submission
                    let _ = tx.send(outcome);
                });
                self.pending = Some(rx);
                self.state.status_message = Some("Submitting quote request...".to_string());
            }
        }
    }

    /// Apply the outcome of the in-flight submission once it arrives.
    /// Returns true if a submission settled during this call.
    pub fn poll_submission(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => Err(SinkError::Unavailable(
                "submission task ended without a result".to_string(),
            )),
        };
        self.pending = None;
        self.settle(outcome);
        true
    }

    fn settle(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            Ok(receipt) => {
                let ticket = receipt.ticket_number();
                tracing::info!(%ticket, submitted_at = %receipt.submitted_at, "Quote request submitted");
                self.state.form.complete_submission();
                self.state.status_message = Some(format!("Request sent (ticket {ticket})"));
                self.state.show_success(ticket);
            }
            Err(err) => {
                tracing::warn!("Quote submission failed: {err}");
                self.state.form.fail_submission();
                self.state.status_message = None;
                self.state.push_error(err.to_string());
            }
        }
    }
}
