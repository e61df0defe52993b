//! Quote request form state and submission lifecycle

use super::field::{FieldName, FormField};
use super::validation::{validate, ValidationErrors};
use super::work_type::WorkType;
use serde::Serialize;
use std::collections::BTreeSet;

/// Columns in the work type checkbox grid
pub const WORK_TYPE_COLUMNS: usize = 2;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Which part of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    AccountantName,
    AccountantEmail,
    ClientName,
    WorkTypes,
    SubmitButton,
}

impl FocusTarget {
    const ORDER: [FocusTarget; 5] = [
        FocusTarget::AccountantName,
        FocusTarget::AccountantEmail,
        FocusTarget::ClientName,
        FocusTarget::WorkTypes,
        FocusTarget::SubmitButton,
    ];

    fn from_index(index: usize) -> Self {
        Self::ORDER
            .get(index)
            .copied()
            .unwrap_or(FocusTarget::SubmitButton)
    }
}

/// Submission lifecycle of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

/// Snapshot of a valid form handed to the submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub accountant_name: String,
    pub accountant_email: String,
    pub client_name: String,
    pub work_types: Vec<WorkType>,
}

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; the errors are now on the form
    Blocked,
    /// A submission is already in flight
    AlreadySubmitting,
    /// The form moved to `Submitting`; the request should be sent
    Started(QuoteRequest),
}

/// The Request for Quote form
#[derive(Debug, Clone)]
pub struct QuoteForm {
    pub accountant_name: FormField,
    pub accountant_email: FormField,
    pub client_name: FormField,
    selected_work_types: BTreeSet<WorkType>,
    /// Highlighted checkbox in the work type grid
    pub work_type_cursor: usize,
    pub active_field_index: usize,
    errors: ValidationErrors,
    status: SubmissionStatus,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self {
            accountant_name: FormField::text(FieldName::AccountantName, "Accountant's Name"),
            accountant_email: FormField::text(
                FieldName::AccountantEmail,
                "Accountant's Email Address",
            ),
            client_name: FormField::text(FieldName::ClientName, "Client Name"),
            selected_work_types: BTreeSet::new(),
            work_type_cursor: 0,
            active_field_index: 0,
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn focus(&self) -> FocusTarget {
        FocusTarget::from_index(self.active_field_index)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Errors from the most recent submit attempt
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn selected_work_types(&self) -> &BTreeSet<WorkType> {
        &self.selected_work_types
    }

    pub fn is_selected(&self, work_type: WorkType) -> bool {
        self.selected_work_types.contains(&work_type)
    }

    fn text_field_mut(&mut self, name: FieldName) -> Option<&mut FormField> {
        match name {
            FieldName::AccountantName => Some(&mut self.accountant_name),
            FieldName::AccountantEmail => Some(&mut self.accountant_email),
            FieldName::ClientName => Some(&mut self.client_name),
            FieldName::WorkTypes => None,
        }
    }

    /// Overwrite one text field. Errors are left alone until the next submit.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        match self.text_field_mut(name) {
            Some(field) => field.set_text(value),
            None => tracing::debug!("Ignoring text update for non-text field {name}"),
        }
    }

    /// Add the work type if absent, remove it if present
    pub fn toggle_work_type(&mut self, work_type: WorkType) {
        if !self.selected_work_types.remove(&work_type) {
            self.selected_work_types.insert(work_type);
        }
    }

    /// Toggle the checkbox under the grid cursor
    pub fn toggle_highlighted_work_type(&mut self) {
        if let Some(work_type) = WorkType::ALL.get(self.work_type_cursor).copied() {
            self.toggle_work_type(work_type);
        }
    }

    pub fn work_type_cursor_right(&mut self) {
        let next = self.work_type_cursor + 1;
        if self.work_type_cursor % WORK_TYPE_COLUMNS < WORK_TYPE_COLUMNS - 1
            && next < WorkType::ALL.len()
        {
            self.work_type_cursor = next;
        }
    }

    pub fn work_type_cursor_left(&mut self) {
        if self.work_type_cursor % WORK_TYPE_COLUMNS > 0 {
            self.work_type_cursor -= 1;
        }
    }

    pub fn work_type_cursor_down(&mut self) {
        let next = self.work_type_cursor + WORK_TYPE_COLUMNS;
        if next < WorkType::ALL.len() {
            self.work_type_cursor = next;
        }
    }

    pub fn work_type_cursor_up(&mut self) {
        if self.work_type_cursor >= WORK_TYPE_COLUMNS {
            self.work_type_cursor -= WORK_TYPE_COLUMNS;
        }
    }

    /// Handle a submit trigger: validate, then either block or start submitting
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::AlreadySubmitting;
        }

        self.errors = validate(self);
        if !self.errors.is_empty() {
            return SubmitAttempt::Blocked;
        }

        self.status = SubmissionStatus::Submitting;
        SubmitAttempt::Started(self.to_request())
    }

    /// The sink accepted the request: back to `Idle` with an empty form
    pub fn complete_submission(&mut self) {
        *self = Self::new();
    }

    /// The sink failed: back to `Idle`, keeping what was entered
    pub fn fail_submission(&mut self) {
        self.status = SubmissionStatus::Idle;
    }

    pub fn to_request(&self) -> QuoteRequest {
        QuoteRequest {
            accountant_name: self.accountant_name.as_text().to_string(),
            accountant_email: self.accountant_email.as_text().to_string(),
            client_name: self.client_name.as_text().to_string(),
            work_types: self.selected_work_types.iter().copied().collect(),
        }
    }
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for QuoteForm {
    fn field_count(&self) -> usize {
        5 // three text fields, work types, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            FocusTarget::AccountantName => Some(&mut self.accountant_name),
            FocusTarget::AccountantEmail => Some(&mut self.accountant_email),
            FocusTarget::ClientName => Some(&mut self.client_name),
            FocusTarget::WorkTypes | FocusTarget::SubmitButton => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.accountant_name),
            1 => Some(&self.accountant_email),
            2 => Some(&self.client_name),
            _ => None,
        }
    }
}
