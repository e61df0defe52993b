//! Form domain layer
//!
//! Type-safe state for the Request for Quote form: field values, the work
//! type catalog, validation and the submission lifecycle.

mod field;
mod quote_form;
mod validation;
mod work_type;

pub use field::{FieldName, FormField};
pub use quote_form::{
    FocusTarget, Form, QuoteForm, QuoteRequest, SubmissionStatus, SubmitAttempt, WORK_TYPE_COLUMNS,
};
pub use work_type::WorkType;
