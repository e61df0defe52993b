//! Field validation for the quote form
//!
//! Validation only runs on a submit attempt. Each run produces a complete
//! [`ValidationErrors`] that replaces the previous one.

use super::field::FieldName;
use super::quote_form::QuoteForm;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const ACCOUNTANT_NAME_REQUIRED: &str = "Accountant Name is required";
pub const ACCOUNTANT_EMAIL_REQUIRED: &str = "Accountant Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const CLIENT_NAME_REQUIRED: &str = "Client Name is required";
pub const WORK_TYPES_REQUIRED: &str = "Please select at least one type of work";

/// One non-space character, with the BOM counted as space and NEL not
const NON_SPACE: &str = r"[\x{85}[^\s\x{FEFF}]]";

// Loose and unanchored: any `x@y.z` run anywhere in the value passes.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{NON_SPACE}+@{NON_SPACE}+\.{NON_SPACE}+"))
        .expect("email pattern is valid")
});

/// Error messages keyed by field; a missing key means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldName, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Error message for a field, if it failed validation
    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: FieldName, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Check an email against the loose `local@domain.tld` pattern
pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validate every field of the form
pub fn validate(form: &QuoteForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.accountant_name.is_blank() {
        errors.insert(FieldName::AccountantName, ACCOUNTANT_NAME_REQUIRED);
    }

    if form.accountant_email.is_blank() {
        errors.insert(FieldName::AccountantEmail, ACCOUNTANT_EMAIL_REQUIRED);
    } else if !is_plausible_email(form.accountant_email.as_text()) {
        errors.insert(FieldName::AccountantEmail, EMAIL_INVALID);
    }

    if form.client_name.is_blank() {
        errors.insert(FieldName::ClientName, CLIENT_NAME_REQUIRED);
    }

    if form.selected_work_types().is_empty() {
        errors.insert(FieldName::WorkTypes, WORK_TYPES_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::WorkType;

    fn filled_form() -> QuoteForm {
        let mut form = QuoteForm::new();
        form.set_field(FieldName::AccountantName, "Jo");
        form.set_field(FieldName::AccountantEmail, "jo@x.com");
        form.set_field(FieldName::ClientName, "Acme");
        form.toggle_work_type(WorkType::Seo);
        form
    }

    mod email_pattern {
        use super::*;

        #[test]
        fn test_accepts_plain_addresses() {
            for email in ["a@b.com", "jo@x.com", "first.last@sub.domain.org"] {
                assert!(is_plausible_email(email), "{email} should pass");
            }
        }

        #[test]
        fn test_rejects_missing_parts() {
            for email in ["plainaddress", "a@b", "@b.com", "a@.com", "a@b.", "a @b.com"] {
                assert!(!is_plausible_email(email), "{email} should fail");
            }
        }

        #[test]
        fn test_is_unanchored() {
            // A valid run anywhere in the value is enough
            assert!(is_plausible_email("not an email x@y.z"));
            assert!(is_plausible_email("a@@b..c"));
        }

        #[test]
        fn test_uses_browser_whitespace() {
            assert!(!is_plausible_email("a@b.\u{FEFF}"));
            assert!(!is_plausible_email("a@b.\u{A0}"));
            assert!(is_plausible_email("a@b.\u{85}"));
        }
    }

    mod validate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_every_field() {
            let errors = validate(&QuoteForm::new());
            assert_eq!(errors.iter().count(), 4);
            assert_eq!(
                errors.get(FieldName::AccountantName),
                Some(ACCOUNTANT_NAME_REQUIRED)
            );
            assert_eq!(
                errors.get(FieldName::AccountantEmail),
                Some(ACCOUNTANT_EMAIL_REQUIRED)
            );
            assert_eq!(errors.get(FieldName::ClientName), Some(CLIENT_NAME_REQUIRED));
            assert_eq!(errors.get(FieldName::WorkTypes), Some(WORK_TYPES_REQUIRED));
        }

        #[test]
        fn test_filled_form_is_valid() {
            assert!(validate(&filled_form()).is_empty());
        }

        #[test]
        fn test_whitespace_only_fields_are_required() {
            let mut form = filled_form();
            form.set_field(FieldName::AccountantName, "   ");
            form.set_field(FieldName::ClientName, "\t");
            form.set_field(FieldName::AccountantEmail, "  ");

            let errors = validate(&form);
            assert_eq!(
                errors.get(FieldName::AccountantName),
                Some(ACCOUNTANT_NAME_REQUIRED)
            );
            assert_eq!(errors.get(FieldName::ClientName), Some(CLIENT_NAME_REQUIRED));
            assert_eq!(
                errors.get(FieldName::AccountantEmail),
                Some(ACCOUNTANT_EMAIL_REQUIRED)
            );
            assert_eq!(errors.get(FieldName::WorkTypes), None);
        }

        #[test]
        fn test_bom_is_blank_but_nel_is_not() {
            let mut form = filled_form();
            form.set_field(FieldName::AccountantName, "\u{FEFF}");
            form.set_field(FieldName::ClientName, "\u{85}");

            let errors = validate(&form);
            assert_eq!(
                errors.get(FieldName::AccountantName),
                Some(ACCOUNTANT_NAME_REQUIRED)
            );
            assert_eq!(errors.get(FieldName::ClientName), None);
        }

        #[test]
        fn test_invalid_email_reported() {
            let mut form = filled_form();
            form.set_field(FieldName::AccountantEmail, "jo.example.com");
            let errors = validate(&form);
            assert_eq!(errors.iter().count(), 1);
            assert_eq!(errors.get(FieldName::AccountantEmail), Some(EMAIL_INVALID));
        }

        #[test]
        fn test_missing_work_types_reported() {
            let mut form = filled_form();
            form.toggle_work_type(WorkType::Seo);
            let errors = validate(&form);
            assert_eq!(errors.iter().count(), 1);
            assert_eq!(errors.get(FieldName::WorkTypes), Some(WORK_TYPES_REQUIRED));
        }

        #[test]
        fn test_only_missing_accountant_name() {
            let mut form = QuoteForm::new();
            form.set_field(FieldName::AccountantEmail, "a@b.com");
            form.set_field(FieldName::ClientName, "X");
            form.toggle_work_type(WorkType::Seo);

            let json = serde_json::to_string(&validate(&form)).unwrap();
            assert_eq!(json, r#"{"accountantName":"Accountant Name is required"}"#);
        }

        #[test]
        fn test_iter_follows_field_order() {
            let fields: Vec<FieldName> = validate(&QuoteForm::new())
                .iter()
                .map(|(field, _)| field)
                .collect();
            assert_eq!(
                fields,
                vec![
                    FieldName::AccountantName,
                    FieldName::AccountantEmail,
                    FieldName::ClientName,
                    FieldName::WorkTypes,
                ]
            );
        }
    }
}
