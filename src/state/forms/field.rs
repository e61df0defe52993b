//! Form field value objects

use serde::Serialize;
use std::fmt;

/// Names of the quote form fields, as used for error keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    AccountantName,
    AccountantEmail,
    ClientName,
    WorkTypes,
}

impl FieldName {
    /// Stable key used when errors are logged or serialized
    pub fn key(&self) -> &'static str {
        match self {
            Self::AccountantName => "accountantName",
            Self::AccountantEmail => "accountantEmail",
            Self::ClientName => "clientName",
            Self::WorkTypes => "workTypes",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Whitespace as browsers trim form input: Unicode spaces plus the BOM, but not NEL
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// A single-line text input with its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    value: String,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: FieldName, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// True when the value is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.value.chars().all(is_form_whitespace)
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value (control characters are dropped)
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_camel_case() {
        assert_eq!(FieldName::AccountantName.key(), "accountantName");
        assert_eq!(FieldName::AccountantEmail.key(), "accountantEmail");
        assert_eq!(FieldName::ClientName.key(), "clientName");
        assert_eq!(FieldName::WorkTypes.key(), "workTypes");
    }

    #[test]
    fn test_serialized_name_matches_key() {
        let json = serde_json::to_string(&FieldName::ClientName).unwrap();
        assert_eq!(json, "\"clientName\"");
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text(FieldName::ClientName, "Client Name");
        field.push_char('A');
        field.push_char('c');
        assert_eq!(field.as_text(), "Ac");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text(FieldName::ClientName, "Client Name");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut field = FormField::text(FieldName::AccountantName, "Name");
        field.push_char('\n');
        field.push_char('\t');
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_is_blank_trims() {
        let mut field = FormField::text(FieldName::AccountantName, "Name");
        assert!(field.is_blank());
        field.set_text("   ");
        assert!(field.is_blank());
        field.set_text(" Jo ");
        assert!(!field.is_blank());
    }

    #[test]
    fn test_is_blank_matches_browser_whitespace() {
        let mut field = FormField::text(FieldName::AccountantName, "Name");
        field.set_text("\u{FEFF}\u{A0}\u{3000}");
        assert!(field.is_blank());
        field.set_text("\u{85}");
        assert!(!field.is_blank());
    }
}
