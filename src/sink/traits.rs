//! Trait abstraction for the quote submission sink to enable mocking in tests

use crate::state::QuoteRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Acknowledgement returned when a quote request is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub ticket_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Issue a receipt with a fresh ticket id
    pub fn issue() -> Self {
        Self {
            ticket_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// Short ticket number shown to the user (first 8 hex digits, upper case)
    pub fn ticket_number(&self) -> String {
        self.ticket_id.simple().to_string()[..8].to_uppercase()
    }
}

/// Errors a sink can report back for a submission
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SinkError {
    #[error("Quote service unavailable: {0}")]
    Unavailable(String),
}

/// Destination for validated quote requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSink: Send + Sync {
    /// Deliver a quote request
    async fn submit(&self, request: QuoteRequest) -> Result<SubmissionReceipt, SinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_number_is_short_upper_hex() {
        let receipt = SubmissionReceipt {
            ticket_id: Uuid::parse_str("9f1c2a7e-0b3d-4c5e-8f6a-7b8c9d0e1f2a").unwrap(),
            submitted_at: Utc::now(),
        };
        assert_eq!(receipt.ticket_number(), "9F1C2A7E");
    }

    #[test]
    fn test_issued_receipts_are_unique() {
        assert_ne!(
            SubmissionReceipt::issue().ticket_id,
            SubmissionReceipt::issue().ticket_id
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SinkError::Unavailable("timeout".to_string()).to_string(),
            "Quote service unavailable: timeout"
        );
    }
}
