//! Stand-in sink that accepts every request after a fixed delay

use super::traits::{QuoteSink, SinkError, SubmissionReceipt};
use crate::config::DEFAULT_SUBMIT_DELAY;
use crate::state::QuoteRequest;
use async_trait::async_trait;
use std::time::Duration;

/// Sink that waits `delay`, logs the request and always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSink {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl QuoteSink for SimulatedSink {
    async fn submit(&self, request: QuoteRequest) -> Result<SubmissionReceipt, SinkError> {
        match serde_json::to_string(&request) {
            Ok(payload) => tracing::info!(%payload, "Form submitted"),
            Err(err) => tracing::warn!("Could not serialize quote request for logging: {err}"),
        }

        tokio::time::sleep(self.delay).await;

        let receipt = SubmissionReceipt::issue();
        tracing::info!(
            ticket = %receipt.ticket_number(),
            client = %request.client_name,
            "Quote request accepted"
        );
        Ok(receipt)
    }
}
