//! Quote submission sink
//!
//! The form hands validated requests to a [`QuoteSink`]. Only the simulated
//! sink exists for now.

mod simulated;
mod traits;

pub use simulated::SimulatedSink;
pub use traits::{QuoteSink, SinkError, SubmissionReceipt};

#[cfg(test)]
pub use traits::MockQuoteSink;
