//! Submission boundary: the record a completed wizard produces, the sink
//! contract and the store-backed sink.

pub mod record;
pub mod sink;

pub use record::SubmissionRecord;
pub use sink::{StoreSubmissionSink, SubmissionSink, SubmitError};
