// Wed Feb 11 2026 - Alex

pub mod error;
pub mod sink;

pub use error::PersistenceError;
pub use sink::{ReportSink, RunSummary};
