//! Aggregation: summaries, month buckets, trend series and report periods.

pub mod error;
pub mod period;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use period::{DateRange, MonthBucket, ReportPeriod};
pub use service::SummaryService;
pub use types::*;
