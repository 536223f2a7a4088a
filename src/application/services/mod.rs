//! Application services

pub mod report;

pub use report::{ReportOptions, ReportRequest, ReportService};
