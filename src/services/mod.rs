pub mod output;
pub mod report;

pub use report::{ReportService, ReportView};
