mod report;

pub use report::{Report, ReportSummary};
