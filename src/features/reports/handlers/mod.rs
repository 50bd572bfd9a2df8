pub mod report_handler;

pub use report_handler::{analyze, get_report, list_reports};
