mod report_dto;

pub use report_dto::{AnalyzeRequestDto, ReportDetailDto, ReportSummaryDto};
