use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for generating a report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeRequestDto {
    /// Company name or ticker symbol to analyze
    #[validate(length(max = 200, message = "Query must not exceed 200 characters"))]
    pub query: String,
}

/// Report summary returned by the create and list endpoints.
///
/// The markdown body is deliberately omitted; report bodies can be large,
/// and the detail endpoint serves them together with rendered HTML.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportSummaryDto {
    pub id: i64,
    pub query: String,
    pub created_at: String,
}

/// Full report returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportDetailDto {
    pub id: i64,
    pub query: String,
    pub created_at: String,
    pub report_markdown: String,
    /// HTML rendered from `report_markdown` at read time; never stored.
    pub report_html: String,
}
