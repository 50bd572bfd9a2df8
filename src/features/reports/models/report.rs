use sqlx::FromRow;

use crate::features::reports::dtos::ReportSummaryDto;

/// Database model for a generated report.
///
/// `created_at` is stored as an ISO-8601 UTC string with a trailing `Z`,
/// written once at creation. Rows are never updated or deleted.
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: i64,
    pub query: String,
    pub report_markdown: String,
    pub created_at: String,
}

/// Report projection without the markdown body, used by list endpoints.
#[derive(Debug, Clone, FromRow)]
pub struct ReportSummary {
    pub id: i64,
    pub query: String,
    pub created_at: String,
}

impl From<ReportSummary> for ReportSummaryDto {
    fn from(s: ReportSummary) -> Self {
        Self {
            id: s.id,
            query: s.query,
            created_at: s.created_at,
        }
    }
}
