use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{ReportDetailDto, ReportSummaryDto};
use crate::features::reports::services::ReportStore;
use crate::modules::llm::GenerateText;
use crate::shared::markdown::render_markdown;
use crate::shared::prompts::build_analyst_prompt;

/// Orchestrates the report lifecycle: validation, prompt construction,
/// generation, persistence and retrieval.
pub struct ReportService {
    store: ReportStore,
    generator: Arc<dyn GenerateText>,
}

impl ReportService {
    pub fn new(store: ReportStore, generator: Arc<dyn GenerateText>) -> Self {
        Self { store, generator }
    }

    /// Generate and persist a report for a company/ticker query.
    ///
    /// A row is written only after generation fully succeeds; any generator
    /// failure propagates with no partial write. The response omits the
    /// report body, which clients fetch from the detail endpoint.
    pub async fn analyze(&self, query: &str) -> Result<ReportSummaryDto> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::Validation(
                "Please enter a company name or ticker symbol.".to_string(),
            ));
        }

        let prompt = build_analyst_prompt(query)
            .map_err(|e| AppError::Internal(format!("Prompt rendering failed: {}", e)))?;

        let report_markdown = self.generator.generate(&prompt).await?;

        // Captured at the moment of successful generation, not request arrival.
        let created_at = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let id = self
            .store
            .insert(query, &report_markdown, &created_at)
            .await?;

        tracing::info!("Report created: id={}, query={}", id, query);

        Ok(ReportSummaryDto {
            id,
            query: query.to_string(),
            created_at,
        })
    }

    /// All stored report summaries, newest first.
    pub async fn list_reports(&self) -> Result<Vec<ReportSummaryDto>> {
        let summaries = self.store.list_summaries().await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }

    /// Full report with HTML rendered from the stored markdown.
    pub async fn get_report(&self, id: i64) -> Result<ReportDetailDto> {
        let report = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found.".to_string()))?;

        let report_html = render_markdown(&report.report_markdown);

        Ok(ReportDetailDto {
            id: report.id,
            query: report.query,
            created_at: report.created_at,
            report_markdown: report.report_markdown,
            report_html,
        })
    }
}
