use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, ErrorBody, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{AnalyzeRequestDto, ReportDetailDto, ReportSummaryDto};
use crate::features::reports::services::ReportService;

/// Generate a research report for a company/ticker query
///
/// Substitutes the query into the fixed analyst prompt, calls the generation
/// service and persists the result. The body is not returned here; fetch it
/// from the detail endpoint.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequestDto,
    responses(
        (status = 200, description = "Report generated and stored", body = ReportSummaryDto),
        (status = 400, description = "Empty or missing query", body = ErrorBody),
        (status = 500, description = "Configuration or generation failure", body = ErrorBody)
    ),
    tag = "reports"
)]
pub async fn analyze(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<AnalyzeRequestDto>,
) -> Result<Json<ReportSummaryDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let summary = service.analyze(&dto.query).await?;
    Ok(Json(summary))
}

/// List stored report summaries, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Report summaries", body = Vec<ReportSummaryDto>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<ReportSummaryDto>>> {
    let summaries = service.list_reports().await?;
    Ok(Json(summaries))
}

/// Fetch a stored report with rendered HTML
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report id")
    ),
    responses(
        (status = 200, description = "Full report", body = ReportDetailDto),
        (status = 404, description = "Unknown report id", body = ErrorBody)
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<i64>,
) -> Result<Json<ReportDetailDto>> {
    let report = service.get_report(id).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use crate::features::reports::routes::routes;
    use crate::features::reports::services::ReportStore;
    use crate::modules::llm::GenerateText;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use sqlx::sqlite::SqlitePoolOptions;

    struct StubGenerator {
        markdown: String,
    }

    #[async_trait]
    impl GenerateText for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.markdown.clone())
        }
    }

    async fn test_server(markdown: &str) -> TestServer {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");

        let service = Arc::new(ReportService::new(
            ReportStore::new(pool),
            Arc::new(StubGenerator {
                markdown: markdown.to_string(),
            }),
        ));

        TestServer::new(routes(service)).expect("test server")
    }

    #[tokio::test]
    async fn test_analyze_returns_summary_fields() {
        let server = test_server("# Report\n\nBullish.").await;

        let response = server
            .post("/api/analyze")
            .json(&json!({ "query": "AAPL" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert!(body["id"].as_i64().is_some());
        assert_eq!(body["query"], "AAPL");
        assert!(body["created_at"].as_str().unwrap().ends_with('Z'));
        assert!(body.get("report_markdown").is_none());
    }

    #[tokio::test]
    async fn test_analyze_blank_query_is_400_with_error_body() {
        let server = test_server("# Report").await;

        let response = server
            .post("/api/analyze")
            .json(&json!({ "query": "   " }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["error"].as_str().is_some());

        let listed: Value = server.get("/api/reports").await.json();
        assert_eq!(listed.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_detail_contains_rendered_html() {
        let server = test_server("# Report\n\nBullish.").await;

        let created: Value = server
            .post("/api/analyze")
            .json(&json!({ "query": "AAPL" }))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        let response = server.get(&format!("/api/reports/{}", id)).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["query"], "AAPL");
        assert_eq!(body["report_markdown"], "# Report\n\nBullish.");
        let html = body["report_html"].as_str().unwrap();
        assert!(html.contains("<h1>Report</h1>"));
        assert!(html.contains("<p>Bullish.</p>"));
    }

    #[tokio::test]
    async fn test_unknown_report_is_404() {
        let server = test_server("# Report").await;

        let response = server.get("/api/reports/999").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert!(body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let server = test_server("# Report").await;

        for query in ["AAPL", "MSFT", "NVDA"] {
            let response = server
                .post("/api/analyze")
                .json(&json!({ "query": query }))
                .await;
            assert_eq!(response.status_code(), StatusCode::OK);
        }

        let listed: Value = server.get("/api/reports").await.json();
        let items = listed.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["query"], "NVDA");
        assert_eq!(items[2]["query"], "AAPL");
    }
}
