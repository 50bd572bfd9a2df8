use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Report, ReportSummary};

/// Persistence layer for generated reports.
///
/// Rows are only ever inserted; there is no update or delete path, so ids
/// and timestamps are immutable once written. Connections are acquired from
/// the pool per operation and returned when the query completes.
pub struct ReportStore {
    pool: SqlitePool,
}

impl ReportStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a report row and return its assigned id.
    pub async fn insert(
        &self,
        query: &str,
        report_markdown: &str,
        created_at: &str,
    ) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO reports (query, report_markdown, created_at) VALUES (?, ?, ?)",
        )
        .bind(query)
        .bind(report_markdown)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert report: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.last_insert_rowid())
    }

    /// All report summaries, newest first.
    pub async fn list_summaries(&self) -> Result<Vec<ReportSummary>> {
        sqlx::query_as::<_, ReportSummary>(
            "SELECT id, query, created_at FROM reports ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Full report row, or `None` when the id is unknown.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Report>> {
        sqlx::query_as::<_, Report>(
            "SELECT id, query, report_markdown, created_at FROM reports WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch report {}: {:?}", id, e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> ReportStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");
        ReportStore::new(pool)
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = test_store().await;

        let first = store
            .insert("AAPL", "# Apple", "2026-08-23T10:00:00Z")
            .await
            .unwrap();
        let second = store
            .insert("MSFT", "# Microsoft", "2026-08-23T10:01:00Z")
            .await
            .unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_list_summaries_newest_first_without_body() {
        let store = test_store().await;

        store
            .insert("AAPL", "# Apple", "2026-08-23T10:00:00Z")
            .await
            .unwrap();
        store
            .insert("MSFT", "# Microsoft", "2026-08-23T10:01:00Z")
            .await
            .unwrap();

        let summaries = store.list_summaries().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].query, "MSFT");
        assert_eq!(summaries[1].query, "AAPL");
        assert!(summaries[0].id > summaries[1].id);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_stored_row() {
        let store = test_store().await;

        let id = store
            .insert("AAPL", "# Report\n\nBullish.", "2026-08-23T10:00:00Z")
            .await
            .unwrap();

        let report = store.get_by_id(id).await.unwrap().expect("row exists");
        assert_eq!(report.id, id);
        assert_eq!(report.query, "AAPL");
        assert_eq!(report.report_markdown, "# Report\n\nBullish.");
        assert_eq!(report.created_at, "2026-08-23T10:00:00Z");
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_is_none() {
        let store = test_store().await;
        assert!(store.get_by_id(999).await.unwrap().is_none());
    }
}
