use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorBody;
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        reports_handlers::report_handler::analyze,
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::get_report,
    ),
    components(
        schemas(
            reports_dtos::AnalyzeRequestDto,
            reports_dtos::ReportSummaryDto,
            reports_dtos::ReportDetailDto,
            ErrorBody,
        )
    ),
    tags(
        (name = "reports", description = "Stock research report generation and retrieval"),
    ),
    info(
        title = "Stocklens API",
        version = "0.1.0",
        description = "Stock research report generation API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
