//! Prompt construction for the analyst report generator.
//!
//! The analyst-report template is fixed configuration data embedded at
//! compile time; the user query is its only substitution point.

use minijinja::Environment;
use thiserror::Error;

/// Fixed analyst-report instruction template.
const ANALYST_REPORT_TEMPLATE: &str = include_str!("templates/analyst_report.jinja");

const TEMPLATE_NAME: &str = "analyst_report.jinja";

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Render the analyst-report prompt for a company/ticker query.
///
/// Deterministic and free of I/O. The query is substituted as-is; no
/// escaping is applied since the consumer is a text-generation API, not a
/// markup renderer. Presence validation is the caller's responsibility.
pub fn build_analyst_prompt(query: &str) -> Result<String, TemplateError> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, ANALYST_REPORT_TEMPLATE)
        .map_err(|e| TemplateError::RenderError(e.to_string()))?;

    let template = env
        .get_template(TEMPLATE_NAME)
        .map_err(|e| TemplateError::RenderError(e.to_string()))?;

    template
        .render(minijinja::context! { query => query })
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}
