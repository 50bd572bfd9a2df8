//! Stock research report generation and retrieval.
//!
//! A query is substituted into a fixed analyst-report prompt, sent to the
//! Gemini text-generation API, and the returned markdown is persisted.
//! Stored reports are served as summaries or in full with rendered HTML.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/analyze` | Generate and store a report for a query |
//! | GET | `/api/reports` | List report summaries, newest first |
//! | GET | `/api/reports/{id}` | Full report with rendered HTML |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ReportService, ReportStore};
