//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients for external services like the text-generation API.

pub mod llm;
