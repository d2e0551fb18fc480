//! Service layer for quizlink
//!
//! Business logic between the HTTP handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod ingest_service;
#[cfg(test)]
mod ingest_service_tests;

pub use error::ServiceError;
pub use ingest_service::{IngestService, WebhookOutcome};
