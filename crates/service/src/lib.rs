//! Service layer for instsync
//!
//! Registry fetchers, the upsert engine and the sync orchestrator that
//! sequences fetch, dedup and upsert over one storage connection.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod sources;
mod sync_service;
mod upsert;

pub use error::{FetchError, ServiceError};
pub use sources::{SourceFetcher, StaticRegistry, ched_registry, default_sources, tesda_registry};
pub use sync_service::{InstitutionSync, SyncBatch, SyncReport, collect_batch};
pub use upsert::upsert_institution;
