//! Storage layer for instsync
//!
//! PostgreSQL backend (sqlx) for the `institutions` table, plus an
//! in-memory backend with the same semantics for tests and dry runs.

pub mod error;
mod memory;
mod pg_schema;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use memory::{MemoryConnection, MemoryStore};
pub use pg_schema::ensure_schema;
pub use pg_storage::{PgInstitutionConnection, PgStorage};
pub use traits::{ConnectionSource, InstitutionStore};
