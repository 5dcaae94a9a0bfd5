//! Core types for instsync
//!
//! Institution records, identity keys, name normalization, logo URL
//! synthesis and cross-source deduplication. Shared by the storage and
//! service crates.

mod constants;
mod dedup;
mod dedup_tests;
mod env_config;
mod error;
mod institution;
mod logo;
mod normalize;

pub use constants::*;
pub use dedup::*;
pub use env_config::*;
pub use error::*;
pub use institution::*;
pub use logo::*;
pub use normalize::*;
