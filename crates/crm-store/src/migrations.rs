//! Schema management
//!
//! - Embedded SQL migrations with SHA-256 checksums
//! - Idempotent application, safe on every start
//! - Checksum verification of already-applied migrations

mod checksums;
mod embedded;
mod runner;

pub use runner::{applied_migrations, ensure_schema, AppliedMigration};
