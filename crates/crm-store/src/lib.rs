//! CRM Store - SQLite persistence for the CRM tables
//!
//! Provides:
//! - Connection management for the single store file
//! - Embedded, checksummed schema migrations (`ensure_schema`)
//! - The record repository: inserts, full-table scans, the login check
//! - CSV export of scanned rows

pub mod db;
pub mod errors;
pub mod export;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use export::ExportOutcome;
pub use migrations::ensure_schema;
pub use repo::CrmRepo;
