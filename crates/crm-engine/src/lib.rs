//! CRM Engine - operation layer between the CLI and the store
//!
//! Every public operation owns its boundary logging: one `start` event, then
//! exactly one `end` or `end_error`. The store below logs at debug level
//! only.

pub mod commands;

pub use commands::records::Listing;
pub use crm_store::ExportOutcome;
