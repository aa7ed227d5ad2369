//! Record repository
//!
//! Translates CRM records into inserts and full-table scans against the
//! store, and answers the login check.

mod rows;
mod sqlite_repo;

pub use rows::StoreRecord;
pub use sqlite_repo::CrmRepo;
