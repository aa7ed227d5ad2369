//! CRM Core - domain types shared by the store, engine and CLI
//!
//! This crate provides:
//! - Record models for the five CRM tables and their insert payloads
//! - The fixed `Table` enumeration used instead of free-form table names
//! - Password hashing for the login gate
//! - The structured error facility (`ExError`, `ExErrorKind`, `CrmError`)
//! - The structured logging facility and its macros

pub mod auth;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{CrmError, ExError, ExErrorKind};
pub use model::{Customer, Product, Record, Support, Table, Ticket, User};
