//! Core types shared across the CRM crates
//!
//! - **Schema constants**: canonical logging field keys and event names
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
