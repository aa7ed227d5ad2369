//! Canonical schema constants for structured logging
//!
//! These constants keep field names consistent between the logging macros,
//! the test capture layer and anything that parses JSON log output.

// Canonical field keys for structured logging
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Record identifiers
pub const FIELD_TABLE: &str = "table";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
