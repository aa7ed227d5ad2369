//! Operation handlers

pub mod auth;
pub mod export;
pub mod records;
pub mod store;

use crm_core::{log_op_end, log_op_error, log_op_start};
use crm_store::Result;
use std::time::Instant;

/// Run `f` between a start event and an end or end_error event
pub(crate) fn instrumented<R>(op: &'static str, f: impl FnOnce() -> Result<R>) -> Result<R> {
    log_op_start!(op);
    let start = Instant::now();

    match f() {
        Ok(value) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
            Ok(value)
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
            Err(e)
        }
    }
}

/// Like `instrumented`, tagging the start event with the table touched
pub(crate) fn instrumented_on<R>(
    op: &'static str,
    table: crm_core::Table,
    f: impl FnOnce() -> Result<R>,
) -> Result<R> {
    log_op_start!(op, table = table.name());
    let start = Instant::now();

    match f() {
        Ok(value) => {
            log_op_end!(
                op,
                duration_ms = start.elapsed().as_millis() as u64,
                table = table.name()
            );
            Ok(value)
        }
        Err(e) => {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                table = table.name()
            );
            Err(e)
        }
    }
}
