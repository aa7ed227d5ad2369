//! Error handling for crm-store
//!
//! Wraps crm-core `ExError` with store-specific constructors

use crm_core::errors::{ExError, ExErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Classify a rusqlite error
///
/// Constraint failures are recoverable; an unopenable or corrupt file is a
/// connection failure; anything else is a generic persistence error.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) => match e.code {
            ErrorCode::ConstraintViolation => ExErrorKind::ConstraintViolation,
            ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::DatabaseCorrupt
            | ErrorCode::PermissionDenied
            | ErrorCode::SystemIoFailure
            | ErrorCode::ReadOnly => ExErrorKind::ConnectionFailure,
            _ => ExErrorKind::Persistence,
        },
        _ => ExErrorKind::Persistence,
    };

    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, path: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_entity_id(path.to_string())
        .with_message(err.to_string())
}

/// Create a CSV serialization error
pub fn csv_error(path: &str, err: csv::Error) -> ExError {
    let kind = if err.is_io_error() {
        ExErrorKind::Io
    } else {
        ExErrorKind::Serialization
    };
    ExError::new(kind)
        .with_op("export")
        .with_entity_id(path.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_unique_violation_classified_as_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();
        let err = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .unwrap_err();

        assert_eq!(
            from_rusqlite(err).kind(),
            ExErrorKind::ConstraintViolation
        );
    }

    #[test]
    fn test_not_null_violation_classified_as_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v TEXT NOT NULL);").unwrap();
        let err = conn
            .execute("INSERT INTO t VALUES (NULL)", [])
            .unwrap_err();

        assert_eq!(
            from_rusqlite(err).kind(),
            ExErrorKind::ConstraintViolation
        );
    }

    #[test]
    fn test_missing_table_is_persistence() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.execute("INSERT INTO nope VALUES (1)", []).unwrap_err();
        assert_eq!(from_rusqlite(err).kind(), ExErrorKind::Persistence);
    }
}
