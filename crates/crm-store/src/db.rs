//! Database connection management

use crate::errors::{from_rusqlite, Result};
use crm_core::errors::CrmError;
use rusqlite::Connection;
use std::path::Path;

/// Default store location, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "crm.db";

/// Open the store file at `path`, creating it if absent
///
/// Also forces SQLite to read the header, so a non-database file fails here
/// rather than on the first query.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    let conn = Connection::open(path).map_err(|e| unavailable(path, e))?;
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(|e| unavailable(path, e))?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Apply connection settings
///
/// Foreign keys stay off: the schema's references are advisory and the
/// stored reference columns routinely hold values with no parent row.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", false)
        .map_err(from_rusqlite)?;
    Ok(())
}

fn unavailable(path: &Path, err: rusqlite::Error) -> crm_core::ExError {
    CrmError::StoreUnavailable {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .into()
}
