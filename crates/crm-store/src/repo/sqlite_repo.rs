//! SQLite repository implementation

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations;
use crate::repo::rows::StoreRecord;
use crm_core::auth::hash_password;
use crm_core::errors::CrmError;
use crm_core::model::{
    Customer, NewCustomer, NewProduct, NewSupport, NewTicket, NewUser, Table,
};
use crm_core_types::Sensitive;
use rusqlite::{params, Connection};
use std::path::Path;

/// Repository over the single store connection
///
/// Owns one connection for the process lifetime. Every operation prepares
/// its own statement (or transaction) and releases it before returning.
#[derive(Debug)]
pub struct CrmRepo {
    conn: Connection,
}

impl CrmRepo {
    /// Wrap an already-open connection
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the store file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(db::open(path)?))
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(db::open_in_memory()?))
    }

    /// Create the CRM tables if absent
    pub fn ensure_schema(&mut self) -> Result<()> {
        migrations::ensure_schema(&mut self.conn)
    }

    // ===== Authentication =====

    /// Check a username/password pair against the user table
    ///
    /// True when at least one row matches both the username and the
    /// password hash. An unknown username is simply false.
    pub fn login(&self, username: &str, password: &Sensitive<String>) -> Result<bool> {
        let hashed = hash_password(password.expose());
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM user WHERE username = ?1 AND hashed_password = ?2")
            .map_err(from_rusqlite)?;
        let found = stmt.exists(params![username, hashed]).map_err(from_rusqlite)?;

        tracing::debug!(username, found, "login check");
        Ok(found)
    }

    // ===== Inserts =====

    /// Insert a user with the hash of their password
    ///
    /// A taken username fails with `ConstraintViolation` and leaves the
    /// table untouched.
    pub fn add_user(&mut self, user: &NewUser) -> Result<i64> {
        let hashed = hash_password(user.password.expose());
        self.insert(
            Table::User,
            "INSERT INTO user (username, hashed_password) VALUES (?1, ?2)",
            params![user.username, hashed],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                CrmError::DuplicateUsername {
                    username: user.username.clone(),
                }
                .into()
            } else {
                from_rusqlite(e)
            }
        })
    }

    pub fn add_customer(&mut self, customer: &NewCustomer) -> Result<i64> {
        self.insert(
            Table::Customer,
            "INSERT INTO customer (contact_no, purchase_hist, ticket_hist, payment_type)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                customer.contact_no,
                customer.purchase_hist,
                customer.ticket_hist,
                customer.payment_type
            ],
        )
        .map_err(from_rusqlite)
    }

    pub fn add_product(&mut self, product: &NewProduct) -> Result<i64> {
        self.insert(
            Table::Product,
            "INSERT INTO product (project_type, project_date, project_rating)
             VALUES (?1, ?2, ?3)",
            params![
                product.project_type,
                product.project_date,
                product.project_rating
            ],
        )
        .map_err(from_rusqlite)
    }

    /// Insert a support row; returns its rowid
    pub fn add_support(&mut self, support: &NewSupport) -> Result<i64> {
        self.insert(
            Table::Support,
            "INSERT INTO support (ticket_id, project_id, ticket_date, ticket_status, ticket_manager)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                support.ticket_id,
                support.project_id,
                support.ticket_date,
                support.ticket_status,
                support.ticket_manager
            ],
        )
        .map_err(from_rusqlite)
    }

    /// Insert a ticket
    ///
    /// Only the ticket row is written; no support row is created alongside.
    pub fn add_ticket(&mut self, ticket: &NewTicket) -> Result<i64> {
        self.insert(
            Table::Ticket,
            "INSERT INTO ticket (customer_id, project_id, ticket_date, ticket_status, ticket_reason)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                ticket.customer_id,
                ticket.project_id,
                ticket.ticket_date,
                ticket.ticket_status,
                ticket.ticket_reason
            ],
        )
        .map_err(from_rusqlite)
    }

    fn insert(
        &mut self,
        table: Table,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> rusqlite::Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(sql, params)?;
        let row_id = tx.last_insert_rowid();
        tx.commit()?;

        tracing::debug!(table = table.name(), row_id, "row inserted");
        Ok(row_id)
    }

    // ===== Reads =====

    /// All rows of `T`'s table, in storage order
    pub fn fetch_all<T: StoreRecord>(&self) -> Result<Vec<T>> {
        let sql = select_sql(T::TABLE);
        self.query(&sql, [])
    }

    /// Scan `T`'s table and hand the rows to `handler`
    ///
    /// The statement is finished before `handler` runs.
    pub fn with_rows<T, R, F>(&self, handler: F) -> Result<R>
    where
        T: StoreRecord,
        F: FnOnce(&[T]) -> R,
    {
        let rows = self.fetch_all::<T>()?;
        Ok(handler(&rows))
    }

    /// Customers whose payment type equals `payment_type` exactly
    pub fn customers_by_payment_type(&self, payment_type: &str) -> Result<Vec<Customer>> {
        let sql = format!("{} WHERE payment_type = ?1", select_sql(Table::Customer));
        self.query(&sql, [payment_type])
    }

    /// Number of rows in `table`
    pub fn count(&self, table: Table) -> Result<i64> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table.name()), [], |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)
    }

    fn query<T: StoreRecord, P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(params, |row| T::from_row(row))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        tracing::debug!(table = T::TABLE.name(), row_count = rows.len(), "rows fetched");
        Ok(rows)
    }
}

/// Select statement for a known table; names never come from input
fn select_sql(table: Table) -> String {
    format!(
        "SELECT {} FROM {}",
        table.columns().join(", "),
        table.name()
    )
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
