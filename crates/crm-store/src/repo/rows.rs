//! Row decoding
//!
//! Data columns have TEXT affinity, so what was entered is what comes back.
//! Integer and real values (rowid keys, or tables created by an older tool
//! with numeric column types) are rendered back to text here.

use crm_core::model::{Customer, Product, Record, Support, Ticket, User};
use rusqlite::types::{Type, ValueRef};
use rusqlite::Row;

/// A record that can be decoded from a row of its table
///
/// Rows must be selected with the columns of `Self::TABLE` in order.
pub trait StoreRecord: Record {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Column value as text; NULL is `None`
pub(crate) fn text_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(String::from_utf8_lossy(b).into_owned()),
    })
}

/// Column value as text, rejecting NULL
fn required_text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    text_at(row, idx)?.ok_or_else(|| {
        let name = row
            .as_ref()
            .column_name(idx)
            .map(|n| n.to_string())
            .unwrap_or_default();
        rusqlite::Error::InvalidColumnType(idx, name, Type::Null)
    })
}

impl StoreRecord for User {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get(0)?,
            username: required_text(row, 1)?,
            hashed_password: required_text(row, 2)?,
        })
    }
}

impl StoreRecord for Customer {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Customer {
            customer_id: row.get(0)?,
            contact_no: required_text(row, 1)?,
            purchase_hist: text_at(row, 2)?,
            ticket_hist: text_at(row, 3)?,
            payment_type: required_text(row, 4)?,
        })
    }
}

impl StoreRecord for Product {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Product {
            project_id: row.get(0)?,
            project_type: required_text(row, 1)?,
            project_date: text_at(row, 2)?,
            project_rating: text_at(row, 3)?,
        })
    }
}

impl StoreRecord for Support {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Support {
            ticket_id: text_at(row, 0)?,
            project_id: text_at(row, 1)?,
            ticket_date: text_at(row, 2)?,
            ticket_status: text_at(row, 3)?,
            ticket_manager: required_text(row, 4)?,
        })
    }
}

impl StoreRecord for Ticket {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Ticket {
            customer_id: text_at(row, 0)?,
            ticket_id: row.get(1)?,
            project_id: text_at(row, 2)?,
            ticket_date: text_at(row, 3)?,
            ticket_status: text_at(row, 4)?,
            ticket_reason: required_text(row, 5)?,
        })
    }
}
