//! CRM record models
//!
//! One struct per table for rows read back from the store, and one `New*`
//! payload per table for inserts. Payload fields are plain strings: the
//! application never coerces numbers or dates, it hands the text to the
//! store as entered.

mod customer;
mod product;
mod support;
mod table;
mod ticket;
mod user;

pub use customer::{Customer, NewCustomer};
pub use product::{NewProduct, Product};
pub use support::{NewSupport, Support};
pub use table::Table;
pub use ticket::{NewTicket, Ticket};
pub use user::{NewUser, User};

/// A row type bound to one table
pub trait Record: Sized {
    const TABLE: Table;

    /// Column values in `Table::columns()` order; NULL is `None`
    fn values(&self) -> Vec<Option<String>>;

    /// Render as `column: value` pairs for console output
    fn describe(&self) -> String {
        Self::TABLE
            .columns()
            .iter()
            .zip(self.values())
            .map(|(column, value)| format!("{}: {}", column, value.as_deref().unwrap_or("None")))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Map an empty operator entry to `None`
///
/// Only used for optional references; data fields keep empty strings.
pub fn optional_text(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_renders_null_as_none() {
        let product = Product {
            project_id: 3,
            project_type: "consulting".to_string(),
            project_date: None,
            project_rating: Some("5".to_string()),
        };

        assert_eq!(
            product.describe(),
            "project_id: 3, project_type: consulting, project_date: None, project_rating: 5"
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text("7"), Some("7".to_string()));
    }
}
