use std::fmt;

/// The five tables of the store
///
/// Queries are built only from these names, never from operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    User,
    Customer,
    Product,
    Support,
    Ticket,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::User,
        Table::Customer,
        Table::Product,
        Table::Support,
        Table::Ticket,
    ];

    /// SQL table name
    pub fn name(&self) -> &'static str {
        match self {
            Table::User => "user",
            Table::Customer => "customer",
            Table::Product => "product",
            Table::Support => "support",
            Table::Ticket => "ticket",
        }
    }

    /// Columns in declaration order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::User => &["id", "username", "hashed_password"],
            Table::Customer => &[
                "customer_id",
                "contact_no",
                "purchase_hist",
                "ticket_hist",
                "payment_type",
            ],
            Table::Product => &["project_id", "project_type", "project_date", "project_rating"],
            Table::Support => &[
                "ticket_id",
                "project_id",
                "ticket_date",
                "ticket_status",
                "ticket_manager",
            ],
            Table::Ticket => &[
                "customer_id",
                "ticket_id",
                "project_id",
                "ticket_date",
                "ticket_status",
                "ticket_reason",
            ],
        }
    }

    /// CSV file written by an export of this table
    ///
    /// The user table holds password hashes and is never exported.
    pub fn export_file_name(&self) -> Option<&'static str> {
        match self {
            Table::User => None,
            Table::Customer => Some("customer_data.csv"),
            Table::Product => Some("product_data.csv"),
            Table::Support => Some("support_data.csv"),
            Table::Ticket => Some("ticket_data.csv"),
        }
    }

    /// Capitalised entity name for operator messages
    pub fn title(&self) -> &'static str {
        match self {
            Table::User => "User",
            Table::Customer => "Customer",
            Table::Product => "Product",
            Table::Support => "Support",
            Table::Ticket => "Ticket",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
