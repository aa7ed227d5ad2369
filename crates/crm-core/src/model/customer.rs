use super::{Record, Table};
use serde::Serialize;

/// A row of the `customer` table
///
/// `purchase_hist` and `ticket_hist` are declared as references to product
/// and support rows but hold whatever the operator typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub customer_id: i64,
    pub contact_no: String,
    pub purchase_hist: Option<String>,
    pub ticket_hist: Option<String>,
    pub payment_type: String,
}

impl Record for Customer {
    const TABLE: Table = Table::Customer;

    fn values(&self) -> Vec<Option<String>> {
        vec![
            Some(self.customer_id.to_string()),
            Some(self.contact_no.clone()),
            self.purchase_hist.clone(),
            self.ticket_hist.clone(),
            Some(self.payment_type.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub contact_no: String,
    pub purchase_hist: String,
    pub ticket_hist: String,
    pub payment_type: String,
}

impl NewCustomer {
    pub fn new(
        contact_no: impl Into<String>,
        purchase_hist: impl Into<String>,
        ticket_hist: impl Into<String>,
        payment_type: impl Into<String>,
    ) -> Self {
        Self {
            contact_no: contact_no.into(),
            purchase_hist: purchase_hist.into(),
            ticket_hist: ticket_hist.into(),
            payment_type: payment_type.into(),
        }
    }
}
