use super::{Record, Table};
use serde::Serialize;

/// A row of the `ticket` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub customer_id: Option<String>,
    pub ticket_id: i64,
    pub project_id: Option<String>,
    pub ticket_date: Option<String>,
    pub ticket_status: Option<String>,
    pub ticket_reason: String,
}

impl Record for Ticket {
    const TABLE: Table = Table::Ticket;

    fn values(&self) -> Vec<Option<String>> {
        vec![
            self.customer_id.clone(),
            Some(self.ticket_id.to_string()),
            self.project_id.clone(),
            self.ticket_date.clone(),
            self.ticket_status.clone(),
            Some(self.ticket_reason.clone()),
        ]
    }
}

/// Insert payload for a ticket
///
/// Adding a ticket never creates a support row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub ticket_date: String,
    pub ticket_status: String,
    pub ticket_reason: String,
    pub customer_id: Option<String>,
    pub project_id: Option<String>,
}

impl NewTicket {
    pub fn new(
        ticket_date: impl Into<String>,
        ticket_status: impl Into<String>,
        ticket_reason: impl Into<String>,
    ) -> Self {
        Self {
            ticket_date: ticket_date.into(),
            ticket_status: ticket_status.into(),
            ticket_reason: ticket_reason.into(),
            customer_id: None,
            project_id: None,
        }
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}
