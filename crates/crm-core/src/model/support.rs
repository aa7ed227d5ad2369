use super::{Record, Table};
use serde::Serialize;

/// A row of the `support` table
///
/// `ticket_id` is not a key here: nothing stops two support rows from
/// naming the same ticket, or from naming none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Support {
    pub ticket_id: Option<String>,
    pub project_id: Option<String>,
    pub ticket_date: Option<String>,
    pub ticket_status: Option<String>,
    pub ticket_manager: String,
}

impl Record for Support {
    const TABLE: Table = Table::Support;

    fn values(&self) -> Vec<Option<String>> {
        vec![
            self.ticket_id.clone(),
            self.project_id.clone(),
            self.ticket_date.clone(),
            self.ticket_status.clone(),
            Some(self.ticket_manager.clone()),
        ]
    }
}

/// Insert payload for a support row
///
/// `ticket_id` and `project_id` are optional and stored as NULL when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupport {
    pub ticket_manager: String,
    pub ticket_date: String,
    pub ticket_status: String,
    pub ticket_id: Option<String>,
    pub project_id: Option<String>,
}

impl NewSupport {
    pub fn new(
        ticket_manager: impl Into<String>,
        ticket_date: impl Into<String>,
        ticket_status: impl Into<String>,
    ) -> Self {
        Self {
            ticket_manager: ticket_manager.into(),
            ticket_date: ticket_date.into(),
            ticket_status: ticket_status.into(),
            ticket_id: None,
            project_id: None,
        }
    }

    pub fn with_ticket_id(mut self, ticket_id: impl Into<String>) -> Self {
        self.ticket_id = Some(ticket_id.into());
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}
