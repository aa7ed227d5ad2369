use super::{Record, Table};
use serde::Serialize;

/// A row of the `product` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub project_id: i64,
    pub project_type: String,
    pub project_date: Option<String>,
    pub project_rating: Option<String>,
}

impl Record for Product {
    const TABLE: Table = Table::Product;

    fn values(&self) -> Vec<Option<String>> {
        vec![
            Some(self.project_id.to_string()),
            Some(self.project_type.clone()),
            self.project_date.clone(),
            self.project_rating.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub project_type: String,
    pub project_date: String,
    pub project_rating: String,
}

impl NewProduct {
    pub fn new(
        project_type: impl Into<String>,
        project_date: impl Into<String>,
        project_rating: impl Into<String>,
    ) -> Self {
        Self {
            project_type: project_type.into(),
            project_date: project_date.into(),
            project_rating: project_rating.into(),
        }
    }
}
