use super::{Record, Table};
use crm_core_types::Sensitive;

/// A row of the `user` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub hashed_password: String,
}

impl Record for User {
    const TABLE: Table = Table::User;

    fn values(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            Some(self.username.clone()),
            Some(self.hashed_password.clone()),
        ]
    }
}

/// Insert payload for a user; the password is hashed by the store
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: Sensitive<String>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<Sensitive<String>>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
