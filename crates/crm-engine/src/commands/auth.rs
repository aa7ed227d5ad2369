//! Login gate and user creation

use super::{instrumented, instrumented_on};
use crm_core::errors::CrmError;
use crm_core::model::{NewUser, Table};
use crm_core_types::Sensitive;
use crm_store::{CrmRepo, Result};

/// Check the operator's credentials
///
/// `Ok(false)` is a failed login, not an error.
pub fn login(repo: &CrmRepo, username: &str, password: &Sensitive<String>) -> Result<bool> {
    instrumented("login", || {
        let ok = repo.login(username, password)?;
        if !ok {
            tracing::warn!(username, "login rejected");
        }
        Ok(ok)
    })
}

/// Add an operator account
pub fn add_user(repo: &mut CrmRepo, user: &NewUser) -> Result<i64> {
    instrumented_on("add_user", Table::User, || repo.add_user(user))
}

/// Create the first operator account of an empty store
///
/// Refused once any user exists, so this cannot be used to bypass the
/// login gate.
pub fn bootstrap_user(repo: &mut CrmRepo, user: &NewUser) -> Result<i64> {
    instrumented_on("bootstrap_user", Table::User, || {
        let existing_users = repo.count(Table::User)?;
        if existing_users > 0 {
            return Err(CrmError::BootstrapRefused { existing_users }.into());
        }
        repo.add_user(user)
    })
}
