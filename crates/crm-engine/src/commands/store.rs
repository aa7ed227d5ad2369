//! Store lifecycle

use super::instrumented;
use crm_store::{CrmRepo, Result};
use std::path::Path;

/// Open the store file and make sure the schema exists
///
/// Any error here is fatal: the caller should abort startup.
pub fn open_store(path: &Path) -> Result<CrmRepo> {
    instrumented("open_store", || {
        let mut repo = CrmRepo::open(path)?;
        repo.ensure_schema()?;
        Ok(repo)
    })
}

/// Create the CRM tables if absent
pub fn ensure_schema(repo: &mut CrmRepo) -> Result<()> {
    instrumented("ensure_schema", || repo.ensure_schema())
}
