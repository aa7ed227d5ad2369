//! CSV export

use super::instrumented_on;
use crm_store::export::export_table;
use crm_store::repo::StoreRecord;
use crm_store::{CrmRepo, ExportOutcome, Result};
use serde::Serialize;
use std::path::Path;

/// Export `T`'s table into `dir`
pub fn export<T>(repo: &CrmRepo, dir: &Path) -> Result<ExportOutcome>
where
    T: StoreRecord + Serialize,
{
    instrumented_on("export", T::TABLE, || export_table::<T>(repo, dir))
}
