//! CSV export
//!
//! One file per table with a fixed header row. The file is rendered in
//! memory and written via temp file + rename, so an interrupted export never
//! leaves a truncated CSV behind.

use crate::errors::{csv_error, io_error, Result};
use crate::repo::{CrmRepo, StoreRecord};
use crm_core::errors::{ExError, ExErrorKind};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of an export attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The table had rows and the file was written
    Written { path: PathBuf, rows: usize },
    /// The table was empty; no file was written
    NoData,
}

/// Export every row of `T`'s table into `dir`
///
/// An empty table is not an error: nothing is written and `NoData` is
/// returned.
pub fn export_table<T>(repo: &CrmRepo, dir: &Path) -> Result<ExportOutcome>
where
    T: StoreRecord + Serialize,
{
    let table = T::TABLE;
    let file_name = table.export_file_name().ok_or_else(|| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op("export")
            .with_table(table.name())
            .with_message("table is not exportable")
    })?;
    let path = dir.join(file_name);

    let rows = repo.fetch_all::<T>()?;
    if rows.is_empty() {
        tracing::debug!(table = table.name(), "nothing to export");
        return Ok(ExportOutcome::NoData);
    }

    let content = render_csv(table.columns(), &rows, &path)?;
    atomic_write(&path, &content)?;

    tracing::debug!(
        table = table.name(),
        path = %path.display(),
        row_count = rows.len(),
        "export written"
    );
    Ok(ExportOutcome::Written {
        path,
        rows: rows.len(),
    })
}

/// Render a header row followed by one line per record
///
/// NULL columns become empty fields.
pub fn render_csv<T: Serialize>(header: &[&str], rows: &[T], path: &Path) -> Result<Vec<u8>> {
    let display = path.display().to_string();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(header)
        .map_err(|e| csv_error(&display, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| csv_error(&display, e))?;
    }

    writer
        .into_inner()
        .map_err(|e| io_error("export_flush", &display, e.into_error()))
}

fn atomic_write(target: &Path, content: &[u8]) -> Result<()> {
    let display = target.display().to_string();
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("export_create_dir", &display, e))?;
    }

    let temp_path = target.with_extension("csv.tmp");
    fs::write(&temp_path, content).map_err(|e| io_error("export_write_temp", &display, e))?;
    fs::rename(&temp_path, target).map_err(|e| io_error("export_rename_temp", &display, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::model::Support;

    #[test]
    fn test_render_csv_null_as_empty_field() {
        let rows = vec![Support {
            ticket_id: None,
            project_id: Some("2".to_string()),
            ticket_date: Some("2024-01-01".to_string()),
            ticket_status: Some("open".to_string()),
            ticket_manager: "Dana, Ops".to_string(),
        }];

        let bytes = render_csv(
            crm_core::Table::Support.columns(),
            &rows,
            Path::new("support_data.csv"),
        )
        .unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "ticket_id,project_id,ticket_date,ticket_status,ticket_manager\n\
             ,2,2024-01-01,open,\"Dana, Ops\"\n"
        );
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("out.csv");
        atomic_write(&target, b"a\n").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"a\n");
        assert!(!target.with_extension("csv.tmp").exists());
    }
}
