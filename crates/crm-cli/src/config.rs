//! Runtime configuration assembled from CLI flags and environment

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CrmConfig {
    /// Store file; created on first use
    pub db_path: PathBuf,
    pub export_dir: PathBuf,
    /// Reproduce the old behaviour where a bad sub-menu choice ends the session
    pub exit_on_invalid: bool,
}
