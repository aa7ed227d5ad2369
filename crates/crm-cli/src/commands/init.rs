//! Store initialization
//!
//! Usage: crm init [--db <PATH>]

use crate::config::CrmConfig;
use crm_engine::commands::store;

pub fn execute(config: &CrmConfig) -> Result<(), Box<dyn std::error::Error>> {
    store::open_store(&config.db_path)?;
    println!("Store ready at {}", config.db_path.display());
    Ok(())
}
