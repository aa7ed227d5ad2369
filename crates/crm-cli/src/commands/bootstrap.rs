//! First-user bootstrap
//!
//! Usage: crm bootstrap-user <USERNAME>   (password read from stdin)

use super::prompt::Prompter;
use crate::config::CrmConfig;
use clap::Args;
use crm_core::model::NewUser;
use crm_engine::commands::{auth, store};
use std::io;

#[derive(Debug, Args)]
pub struct BootstrapArgs {
    /// Username of the first operator
    pub username: String,
}

pub fn execute(config: &CrmConfig, args: BootstrapArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut repo = store::open_store(&config.db_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let password = prompter
        .ask("Enter password: ")?
        .ok_or("no password given on stdin")?;

    auth::bootstrap_user(&mut repo, &NewUser::new(args.username, password))?;
    prompter.say("User added successfully.")?;
    Ok(())
}
