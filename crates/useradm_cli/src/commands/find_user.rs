//! `useradm find-user` command.
//!
//! Case-sensitive substring search against usernames and emails.

use clap::Args;

use useradm_core::{SqliteUserRepository, UserRepository};

use crate::{output, shared};

/// Substring search over usernames and emails.
#[derive(Debug, Args)]
pub struct FindUserArgs {
    /// Substring to look for.
    #[arg(long)]
    pub key: String,
    /// Emit JSON instead of the line format.
    #[arg(long)]
    pub json: bool,
    /// Database path (defaults to $USERADM_DB or ./useradm.db).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the find-user command.
pub fn execute(args: &FindUserArgs) -> anyhow::Result<()> {
    let conn = shared::open_store(&args.db)?;
    let repo = SqliteUserRepository::new(&conn);

    let users = repo
        .find_users(&args.key)
        .map_err(|e| anyhow::anyhow!("store error: {e}"))?;

    if args.json {
        output::print_users(&users, true)?;
    } else if users.is_empty() {
        println!("'{}' not found!", args.key);
    } else {
        output::print_users(&users, false)?;
    }

    Ok(())
}
