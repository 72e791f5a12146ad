//! `useradm delete-user` command.

use clap::Args;

use useradm_core::{RepoError, SqliteUserRepository, UserRepository};

use crate::shared;

/// Remove a user by exact username.
#[derive(Debug, Args)]
pub struct DeleteUserArgs {
    /// Username of the user to delete.
    #[arg(long)]
    pub username: String,
    /// Database path (defaults to $USERADM_DB or ./useradm.db).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the delete-user command.
pub fn execute(args: &DeleteUserArgs) -> anyhow::Result<()> {
    let conn = shared::open_store(&args.db)?;
    let repo = SqliteUserRepository::new(&conn);

    match repo.delete_user(&args.username) {
        Ok(()) => println!("{} deleted", args.username),
        Err(RepoError::NotFound(username)) => {
            println!("{username} not found! Unable to delete user.");
        }
        Err(other) => return Err(anyhow::anyhow!("store error: {other}")),
    }

    Ok(())
}
