//! `useradm create-user` command.

use clap::Args;

use useradm_core::{NewUser, RepoError, SqliteUserRepository, UserRepository};

use crate::{output, shared};

/// Insert a new user into the store.
#[derive(Debug, Args)]
pub struct CreateUserArgs {
    /// Username of the new user; must be unique.
    #[arg(long)]
    pub username: String,
    /// Email of the new user; must be unique.
    #[arg(long)]
    pub email: String,
    /// Password of the new user, stored verbatim.
    #[arg(long)]
    pub password: String,
    /// Database path (defaults to $USERADM_DB or ./useradm.db).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the create-user command.
pub fn execute(args: &CreateUserArgs) -> anyhow::Result<()> {
    let conn = shared::open_store(&args.db)?;
    let repo = SqliteUserRepository::new(&conn);

    let request = NewUser::new(&args.username, &args.email, &args.password);
    match repo.create_user(&request) {
        Ok(user) => println!("{}", output::format_user(&user)),
        // The statement rolled back; no partial row exists.
        Err(RepoError::UniqueViolation) => println!("Username or email already taken!"),
        Err(RepoError::Validation(err)) => anyhow::bail!("invalid user: {err}"),
        Err(other) => return Err(anyhow::anyhow!("store error: {other}")),
    }

    Ok(())
}
