//! `useradm get-user` command.

use clap::Args;

use useradm_core::{SqliteUserRepository, UserRepository};

use crate::{output, shared};

/// Fetch a single user by exact username.
#[derive(Debug, Args)]
pub struct GetUserArgs {
    /// Username of the user to fetch.
    #[arg(long)]
    pub username: String,
    /// Emit JSON instead of the line format.
    #[arg(long)]
    pub json: bool,
    /// Database path (defaults to $USERADM_DB or ./useradm.db).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the get-user command.
pub fn execute(args: &GetUserArgs) -> anyhow::Result<()> {
    let conn = shared::open_store(&args.db)?;
    let repo = SqliteUserRepository::new(&conn);

    match repo
        .get_user(&args.username)
        .map_err(|e| anyhow::anyhow!("store error: {e}"))?
    {
        Some(user) => output::print_user(&user, args.json)?,
        // A miss is a normal answer, not a fault.
        None => println!("{} not found!", args.username),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use useradm_core::NewUser;

    #[test]
    fn get_existing_user_succeeds() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("get.db").to_str().expect("utf8").to_string();
        {
            let conn = shared::open_store(&Some(db.clone())).expect("open");
            let repo = SqliteUserRepository::new(&conn);
            repo.create_user(&NewUser::new("alice", "alice@mail.com", "x"))
                .expect("insert");
        }

        let args = GetUserArgs {
            username: "alice".into(),
            json: false,
            db: Some(db),
        };
        assert!(execute(&args).is_ok());
    }

    #[test]
    fn get_missing_user_is_not_a_fault() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("get2.db").to_str().expect("utf8").to_string();

        let args = GetUserArgs {
            username: "ghost".into(),
            json: false,
            db: Some(db),
        };
        assert!(execute(&args).is_ok());
    }
}
