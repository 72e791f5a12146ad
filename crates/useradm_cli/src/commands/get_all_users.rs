//! `useradm get-all-users` command.

use clap::Args;

use useradm_core::{SqliteUserRepository, UserRepository};

use crate::{output, shared};

/// Print every user in the store.
#[derive(Debug, Args)]
pub struct GetAllUsersArgs {
    /// Emit JSON instead of the line format.
    #[arg(long)]
    pub json: bool,
    /// Database path (defaults to $USERADM_DB or ./useradm.db).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the get-all-users command.
pub fn execute(args: &GetAllUsersArgs) -> anyhow::Result<()> {
    let conn = shared::open_store(&args.db)?;
    let repo = SqliteUserRepository::new(&conn);

    let users = repo
        .get_all_users()
        .map_err(|e| anyhow::anyhow!("store error: {e}"))?;

    if args.json {
        output::print_users(&users, true)?;
    } else if users.is_empty() {
        println!("No users found");
    } else {
        output::print_users(&users, false)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use useradm_core::NewUser;

    #[test]
    fn empty_store_is_not_a_fault() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("all.db").to_str().expect("utf8").to_string();

        let args = GetAllUsersArgs {
            json: false,
            db: Some(db),
        };
        assert!(execute(&args).is_ok());
    }

    #[test]
    fn populated_store_prints_without_error() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("all2.db").to_str().expect("utf8").to_string();
        {
            let conn = shared::open_store(&Some(db.clone())).expect("open");
            let repo = SqliteUserRepository::new(&conn);
            repo.create_user(&NewUser::new("alice", "alice@mail.com", "x"))
                .expect("insert");
            repo.create_user(&NewUser::new("bob", "bob@mail.com", "y"))
                .expect("insert");
        }

        let args = GetAllUsersArgs {
            json: true,
            db: Some(db),
        };
        assert!(execute(&args).is_ok());
    }
}
