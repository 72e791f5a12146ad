//! `useradm change-email` command.

use clap::Args;

use useradm_core::{RepoError, SqliteUserRepository, UserRepository};

use crate::shared;

/// Overwrite the email of an existing user.
#[derive(Debug, Args)]
pub struct ChangeEmailArgs {
    /// Username of the user to update.
    #[arg(long)]
    pub username: String,
    /// New email; must be unique across the store.
    #[arg(long)]
    pub new_email: String,
    /// Database path (defaults to $USERADM_DB or ./useradm.db).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the change-email command.
pub fn execute(args: &ChangeEmailArgs) -> anyhow::Result<()> {
    let conn = shared::open_store(&args.db)?;
    let repo = SqliteUserRepository::new(&conn);

    match repo.change_email(&args.username, &args.new_email) {
        Ok(user) => println!("Updated {}'s email to {}", user.username, user.email),
        Err(RepoError::NotFound(username)) => {
            println!("{username} not found! Unable to update email.");
        }
        Err(RepoError::UniqueViolation) => println!("Username or email already taken!"),
        Err(other) => return Err(anyhow::anyhow!("store error: {other}")),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use useradm_core::NewUser;

    #[test]
    fn change_email_persists_the_update() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("mail.db").to_str().expect("utf8").to_string();
        {
            let conn = shared::open_store(&Some(db.clone())).expect("open");
            let repo = SqliteUserRepository::new(&conn);
            repo.create_user(&NewUser::new("alice", "alice@mail.com", "x"))
                .expect("insert");
        }

        let args = ChangeEmailArgs {
            username: "alice".into(),
            new_email: "new@mail.com".into(),
            db: Some(db.clone()),
        };
        assert!(execute(&args).is_ok());

        let conn = shared::open_store(&Some(db)).expect("open");
        let repo = SqliteUserRepository::new(&conn);
        let stored = repo.get_user("alice").expect("get").expect("exists");
        assert_eq!(stored.email, "new@mail.com");
    }

    #[test]
    fn missing_user_is_not_a_fault() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("mail2.db").to_str().expect("utf8").to_string();

        let args = ChangeEmailArgs {
            username: "ghost".into(),
            new_email: "new@mail.com".into(),
            db: Some(db),
        };
        assert!(execute(&args).is_ok());
    }
}
