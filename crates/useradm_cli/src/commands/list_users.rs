//! `useradm list-users` command.

use clap::Args;

use useradm_core::{SqliteUserRepository, UserListQuery, UserRepository, DEFAULT_LIST_LIMIT};

use crate::{output, shared};

/// Print a limit/offset slice of the store.
#[derive(Debug, Args)]
pub struct ListUsersArgs {
    /// Maximum number of records to print.
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: u32,
    /// Number of records to skip, in id order.
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
    /// Emit JSON instead of the line format.
    #[arg(long)]
    pub json: bool,
    /// Database path (defaults to $USERADM_DB or ./useradm.db).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the list-users command.
pub fn execute(args: &ListUsersArgs) -> anyhow::Result<()> {
    let conn = shared::open_store(&args.db)?;
    let repo = SqliteUserRepository::new(&conn);

    let query = UserListQuery {
        limit: args.limit,
        offset: args.offset,
    };
    let users = repo
        .list_users(&query)
        .map_err(|e| anyhow::anyhow!("store error: {e}"))?;

    output::print_users(&users, args.json)?;
    Ok(())
}
