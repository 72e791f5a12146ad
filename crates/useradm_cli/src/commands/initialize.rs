//! `useradm initialize` command.
//!
//! Drops all existing data and recreates the schema with the default user.
//! Destructive and unprompted, matching the store contract.

use clap::Args;

use useradm_core::initialize_store;

use crate::shared;

/// Drop all existing data and reseed the store with the default user.
#[derive(Debug, Args)]
pub struct InitializeArgs {
    /// Database path (defaults to $USERADM_DB or ./useradm.db).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the initialize command.
pub fn execute(args: &InitializeArgs) -> anyhow::Result<()> {
    let mut conn = shared::open_store(&args.db)?;

    initialize_store(&mut conn).map_err(|e| anyhow::anyhow!("initialize failed: {e}"))?;

    println!("Database Initialized");
    Ok(())
}
