//! useradm - user registry administration CLI.

use clap::{Parser, Subcommand};

mod commands;
mod output;
pub(crate) mod shared;

/// Administer a single-table user registry backed by SQLite.
#[derive(Debug, Parser)]
#[command(name = "useradm", version, about)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Drop all existing data and reseed the store with the default user.
    Initialize(commands::initialize::InitializeArgs),
    /// Fetch a single user by exact username.
    GetUser(commands::get_user::GetUserArgs),
    /// Print every user in the store.
    GetAllUsers(commands::get_all_users::GetAllUsersArgs),
    /// Overwrite the email of an existing user.
    ChangeEmail(commands::change_email::ChangeEmailArgs),
    /// Insert a new user into the store.
    CreateUser(commands::create_user::CreateUserArgs),
    /// Remove a user by exact username.
    DeleteUser(commands::delete_user::DeleteUserArgs),
    /// Substring search over usernames and emails.
    FindUser(commands::find_user::FindUserArgs),
    /// Print a limit/offset slice of the store.
    ListUsers(commands::list_users::ListUsersArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only records and messages.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    useradm_core::init_logging(level).map_err(|message| anyhow::anyhow!(message))?;

    log::debug!("event=cli_start module=cli level={level}");

    match &cli.command {
        Commands::Initialize(args) => commands::initialize::execute(args),
        Commands::GetUser(args) => commands::get_user::execute(args),
        Commands::GetAllUsers(args) => commands::get_all_users::execute(args),
        Commands::ChangeEmail(args) => commands::change_email::execute(args),
        Commands::CreateUser(args) => commands::create_user::execute(args),
        Commands::DeleteUser(args) => commands::delete_user::execute(args),
        Commands::FindUser(args) => commands::find_user::execute(args),
        Commands::ListUsers(args) => commands::list_users::execute(args),
    }
}
