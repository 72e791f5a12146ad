//! CLI subcommands, one module per command.

pub mod change_email;
pub mod create_user;
pub mod delete_user;
pub mod find_user;
pub mod get_all_users;
pub mod get_user;
pub mod initialize;
pub mod list_users;
