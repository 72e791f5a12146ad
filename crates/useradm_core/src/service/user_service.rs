//! User use-case service.
//!
//! # Responsibility
//! - Provide stable registry entry points for core callers.
//! - Delegate persistence to repository implementations.
//! - Own the destructive initialize-and-seed use case.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - The service layer remains storage-agnostic except for
//!   [`initialize_store`], which must reach the schema to reset it.

use crate::db::migrations::reset_schema;
use crate::model::user::{NewUser, User};
use crate::repo::user_repo::{
    RepoResult, SqliteUserRepository, UserListQuery, UserRepository,
};
use log::info;
use rusqlite::Connection;

/// Username of the record seeded by [`initialize_store`].
pub const SEED_USERNAME: &str = "bob";
/// Email of the seed record.
pub const SEED_EMAIL: &str = "bob@mail.com";
/// Password of the seed record, stored verbatim like every other password.
pub const SEED_PASSWORD: &str = "bobpass";

/// Use-case service wrapper for user registry operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new user; the store assigns the id.
    pub fn create_user(&self, user: &NewUser) -> RepoResult<User> {
        self.repo.create_user(user)
    }

    /// Gets one user by exact username.
    pub fn get_user(&self, username: &str) -> RepoResult<Option<User>> {
        self.repo.get_user(username)
    }

    /// Returns every user in id order.
    pub fn get_all_users(&self) -> RepoResult<Vec<User>> {
        self.repo.get_all_users()
    }

    /// Case-sensitive substring search over username and email.
    pub fn find_users(&self, key: &str) -> RepoResult<Vec<User>> {
        self.repo.find_users(key)
    }

    /// Lists users using pagination options.
    pub fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<User>> {
        self.repo.list_users(query)
    }

    /// Overwrites the email of an existing user.
    ///
    /// Returns repository-level not-found or unique-violation errors
    /// unchanged.
    pub fn change_email(&self, username: &str, new_email: &str) -> RepoResult<User> {
        self.repo.change_email(username, new_email)
    }

    /// Removes a user by exact username.
    pub fn delete_user(&self, username: &str) -> RepoResult<()> {
        self.repo.delete_user(username)
    }
}

/// Destroys all registry contents, recreates the schema and inserts the
/// default seed record.
///
/// Irreversible; there is no confirmation prompt at this layer or above.
///
/// # Side effects
/// - Emits `store_initialize` logging events.
pub fn initialize_store(conn: &mut Connection) -> RepoResult<User> {
    info!("event=store_initialize module=service status=start");

    reset_schema(conn)?;

    let repo = SqliteUserRepository::new(&*conn);
    let seeded = repo.create_user(&NewUser::new(SEED_USERNAME, SEED_EMAIL, SEED_PASSWORD))?;

    info!(
        "event=store_initialize module=service status=ok seed_user={}",
        seeded.username
    );
    Ok(seeded)
}
