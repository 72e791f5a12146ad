//! Core domain logic for the useradm user registry.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::init_logging;
pub use model::user::{NewUser, User, UserId, UserValidationError};
pub use repo::user_repo::{
    RepoError, RepoResult, SqliteUserRepository, UserListQuery, UserRepository,
    DEFAULT_LIST_LIMIT,
};
pub use service::user_service::{
    initialize_store, UserService, SEED_EMAIL, SEED_PASSWORD, SEED_USERNAME,
};
