//! User repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and search APIs over the canonical `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must validate fields before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Every operation executes one logical query on one borrowed connection.

use crate::db::DbError;
use crate::model::user::{NewUser, User, UserValidationError};
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SELECT_SQL: &str = "SELECT id, username, email, password FROM users";

/// Default page size for [`UserRepository::list_users`].
pub const DEFAULT_LIST_LIMIT: u32 = 10;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(UserValidationError),
    Db(DbError),
    /// Exact-username lookup matched nothing; carries the username.
    NotFound(String),
    /// Insert or email update collided with the username/email unique
    /// constraint. SQLite rolls the statement back; no partial row remains.
    UniqueViolation,
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(username) => write!(f, "user not found: {username}"),
            Self::UniqueViolation => write!(f, "username or email already taken"),
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::UniqueViolation => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<UserValidationError> for RepoError {
    fn from(value: UserValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserListQuery {
    /// Maximum number of records returned.
    pub limit: u32,
    /// Number of records skipped, in id order.
    pub offset: u32,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

/// Repository interface for user CRUD and search operations.
pub trait UserRepository {
    fn create_user(&self, user: &NewUser) -> RepoResult<User>;
    fn get_user(&self, username: &str) -> RepoResult<Option<User>>;
    fn get_all_users(&self) -> RepoResult<Vec<User>>;
    fn find_users(&self, key: &str) -> RepoResult<Vec<User>>;
    fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<User>>;
    fn change_email(&self, username: &str, new_email: &str) -> RepoResult<User>;
    fn delete_user(&self, username: &str) -> RepoResult<()>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, user: &NewUser) -> RepoResult<User> {
        user.validate()?;

        self.conn
            .execute(
                "INSERT INTO users (username, email, password) VALUES (?1, ?2, ?3);",
                params![
                    user.username.as_str(),
                    user.email.as_str(),
                    user.password.as_str()
                ],
            )
            .map_err(map_constraint_err)?;

        Ok(User {
            id: self.conn.last_insert_rowid(),
            username: user.username.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        })
    }

    fn get_user(&self, username: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE username = ?1;"))?;

        let mut rows = stmt.query([username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn get_all_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id;"))?;

        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn find_users(&self, key: &str) -> RepoResult<Vec<User>> {
        // instr() keeps the match case-sensitive and treats `%`/`_` as plain
        // bytes; SQLite LIKE would do neither for ASCII input.
        let mut stmt = self.conn.prepare(&format!(
            "{USER_SELECT_SQL}
             WHERE instr(username, ?1) > 0 OR instr(email, ?1) > 0
             ORDER BY id;"
        ))?;

        let mut rows = stmt.query([key])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!(
            "{USER_SELECT_SQL} ORDER BY id LIMIT ?1 OFFSET ?2;"
        ))?;

        let mut rows = stmt.query(params![query.limit, query.offset])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn change_email(&self, username: &str, new_email: &str) -> RepoResult<User> {
        let changed = self
            .conn
            .execute(
                "UPDATE users SET email = ?1 WHERE username = ?2;",
                params![new_email, username],
            )
            .map_err(map_constraint_err)?;

        if changed == 0 {
            return Err(RepoError::NotFound(username.to_string()));
        }

        self.get_user(username)?
            .ok_or_else(|| RepoError::NotFound(username.to_string()))
    }

    fn delete_user(&self, username: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM users WHERE username = ?1;", [username])?;

        if changed == 0 {
            return Err(RepoError::NotFound(username.to_string()));
        }

        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let user = User {
        id: row.get("id")?,
        username: row.get("username")?,
        email: row.get("email")?,
        password: row.get("password")?,
    };
    user.validate()
        .map_err(|err| RepoError::InvalidData(err.to_string()))?;
    Ok(user)
}

fn map_constraint_err(err: rusqlite::Error) -> RepoError {
    match &err {
        rusqlite::Error::SqliteFailure(cause, _)
            if cause.code == ErrorCode::ConstraintViolation =>
        {
            RepoError::UniqueViolation
        }
        _ => RepoError::Db(DbError::Sqlite(err)),
    }
}
