//! PostgreSQL-backed user repository.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use shiftclock_core::timesheet::ports::UserRepository;
use shiftclock_domain::{NewUser, Result, ShiftClockError, User};
use tokio_postgres::Row;
use uuid::Uuid;

use super::postgres::PgDatabase;
use crate::errors::InfraError;

const USER_COLUMNS: &str = "id, username, password_hash, name, employee_id";

/// PostgreSQL-backed user repository.
pub struct PgUserRepository {
    db: Arc<PgDatabase>,
}

impl PgUserRepository {
    /// Construct a repository backed by the shared database manager.
    pub fn new(db: Arc<PgDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let row = self
            .db
            .client()
            .query_opt(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"),
                &[&id.to_string()],
            )
            .await
            .map_err(map_pg_error)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = self
            .db
            .client()
            .query_opt(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1"),
                &[&username],
            )
            .await
            .map_err(map_pg_error)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn create_user(&self, user: &NewUser, password_hash: &str) -> Result<User> {
        let id = Uuid::new_v4();
        self.db
            .client()
            .execute(
                "INSERT INTO users (id, username, password_hash, name, employee_id)
                 VALUES ($1, $2, $3, $4, $5)",
                &[
                    &id.to_string(),
                    &user.username,
                    &password_hash,
                    &user.name,
                    &user.employee_id,
                ],
            )
            .await
            .map_err(map_pg_error)?;

        Ok(User {
            id,
            username: user.username.clone(),
            password_hash: password_hash.to_string(),
            name: user.name.clone(),
            employee_id: user.employee_id.clone(),
        })
    }
}

fn row_to_user(row: &Row) -> Result<User> {
    let id: String = row.get("id");
    Ok(User {
        id: Uuid::from_str(&id)
            .map_err(|e| ShiftClockError::Database(format!("invalid user id: {e}")))?,
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        name: row.get("name"),
        employee_id: row.get("employee_id"),
    })
}

fn map_pg_error(err: tokio_postgres::Error) -> ShiftClockError {
    ShiftClockError::from(InfraError::from(err))
}
