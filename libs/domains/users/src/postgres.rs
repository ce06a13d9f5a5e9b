use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, QueryResult, Statement};

use crate::{
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

const SELECT_ALL: &str = "SELECT id, name, email FROM users";
const SELECT_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1";
const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id";
const UPDATE: &str = "UPDATE users SET name = $1, email = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM users WHERE id = $1";

// Rows are read by position; these follow the column order of the SELECTs above
const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_EMAIL: usize = 2;

/// PostgreSQL implementation of UserRepository
///
/// The connection pool is injected; every method runs exactly one statement.
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn statement(sql: &str, values: Vec<sea_orm::Value>) -> Statement {
        Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
    }
}

fn user_from_row(row: &QueryResult) -> Result<User, DbErr> {
    Ok(User {
        id: row.try_get_by_index(COL_ID)?,
        name: row.try_get_by_index(COL_NAME)?,
        email: row.try_get_by_index(COL_EMAIL)?,
    })
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let rows = self
            .db
            .query_all_raw(Self::statement(SELECT_ALL, vec![]))
            .await?;

        let users = rows
            .iter()
            .map(user_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> UserResult<User> {
        let row = self
            .db
            .query_one_raw(Self::statement(SELECT_BY_ID, vec![id.into()]))
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user_from_row(&row)?)
    }

    async fn create(&self, user: User) -> UserResult<User> {
        let row = self
            .db
            .query_one_raw(Self::statement(
                INSERT,
                vec![user.name.as_str().into(), user.email.as_str().into()],
            ))
            .await?
            .ok_or_else(|| UserError::Store("INSERT ... RETURNING id returned no row".into()))?;

        let id: i32 = row.try_get_by_index(0)?;

        tracing::info!(user_id = id, "Created user");
        Ok(User { id, ..user })
    }

    async fn update(&self, user: &User) -> UserResult<()> {
        let result = self
            .db
            .execute_raw(Self::statement(
                UPDATE,
                vec![
                    user.name.as_str().into(),
                    user.email.as_str().into(),
                    user.id.into(),
                ],
            ))
            .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.id));
        }

        tracing::info!(user_id = user.id, "Updated user");
        Ok(())
    }

    async fn delete(&self, id: i32) -> UserResult<()> {
        let result = self
            .db
            .execute_raw(Self::statement(DELETE, vec![id.into()]))
            .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
