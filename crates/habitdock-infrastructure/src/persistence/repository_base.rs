use habitdock_domain::shared::DomainError;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::RepositoryErrorMapper;

/// Shared plumbing for SQLite repositories: runs a query against the pool,
/// maps errors with the operation name and records its duration.
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        let start = Instant::now();
        let result = query
            .execute(self.pool())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))?;

        debug!(
            context,
            rows_affected = result.rows_affected(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query executed"
        );
        Ok(result)
    }

    pub async fn fetch_one<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<T, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let start = Instant::now();
        let row = query
            .fetch_one(self.pool())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))?;

        debug!(
            context,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query fetched one row"
        );
        Ok(row)
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let start = Instant::now();
        let row = query
            .fetch_optional(self.pool())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))?;

        debug!(
            context,
            found = row.is_some(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query fetched optional row"
        );
        Ok(row)
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let start = Instant::now();
        let rows = query
            .fetch_all(self.pool())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))?;

        debug!(
            context,
            rows = rows.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query fetched rows"
        );
        Ok(rows)
    }
}
