// Table store - row deletion and sequence reset against a resolved table
//
// The two operations are independent statements. Nothing here opens a
// transaction; each statement commits on its own.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::registry::TableDescriptor;
use crate::sql::{delete_rows_statement, quote_ident, reset_sequence_statement};

#[async_trait]
pub trait BaseTableStore: Send + Sync {
    /// Delete every row whose primary key is in `ids`, returning the count removed
    async fn delete_rows(&self, table: &TableDescriptor, ids: &[i64]) -> Result<u64, sqlx::Error>;

    /// Move the table's sequence past the current maximum primary key.
    ///
    /// Returns the value the next insert will receive, or `None` when the
    /// primary-key column owns no sequence.
    async fn reset_sequence(&self, table: &TableDescriptor) -> Result<Option<i64>, sqlx::Error>;
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgTableStore {
    pool: PgPool,
}

impl PgTableStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseTableStore for PgTableStore {
    async fn delete_rows(&self, table: &TableDescriptor, ids: &[i64]) -> Result<u64, sqlx::Error> {
        let sql = delete_rows_statement(table);
        let result = sqlx::query(&sql).bind(ids).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn reset_sequence(&self, table: &TableDescriptor) -> Result<Option<i64>, sqlx::Error> {
        let sql = reset_sequence_statement(table);
        let next_value: Option<i64> = sqlx::query_scalar(&sql)
            .bind(quote_ident(&table.db_table))
            .bind(&table.pk_column)
            .fetch_one(&self.pool)
            .await?;

        Ok(next_value)
    }
}
