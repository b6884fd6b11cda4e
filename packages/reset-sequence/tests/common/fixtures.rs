//! Test fixtures for creating tables with explicit ids.
//!
//! Rows are inserted with explicit primary keys, which leaves the serial
//! sequence untouched. That is the drift the command exists to fix.

use anyhow::Result;
use reset_sequence_core::sql::quote_ident;
use sqlx::PgPool;

/// Create a `BIGSERIAL`-keyed table holding the given ids
pub async fn create_serial_table(pool: &PgPool, table: &str, ids: &[i64]) -> Result<()> {
    sqlx::query(&format!(
        "CREATE TABLE {} (id BIGSERIAL PRIMARY KEY, label TEXT)",
        quote_ident(table)
    ))
    .execute(pool)
    .await?;

    insert_ids(pool, table, ids).await
}

/// Create a table whose `id` column owns no sequence
pub async fn create_plain_table(pool: &PgPool, table: &str, ids: &[i64]) -> Result<()> {
    sqlx::query(&format!(
        "CREATE TABLE {} (id BIGINT PRIMARY KEY, label TEXT)",
        quote_ident(table)
    ))
    .execute(pool)
    .await?;

    insert_ids(pool, table, ids).await
}

async fn insert_ids(pool: &PgPool, table: &str, ids: &[i64]) -> Result<()> {
    sqlx::query(&format!(
        "INSERT INTO {} (id, label) SELECT i, 'row ' || i FROM UNNEST($1::BIGINT[]) AS i",
        quote_ident(table)
    ))
    .bind(ids)
    .execute(pool)
    .await?;

    Ok(())
}

/// Ids currently in the table, ascending
pub async fn table_ids(pool: &PgPool, table: &str) -> Result<Vec<i64>> {
    let ids: Vec<i64> = sqlx::query_scalar(&format!(
        "SELECT id FROM {} ORDER BY id",
        quote_ident(table)
    ))
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Insert a row without an explicit id and return the id the sequence assigned
pub async fn insert_default_row(pool: &PgPool, table: &str) -> Result<i64> {
    let id: i64 = sqlx::query_scalar(&format!(
        "INSERT INTO {} (label) VALUES ('inserted') RETURNING id",
        quote_ident(table)
    ))
    .fetch_one(pool)
    .await?;

    Ok(id)
}
