//! SQL statement construction
//!
//! Table and column names cannot be bound as query parameters, so they are
//! spliced into the statement text as quoted identifiers. Everything else
//! (ids, the sequence lookup arguments) is bound.

use crate::registry::TableDescriptor;

/// Quote an identifier for PostgreSQL.
///
/// Wraps the name in double quotes and doubles any embedded quote, so the
/// result is always read back as exactly `name` (case preserved).
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `DELETE` statement removing every row whose primary key is in `$1` (a `BIGINT[]`)
pub fn delete_rows_statement(table: &TableDescriptor) -> String {
    format!(
        "DELETE FROM {} WHERE {} = ANY($1)",
        quote_ident(&table.db_table),
        quote_ident(&table.pk_column),
    )
}

/// Statement moving the table's serial sequence to `COALESCE(MAX(pk), 1) + 1`.
///
/// `$1` is the quoted table name and `$2` the bare column name, as expected by
/// `pg_get_serial_sequence`. The trailing `false` makes the computed value the
/// next one handed out rather than one already consumed. Yields NULL when the
/// column owns no sequence.
pub fn reset_sequence_statement(table: &TableDescriptor) -> String {
    format!(
        r#"
        SELECT setval(
            pg_get_serial_sequence($1, $2),
            COALESCE((SELECT MAX({pk}) FROM {table}), 1) + 1,
            false
        )
        "#,
        pk = quote_ident(&table.pk_column),
        table = quote_ident(&table.db_table),
    )
}
